use crate::utils::error::{MoneyError, Result};

/// JSON property names used for the amount, currency and formatted output.
/// Immutable; the `with_*` methods return a modified copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    amount: String,
    currency: String,
    formatted: String,
}

impl FieldNames {
    /// The canonical set: "amount", "currency", "formatted".
    pub fn defaults() -> Self {
        Self {
            amount: "amount".to_string(),
            currency: "currency".to_string(),
            formatted: "formatted".to_string(),
        }
    }

    pub fn with_amount(self, name: impl Into<String>) -> Self {
        Self {
            amount: name.into(),
            ..self
        }
    }

    pub fn with_currency(self, name: impl Into<String>) -> Self {
        Self {
            currency: name.into(),
            ..self
        }
    }

    pub fn with_formatted(self, name: impl Into<String>) -> Self {
        Self {
            formatted: name.into(),
            ..self
        }
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// All three names must be non-empty and pairwise distinct; two logical
    /// fields mapped to the same JSON key is a configuration error.
    pub fn validate(&self) -> Result<()> {
        for (label, name) in [
            ("amount", &self.amount),
            ("currency", &self.currency),
            ("formatted", &self.formatted),
        ] {
            if name.trim().is_empty() {
                return Err(MoneyError::FieldNamesError {
                    reason: format!("{} field name cannot be empty", label),
                });
            }
        }

        if self.amount == self.currency
            || self.amount == self.formatted
            || self.currency == self.formatted
        {
            return Err(MoneyError::FieldNamesError {
                reason: "field names must be distinct".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for FieldNames {
    fn default() -> Self {
        Self::defaults()
    }
}
