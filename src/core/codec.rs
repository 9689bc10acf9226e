use crate::core::field_names::FieldNames;
use crate::core::format::{FormatFactory, Locale};
use crate::domain::currency::CurrencyUnit;
use crate::domain::money::{decimal_from_number, Money};
use crate::utils::error::{MoneyError, Result};
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};
use std::str::FromStr;
use std::sync::Arc;

/// Configured encoder/decoder for monetary amounts.
///
/// A codec is immutable once built; the `with_*` methods return a new
/// configured instance, so a single codec can be shared freely across
/// threads. Constructed with no arguments it emits no formatted output and
/// uses the default field names.
#[derive(Clone, Default)]
pub struct MoneyCodec {
    format_factory: Option<Arc<dyn FormatFactory>>,
    field_names: FieldNames,
}

impl MoneyCodec {
    pub fn new() -> Self {
        Self {
            format_factory: None,
            field_names: FieldNames::defaults(),
        }
    }

    /// Replaces any previously configured factory.
    pub fn with_format_factory(self, factory: impl FormatFactory + 'static) -> Self {
        Self {
            format_factory: Some(Arc::new(factory)),
            ..self
        }
    }

    /// Replaces the whole field-name configuration; last write wins.
    pub fn with_field_names(self, field_names: FieldNames) -> Self {
        Self {
            field_names,
            ..self
        }
    }

    pub fn field_names(&self) -> &FieldNames {
        &self.field_names
    }

    /// Encodes a monetary amount as a JSON object with fields in stable
    /// order: amount, currency, then formatted. The formatted field appears
    /// only when a factory is configured and produces text for `locale`.
    pub fn encode(&self, money: &Money, locale: &Locale) -> Result<Value> {
        self.field_names.validate()?;

        let amount = money.amount().to_string();
        let number =
            Number::from_str(&amount).map_err(|_| MoneyError::MalformedAmountError {
                value: amount,
            })?;

        let mut object = Map::with_capacity(3);
        object.insert(self.field_names.amount().to_string(), Value::Number(number));
        object.insert(
            self.field_names.currency().to_string(),
            Value::String(money.currency().code().to_string()),
        );

        if let Some(factory) = &self.format_factory {
            match factory
                .formatter_for(locale)
                .and_then(|formatter| formatter.format(money))
            {
                Some(text) => {
                    object.insert(self.field_names.formatted().to_string(), Value::String(text));
                }
                None => {
                    tracing::debug!(
                        language = locale.language(),
                        "no formatting available, omitting formatted field"
                    );
                }
            }
        }

        Ok(Value::Object(object))
    }

    pub fn encode_to_string(&self, money: &Money, locale: &Locale) -> Result<String> {
        Ok(serde_json::to_string(&self.encode(money, locale)?)?)
    }

    /// Decodes a JSON object into a monetary amount. Fields may appear in
    /// any order; unrecognized fields (including the formatted one) are
    /// skipped. Amount and currency must both be present.
    pub fn decode(&self, value: &Value) -> Result<Money> {
        self.field_names.validate()?;

        let object = value
            .as_object()
            .ok_or_else(|| MoneyError::UnexpectedTokenError {
                expected: "object",
                found: value_kind(value).to_string(),
            })?;

        let mut amount: Option<Decimal> = None;
        let mut currency: Option<CurrencyUnit> = None;

        for (key, field) in object {
            if key == self.field_names.amount() {
                amount = Some(decode_amount(field)?);
            } else if key == self.field_names.currency() {
                currency = Some(decode_currency(field)?);
            } else {
                tracing::trace!(field = %key, "ignoring unrecognized field");
            }
        }

        let amount = amount.ok_or_else(|| MoneyError::MissingFieldError {
            field: self.field_names.amount().to_string(),
        })?;
        let currency = currency.ok_or_else(|| MoneyError::MissingFieldError {
            field: self.field_names.currency().to_string(),
        })?;

        Ok(Money::new(amount, currency))
    }

    pub fn decode_str(&self, json: &str) -> Result<Money> {
        let value: Value = serde_json::from_str(json)?;
        self.decode(&value)
    }
}

fn decode_amount(field: &Value) -> Result<Decimal> {
    match field {
        Value::Number(number) => decimal_from_number(number),
        other => Err(MoneyError::MalformedAmountError {
            value: other.to_string(),
        }),
    }
}

fn decode_currency(field: &Value) -> Result<CurrencyUnit> {
    let code = field
        .as_str()
        .ok_or_else(|| MoneyError::UnexpectedTokenError {
            expected: "string",
            found: value_kind(field).to_string(),
        })?;
    CurrencyUnit::from_code(code)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
