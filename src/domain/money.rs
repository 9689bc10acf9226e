use crate::domain::currency::CurrencyUnit;
use crate::utils::error::{MoneyError, Result};
use rust_decimal::Decimal;
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An immutable sum of money: a decimal quantity and its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Money {
    amount: Decimal,
    currency: CurrencyUnit,
}

impl Money {
    pub fn new(amount: Decimal, currency: CurrencyUnit) -> Self {
        Self { amount, currency }
    }

    /// Convenience constructor resolving the currency code on the fly.
    pub fn of(amount: Decimal, code: &str) -> Result<Self> {
        Ok(Self::new(amount, CurrencyUnit::from_code(code)?))
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> CurrencyUnit {
        self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Converts a JSON number into a `Decimal` without losing precision.
/// serde_json's `arbitrary_precision` feature keeps the original digits,
/// so the only normalization needed is scientific notation.
pub(crate) fn decimal_from_number(number: &serde_json::Number) -> Result<Decimal> {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| MoneyError::MalformedAmountError { value: text })
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let number = serde_json::Number::from_str(&self.amount.to_string())
            .map_err(serde::ser::Error::custom)?;
        let mut object = serializer.serialize_struct("Money", 2)?;
        object.serialize_field("amount", &number)?;
        object.serialize_field("currency", &self.currency)?;
        object.end()
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct MoneyVisitor;

        impl<'de> Visitor<'de> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a monetary amount object")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Money, A::Error> {
                let mut amount: Option<serde_json::Number> = None;
                let mut currency: Option<CurrencyUnit> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "amount" => {
                            if amount.is_some() {
                                return Err(de::Error::duplicate_field("amount"));
                            }
                            amount = Some(map.next_value()?);
                        }
                        "currency" => {
                            if currency.is_some() {
                                return Err(de::Error::duplicate_field("currency"));
                            }
                            currency = Some(map.next_value()?);
                        }
                        // Anything else, including "formatted", carries no
                        // information back into the value.
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                let amount = amount.ok_or_else(|| de::Error::missing_field("amount"))?;
                let currency = currency.ok_or_else(|| de::Error::missing_field("currency"))?;
                let amount = decimal_from_number(&amount).map_err(de::Error::custom)?;

                Ok(Money::new(amount, currency))
            }
        }

        deserializer.deserialize_map(MoneyVisitor)
    }
}
