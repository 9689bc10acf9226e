use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Invalid currency code: {code}")]
    InvalidCurrencyError { code: String },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Malformed amount: {value}")]
    MalformedAmountError { value: String },

    #[error("Unexpected token: expected {expected}, found {found}")]
    UnexpectedTokenError {
        expected: &'static str,
        found: String,
    },

    #[error("Invalid field name configuration: {reason}")]
    FieldNamesError { reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MoneyError>;
