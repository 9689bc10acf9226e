pub mod core;
pub mod domain;
pub mod utils;

pub use self::core::codec::MoneyCodec;
pub use self::core::field_names::FieldNames;
pub use self::core::format::{DefaultFormatFactory, FormatFactory, Locale, MonetaryFormatter};
pub use self::domain::currency::CurrencyUnit;
pub use self::domain::money::Money;
pub use self::utils::error::{MoneyError, Result};
