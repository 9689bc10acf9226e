pub mod codec;
pub mod field_names;
pub mod format;

pub use crate::domain::currency::CurrencyUnit;
pub use crate::domain::money::Money;
pub use crate::utils::error::Result;
