use crate::utils::error::{MoneyError, Result};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// ISO 4217 alphabetic codes with their minor units (decimal digits).
/// Sorted by code for binary search.
const CURRENCIES: &[(&str, u32)] = &[
    ("AED", 2),
    ("AFN", 2),
    ("ALL", 2),
    ("AMD", 2),
    ("ANG", 2),
    ("AOA", 2),
    ("ARS", 2),
    ("AUD", 2),
    ("AWG", 2),
    ("AZN", 2),
    ("BAM", 2),
    ("BBD", 2),
    ("BDT", 2),
    ("BGN", 2),
    ("BHD", 3),
    ("BIF", 0),
    ("BMD", 2),
    ("BND", 2),
    ("BOB", 2),
    ("BRL", 2),
    ("BSD", 2),
    ("BTN", 2),
    ("BWP", 2),
    ("BYN", 2),
    ("BZD", 2),
    ("CAD", 2),
    ("CDF", 2),
    ("CHF", 2),
    ("CLP", 0),
    ("CNY", 2),
    ("COP", 2),
    ("CRC", 2),
    ("CUP", 2),
    ("CVE", 2),
    ("CZK", 2),
    ("DJF", 0),
    ("DKK", 2),
    ("DOP", 2),
    ("DZD", 2),
    ("EGP", 2),
    ("ERN", 2),
    ("ETB", 2),
    ("EUR", 2),
    ("FJD", 2),
    ("FKP", 2),
    ("GBP", 2),
    ("GEL", 2),
    ("GHS", 2),
    ("GIP", 2),
    ("GMD", 2),
    ("GNF", 0),
    ("GTQ", 2),
    ("GYD", 2),
    ("HKD", 2),
    ("HNL", 2),
    ("HTG", 2),
    ("HUF", 2),
    ("IDR", 2),
    ("ILS", 2),
    ("INR", 2),
    ("IQD", 3),
    ("IRR", 2),
    ("ISK", 0),
    ("JMD", 2),
    ("JOD", 3),
    ("JPY", 0),
    ("KES", 2),
    ("KGS", 2),
    ("KHR", 2),
    ("KMF", 0),
    ("KPW", 2),
    ("KRW", 0),
    ("KWD", 3),
    ("KYD", 2),
    ("KZT", 2),
    ("LAK", 2),
    ("LBP", 2),
    ("LKR", 2),
    ("LRD", 2),
    ("LSL", 2),
    ("LYD", 3),
    ("MAD", 2),
    ("MDL", 2),
    ("MGA", 2),
    ("MKD", 2),
    ("MMK", 2),
    ("MNT", 2),
    ("MOP", 2),
    ("MRU", 2),
    ("MUR", 2),
    ("MVR", 2),
    ("MWK", 2),
    ("MXN", 2),
    ("MYR", 2),
    ("MZN", 2),
    ("NAD", 2),
    ("NGN", 2),
    ("NIO", 2),
    ("NOK", 2),
    ("NPR", 2),
    ("NZD", 2),
    ("OMR", 3),
    ("PAB", 2),
    ("PEN", 2),
    ("PGK", 2),
    ("PHP", 2),
    ("PKR", 2),
    ("PLN", 2),
    ("PYG", 0),
    ("QAR", 2),
    ("RON", 2),
    ("RSD", 2),
    ("RUB", 2),
    ("RWF", 0),
    ("SAR", 2),
    ("SBD", 2),
    ("SCR", 2),
    ("SDG", 2),
    ("SEK", 2),
    ("SGD", 2),
    ("SHP", 2),
    ("SLE", 2),
    ("SOS", 2),
    ("SRD", 2),
    ("SSP", 2),
    ("STN", 2),
    ("SVC", 2),
    ("SYP", 2),
    ("SZL", 2),
    ("THB", 2),
    ("TJS", 2),
    ("TMT", 2),
    ("TND", 3),
    ("TOP", 2),
    ("TRY", 2),
    ("TTD", 2),
    ("TWD", 2),
    ("TZS", 2),
    ("UAH", 2),
    ("UGX", 0),
    ("USD", 2),
    ("UYU", 2),
    ("UZS", 2),
    ("VES", 2),
    ("VND", 0),
    ("VUV", 0),
    ("WST", 2),
    ("XAF", 0),
    ("XCD", 2),
    ("XOF", 0),
    ("XPF", 0),
    ("YER", 2),
    ("ZAR", 2),
    ("ZMW", 2),
    ("ZWG", 2),
];

/// An ISO 4217 currency identifier, e.g. "EUR" or "USD".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyUnit {
    code: &'static str,
    minor_units: u32,
}

impl CurrencyUnit {
    /// Resolves an alphabetic code against the ISO 4217 table.
    /// Codes are case-sensitive, matching the registry's uppercase form.
    pub fn from_code(code: &str) -> Result<Self> {
        CURRENCIES
            .binary_search_by_key(&code, |entry| entry.0)
            .map(|index| {
                let (code, minor_units) = CURRENCIES[index];
                Self { code, minor_units }
            })
            .map_err(|_| MoneyError::InvalidCurrencyError {
                code: code.to_string(),
            })
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Number of decimal digits conventionally used for this currency,
    /// e.g. 2 for EUR, 0 for JPY, 3 for BHD.
    pub fn minor_units(&self) -> u32 {
        self.minor_units
    }
}

impl fmt::Display for CurrencyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for CurrencyUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

impl<'de> Deserialize<'de> for CurrencyUnit {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct CurrencyVisitor;

        impl<'de> Visitor<'de> for CurrencyVisitor {
            type Value = CurrencyUnit;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ISO 4217 currency code")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<CurrencyUnit, E> {
                CurrencyUnit::from_code(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(CurrencyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_known_codes() {
        assert_eq!(CurrencyUnit::from_code("EUR").unwrap().code(), "EUR");
        assert_eq!(CurrencyUnit::from_code("JPY").unwrap().minor_units(), 0);
        assert_eq!(CurrencyUnit::from_code("BHD").unwrap().minor_units(), 3);
    }

    #[test]
    fn test_rejects_unknown_and_malformed_codes() {
        assert!(CurrencyUnit::from_code("XYZ").is_err());
        assert!(CurrencyUnit::from_code("eur").is_err());
        assert!(CurrencyUnit::from_code("").is_err());
        assert!(CurrencyUnit::from_code("EURO").is_err());
    }

    #[test]
    fn test_table_is_sorted_for_binary_search() {
        for pair in CURRENCIES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let unit = CurrencyUnit::from_code("USD").unwrap();
        let json = serde_json::to_string(&unit).unwrap();
        assert_eq!(json, "\"USD\"");
        let back: CurrencyUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, unit);
    }

    #[test]
    fn test_deserialize_invalid_code_is_a_data_error() {
        let result: std::result::Result<CurrencyUnit, _> = serde_json::from_str("\"ZZZ\"");
        assert!(result.is_err());
    }
}
