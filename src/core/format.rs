use crate::domain::money::Money;
use rust_decimal::Decimal;

/// A language tag with an optional region, e.g. de-DE or en-US.
/// Supplied by the caller at encode time, never stored by the codec.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    pub fn new(language: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            region: Some(region.into()),
        }
    }

    pub fn from_language(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            region: None,
        }
    }

    pub fn germany() -> Self {
        Self::new("de", "DE")
    }

    pub fn us() -> Self {
        Self::new("en", "US")
    }

    pub fn france() -> Self {
        Self::new("fr", "FR")
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// Renders a monetary amount as human-readable text, or signals that it
/// cannot. `None` means "omit the formatted output", never an error.
pub trait MonetaryFormatter {
    fn format(&self, money: &Money) -> Option<String>;
}

/// Produces a locale-bound formatter, or signals that no formatting is
/// available for that locale.
pub trait FormatFactory: Send + Sync {
    fn formatter_for(&self, locale: &Locale) -> Option<Box<dyn MonetaryFormatter>>;
}

#[derive(Debug, Clone, Copy)]
enum CodePlacement {
    Prefix,
    SuffixSpaced,
}

#[derive(Debug, Clone, Copy)]
struct Convention {
    decimal_separator: char,
    group_separator: Option<char>,
    placement: CodePlacement,
}

/// Built-in formatter covering a handful of western European and American
/// conventions. Locales it does not know yield `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatFactory;

impl DefaultFormatFactory {
    pub fn new() -> Self {
        Self
    }

    fn convention(locale: &Locale) -> Option<Convention> {
        match locale.language() {
            "de" | "it" | "es" => Some(Convention {
                decimal_separator: ',',
                group_separator: Some('.'),
                placement: CodePlacement::SuffixSpaced,
            }),
            "fr" => Some(Convention {
                decimal_separator: ',',
                group_separator: Some(' '),
                placement: CodePlacement::SuffixSpaced,
            }),
            "en" => Some(Convention {
                decimal_separator: '.',
                group_separator: Some(','),
                placement: CodePlacement::Prefix,
            }),
            _ => None,
        }
    }
}

impl FormatFactory for DefaultFormatFactory {
    fn formatter_for(&self, locale: &Locale) -> Option<Box<dyn MonetaryFormatter>> {
        Self::convention(locale)
            .map(|convention| Box::new(ConventionFormatter { convention }) as Box<dyn MonetaryFormatter>)
    }
}

struct ConventionFormatter {
    convention: Convention,
}

impl MonetaryFormatter for ConventionFormatter {
    fn format(&self, money: &Money) -> Option<String> {
        let number = render_number(money.amount(), money.currency().minor_units(), &self.convention);
        let code = money.currency().code();
        Some(match self.convention.placement {
            CodePlacement::Prefix => format!("{}{}", code, number),
            CodePlacement::SuffixSpaced => format!("{} {}", number, code),
        })
    }
}

/// Scales the amount to the currency's minor units, then applies the
/// locale's separators.
fn render_number(amount: Decimal, minor_units: u32, convention: &Convention) -> String {
    let mut value = amount.round_dp(minor_units);
    value.rescale(minor_units);

    let text = value.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut rendered = String::with_capacity(text.len() + 4);
    rendered.push_str(sign);

    match convention.group_separator {
        Some(separator) => {
            let length = integer.len();
            for (index, digit) in integer.chars().enumerate() {
                if index > 0 && (length - index) % 3 == 0 {
                    rendered.push(separator);
                }
                rendered.push(digit);
            }
        }
        None => rendered.push_str(integer),
    }

    if let Some(fraction) = fraction {
        rendered.push(convention.decimal_separator);
        rendered.push_str(fraction);
    }

    rendered
}
