use anyhow::Result;
use money_codec::{
    DefaultFormatFactory, FieldNames, FormatFactory, Locale, Money, MoneyCodec, MonetaryFormatter,
};
use rust_decimal_macros::dec;

/// Factory that claims to support every locale but never produces output.
struct NullFormatFactory;

impl FormatFactory for NullFormatFactory {
    fn formatter_for(&self, _locale: &Locale) -> Option<Box<dyn MonetaryFormatter>> {
        None
    }
}

#[test]
fn test_serializes_via_plain_serde_with_defaults() -> Result<()> {
    let money = Money::of(dec!(29.95), "EUR")?;
    let actual = serde_json::to_string(&money)?;
    assert_eq!(actual, r#"{"amount":29.95,"currency":"EUR"}"#);
    Ok(())
}

#[test]
fn test_default_constructor_falls_back_to_no_formatting() -> Result<()> {
    let codec = MoneyCodec::new();
    let actual = codec.encode_to_string(&Money::of(dec!(29.95), "EUR")?, &Locale::germany())?;
    assert_eq!(actual, r#"{"amount":29.95,"currency":"EUR"}"#);
    Ok(())
}

#[test]
fn test_serializes_without_formatted_value_if_factory_produces_none() -> Result<()> {
    let codec = MoneyCodec::new().with_format_factory(NullFormatFactory);
    let actual = codec.encode_to_string(&Money::of(dec!(29.95), "EUR")?, &Locale::germany())?;
    assert_eq!(actual, r#"{"amount":29.95,"currency":"EUR"}"#);
    Ok(())
}

#[test]
fn test_serializes_with_formatted_german_value() -> Result<()> {
    let codec = MoneyCodec::new().with_format_factory(DefaultFormatFactory::new());
    let actual = codec.encode_to_string(&Money::of(dec!(29.95), "EUR")?, &Locale::germany())?;
    assert_eq!(
        actual,
        r#"{"amount":29.95,"currency":"EUR","formatted":"29,95 EUR"}"#
    );
    Ok(())
}

#[test]
fn test_serializes_with_formatted_american_value() -> Result<()> {
    let codec = MoneyCodec::new().with_format_factory(DefaultFormatFactory::new());
    let actual = codec.encode_to_string(&Money::of(dec!(29.95), "USD")?, &Locale::us())?;
    assert_eq!(
        actual,
        r#"{"amount":29.95,"currency":"USD","formatted":"USD29.95"}"#
    );
    Ok(())
}

#[test]
fn test_serializes_with_custom_field_names() -> Result<()> {
    let codec = MoneyCodec::new()
        .with_format_factory(DefaultFormatFactory::new())
        .with_field_names(
            FieldNames::defaults()
                .with_amount("value")
                .with_currency("unit")
                .with_formatted("pretty"),
        );

    let actual = codec.encode_to_string(&Money::of(dec!(29.95), "EUR")?, &Locale::germany())?;
    assert_eq!(
        actual,
        r#"{"value":29.95,"unit":"EUR","pretty":"29,95 EUR"}"#
    );
    Ok(())
}

#[test]
fn test_field_order_is_stable_regardless_of_names() -> Result<()> {
    let codec = MoneyCodec::new()
        .with_format_factory(DefaultFormatFactory::new())
        .with_field_names(
            FieldNames::defaults()
                .with_amount("zz_amount")
                .with_currency("aa_currency"),
        );

    let json = codec.encode_to_string(&Money::of(dec!(1), "EUR")?, &Locale::germany())?;
    let amount_at = json.find("zz_amount").unwrap();
    let currency_at = json.find("aa_currency").unwrap();
    let formatted_at = json.find("formatted").unwrap();
    assert!(amount_at < currency_at);
    assert!(currency_at < formatted_at);
    Ok(())
}

#[test]
fn test_amount_is_written_with_full_precision() -> Result<()> {
    let codec = MoneyCodec::new();
    let actual = codec.encode_to_string(&Money::of(dec!(29.9500), "EUR")?, &Locale::us())?;
    assert_eq!(actual, r#"{"amount":29.9500,"currency":"EUR"}"#);
    Ok(())
}
