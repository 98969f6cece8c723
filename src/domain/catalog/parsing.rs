// src/domain/catalog/parsing.rs
//! Numeric values derived from the catalog's free-text fields.
//!
//! The feed encodes the price per litre as `(2,10 €/Liter)` and the pack
//! size as `20 x 0,5L (Glas)`. Only the leading token of each text is read;
//! anything after the first space is ignored by the parsers.
use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use std::str::FromStr;

const PRICE_SUFFIX: &str = " €/Liter)";

/// Parse the leading comma-decimal amount of a price-per-unit text.
pub fn parse_price_per_unit(text: &str) -> DomainResult<Decimal> {
    let malformed = || DomainError::MalformedPriceText(text.to_owned());
    let (head, _) = text.split_once(' ').ok_or_else(malformed)?;
    let token = head.strip_prefix('(').unwrap_or(head);
    parse_comma_decimal(token).ok_or_else(malformed)
}

/// Parse the leading unit count of a short description.
pub fn parse_bottle_count(text: &str) -> DomainResult<u32> {
    let malformed = || DomainError::MalformedDescriptionText(text.to_owned());
    let (head, _) = text.split_once(' ').ok_or_else(malformed)?;
    if !is_digits(head) {
        return Err(malformed());
    }
    head.parse::<u32>().map_err(|_| malformed())
}

/// Whether the text has the exact `(<int>,<2 digits> €/Liter)` shape.
pub fn conforms_to_price_convention(text: &str) -> bool {
    let Some(amount) = text
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(PRICE_SUFFIX))
    else {
        return false;
    };

    match amount.split_once(',') {
        Some((whole, fraction)) => is_digits(whole) && fraction.len() == 2 && is_digits(fraction),
        None => false,
    }
}

/// Whether the text has the `<int> x <capacity>L (<material>)` shape.
pub fn conforms_to_description_convention(text: &str) -> bool {
    let Some((count, rest)) = text.split_once(" x ") else {
        return false;
    };
    let Some((capacity, rest)) = rest.split_once("L (") else {
        return false;
    };
    let Some(material) = rest.strip_suffix(')') else {
        return false;
    };

    let capacity_ok = match capacity.split_once(',') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => is_digits(capacity),
    };

    is_digits(count) && capacity_ok && material.chars().all(|c| c.is_ascii_alphabetic())
}

fn parse_comma_decimal(token: &str) -> Option<Decimal> {
    let normalized = match token.split_once(',') {
        Some((whole, fraction)) if is_digits(whole) && is_digits(fraction) => {
            format!("{whole}.{fraction}")
        }
        Some(_) => return None,
        None if is_digits(token) => token.to_owned(),
        None => return None,
    };
    Decimal::from_str(&normalized).ok()
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn parses_price_per_litre_with_comma_fraction() {
        assert_eq!(parse_price_per_unit("(2,10 €/Liter)").unwrap(), dec("2.10"));
        assert_eq!(parse_price_per_unit("(12,99 €/Liter)").unwrap(), dec("12.99"));
    }

    #[test]
    fn price_without_parenthesis_or_fraction_is_accepted() {
        assert_eq!(parse_price_per_unit("3,50 €/Liter").unwrap(), dec("3.5"));
        assert_eq!(parse_price_per_unit("(4 €/Liter)").unwrap(), dec("4"));
    }

    #[test]
    fn price_without_space_is_malformed() {
        assert_eq!(
            parse_price_per_unit("N/A"),
            Err(DomainError::MalformedPriceText("N/A".into()))
        );
    }

    #[test]
    fn dot_decimal_price_is_rejected() {
        assert!(matches!(
            parse_price_per_unit("(2.10 €/Liter)"),
            Err(DomainError::MalformedPriceText(_))
        ));
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        for text in ["(abc €/Liter)", "( €/Liter)", "(,50 €/Liter)", "(-1,00 €/Liter)"] {
            assert!(
                matches!(parse_price_per_unit(text), Err(DomainError::MalformedPriceText(_))),
                "expected {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn parses_leading_bottle_count() {
        assert_eq!(parse_bottle_count("20 x 0,5L (Glas)").unwrap(), 20);
        assert_eq!(parse_bottle_count("6 x 1,0L (PET)").unwrap(), 6);
    }

    #[test]
    fn bottle_count_failures_are_typed() {
        for text in ["20x0,5L", "x 0,5L (Glas)", "+5 x 1L (Glas)", ""] {
            assert_eq!(
                parse_bottle_count(text),
                Err(DomainError::MalformedDescriptionText(text.into()))
            );
        }
    }

    #[test]
    fn price_convention_matches_feed_format_only() {
        assert!(conforms_to_price_convention("(2,10 €/Liter)"));
        assert!(!conforms_to_price_convention("(1,00 $/Liter)"));
        assert!(!conforms_to_price_convention("(1,0 €/Liter)"));
        assert!(!conforms_to_price_convention("2,10 €/Liter"));
    }

    #[test]
    fn description_convention_matches_feed_format_only() {
        assert!(conforms_to_description_convention("20 x 0,5L (Glas)"));
        assert!(conforms_to_description_convention("6 x 1L (PET)"));
        assert!(!conforms_to_description_convention("20 x 0,5 L (Glas)"));
        assert!(!conforms_to_description_convention("zwanzig x 0,5L (Glas)"));
        assert!(!conforms_to_description_convention("20 x 0,5L (Glas"));
    }
}
