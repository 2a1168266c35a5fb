//! Price text parsing
//!
//! The store parses prices leniently: text that is not a plain decimal number
//! becomes zero. [`parse_price_strict`] lets a form flag such text before it
//! is submitted; the store itself never uses it.

use super::filters::normalize_price_text;
use crate::core::error::ValidationError;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::OnceLock;

fn decimal_regex() -> &'static Regex {
    static DECIMAL_REGEX: OnceLock<Regex> = OnceLock::new();
    DECIMAL_REGEX.get_or_init(|| Regex::new(r"^[+-]?\d+(\.\d+)?$").unwrap())
}

/// Parse a normalized decimal, `None` when the text is not one.
fn parse_decimal(text: &str) -> Option<Decimal> {
    let normalized = normalize_price_text(text);
    if !decimal_regex().is_match(&normalized) {
        return None;
    }
    // Values beyond Decimal's 28 digits fail here as well.
    let value = Decimal::from_str(&normalized).ok()?;
    Some(if value.is_zero() { Decimal::ZERO } else { value })
}

fn non_negative(value: Decimal) -> Result<Decimal, ValidationError> {
    if value < Decimal::ZERO {
        Err(ValidationError::NegativePrice { value })
    } else {
        Ok(value)
    }
}

/// Parse price text, coercing anything that is not a decimal number to zero.
///
/// A well-formed negative number is still rejected.
pub fn parse_price_lenient(text: &str) -> Result<Decimal, ValidationError> {
    non_negative(parse_decimal(text).unwrap_or(Decimal::ZERO))
}

/// Parse price text, rejecting anything that is not a decimal number.
pub fn parse_price_strict(text: &str) -> Result<Decimal, ValidationError> {
    let value = parse_decimal(text).ok_or_else(|| ValidationError::InvalidPrice {
        text: text.to_string(),
    })?;
    non_negative(value)
}
