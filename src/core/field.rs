//! Field value types used for search

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Decimal(Decimal),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
}

impl FieldValue {
    /// Compare against a textual search value.
    ///
    /// Decimals compare numerically (`"199.9"` matches `199.90`), timestamps
    /// accept any RFC 3339 rendering of the same instant.
    pub fn matches_text(&self, value: &str) -> bool {
        match self {
            FieldValue::String(s) => s == value,
            FieldValue::Decimal(d) => Decimal::from_str(value).is_ok_and(|v| v == *d),
            FieldValue::Uuid(u) => Uuid::parse_str(value).is_ok_and(|v| v == *u),
            FieldValue::DateTime(dt) => {
                DateTime::parse_from_rfc3339(value).is_ok_and(|v| v.with_timezone(&Utc) == *dt)
            }
        }
    }
}
