//! Input normalization and validation for order creation
//!
//! Filters normalize raw input (trimming, separator handling), validators
//! reject values that would break an [`Order`](crate::core::order::Order)
//! invariant. [`OrderDraft`] runs both in a fixed order so that the same input
//! always produces the same outcome.

pub mod draft;
pub mod filters;
pub mod price;
pub mod validators;

pub use draft::{OrderDraft, ValidOrder};
pub use price::{parse_price_lenient, parse_price_strict};
