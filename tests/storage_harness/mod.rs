//! Shared test harness for storage backend testing
//!
//! Provides sample inputs and the `order_store_tests!` macro, which runs the
//! full `OrderStore` contract against any backend.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//!
//! order_store_tests!(OrderStore::in_memory());
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod order_store_tests;

use chrono::{DateTime, TimeZone, Utc};

/// Smallest valid JPEG header; content is never decoded
pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

/// PNG signature
pub const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

pub fn photo() -> Option<Vec<u8>> {
    Some(JPEG.to_vec())
}

/// 2024-01-05 10:00:00 UTC plus `days`
pub fn placed(days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap() + chrono::Duration::days(days)
}

/// `(name, price_text)` pairs used for batch inserts
pub fn sample_inputs(count: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| (format!("Bag {}", i), format!("{}.50", i * 10)))
        .collect()
}
