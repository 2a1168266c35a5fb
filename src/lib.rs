//! # Shoppier
//!
//! The data component of a purchase tracker: a persisted list of orders
//! (name, price, placement date, photo) with validated creation.
//!
//! ## Features
//!
//! - **Validated creation**: names are trimmed and must be non-empty, a photo
//!   is required, price text is parsed leniently into an exact decimal
//! - **Stable listing**: orders come back in insertion order, filtered by the
//!   open/closed tabs and optionally sorted or paginated
//! - **Embedded persistence**: LMDB on disk (`lmdb` feature) or in memory
//!   (`in-memory` feature), behind the same [`OrderService`](core::OrderService) trait
//! - **Typed errors**: every operation returns [`OrderResult`](core::OrderResult)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shoppier::prelude::*;
//!
//! let store = StoreConfig::lmdb("/data/orders").open()?;
//!
//! let order = store
//!     .create("Bag A", "199,90", None, Some(photo_bytes))
//!     .await?;
//!
//! for card in OrderCard::from_orders(&store.list(StatusFilter::All).await?, "TL") {
//!     println!("{} - {} - {}", card.name, card.price_label, card.stamp);
//! }
//!
//! store.set_status(&order.id, OrderStatus::Closed).await?;
//! ```

pub mod config;
pub mod core;
pub mod display;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        calendar::{DateExt, DateRange, Granularity},
        entity::{Data, Entity},
        error::{ConfigError, OrderError, OrderResult, StorageError, ValidationError},
        field::FieldValue,
        order::{Order, OrderStatus},
        query::{OrderQuery, Page, PageRequest, SortOrder, StatusFilter},
        service::OrderService,
        store::OrderStore,
        validation::OrderDraft,
    };

    // === Storage ===
    #[cfg(feature = "in-memory")]
    pub use crate::storage::InMemoryOrderService;
    #[cfg(feature = "lmdb")]
    pub use crate::storage::LmdbOrderService;

    // === Config ===
    pub use crate::config::{BackendKind, StoreConfig};

    // === Display ===
    pub use crate::display::{OrderCard, format_order_stamp, format_price};

    // === External dependencies ===
    pub use chrono::{DateTime, Utc};
    pub use rust_decimal::Decimal;
    pub use uuid::Uuid;
}
