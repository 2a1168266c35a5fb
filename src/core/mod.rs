//! Core module containing the order entity, its validation and the store

pub mod calendar;
pub mod entity;
pub mod error;
pub mod field;
pub mod order;
pub mod query;
pub mod service;
pub mod store;
pub mod validation;

pub use calendar::{DateExt, DateRange, Granularity};
pub use entity::{Data, Entity};
pub use error::{ConfigError, OrderError, OrderResult, StorageError, ValidationError};
pub use field::FieldValue;
pub use order::{Order, OrderStatus};
pub use query::{OrderQuery, Page, PageRequest, PaginationMeta, SortOrder, StatusFilter};
pub use service::OrderService;
pub use store::OrderStore;
pub use validation::OrderDraft;
