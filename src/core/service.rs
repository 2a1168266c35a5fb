//! Storage trait for order records

use crate::core::error::StorageResult;
use crate::core::order::{Order, OrderStatus};
use async_trait::async_trait;
use uuid::Uuid;

/// Storage backend for orders
///
/// Implementations persist whole records and return them in insertion
/// order. Validation happens before a record reaches the backend, so
/// backends only guarantee id uniqueness and durability of each committed
/// call.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Persist a new order; fails with `DuplicateId` if the id is taken
    async fn insert(&self, order: Order) -> StorageResult<Order>;

    /// Get an order by ID
    async fn get(&self, id: &Uuid) -> StorageResult<Option<Order>>;

    /// All orders, oldest insertion first
    async fn list(&self) -> StorageResult<Vec<Order>>;

    /// Change the status of an order, `None` if it does not exist
    async fn update_status(&self, id: &Uuid, status: OrderStatus)
    -> StorageResult<Option<Order>>;

    /// Remove an order; returns whether it existed
    async fn remove(&self, id: &Uuid) -> StorageResult<bool>;

    /// Number of stored orders
    async fn count(&self) -> StorageResult<usize>;

    /// Human-readable backend name used in logs
    fn backend_name(&self) -> &'static str;
}
