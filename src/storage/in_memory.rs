//! In-memory implementation of OrderService for tests and previews

use crate::core::error::{StorageError, StorageResult};
use crate::core::order::{Order, OrderStatus};
use crate::core::service::OrderService;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// In-memory order service implementation
///
/// Uses an `IndexMap` behind a `RwLock`, so listing returns orders in the
/// order they were inserted. Clones share the same collection.
#[derive(Clone, Default)]
pub struct InMemoryOrderService {
    orders: Arc<RwLock<IndexMap<Uuid, Order>>>,
}

impl InMemoryOrderService {
    /// Create a new in-memory order service
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StorageResult<RwLockReadGuard<'_, IndexMap<Uuid, Order>>> {
        self.orders.read().map_err(|e| StorageError::Lock {
            kind: "read",
            message: e.to_string(),
        })
    }

    fn write(&self) -> StorageResult<RwLockWriteGuard<'_, IndexMap<Uuid, Order>>> {
        self.orders.write().map_err(|e| StorageError::Lock {
            kind: "write",
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl OrderService for InMemoryOrderService {
    async fn insert(&self, order: Order) -> StorageResult<Order> {
        let mut orders = self.write()?;

        if orders.contains_key(&order.id) {
            return Err(StorageError::DuplicateId { id: order.id });
        }
        orders.insert(order.id, order.clone());

        Ok(order)
    }

    async fn get(&self, id: &Uuid) -> StorageResult<Option<Order>> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn list(&self) -> StorageResult<Vec<Order>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn update_status(
        &self,
        id: &Uuid,
        status: OrderStatus,
    ) -> StorageResult<Option<Order>> {
        let mut orders = self.write()?;

        Ok(orders.get_mut(id).map(|order| {
            order.status = status;
            order.clone()
        }))
    }

    async fn remove(&self, id: &Uuid) -> StorageResult<bool> {
        // shift_remove keeps the remaining orders in insertion order
        Ok(self.write()?.shift_remove(id).is_some())
    }

    async fn count(&self) -> StorageResult<usize> {
        Ok(self.read()?.len())
    }

    fn backend_name(&self) -> &'static str {
        "in_memory"
    }
}
