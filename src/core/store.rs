//! The order store: validated creation, queries and deletion
//!
//! `OrderStore` is the only way to create an [`Order`]. It validates the raw
//! form input, hands the record to an [`OrderService`] backend and returns
//! typed errors. Construct one at startup and pass it to whatever needs it;
//! clones share the same backend.

use crate::core::calendar::DateRange;
use crate::core::entity::{Data, Entity};
use crate::core::error::{OrderError, OrderResult};
use crate::core::order::{Order, OrderStatus};
use crate::core::query::{OrderQuery, Page, StatusFilter};
use crate::core::service::OrderService;
use crate::core::validation::OrderDraft;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderStore {
    service: Arc<dyn OrderService>,
}

impl OrderStore {
    pub fn new(service: Arc<dyn OrderService>) -> Self {
        Self { service }
    }

    /// Store backed by a fresh in-memory collection
    #[cfg(feature = "in-memory")]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(crate::storage::InMemoryOrderService::new()))
    }

    pub fn backend_name(&self) -> &'static str {
        self.service.backend_name()
    }

    /// The backend behind this store; writes through it skip validation
    pub fn service(&self) -> &Arc<dyn OrderService> {
        &self.service
    }

    /// Validate and persist a new order.
    ///
    /// `date` defaults to now. The write is committed before this returns;
    /// on any error nothing is stored.
    pub async fn create(
        &self,
        name: &str,
        price_text: &str,
        date: Option<DateTime<Utc>>,
        image: Option<Vec<u8>>,
    ) -> OrderResult<Order> {
        self.create_from(OrderDraft {
            name: name.to_string(),
            price_text: price_text.to_string(),
            date,
            image,
        })
        .await
    }

    /// Same as [`OrderStore::create`], taking a prepared draft
    pub async fn create_from(&self, draft: OrderDraft) -> OrderResult<Order> {
        let valid = draft.validate().inspect_err(|e| {
            tracing::warn!(field = e.field(), code = e.error_code(), "order rejected: {}", e);
        })?;

        let order = self.service.insert(valid.into_order(Utc::now())).await?;

        tracing::info!(
            order_id = %order.id(),
            price = %order.price,
            backend = self.backend_name(),
            "order created"
        );
        Ok(order)
    }

    /// Snapshot of the orders in one list tab, in insertion order.
    ///
    /// Re-invoke to observe later changes.
    pub async fn list(&self, filter: StatusFilter) -> OrderResult<Vec<Order>> {
        let orders = self.service.list().await?;
        tracing::debug!(filter = ?filter, total = orders.len(), "listing orders");

        Ok(orders.into_iter().filter(|o| filter.matches(o)).collect())
    }

    /// Filtered, sorted and optionally paginated view of the orders
    pub async fn query(&self, query: &OrderQuery) -> OrderResult<Page<Order>> {
        let orders = self.service.list().await?;
        tracing::debug!(query = ?query, total = orders.len(), "querying orders");

        Ok(query.apply(orders))
    }

    /// Orders placed within `range`, in insertion order
    pub async fn placed_within(&self, range: DateRange) -> OrderResult<Vec<Order>> {
        let page = self
            .query(&OrderQuery::default().placed_within(range))
            .await?;
        Ok(page.data)
    }

    pub async fn get(&self, id: &Uuid) -> OrderResult<Order> {
        self.service
            .get(id)
            .await?
            .ok_or(OrderError::NotFound { id: *id })
    }

    /// Orders whose `field` equals `value`; unknown fields match nothing
    pub async fn search(&self, field: &str, value: &str) -> OrderResult<Vec<Order>> {
        if !Order::is_indexed(field) {
            tracing::debug!(field = field, "search on unindexed field");
            return Ok(Vec::new());
        }

        let orders = self.service.list().await?;
        Ok(orders
            .into_iter()
            .filter(|o| o.matches_field(field, value))
            .collect())
    }

    /// Close or reopen an order
    pub async fn set_status(&self, id: &Uuid, status: OrderStatus) -> OrderResult<Order> {
        let order = self
            .service
            .update_status(id, status)
            .await?
            .ok_or(OrderError::NotFound { id: *id })?;

        tracing::info!(order_id = %id, status = order.status(), "order status changed");
        Ok(order)
    }

    pub async fn delete(&self, id: &Uuid) -> OrderResult<()> {
        if !self.service.remove(id).await? {
            return Err(OrderError::NotFound { id: *id });
        }

        tracing::info!(order_id = %id, "order deleted");
        Ok(())
    }

    pub async fn len(&self) -> OrderResult<usize> {
        Ok(self.service.count().await?)
    }

    pub async fn is_empty(&self) -> OrderResult<bool> {
        Ok(self.len().await? == 0)
    }
}
