//! Read-only projections of orders for list rendering
//!
//! A list card shows the thumbnail, the name, the price with a currency
//! suffix (`"199.9 TL"`) and a short placement stamp (`"5 Jan 10:00"`).

use crate::core::calendar::DateExt;
use crate::core::order::{Order, OrderStatus};
use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Price without trailing zeros, followed by the currency suffix
pub fn format_price(price: &Decimal, currency: &str) -> String {
    let amount = price.normalize();
    if currency.is_empty() {
        amount.to_string()
    } else {
        format!("{} {}", amount, currency)
    }
}

/// Day of month, abbreviated month name and 24h time
pub fn format_order_stamp(date: &DateTime<Utc>) -> String {
    format!(
        "{} {} {}",
        date.day(),
        date.month_name(),
        date.format("%H:%M")
    )
}

/// Everything a list row needs, detached from the store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderCard {
    pub id: Uuid,
    pub name: String,
    pub price_label: String,
    pub stamp: String,
    pub status: OrderStatus,
    #[serde(skip)]
    pub thumbnail: Vec<u8>,
}

impl OrderCard {
    pub fn from_order(order: &Order, currency: &str) -> Self {
        Self {
            id: order.id,
            name: order.name.clone(),
            price_label: format_price(&order.price, currency),
            stamp: format_order_stamp(&order.date),
            status: order.status,
            thumbnail: order.image.clone(),
        }
    }

    /// Cards for a list snapshot, keeping its order
    pub fn from_orders<'a>(
        orders: impl IntoIterator<Item = &'a Order>,
        currency: &str,
    ) -> Vec<Self> {
        orders
            .into_iter()
            .map(|order| Self::from_order(order, currency))
            .collect()
    }
}
