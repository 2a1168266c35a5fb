//! The persisted purchase record

use crate::core::entity::{Data, Entity};
use crate::core::field::FieldValue;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle state backing the open/closed list tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Open,
    Closed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(OrderStatus::Open),
            "closed" => Ok(OrderStatus::Closed),
            other => Err(format!("unknown order status '{}'", other)),
        }
    }
}

/// One purchase.
///
/// Orders are only built by [`OrderStore::create`](crate::core::store::OrderStore::create),
/// which enforces the field invariants: a trimmed non-empty `name`, a price
/// of at least zero and a non-empty `image`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    /// When the purchase was placed
    pub date: DateTime<Utc>,
    #[serde(with = "image_serde")]
    pub image: Vec<u8>,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(name: String, price: Decimal, date: DateTime<Utc>, image: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            price,
            date,
            image,
            status: OrderStatus::Open,
            created_at: Utc::now(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::Open
    }
}

// Image payloads can be large; keep them out of log lines.
impl fmt::Debug for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Order")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("price", &self.price)
            .field("date", &self.date)
            .field("image", &format_args!("<{} bytes>", self.image.len()))
            .field("status", &self.status)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl Entity for Order {
    fn id(&self) -> Uuid {
        self.id
    }

    fn status(&self) -> &str {
        self.status.as_str()
    }
}

impl Data for Order {
    fn indexed_fields() -> &'static [&'static str] {
        &["id", "name", "price", "date", "status", "created_at"]
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "id" => Some(FieldValue::Uuid(self.id)),
            "name" => Some(FieldValue::String(self.name.clone())),
            "price" => Some(FieldValue::Decimal(self.price)),
            "date" => Some(FieldValue::DateTime(self.date)),
            "status" => Some(FieldValue::String(self.status.as_str().to_string())),
            "created_at" => Some(FieldValue::DateTime(self.created_at)),
            _ => None,
        }
    }
}

mod image_serde {
    use base64::{Engine, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(image: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        STANDARD.encode(image).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(&s).map_err(serde::de::Error::custom)
    }
}
