//! Raw creation input and its validated form

use super::{filters, price, validators};
use crate::core::error::ValidationError;
use crate::core::order::Order;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// User input for a new order, exactly as collected by the add form.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    pub name: String,
    pub price_text: String,
    /// Placement time; `None` means "now"
    pub date: Option<DateTime<Utc>>,
    pub image: Option<Vec<u8>>,
}

impl OrderDraft {
    pub fn new(name: impl Into<String>, price_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price_text: price_text.into(),
            ..Default::default()
        }
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_image(mut self, image: impl Into<Vec<u8>>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Filter and validate every field.
    ///
    /// The image is checked first so a missing photo is reported even when
    /// other fields are also wrong.
    pub fn validate(self) -> Result<ValidOrder, ValidationError> {
        let image = validators::image_present(self.image)?;

        let name = filters::trim(&self.name);
        validators::non_empty_name(&name)?;

        let price = price::parse_price_lenient(&self.price_text)?;

        Ok(ValidOrder {
            name,
            price,
            date: self.date,
            image,
        })
    }
}

/// Input that passed validation and can be persisted as-is
#[derive(Debug, Clone, PartialEq)]
pub struct ValidOrder {
    pub name: String,
    pub price: Decimal,
    pub date: Option<DateTime<Utc>>,
    pub image: Vec<u8>,
}

impl ValidOrder {
    /// Build the record, stamping a missing date with `now`.
    pub fn into_order(self, now: DateTime<Utc>) -> Order {
        let mut order = Order::new(self.name, self.price, self.date.unwrap_or(now), self.image);
        order.created_at = now;
        order
    }
}
