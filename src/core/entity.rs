//! Entity traits describing what the store needs from a persisted record

use crate::core::field::FieldValue;
use uuid::Uuid;

/// Base trait for persisted records.
///
/// All entities have:
/// - id: Unique identifier, assigned once
/// - status: Current lifecycle state as a lowercase string
pub trait Entity: Clone + Send + Sync + 'static {
    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;

    /// Get the entity status
    fn status(&self) -> &str;
}

/// Trait for entities with searchable fields.
pub trait Data: Entity {
    /// Fields that [`Data::field_value`] answers for
    fn indexed_fields() -> &'static [&'static str];

    /// Get the value of a specific field by name
    fn field_value(&self, field: &str) -> Option<FieldValue>;

    /// Whether `field` holds exactly `value` (rendered as text)
    fn matches_field(&self, field: &str, value: &str) -> bool {
        self.field_value(field)
            .is_some_and(|fv| fv.matches_text(value))
    }

    /// Whether [`Data::field_value`] answers for `field`
    fn is_indexed(field: &str) -> bool {
        Self::indexed_fields().iter().any(|f| *f == field)
    }
}
