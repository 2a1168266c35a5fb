//! Reusable field validators
//!
//! Each validator checks a single already-filtered value.

use crate::core::error::ValidationError;

/// Validator: name must not be empty
pub fn non_empty_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        Err(ValidationError::EmptyName)
    } else {
        Ok(())
    }
}

/// Validator: image bytes must be present and non-empty
pub fn image_present(image: Option<Vec<u8>>) -> Result<Vec<u8>, ValidationError> {
    match image {
        Some(bytes) if !bytes.is_empty() => Ok(bytes),
        _ => Err(ValidationError::MissingImage),
    }
}
