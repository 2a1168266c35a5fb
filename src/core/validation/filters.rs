//! Reusable input filters
//!
//! These filters transform raw field values before validation

/// Filter: trim whitespace from a name
pub fn trim(value: &str) -> String {
    value.trim().to_string()
}

/// Filter: normalize a price as typed into a text field.
///
/// Removes surrounding whitespace, turns a decimal comma into a point and
/// completes a bare leading or trailing separator (`.5` → `0.5`, `5.` → `5`).
pub fn normalize_price_text(value: &str) -> String {
    let mut text = value.trim().replacen(',', ".", 1);

    if text.ends_with('.') {
        text.pop();
    }

    let unsigned_start = usize::from(text.starts_with(['+', '-']));
    if text[unsigned_start..].starts_with('.') {
        text.insert(unsigned_start, '0');
    }

    text
}
