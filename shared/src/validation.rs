//! Validation utilities for loosely-typed form input
//!
//! Form fields arrive as optional strings. These helpers turn them into the
//! typed values the inventory operations work with, returning a short
//! human-readable reason on failure.

/// Largest stock level a product may hold
pub const MAX_QUANTITY: i64 = 1_000_000_000;

/// Validate a record name, returning it trimmed
pub fn validate_name(name: Option<&str>) -> Result<&str, &'static str> {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => Ok(n),
        _ => Err("Name must not be empty"),
    }
}

/// Trimmed name if one was supplied, `None` for a missing or blank field
pub fn optional_name(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|n| !n.is_empty())
}

/// Parse a stock quantity: a base-10 integer in `0..=MAX_QUANTITY`
pub fn parse_quantity(value: &str) -> Result<i64, &'static str> {
    let quantity: i64 = value
        .trim()
        .parse()
        .map_err(|_| "Quantity must be a whole number")?;
    if quantity < 0 {
        return Err("Quantity cannot be negative");
    }
    if quantity > MAX_QUANTITY {
        return Err("Quantity cannot exceed 1000000000");
    }
    Ok(quantity)
}

/// Parse an optional quantity field; missing or blank means "not provided"
pub fn parse_optional_quantity(value: Option<&str>) -> Result<Option<i64>, &'static str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => parse_quantity(v).map(Some),
        _ => Ok(None),
    }
}

/// Parse a required record identifier
pub fn parse_id(value: Option<&str>) -> Result<i64, &'static str> {
    parse_optional_id(value)?.ok_or("Identifier is required")
}

/// Parse an optional record identifier; missing or blank means "not provided"
pub fn parse_optional_id(value: Option<&str>) -> Result<Option<i64>, &'static str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v
            .parse::<i64>()
            .map(Some)
            .map_err(|_| "Identifier must be a whole number"),
        _ => Ok(None),
    }
}
