//! Validation helpers for ledger inputs

/// Validate a purchase weight or rate: must be a finite, positive number
pub fn validate_positive(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() || value <= 0.0 {
        return Err("must be a positive number");
    }
    Ok(())
}

/// Validate a catalog name: must be non-empty after trimming
pub fn validate_item_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("name must not be empty");
    }
    Ok(())
}
