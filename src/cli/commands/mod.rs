//! Command handlers.
//!
//! Handlers validate input before calling into the store — non-empty
//! names, positive track lengths, non-negative mileage — and render
//! results as human-readable text or JSON.

pub mod completions;
pub mod kart;
pub mod part;
pub mod track;
pub mod version;

use std::path::PathBuf;

use crate::config::resolve_store_path;
use crate::error::{Error, Result};
use crate::store::Garage;

/// Open the garage for a command, resolving the file path.
pub fn open_garage(file: Option<&PathBuf>) -> Result<Garage> {
    let path = resolve_store_path(file.map(PathBuf::as_path))
        .ok_or_else(|| Error::Other("could not determine a home directory".to_string()))?;
    Garage::open(path)
}

/// Reject empty or whitespace-only names.
pub fn require_name(name: &str, what: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidArgument(format!("{what} name must not be empty")));
    }
    Ok(())
}

/// Reject negative mileage/lap values. Zero is allowed.
pub fn require_non_negative(value: f64, what: &str) -> Result<()> {
    if value.is_nan() || value < 0.0 {
        return Err(Error::InvalidArgument(format!("{what} must be non-negative")));
    }
    Ok(())
}

/// Reject non-positive track lengths.
pub fn require_positive(value: f64, what: &str) -> Result<()> {
    if value.is_nan() || value <= 0.0 {
        return Err(Error::InvalidArgument(format!("{what} must be positive")));
    }
    Ok(())
}
