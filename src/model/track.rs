//! Track record.

use serde::{Deserialize, Serialize};

/// A track. Immutable once created, except via removal.
///
/// The length doubles as the laps-to-mileage conversion factor and is
/// persisted in the row schema's `mileage` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique identifier, assigned from the store's counter
    pub id: u64,

    /// Display name
    pub name: String,

    /// Free-text details (surface, location)
    pub details: String,

    /// Lap length, in the same unit as kart mileage
    pub length: f64,
}

impl Track {
    /// Create a new track.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>, length: f64, details: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            details: details.into(),
            length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_track() {
        let track = Track::new(2, "Oval", 400.0, "paved");
        assert_eq!(track.id, 2);
        assert_eq!(track.length, 400.0);
        assert_eq!(track.details, "paved");
    }
}
