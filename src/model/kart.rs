//! Kart record.

use serde::{Deserialize, Serialize};

/// A kart in the garage.
///
/// Mileage is a running total, mutated only through the store's mileage
/// operations so that mounted parts advance in lockstep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kart {
    /// Unique identifier, assigned from the store's counter
    pub id: u64,

    /// Display name
    pub name: String,

    /// Accumulated mileage (non-negative in practice)
    pub mileage: f64,
}

impl Kart {
    /// Create a new kart with zero mileage.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            mileage: 0.0,
        }
    }
}
