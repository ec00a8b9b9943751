//! Part record.
//!
//! Part ids are exactly 8 characters: a 4-digit zero-padded type code
//! (from the [`crate::catalog`]) followed by a 4-digit zero-padded
//! sequence number from the store's counter.

use serde::{Deserialize, Serialize};

/// A part, optionally mounted on one kart at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// 8-character identifier: type code ++ sequence number
    pub id: String,

    /// Display name
    pub name: String,

    /// Free-text details (pitch, brand, condition notes)
    pub details: String,

    /// Accumulated mileage; advances with the owning kart while mounted
    pub mileage: f64,

    /// Owning kart, `None` while the part sits on the shelf
    pub kart_id: Option<u64>,
}

impl Part {
    /// Largest sequence number that fits the id's 4-digit field.
    ///
    /// The store refuses to create parts once the shared counter passes
    /// this, keeping every persisted id at exactly 8 characters.
    pub const MAX_SEQUENCE: u64 = 9999;

    /// Create a new unmounted part with zero mileage.
    #[must_use]
    pub fn new(id: String, name: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            details: details.into(),
            mileage: 0.0,
            kart_id: None,
        }
    }

    /// Compose an 8-character part id from a type code and sequence number.
    ///
    /// The sequence must not exceed [`Self::MAX_SEQUENCE`]; the store
    /// enforces that before calling.
    #[must_use]
    pub fn compose_id(type_code: u16, sequence: u64) -> String {
        format!("{type_code:04}{sequence:04}")
    }

    /// The 4-digit type code embedded in the id, if the id is well-formed.
    #[must_use]
    pub fn type_code(&self) -> Option<u16> {
        self.id.get(..4)?.parse().ok()
    }

    /// Whether the part is currently mounted on a kart.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.kart_id.is_some()
    }
}
