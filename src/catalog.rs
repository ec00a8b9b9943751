//! The fixed part-type catalog.
//!
//! Part ids embed a 4-digit type code derived from this ordered catalog
//! (1-indexed, so "Engine" is `0001`). The catalog is append-only by
//! convention: reordering or removing entries would change the meaning of
//! every persisted part id.

use crate::error::{Error, Result};

/// Ordered catalog of recognized part types. Position + 1 is the type code.
pub const PART_TYPES: &[&str] = &[
    "Engine",
    "Chassis",
    "Tyres",
    "Chain",
    "Sprocket",
    "Brake Disc",
    "Brake Pads",
    "Carburettor",
    "Clutch",
    "Axle",
    "Seat",
    "Steering Wheel",
    "Exhaust",
    "Air Filter",
    "Spark Plug",
];

/// Look up the 1-indexed type code for a part-type name.
///
/// Matching is case-insensitive. Returns `UnknownPartType` for names not in
/// the catalog; the add is expected to abort rather than commit a part with
/// a sentinel `0000` code.
pub fn type_code(name: &str) -> Result<u16> {
    PART_TYPES
        .iter()
        .position(|t| t.eq_ignore_ascii_case(name.trim()))
        .map(|i| u16::try_from(i + 1).unwrap_or(0))
        .ok_or_else(|| Error::UnknownPartType { name: name.to_string() })
}

/// Catalog name for a type code, if the code is in range.
#[must_use]
pub fn type_name(code: u16) -> Option<&'static str> {
    if code == 0 {
        return None;
    }
    PART_TYPES.get(usize::from(code) - 1).copied()
}

/// Closest catalog entry to an unrecognized name, for error hints.
///
/// Returns `None` when nothing is within edit distance 3.
#[must_use]
pub fn closest_type(input: &str) -> Option<&'static str> {
    let lower = input.trim().to_lowercase();
    PART_TYPES
        .iter()
        .map(|&t| (levenshtein(&lower, &t.to_lowercase()), t))
        .filter(|&(dist, _)| dist <= 3)
        .min_by_key(|&(dist, _)| dist)
        .map(|(_, t)| t)
}

/// Levenshtein edit distance, single-row optimization.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
