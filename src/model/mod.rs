//! Entity records for Paddock.
//!
//! Three typed records share one on-disk row schema:
//! - [`Kart`] - a vehicle accumulating mileage
//! - [`Part`] - a component optionally mounted on one kart
//! - [`Track`] - a course whose length converts laps into mileage

pub mod kart;
pub mod part;
pub mod track;

pub use kart::Kart;
pub use part::Part;
pub use track::Track;
