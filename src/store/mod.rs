//! The record store.
//!
//! [`Garage`] owns the kart, part, and track collections, the monotonic id
//! counter, and the garage file. Every mutating operation runs to
//! completion, including a full rewrite of the persisted file, before
//! returning; there is no incremental diffing and no background work.
//!
//! The store is the sole owner of both the in-memory collections and the
//! file. Two `Garage` instances must never target the same file: saves are
//! unconditional whole-file rewrites and no file locking is done.
//!
//! Lookup failures are explicit `*NotFound` errors rather than silent
//! no-ops, so callers can distinguish "nothing happened" from "done".

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog;
use crate::codec::{self, Snapshot};
use crate::error::{Error, Result};
use crate::model::{Kart, Part, Track};

/// The record store for one garage file.
#[derive(Debug)]
pub struct Garage {
    path: PathBuf,
    snapshot: Snapshot,
}

impl Garage {
    /// Open the garage file at `path`, or start empty if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or decoded.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let snapshot = codec::read_snapshot(&path)?;
        Ok(Self { path, snapshot })
    }

    /// The garage file this store persists to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ── Create ────────────────────────────────────────────────

    /// Register a new kart with zero mileage.
    ///
    /// The store accepts any name, including an empty one; name validation
    /// is the collaborator's job.
    ///
    /// # Errors
    ///
    /// Returns an error if the garage file cannot be written.
    pub fn add_kart(&mut self, name: &str) -> Result<Kart> {
        let id = self.next_id();
        let kart = Kart::new(id, name);
        self.snapshot.karts.push(kart.clone());
        self.persist()?;
        debug!(id, name, "added kart");
        Ok(kart)
    }

    /// Register a new track. Length is stored as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the garage file cannot be written.
    pub fn add_track(&mut self, name: &str, length: f64, details: &str) -> Result<Track> {
        let id = self.next_id();
        let track = Track::new(id, name, length, details);
        self.snapshot.tracks.push(track.clone());
        self.persist()?;
        debug!(id, name, length, "added track");
        Ok(track)
    }

    /// Register a new part, unmounted, with zero mileage.
    ///
    /// The part id encodes the type: a 4-digit catalog code followed by a
    /// 4-digit sequence number. An unrecognized type name, or a counter
    /// past the 4-digit sequence space, aborts the add before anything is
    /// committed; the counter does not advance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPartType`] for names not in the catalog,
    /// [`Error::PartIdsExhausted`] once the counter would no longer fit in
    /// the id's 4-digit sequence field, or an error if the garage file
    /// cannot be written.
    pub fn add_part(&mut self, name: &str, details: &str, type_name: &str) -> Result<Part> {
        let code = catalog::type_code(type_name)?;
        // Ids are exactly 8 characters; a fifth sequence digit would
        // silently corrupt the 4+4 decomposition on disk.
        if self.snapshot.counter >= Part::MAX_SEQUENCE {
            return Err(Error::PartIdsExhausted { counter: self.snapshot.counter });
        }
        let sequence = self.next_id();
        let part = Part::new(Part::compose_id(code, sequence), name, details);
        self.snapshot.parts.push(part.clone());
        self.persist()?;
        debug!(id = %part.id, name, type_name, "added part");
        Ok(part)
    }

    /// Advance the counter and hand out the next identifier seed.
    ///
    /// The counter never decreases, so ids are never reused even after
    /// deletions.
    fn next_id(&mut self) -> u64 {
        self.snapshot.counter += 1;
        self.snapshot.counter
    }

    // ── Remove ────────────────────────────────────────────────

    /// Remove a kart, unassigning any parts mounted on it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KartNotFound`] if no such kart exists.
    pub fn remove_kart(&mut self, id: u64) -> Result<Kart> {
        let index = self
            .snapshot
            .karts
            .iter()
            .position(|k| k.id == id)
            .ok_or(Error::KartNotFound { id })?;
        let kart = self.snapshot.karts.remove(index);

        // Cascade: no part may keep pointing at a kart that is gone.
        for part in &mut self.snapshot.parts {
            if part.kart_id == Some(id) {
                part.kart_id = None;
            }
        }

        self.persist()?;
        debug!(id, "removed kart");
        Ok(kart)
    }

    /// Remove a track.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TrackNotFound`] if no such track exists.
    pub fn remove_track(&mut self, id: u64) -> Result<Track> {
        let index = self
            .snapshot
            .tracks
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::TrackNotFound { id })?;
        let track = self.snapshot.tracks.remove(index);
        self.persist()?;
        debug!(id, "removed track");
        Ok(track)
    }

    /// Remove a part, mounted or not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PartNotFound`] if no such part exists.
    pub fn remove_part(&mut self, id: &str) -> Result<Part> {
        let index = self
            .snapshot
            .parts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::PartNotFound { id: id.to_string() })?;
        let part = self.snapshot.parts.remove(index);
        self.persist()?;
        debug!(id, "removed part");
        Ok(part)
    }

    // ── Mount / unmount ───────────────────────────────────────

    /// Mount a part on a kart. Remounting moves the part.
    ///
    /// # Errors
    ///
    /// Returns `KartNotFound` or `PartNotFound` if either id is unknown.
    pub fn mount_part(&mut self, kart_id: u64, part_id: &str) -> Result<()> {
        if !self.snapshot.karts.iter().any(|k| k.id == kart_id) {
            return Err(Error::KartNotFound { id: kart_id });
        }
        let part = self
            .snapshot
            .parts
            .iter_mut()
            .find(|p| p.id == part_id)
            .ok_or_else(|| Error::PartNotFound { id: part_id.to_string() })?;
        part.kart_id = Some(kart_id);
        self.persist()?;
        debug!(kart_id, part_id, "mounted part");
        Ok(())
    }

    /// Take a part off whatever kart it is mounted on.
    ///
    /// Succeeds even if the part was already on the shelf.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PartNotFound`] if no such part exists.
    pub fn unmount_part(&mut self, part_id: &str) -> Result<()> {
        let part = self
            .snapshot
            .parts
            .iter_mut()
            .find(|p| p.id == part_id)
            .ok_or_else(|| Error::PartNotFound { id: part_id.to_string() })?;
        part.kart_id = None;
        self.persist()?;
        debug!(part_id, "unmounted part");
        Ok(())
    }

    // ── Mileage ───────────────────────────────────────────────

    /// Add `delta` to a kart's mileage and to every part mounted on it.
    ///
    /// Mounted parts were used for exactly as many laps as the kart, so
    /// their mileage advances in lockstep. Unmounted parts are untouched.
    /// Returns the kart's new total.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KartNotFound`] if no such kart exists.
    pub fn add_kart_mileage(&mut self, kart_id: u64, delta: f64) -> Result<f64> {
        let kart = self
            .snapshot
            .karts
            .iter_mut()
            .find(|k| k.id == kart_id)
            .ok_or(Error::KartNotFound { id: kart_id })?;
        kart.mileage += delta;
        let total = kart.mileage;

        for part in &mut self.snapshot.parts {
            if part.kart_id == Some(kart_id) {
                part.mileage += delta;
            }
        }

        self.persist()?;
        debug!(kart_id, delta, total, "updated kart mileage");
        Ok(total)
    }

    /// Add `delta` to one part's mileage, independent of any kart.
    ///
    /// Returns the part's new total.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PartNotFound`] if no such part exists.
    pub fn add_part_mileage(&mut self, part_id: &str, delta: f64) -> Result<f64> {
        let part = self
            .snapshot
            .parts
            .iter_mut()
            .find(|p| p.id == part_id)
            .ok_or_else(|| Error::PartNotFound { id: part_id.to_string() })?;
        part.mileage += delta;
        let total = part.mileage;
        self.persist()?;
        debug!(part_id, delta, total, "updated part mileage");
        Ok(total)
    }

    /// Credit a kart with laps driven on a track.
    ///
    /// The mileage delta is `laps * track.length`, applied through
    /// [`Self::add_kart_mileage`] so mounted parts advance too. Returns the
    /// delta applied.
    ///
    /// # Errors
    ///
    /// Returns `TrackNotFound` or `KartNotFound` if either id is unknown.
    pub fn log_laps(&mut self, kart_id: u64, track_id: u64, laps: f64) -> Result<f64> {
        let track = self
            .track(track_id)
            .ok_or(Error::TrackNotFound { id: track_id })?;
        let delta = laps * track.length;
        self.add_kart_mileage(kart_id, delta)?;
        Ok(delta)
    }

    // ── Read accessors ────────────────────────────────────────

    /// All karts, in insertion order.
    #[must_use]
    pub fn karts(&self) -> &[Kart] {
        &self.snapshot.karts
    }

    /// All parts, in sequence order.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.snapshot.parts
    }

    /// All tracks, in insertion order.
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.snapshot.tracks
    }

    /// One kart by id.
    #[must_use]
    pub fn kart(&self, id: u64) -> Option<&Kart> {
        self.snapshot.karts.iter().find(|k| k.id == id)
    }

    /// One part by id.
    #[must_use]
    pub fn part(&self, id: &str) -> Option<&Part> {
        self.snapshot.parts.iter().find(|p| p.id == id)
    }

    /// One track by id.
    #[must_use]
    pub fn track(&self, id: u64) -> Option<&Track> {
        self.snapshot.tracks.iter().find(|t| t.id == id)
    }

    /// Parts currently mounted on a kart, in sequence order.
    #[must_use]
    pub fn parts_on(&self, kart_id: u64) -> Vec<&Part> {
        self.snapshot
            .parts
            .iter()
            .filter(|p| p.kart_id == Some(kart_id))
            .collect()
    }

    /// Parts sitting on the shelf, in sequence order.
    #[must_use]
    pub fn unassigned_parts(&self) -> Vec<&Part> {
        self.snapshot.parts.iter().filter(|p| !p.is_mounted()).collect()
    }

    /// Current value of the id counter.
    #[must_use]
    pub fn counter(&self) -> u64 {
        self.snapshot.counter
    }

    fn persist(&self) -> Result<()> {
        codec::write_snapshot(&self.path, &self.snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp() -> (TempDir, Garage) {
        let dir = TempDir::new().unwrap();
        let garage = Garage::open(dir.path().join("garage.csv")).unwrap();
        (dir, garage)
    }

    #[test]
    fn test_counter_advances_per_create() {
        let (_dir, mut garage) = open_temp();

        let kart = garage.add_kart("Red").unwrap();
        let track = garage.add_track("Oval", 400.0, "").unwrap();
        let part = garage.add_part("Chain", "", "Chain").unwrap();

        assert_eq!(kart.id, 1);
        assert_eq!(track.id, 2);
        assert_eq!(part.id, "00040003");
        assert_eq!(garage.counter(), 3);
    }

    #[test]
    fn test_unknown_part_type_does_not_advance_counter() {
        let (_dir, mut garage) = open_temp();

        assert!(garage.add_part("Wing", "", "Wing").is_err());
        assert_eq!(garage.counter(), 0);
        assert!(garage.parts().is_empty());
    }

    #[test]
    fn test_every_mutation_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garage.csv");

        let mut garage = Garage::open(&path).unwrap();
        assert!(!path.exists());

        garage.add_kart("Red").unwrap();
        assert!(path.exists());

        let reread = Garage::open(&path).unwrap();
        assert_eq!(reread.karts().len(), 1);
        assert_eq!(reread.counter(), 1);
    }

    #[test]
    fn test_remove_missing_ids_are_errors() {
        let (_dir, mut garage) = open_temp();

        assert!(matches!(garage.remove_kart(9), Err(Error::KartNotFound { id: 9 })));
        assert!(matches!(garage.remove_track(9), Err(Error::TrackNotFound { .. })));
        assert!(matches!(garage.remove_part("00010009"), Err(Error::PartNotFound { .. })));
    }
}
