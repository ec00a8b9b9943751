//! Atomic file operations for the garage file.
//!
//! Saves are unconditional whole-file rewrites, so every write goes
//! through an atomic replace: write to a temp file, sync to disk, then
//! rename over the target. If any step fails, the original file (if any)
//! remains untouched.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Write content to a file atomically.
///
/// 1. Writes content to a sibling temporary file (`.csv.tmp`)
/// 2. Calls `fsync` to ensure data is on disk
/// 3. Atomically renames the temp file to the target path
///
/// # Errors
///
/// Returns an error if any file operation fails.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("csv.tmp");

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    // Write to temp file, sync before rename
    {
        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
    }

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read a file to a string, treating a missing file as `None`.
///
/// A garage file that does not exist yet is an empty database, not an
/// error. Any other I/O failure propagates.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("garage.csv");

        atomic_write(&path, "line 1\nline 2\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "line 1\nline 2\n");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("garage.csv");

        atomic_write(&path, "old\n").unwrap();
        atomic_write(&path, "new\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
        assert!(!path.with_extension("csv.tmp").exists());
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("garage.csv");

        atomic_write(&path, "x\n").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_if_exists_missing_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.csv");

        assert!(read_if_exists(&path).unwrap().is_none());
    }
}
