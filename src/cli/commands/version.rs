//! Version command implementation.
//!
//! Also reports which garage file the other commands would operate on,
//! so `paddock version` doubles as a quick "where is my data" check.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::resolve_store_path;
use crate::error::Result;

#[derive(Serialize)]
struct VersionOutput<'a> {
    version: &'a str,
    build: &'a str,
    garage: Option<String>,
    garage_exists: bool,
}

/// Execute the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(file: Option<&PathBuf>, json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let build = if cfg!(debug_assertions) {
        "dev"
    } else {
        "release"
    };

    let garage = resolve_store_path(file.map(PathBuf::as_path));
    let garage_exists = garage.as_deref().is_some_and(std::path::Path::exists);

    if json {
        let output = VersionOutput {
            version,
            build,
            garage: garage.map(|p| p.display().to_string()),
            garage_exists,
        };
        let payload = serde_json::to_string(&output)?;
        println!("{payload}");
        return Ok(());
    }

    println!("paddock version {version} ({build})");
    match garage {
        Some(path) if garage_exists => println!("  Garage: {}", path.display()),
        Some(path) => println!("  Garage: {} (not created yet)", path.display()),
        None => println!("  Garage: unresolved (no home directory)"),
    }
    Ok(())
}
