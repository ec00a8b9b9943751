//! Track management commands.
//!
//! - `paddock track add <name> <length>` - Register a track
//! - `paddock track list` - List tracks
//! - `paddock track remove <id>` - Remove a track

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::cli::TrackCommands;
use crate::error::Result;
use crate::model::Track;
use crate::store::Garage;

use super::{open_garage, require_name, require_positive};

#[derive(Serialize)]
pub struct TrackOutput {
    pub id: u64,
    pub name: String,
    pub details: String,
    pub length: f64,
}

impl From<&Track> for TrackOutput {
    fn from(t: &Track) -> Self {
        Self {
            id: t.id,
            name: t.name.clone(),
            details: t.details.clone(),
            length: t.length,
        }
    }
}

#[derive(Serialize)]
struct TrackListOutput {
    tracks: Vec<TrackOutput>,
    count: usize,
}

/// Execute a track command.
pub fn execute(command: &TrackCommands, file: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut garage = open_garage(file)?;

    match command {
        TrackCommands::Add { name, length, details } => {
            execute_add(&mut garage, name, *length, details, json)
        }
        TrackCommands::List => execute_list(&garage, json),
        TrackCommands::Remove { id } => execute_remove(&mut garage, *id, json),
    }
}

fn execute_add(
    garage: &mut Garage,
    name: &str,
    length: f64,
    details: &str,
    json: bool,
) -> Result<()> {
    require_name(name, "track")?;
    require_positive(length, "track length")?;
    let track = garage.add_track(name.trim(), length, details)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&TrackOutput::from(&track))?);
    } else {
        println!(
            "Added track: {} (id {}, {:.1} per lap)",
            track.name.bold(),
            track.id,
            track.length
        );
    }
    Ok(())
}

fn execute_list(garage: &Garage, json: bool) -> Result<()> {
    let tracks = garage.tracks();

    if json {
        let output = TrackListOutput {
            count: tracks.len(),
            tracks: tracks.iter().map(TrackOutput::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if tracks.is_empty() {
        println!("No tracks registered.");
        println!("\nAdd one with: paddock track add <name> <length>");
    } else {
        println!("Tracks ({}):\n", tracks.len());
        for track in tracks {
            println!("  {:>4}  {}", track.id, track.name.bold());
            println!("        Length: {:.1} per lap", track.length);
            if !track.details.is_empty() {
                println!("        Details: {}", track.details);
            }
        }
    }
    Ok(())
}

fn execute_remove(garage: &mut Garage, id: u64, json: bool) -> Result<()> {
    let track = garage.remove_track(id)?;

    if json {
        let output = serde_json::json!({
            "removed": true,
            "id": track.id,
            "name": track.name,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Removed track: {} (id {})", track.name, track.id);
    }
    Ok(())
}
