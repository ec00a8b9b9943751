//! Kart management commands.
//!
//! - `paddock kart add <name>` - Register a kart
//! - `paddock kart list` - List karts with mileage
//! - `paddock kart remove <id>` - Remove a kart
//! - `paddock kart parts <id>` - Show parts mounted on a kart
//! - `paddock kart mileage <id> <miles>` - Add mileage
//! - `paddock kart laps <id> <track> <laps>` - Add mileage from laps

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::cli::KartCommands;
use crate::error::{Error, Result};
use crate::model::Kart;
use crate::store::Garage;

use super::part::PartOutput;
use super::{open_garage, require_name, require_non_negative};

#[derive(Serialize)]
pub struct KartOutput {
    pub id: u64,
    pub name: String,
    pub mileage: f64,
}

impl From<&Kart> for KartOutput {
    fn from(k: &Kart) -> Self {
        Self {
            id: k.id,
            name: k.name.clone(),
            mileage: k.mileage,
        }
    }
}

#[derive(Serialize)]
struct KartListOutput {
    karts: Vec<KartOutput>,
    count: usize,
}

/// Execute a kart command.
pub fn execute(command: &KartCommands, file: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut garage = open_garage(file)?;

    match command {
        KartCommands::Add { name } => execute_add(&mut garage, name, json),
        KartCommands::List => execute_list(&garage, json),
        KartCommands::Remove { id } => execute_remove(&mut garage, *id, json),
        KartCommands::Parts { id } => execute_parts(&garage, *id, json),
        KartCommands::Mileage { id, miles } => execute_mileage(&mut garage, *id, *miles, json),
        KartCommands::Laps { id, track, laps } => {
            execute_laps(&mut garage, *id, *track, *laps, json)
        }
    }
}

fn execute_add(garage: &mut Garage, name: &str, json: bool) -> Result<()> {
    require_name(name, "kart")?;
    let kart = garage.add_kart(name.trim())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&KartOutput::from(&kart))?);
    } else {
        println!("Added kart: {} (id {})", kart.name.bold(), kart.id);
    }
    Ok(())
}

fn execute_list(garage: &Garage, json: bool) -> Result<()> {
    let karts = garage.karts();

    if json {
        let output = KartListOutput {
            count: karts.len(),
            karts: karts.iter().map(KartOutput::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if karts.is_empty() {
        println!("No karts registered.");
        println!("\nAdd one with: paddock kart add <name>");
    } else {
        println!("Karts ({}):\n", karts.len());
        for kart in karts {
            let mounted = garage.parts_on(kart.id).len();
            println!("  {:>4}  {}", kart.id, kart.name.bold());
            println!("        Mileage: {:.1}", kart.mileage);
            println!("        Parts:   {mounted}");
        }
    }
    Ok(())
}

fn execute_remove(garage: &mut Garage, id: u64, json: bool) -> Result<()> {
    let unassigned = garage.parts_on(id).len();
    let kart = garage.remove_kart(id)?;

    if json {
        let output = serde_json::json!({
            "removed": true,
            "id": kart.id,
            "name": kart.name,
            "parts_unassigned": unassigned,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Removed kart: {} (id {})", kart.name, kart.id);
        if unassigned > 0 {
            println!("  {unassigned} part(s) returned to the shelf");
        }
    }
    Ok(())
}

fn execute_parts(garage: &Garage, id: u64, json: bool) -> Result<()> {
    // Surface a missing kart even though listing itself is a read.
    let kart = garage.kart(id).ok_or(Error::KartNotFound { id })?;
    let parts = garage.parts_on(id);

    if json {
        let output = serde_json::json!({
            "kart": KartOutput::from(kart),
            "count": parts.len(),
            "parts": parts.iter().map(|p| PartOutput::from(*p)).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if parts.is_empty() {
        println!("No parts mounted on {}.", kart.name.bold());
    } else {
        println!("Parts on {} ({}):\n", kart.name.bold(), parts.len());
        for part in parts {
            println!("  {}  {} - {:.1} mi", part.id, part.name, part.mileage);
        }
    }
    Ok(())
}

fn execute_mileage(garage: &mut Garage, id: u64, miles: f64, json: bool) -> Result<()> {
    require_non_negative(miles, "mileage")?;
    let total = garage.add_kart_mileage(id, miles)?;
    let parts_updated = garage.parts_on(id).len();

    if json {
        let output = serde_json::json!({
            "id": id,
            "added": miles,
            "mileage": total,
            "parts_updated": parts_updated,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Kart {id} mileage: {total:.1} (+{miles:.1})");
        if parts_updated > 0 {
            println!("  {parts_updated} mounted part(s) advanced with it");
        }
    }
    Ok(())
}

fn execute_laps(garage: &mut Garage, id: u64, track_id: u64, laps: f64, json: bool) -> Result<()> {
    require_non_negative(laps, "laps")?;
    let delta = garage.log_laps(id, track_id, laps)?;
    // log_laps already verified the kart exists
    let total = garage.kart(id).map_or(0.0, |k| k.mileage);

    if json {
        let output = serde_json::json!({
            "id": id,
            "track": track_id,
            "laps": laps,
            "added": delta,
            "mileage": total,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Kart {id}: {laps} lap(s) logged, +{delta:.1} mi (total {total:.1})");
    }
    Ok(())
}
