//! Part management commands.
//!
//! - `paddock part add <name> <type>` - Register a part
//! - `paddock part list [--unassigned]` - List parts
//! - `paddock part remove <id>` - Remove a part
//! - `paddock part mileage <id> <miles>` - Add mileage to one part
//! - `paddock part mount <id> <kart>` - Mount a part on a kart
//! - `paddock part unmount <id>` - Take a part off its kart
//! - `paddock part types` - Show the part-type catalog

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;

use crate::catalog;
use crate::cli::PartCommands;
use crate::error::Result;
use crate::model::Part;
use crate::store::Garage;

use super::{open_garage, require_name, require_non_negative};

#[derive(Serialize)]
pub struct PartOutput {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: Option<&'static str>,
    pub details: String,
    pub mileage: f64,
    pub kart_id: Option<u64>,
}

impl From<&Part> for PartOutput {
    fn from(p: &Part) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            type_name: p.type_code().and_then(catalog::type_name),
            details: p.details.clone(),
            mileage: p.mileage,
            kart_id: p.kart_id,
        }
    }
}

#[derive(Serialize)]
struct PartListOutput {
    parts: Vec<PartOutput>,
    count: usize,
}

/// Execute a part command.
pub fn execute(command: &PartCommands, file: Option<&PathBuf>, json: bool) -> Result<()> {
    if matches!(command, PartCommands::Types) {
        return execute_types(json);
    }

    let mut garage = open_garage(file)?;

    match command {
        PartCommands::Add { name, r#type, details } => {
            execute_add(&mut garage, name, r#type, details, json)
        }
        PartCommands::List { unassigned } => execute_list(&garage, *unassigned, json),
        PartCommands::Remove { id } => execute_remove(&mut garage, id, json),
        PartCommands::Mileage { id, miles } => execute_mileage(&mut garage, id, *miles, json),
        PartCommands::Mount { id, kart } => execute_mount(&mut garage, id, *kart, json),
        PartCommands::Unmount { id } => execute_unmount(&mut garage, id, json),
        PartCommands::Types => unreachable!("handled above"),
    }
}

fn execute_add(
    garage: &mut Garage,
    name: &str,
    type_name: &str,
    details: &str,
    json: bool,
) -> Result<()> {
    require_name(name, "part")?;
    let part = garage.add_part(name.trim(), details, type_name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&PartOutput::from(&part))?);
    } else {
        println!("Added part: {} (id {})", part.name.bold(), part.id);
        if !part.details.is_empty() {
            println!("  Details: {}", part.details);
        }
    }
    Ok(())
}

fn execute_list(garage: &Garage, unassigned_only: bool, json: bool) -> Result<()> {
    let parts: Vec<&Part> = if unassigned_only {
        garage.unassigned_parts()
    } else {
        garage.parts().iter().collect()
    };

    if json {
        let output = PartListOutput {
            count: parts.len(),
            parts: parts.iter().map(|p| PartOutput::from(*p)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if parts.is_empty() {
        println!("No parts registered.");
        println!("\nAdd one with: paddock part add <name> <type>");
    } else {
        println!("Parts ({}):\n", parts.len());
        for part in parts {
            let type_name = part
                .type_code()
                .and_then(catalog::type_name)
                .unwrap_or("?");
            let location = match part.kart_id {
                Some(kart_id) => format!("on kart {kart_id}"),
                None => "on the shelf".to_string(),
            };
            println!("  {}  {} [{}]", part.id, part.name.bold(), type_name);
            println!("        Mileage: {:.1} ({location})", part.mileage);
            if !part.details.is_empty() {
                println!("        Details: {}", part.details);
            }
        }
    }
    Ok(())
}

fn execute_remove(garage: &mut Garage, id: &str, json: bool) -> Result<()> {
    let part = garage.remove_part(id)?;

    if json {
        let output = serde_json::json!({
            "removed": true,
            "id": part.id,
            "name": part.name,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Removed part: {} (id {})", part.name, part.id);
    }
    Ok(())
}

fn execute_mileage(garage: &mut Garage, id: &str, miles: f64, json: bool) -> Result<()> {
    require_non_negative(miles, "mileage")?;
    let total = garage.add_part_mileage(id, miles)?;

    if json {
        let output = serde_json::json!({
            "id": id,
            "added": miles,
            "mileage": total,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Part {id} mileage: {total:.1} (+{miles:.1})");
    }
    Ok(())
}

fn execute_mount(garage: &mut Garage, id: &str, kart_id: u64, json: bool) -> Result<()> {
    garage.mount_part(kart_id, id)?;

    if json {
        let output = serde_json::json!({
            "id": id,
            "kart_id": kart_id,
            "mounted": true,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Mounted part {id} on kart {kart_id}");
    }
    Ok(())
}

fn execute_unmount(garage: &mut Garage, id: &str, json: bool) -> Result<()> {
    garage.unmount_part(id)?;

    if json {
        let output = serde_json::json!({
            "id": id,
            "kart_id": serde_json::Value::Null,
            "mounted": false,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Unmounted part {id}");
    }
    Ok(())
}

fn execute_types(json: bool) -> Result<()> {
    if json {
        let types: Vec<serde_json::Value> = catalog::PART_TYPES
            .iter()
            .enumerate()
            .map(|(i, name)| {
                serde_json::json!({
                    "code": format!("{:04}", i + 1),
                    "name": name,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "types": types }))?);
    } else {
        println!("Part types ({}):\n", catalog::PART_TYPES.len());
        for (i, name) in catalog::PART_TYPES.iter().enumerate() {
            println!("  {:04}  {name}", i + 1);
        }
    }
    Ok(())
}
