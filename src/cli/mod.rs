//! CLI definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// Paddock - kart, part, and track mileage tracking
#[derive(Parser, Debug)]
#[command(name = "paddock", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Garage file path (default: ~/.paddock/garage.csv)
    #[arg(long, global = true, env = "PADDOCK_FILE")]
    pub file: Option<PathBuf>,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Kart management
    Kart {
        #[command(subcommand)]
        command: KartCommands,
    },

    /// Part management
    Part {
        #[command(subcommand)]
        command: PartCommands,
    },

    /// Track management
    Track {
        #[command(subcommand)]
        command: TrackCommands,
    },

    /// Print version information
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ============================================================================
// Kart Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum KartCommands {
    /// Register a new kart
    Add {
        /// Kart name
        name: String,
    },

    /// List all karts
    List,

    /// Remove a kart (parts mounted on it go back on the shelf)
    Remove {
        /// Kart id
        id: u64,
    },

    /// List the parts mounted on a kart
    Parts {
        /// Kart id
        id: u64,
    },

    /// Add mileage to a kart (and to every part mounted on it)
    Mileage {
        /// Kart id
        id: u64,

        /// Miles to add
        miles: f64,
    },

    /// Credit a kart with laps driven on a track
    Laps {
        /// Kart id
        id: u64,

        /// Track id
        track: u64,

        /// Number of laps
        laps: f64,
    },
}

// ============================================================================
// Part Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum PartCommands {
    /// Register a new part
    Add {
        /// Part name
        name: String,

        /// Part type (see `paddock part types`)
        r#type: String,

        /// Free-text details
        #[arg(short, long, default_value = "")]
        details: String,
    },

    /// List all parts
    List {
        /// Only parts not mounted on any kart
        #[arg(long)]
        unassigned: bool,
    },

    /// Remove a part
    Remove {
        /// Part id
        id: String,
    },

    /// Add mileage to a single part
    Mileage {
        /// Part id
        id: String,

        /// Miles to add
        miles: f64,
    },

    /// Mount a part on a kart
    Mount {
        /// Part id
        id: String,

        /// Kart id
        kart: u64,
    },

    /// Take a part off its kart
    Unmount {
        /// Part id
        id: String,
    },

    /// List the recognized part types
    Types,
}

// ============================================================================
// Track Commands
// ============================================================================

#[derive(Subcommand, Debug)]
pub enum TrackCommands {
    /// Register a new track
    Add {
        /// Track name
        name: String,

        /// Lap length (same unit as kart mileage)
        length: f64,

        /// Free-text details
        #[arg(short, long, default_value = "")]
        details: String,
    },

    /// List all tracks
    List,

    /// Remove a track
    Remove {
        /// Track id
        id: u64,
    },
}
