//! Paddock - kart, part, and track mileage tracking.
//!
//! This crate provides the core functionality for the `paddock` CLI tool.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Entity records (Kart, Part, Track)
//! - [`catalog`] - The fixed part-type catalog and type-code lookup
//! - [`codec`] - CSV row format encoding/decoding and atomic file I/O
//! - [`store`] - The record store owning collections, ids, and persistence
//! - [`config`] - Data-file path resolution
//! - [`error`] - Error types and handling
//!
//! Every mutation flows through [`store::Garage`]; the CLI is a thin
//! collaborator that validates input and renders output.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

pub use error::{Error, Result};
