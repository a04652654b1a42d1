//! # ARTIFEX
//!
//! Deterministic procedural content: cities, terrain and weapons.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           ARTIFEX                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │   ┌────────────┐     ┌─────────────┐     ┌─────────────┐     │
//! │   │   CITY     │     │   TERRAIN   │     │   ARSENAL   │     │
//! │   │ • Districts│     │ • Heights   │     │ • Rarity    │     │
//! │   │ • Roads    │     │ • Biomes    │     │ • Stats     │     │
//! │   │ • Buildings│     │ • Vegetation│     │ • Names     │     │
//! │   └─────┬──────┘     └──────┬──────┘     └──────┬──────┘     │
//! │         │                   │                   │            │
//! │         └──────────> artifex_core <─────────────┘            │
//! │                 streams · documents · errors                 │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pipelines never read each other's output.
//!
//! ## Modules
//!
//! - `cli`: command line arguments and the generate-to-document entry point
//! - `config`: one TOML file for all three pipelines
//! - `host`: proxy spawning contract for engines that visualise results
//! - `logging`: tracing subscriber setup for binaries

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod cli;
pub mod config;
pub mod host;
pub mod logging;

// Re-export the pipelines
pub use artifex_arsenal as arsenal;
pub use artifex_city as city;
pub use artifex_core as shared;
pub use artifex_terrain as terrain;

// Re-export commonly used types
pub use artifex_core::{Document, Exportable, GenerationError, GenerationResult};
pub use cli::{CliArgs, CliError, Command};
pub use config::ArtifexConfig;
pub use host::{InstanceRecord, ProxyDescriptor, ProxyHost, ProxyKind};
