//! # ARTIFEX Terrain Generation
//!
//! Deterministic grid terrain: height, climate, biomes and vegetation.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same grid
//! 2. **Per-cell streams**: Every cell (and every octave of it) draws from its own key
//! 3. **Ordered rules**: Biomes come from a first-match rule table
//!
//! ## Core Components
//!
//! - `FractalNoise`: per-cell octave sums
//! - `biome`: climate formulas and the classification table
//! - `TerrainGrid`: row-major cell storage
//! - `TerrainGenerator`: the staged pipeline
//!
//! ## Example
//!
//! ```rust
//! use artifex_terrain::{generate_terrain, TerrainConfig};
//!
//! let config = TerrainConfig { width: 16, height: 8, ..TerrainConfig::default() };
//! let grid = generate_terrain(&config).unwrap();
//!
//! assert_eq!(grid.cells().len(), 16 * 8);
//! assert!(grid.cell(3, 2).is_ok());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod biome;
pub mod config;
pub mod export;
pub mod generator;
pub mod grid;
pub mod noise;
pub mod vegetation;

pub use biome::{classify, Biome, Climate};
pub use config::TerrainConfig;
pub use generator::{generate_terrain, TerrainGenerator, TerrainStage};
pub use grid::{TerrainCell, TerrainGrid, Vegetation, HEIGHT_SCALE};
pub use noise::FractalNoise;
pub use vegetation::VegetationDensity;
