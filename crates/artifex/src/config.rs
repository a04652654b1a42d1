//! # Combined Configuration
//!
//! One TOML file drives every pipeline:
//!
//! ```toml
//! [city]
//! seed = 42
//! num_districts = 6
//!
//! [terrain]
//! width = 128
//!
//! [weapons]
//! max_enchantments = 2
//! ```
//!
//! Missing tables and keys fall back to defaults.

use serde::{Deserialize, Serialize};

use artifex_arsenal::WeaponConfig;
use artifex_city::CityConfig;
use artifex_core::{load_toml, GenerationResult, Validate};
use artifex_terrain::TerrainConfig;

/// Parameters for all three pipelines.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifexConfig {
    /// `[city]` table.
    pub city: CityConfig,
    /// `[terrain]` table.
    pub terrain: TerrainConfig,
    /// `[weapons]` table.
    pub weapons: WeaponConfig,
}

impl ArtifexConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// [`artifex_core::GenerationError::ConfigParse`] for malformed TOML,
    /// [`artifex_core::GenerationError::InvalidConfig`] for bad values.
    pub fn from_toml(text: &str) -> GenerationResult<Self> {
        load_toml(text)
    }

    /// Uses one seed for every pipeline.
    pub fn set_seed(&mut self, seed: i64) {
        self.city.seed = seed;
        self.terrain.seed = seed;
        self.weapons.seed = seed;
    }
}

impl Validate for ArtifexConfig {
    fn validate(&self) -> GenerationResult<()> {
        self.city.validate()?;
        self.terrain.validate()?;
        self.weapons.validate()
    }
}
