//! Terrain generation parameters.

use serde::{Deserialize, Serialize};

use artifex_core::config::{require_positive, require_unit_interval};
use artifex_core::{GenerationError, GenerationResult, Validate};

/// Parameters for one terrain grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Base seed for every stream in the grid.
    pub seed: i64,
    /// Cells along X.
    pub width: u32,
    /// Cells along Y.
    pub height: u32,
    /// World units per cell.
    pub cell_size: f32,
    /// Fractal layers per height sample.
    pub noise_octaves: u32,
    /// Amplitude decay per octave, in `(0, 1)`.
    pub noise_persistence: f32,
    /// Tree probability in tree-bearing biomes.
    pub tree_density: f32,
    /// Rock probability on any walkable cell.
    pub rock_density: f32,
    /// Bush probability on any walkable cell.
    pub bush_density: f32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            width: 256,
            height: 256,
            cell_size: 100.0,
            noise_octaves: 4,
            noise_persistence: 0.5,
            tree_density: 0.3,
            rock_density: 0.2,
            bush_density: 0.25,
        }
    }
}

impl Validate for TerrainConfig {
    fn validate(&self) -> GenerationResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GenerationError::config(format!(
                "terrain size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.noise_octaves == 0 {
            return Err(GenerationError::config("noise_octaves must be > 0"));
        }
        require_positive("cell_size", self.cell_size)?;
        if !(self.noise_persistence > 0.0 && self.noise_persistence < 1.0) {
            return Err(GenerationError::config(format!(
                "noise_persistence must be in (0, 1), got {}",
                self.noise_persistence
            )));
        }
        require_unit_interval("tree_density", self.tree_density)?;
        require_unit_interval("rock_density", self.rock_density)?;
        require_unit_interval("bush_density", self.bush_density)
    }
}

#[cfg(test)]
mod tests {
    use artifex_core::load_toml;

    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(TerrainConfig::default().validate().is_ok());
    }

    #[test]
    fn test_persistence_is_open_interval() {
        for persistence in [0.0, 1.0, -0.5, f32::NAN] {
            let config = TerrainConfig { noise_persistence: persistence, ..TerrainConfig::default() };
            assert!(config.validate().is_err(), "Persistence {persistence} should be rejected");
        }
    }

    #[test]
    fn test_rejects_empty_grid() {
        let config = TerrainConfig { width: 0, ..TerrainConfig::default() };
        assert!(matches!(config.validate(), Err(GenerationError::InvalidConfig(_))));

        let config = TerrainConfig { noise_octaves: 0, ..TerrainConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_density() {
        let config = TerrainConfig { bush_density: 1.5, ..TerrainConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_toml() {
        let config: TerrainConfig = load_toml("width = 32\nheight = 16\ntree_density = 0.9\n").unwrap();

        assert_eq!((config.width, config.height), (32, 16));
        assert_eq!(config.noise_octaves, 4);

        assert!(load_toml::<TerrainConfig>("width = 0").is_err());
    }
}
