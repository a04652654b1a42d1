//! City generation parameters.

use serde::{Deserialize, Serialize};

use artifex_core::config::{require_positive, require_unit_interval};
use artifex_core::{GenerationError, GenerationResult, Validate, Vec3};

/// Parameters for one city.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityConfig {
    /// Display name, exported as `city_name`.
    pub name: String,
    /// Base seed for every stream in the city.
    pub seed: i64,
    /// Total population, split evenly across districts.
    pub population: u32,
    /// City radius in world units.
    #[serde(alias = "city_radius")]
    pub radius: f32,
    /// City center.
    pub center: Vec3,
    /// Number of districts on the ring.
    pub num_districts: u32,
    /// Building placements attempted per district.
    pub buildings_per_district: u32,
    /// Probability that a placement attempt is kept.
    pub building_density: f32,
    /// Reject buildings whose footprint overlaps an earlier one.
    ///
    /// Off: buildings are placed without overlap checks.
    pub enforce_spacing: bool,
    /// Sites tried per building before it is dropped.
    pub max_placement_attempts: u32,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            name: "ProceduralCity".to_string(),
            seed: 42,
            population: 100_000,
            radius: 5000.0,
            center: Vec3::ZERO,
            num_districts: 8,
            buildings_per_district: 50,
            building_density: 0.6,
            enforce_spacing: true,
            max_placement_attempts: 8,
        }
    }
}

impl Validate for CityConfig {
    fn validate(&self) -> GenerationResult<()> {
        require_positive("city_radius", self.radius)?;
        require_unit_interval("building_density", self.building_density)?;
        if self.num_districts == 0 {
            return Err(GenerationError::config("num_districts must be > 0"));
        }
        if self.max_placement_attempts == 0 {
            return Err(GenerationError::config("max_placement_attempts must be > 0"));
        }
        Ok(())
    }
}
