//! Weapon generation parameters.

use serde::{Deserialize, Serialize};

use artifex_core::{GenerationResult, Validate};

use crate::rarity::RarityBands;

/// Parameters for a weapon generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    /// Base seed for every weapon stream.
    pub seed: i64,
    /// Hard cap on enchantments per weapon.
    pub max_enchantments: u32,
    /// Legendary band width.
    pub legendary_chance: f32,
    /// Epic band width.
    pub epic_chance: f32,
    /// Rare band width.
    pub rare_chance: f32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            seed: 999,
            max_enchantments: 3,
            legendary_chance: 0.01,
            epic_chance: 0.05,
            rare_chance: 0.15,
        }
    }
}

impl WeaponConfig {
    /// The validated rarity bands.
    ///
    /// # Errors
    ///
    /// See [`RarityBands::new`].
    pub fn bands(&self) -> GenerationResult<RarityBands> {
        RarityBands::new(self.legendary_chance, self.epic_chance, self.rare_chance)
    }
}

impl Validate for WeaponConfig {
    fn validate(&self) -> GenerationResult<()> {
        self.bands().map(|_| ())
    }
}
