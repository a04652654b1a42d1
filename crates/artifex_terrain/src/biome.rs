//! # Biome Classification
//!
//! Determines terrain type from height and derived climate.
//!
//! Uses a climate model based on:
//! - Moisture (drier with elevation)
//! - Temperature (from elevation and latitude)
//! - Height (from fractal noise)
//!
//! Classification is an ordered rule list. The first matching rule wins, so
//! extreme conditions come first.

use serde::{Deserialize, Serialize};

/// Biome types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Biome {
    /// Water (height < -0.3)
    Ocean = 0,
    /// Grassland, the fallback
    Plains = 1,
    /// Forest
    Forest = 2,
    /// Hot and dry
    Desert = 3,
    /// High ground (height > 0.7)
    Mountain = 4,
    /// Cold
    Tundra = 5,
    /// Hot and wet
    Jungle = 6,
    /// Hot and elevated
    Volcanic = 7,
}

impl Biome {
    /// Every biome, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Ocean,
        Self::Plains,
        Self::Forest,
        Self::Desert,
        Self::Mountain,
        Self::Tundra,
        Self::Jungle,
        Self::Volcanic,
    ];

    /// Returns whether this biome can have trees.
    #[must_use]
    pub const fn has_trees(self) -> bool {
        matches!(self, Self::Forest | Self::Jungle)
    }

    /// Lowercase name used in exports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ocean => "ocean",
            Self::Plains => "plains",
            Self::Forest => "forest",
            Self::Desert => "desert",
            Self::Mountain => "mountain",
            Self::Tundra => "tundra",
            Self::Jungle => "jungle",
            Self::Volcanic => "volcanic",
        }
    }
}

/// Climate of one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Climate {
    /// Height in `[-1, 1]`.
    pub height: f32,
    /// Moisture in `[0, 1]`.
    pub moisture: f32,
    /// Temperature in `[0, 1]`.
    pub temperature: f32,
}

/// One classification rule: a predicate and the biome it yields.
struct BiomeRule {
    matches: fn(&Climate) -> bool,
    biome: Biome,
}

/// Ordered rule list. [`Biome::Plains`] is the fallback when nothing matches.
const RULES: [BiomeRule; 7] = [
    BiomeRule { matches: |c| c.height < -0.3, biome: Biome::Ocean },
    BiomeRule { matches: |c| c.height > 0.7, biome: Biome::Mountain },
    BiomeRule { matches: |c| c.temperature < 0.2, biome: Biome::Tundra },
    BiomeRule { matches: |c| c.temperature > 0.8 && c.moisture > 0.6, biome: Biome::Jungle },
    BiomeRule { matches: |c| c.temperature > 0.8 && c.moisture < 0.3, biome: Biome::Desert },
    BiomeRule { matches: |c| c.height > 0.4 && c.moisture > 0.5, biome: Biome::Forest },
    BiomeRule { matches: |c| c.temperature > 0.6 && c.height > 0.5, biome: Biome::Volcanic },
];

/// Classifies a cell. Total: every climate maps to exactly one biome.
#[must_use]
pub fn classify(climate: &Climate) -> Biome {
    RULES
        .iter()
        .find(|rule| (rule.matches)(climate))
        .map_or(Biome::Plains, |rule| rule.biome)
}

/// Whether a cell of this height can be walked on.
#[inline]
#[must_use]
pub fn is_walkable(height: f32) -> bool {
    height > -0.3
}

/// Moisture from height: higher elevation is drier.
#[inline]
#[must_use]
pub fn moisture_at(height: f32) -> f32 {
    (1.0 - height * 0.5).clamp(0.0, 1.0)
}

/// Temperature from height and latitude.
///
/// `y / rows` runs south to north; the north is colder.
#[inline]
#[must_use]
pub fn temperature_at(height: f32, y: u32, rows: u32) -> f32 {
    let latitude = if rows == 0 { 0.0 } else { y as f32 / rows as f32 };
    (0.5 + height * 0.3 - latitude * 0.4).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn climate(height: f32, moisture: f32, temperature: f32) -> Climate {
        Climate { height, moisture, temperature }
    }

    #[test]
    fn test_each_rule() {
        assert_eq!(classify(&climate(-0.5, 0.5, 0.5)), Biome::Ocean);
        assert_eq!(classify(&climate(0.8, 0.5, 0.5)), Biome::Mountain);
        assert_eq!(classify(&climate(0.0, 0.5, 0.1)), Biome::Tundra);
        assert_eq!(classify(&climate(0.0, 0.7, 0.9)), Biome::Jungle);
        assert_eq!(classify(&climate(0.0, 0.2, 0.9)), Biome::Desert);
        assert_eq!(classify(&climate(0.45, 0.6, 0.5)), Biome::Forest);
        assert_eq!(classify(&climate(0.6, 0.4, 0.7)), Biome::Volcanic);
        assert_eq!(classify(&climate(0.0, 0.5, 0.5)), Biome::Plains);
    }

    #[test]
    fn test_first_match_wins() {
        // Cold ocean stays ocean; cold peak stays mountain.
        assert_eq!(classify(&climate(-0.9, 1.0, 0.0)), Biome::Ocean);
        assert_eq!(classify(&climate(0.9, 1.0, 0.0)), Biome::Mountain);
        // Hot wet highland is jungle before forest.
        assert_eq!(classify(&climate(0.45, 0.7, 0.9)), Biome::Jungle);
        // Wet highland that is also hot enough for volcanic is forest.
        assert_eq!(classify(&climate(0.6, 0.6, 0.7)), Biome::Forest);
    }

    #[test]
    fn test_boundaries_are_strict() {
        assert_eq!(classify(&climate(-0.3, 0.5, 0.5)), Biome::Plains);
        assert_eq!(classify(&climate(0.7, 0.5, 0.5)), Biome::Plains);
        assert_eq!(classify(&climate(0.0, 0.5, 0.2)), Biome::Plains);
        assert!(!is_walkable(-0.3));
        assert!(is_walkable(-0.29));
    }

    #[test]
    fn test_classification_is_total() {
        let steps = 40;
        let mut found = std::collections::HashSet::new();

        for h in 0..=steps {
            for m in 0..=steps {
                for t in 0..=steps {
                    let c = climate(
                        -1.0 + 2.0 * h as f32 / steps as f32,
                        m as f32 / steps as f32,
                        t as f32 / steps as f32,
                    );
                    found.insert(classify(&c));
                }
            }
        }

        assert_eq!(found.len(), Biome::ALL.len(), "Every biome should be reachable: {found:?}");
    }

    #[test]
    fn test_climate_formulas() {
        assert_eq!(moisture_at(1.0), 0.5);
        assert_eq!(moisture_at(-1.0), 1.0);
        assert_eq!(temperature_at(0.0, 0, 100), 0.5);
        assert!((temperature_at(1.0, 50, 100) - 0.6).abs() < 1e-6);
        assert_eq!(temperature_at(-1.0, 99, 100), 0.0);
    }

    #[test]
    fn test_trees() {
        let tree_biomes: Vec<_> = Biome::ALL.iter().filter(|b| b.has_trees()).collect();
        assert_eq!(tree_biomes, vec![&Biome::Forest, &Biome::Jungle]);
    }
}
