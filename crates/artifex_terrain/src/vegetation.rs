//! Vegetation scatter.

use artifex_core::{GenerationSeed, StreamKey};

use crate::grid::{TerrainCell, Vegetation};

const TAG_VEGETATION: u64 = 0x7EE5;

/// Per-object probabilities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VegetationDensity {
    /// Tree chance, tree-bearing biomes only.
    pub tree: f32,
    /// Rock chance.
    pub rock: f32,
    /// Bush chance.
    pub bush: f32,
}

/// Rolls the objects of one cell at `(x, y)`.
///
/// Non-walkable cells get nothing. Otherwise tree, rock and bush are rolled
/// independently in that order, so a cell may carry several objects.
#[must_use]
pub fn scatter(seed: GenerationSeed, x: u32, y: u32, cell: &TerrainCell, density: &VegetationDensity) -> Vec<Vegetation> {
    let mut objects = Vec::new();
    if !cell.walkable {
        return objects;
    }

    let mut stream = StreamKey::new(seed)
        .with(TAG_VEGETATION)
        .with(u64::from(x))
        .with(u64::from(y))
        .stream();

    if cell.biome.has_trees() && stream.chance(density.tree) {
        objects.push(Vegetation::Tree);
    }
    if stream.chance(density.rock) {
        objects.push(Vegetation::Rock);
    }
    if stream.chance(density.bush) {
        objects.push(Vegetation::Bush);
    }
    objects
}
