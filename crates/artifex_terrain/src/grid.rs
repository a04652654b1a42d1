//! # Terrain Grid
//!
//! Row-major cell storage.
//!
//! ## Layout
//!
//! ```text
//! index = y * width + x        x = index % width, y = index / width
//! ```
//!
//! The grid always holds exactly `width * height` cells.

use serde::{Deserialize, Serialize};

use artifex_core::{GenerationError, GenerationResult, Vec3};

use crate::biome::Biome;

/// Scale from normalized height to world Z.
pub const HEIGHT_SCALE: f32 = 1000.0;

/// An object scattered on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vegetation {
    /// Only in tree-bearing biomes.
    Tree,
    /// Any walkable cell.
    Rock,
    /// Any walkable cell.
    Bush,
}

impl Vegetation {
    /// Tag used in exports.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::Rock => "rock",
            Self::Bush => "bush",
        }
    }
}

/// One grid cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainCell {
    /// Height in `[-1, 1]`.
    pub height: f32,
    /// Moisture in `[0, 1]`.
    pub moisture: f32,
    /// Temperature in `[0, 1]`.
    pub temperature: f32,
    /// Biome (Plains until classified).
    pub biome: Biome,
    /// Height above the water line.
    pub walkable: bool,
    /// Scattered objects, in roll order.
    pub objects: Vec<Vegetation>,
}

impl TerrainCell {
    /// A cell with only its height set.
    #[must_use]
    pub const fn with_height(height: f32) -> Self {
        Self {
            height,
            moisture: 0.0,
            temperature: 0.0,
            biome: Biome::Plains,
            walkable: false,
            objects: Vec::new(),
        }
    }
}

/// A generated terrain grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainGrid {
    width: u32,
    height: u32,
    cell_size: f32,
    cells: Vec<TerrainCell>,
}

impl TerrainGrid {
    /// Wraps row-major cells.
    ///
    /// # Errors
    ///
    /// [`GenerationError::InvalidConfig`] if `cells.len() != width * height`.
    pub fn new(width: u32, height: u32, cell_size: f32, cells: Vec<TerrainCell>) -> GenerationResult<Self> {
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(GenerationError::config(format!(
                "grid {width}x{height} needs {expected} cells, got {}",
                cells.len()
            )));
        }
        Ok(Self {
            width,
            height,
            cell_size,
            cells,
        })
    }

    pub(crate) const fn empty(width: u32, height: u32, cell_size: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
            cells: Vec::new(),
        }
    }

    /// Cells along X.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Cells along Y.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// World units per cell.
    #[must_use]
    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Every cell, row-major.
    #[must_use]
    pub fn cells(&self) -> &[TerrainCell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [TerrainCell] {
        &mut self.cells
    }

    pub(crate) fn set_cells(&mut self, cells: Vec<TerrainCell>) {
        self.cells = cells;
    }

    /// Row-major index of `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`GenerationError::IndexOutOfRange`] if the coordinate is off the grid.
    pub fn index_of(&self, x: u32, y: u32) -> GenerationResult<usize> {
        if x >= self.width {
            return Err(GenerationError::IndexOutOfRange {
                what: "terrain column",
                index: x as usize,
                len: self.width as usize,
            });
        }
        if y >= self.height {
            return Err(GenerationError::IndexOutOfRange {
                what: "terrain row",
                index: y as usize,
                len: self.height as usize,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }

    /// Coordinate of a row-major index.
    ///
    /// # Errors
    ///
    /// [`GenerationError::IndexOutOfRange`] if `index` is past the last cell.
    pub fn coords_of(&self, index: usize) -> GenerationResult<(u32, u32)> {
        let len = self.width as usize * self.height as usize;
        if index >= len {
            return Err(GenerationError::IndexOutOfRange {
                what: "terrain cell",
                index,
                len,
            });
        }
        let width = self.width as usize;
        Ok(((index % width) as u32, (index / width) as u32))
    }

    /// The cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`GenerationError::IndexOutOfRange`] if the coordinate is off the grid
    /// or the cells are not generated yet.
    pub fn cell(&self, x: u32, y: u32) -> GenerationResult<&TerrainCell> {
        let index = self.index_of(x, y)?;
        self.cells.get(index).ok_or(GenerationError::IndexOutOfRange {
            what: "terrain cell",
            index,
            len: self.cells.len(),
        })
    }

    /// World-space anchor of cell `(x, y)`: `(x·cell_size, y·cell_size, height·1000)`.
    ///
    /// # Errors
    ///
    /// Same as [`TerrainGrid::cell`].
    pub fn world_position(&self, x: u32, y: u32) -> GenerationResult<Vec3> {
        let cell = self.cell(x, y)?;
        Ok(Vec3::new(
            x as f32 * self.cell_size,
            y as f32 * self.cell_size,
            cell.height * HEIGHT_SCALE,
        ))
    }

    /// Number of cells per biome, in [`Biome::ALL`] order.
    #[must_use]
    pub fn biome_counts(&self) -> [(Biome, usize); 8] {
        let mut counts = Biome::ALL.map(|b| (b, 0));
        for cell in &self.cells {
            counts[cell.biome as usize].1 += 1;
        }
        counts
    }

    /// Total scattered objects.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.cells.iter().map(|c| c.objects.len()).sum()
    }
}
