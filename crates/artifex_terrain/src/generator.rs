//! # Terrain Generator
//!
//! Staged terrain synthesis.
//!
//! ```text
//! Empty ──> HeightGenerated ──> DerivedMapsGenerated ──> Classified ──> Vegetated
//!    generate_heights    derive_climate          classify       vegetate
//! ```

use tracing::{debug, info};

use artifex_core::{GenerationError, GenerationResult, GenerationSeed, Validate};

use crate::biome::{self, Climate};
use crate::config::TerrainConfig;
use crate::grid::{TerrainCell, TerrainGrid};
use crate::noise::FractalNoise;
use crate::vegetation::{self, VegetationDensity};

/// Pipeline progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerrainStage {
    /// Nothing generated.
    Empty,
    /// Heights filled in.
    HeightGenerated,
    /// Moisture and temperature filled in.
    DerivedMapsGenerated,
    /// Biomes and walkability assigned.
    Classified,
    /// Vegetation scattered.
    Vegetated,
}

impl TerrainStage {
    /// Stage name used in errors and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::HeightGenerated => "HeightGenerated",
            Self::DerivedMapsGenerated => "DerivedMapsGenerated",
            Self::Classified => "Classified",
            Self::Vegetated => "Vegetated",
        }
    }
}

/// Staged terrain generator.
#[derive(Debug)]
pub struct TerrainGenerator {
    config: TerrainConfig,
    seed: GenerationSeed,
    grid: TerrainGrid,
    stage: TerrainStage,
}

impl TerrainGenerator {
    /// Creates a generator.
    ///
    /// # Errors
    ///
    /// [`GenerationError::InvalidConfig`] if the config fails validation.
    pub fn new(config: TerrainConfig) -> GenerationResult<Self> {
        config.validate()?;
        Ok(Self {
            seed: GenerationSeed::from(config.seed),
            grid: TerrainGrid::empty(config.width, config.height, config.cell_size),
            stage: TerrainStage::Empty,
            config,
        })
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &TerrainConfig {
        &self.config
    }

    /// Current pipeline stage.
    #[must_use]
    pub const fn stage(&self) -> TerrainStage {
        self.stage
    }

    /// The grid built so far.
    #[must_use]
    pub const fn grid(&self) -> &TerrainGrid {
        &self.grid
    }

    /// Consumes the generator and returns its grid.
    #[must_use]
    pub fn into_grid(self) -> TerrainGrid {
        self.grid
    }

    /// Discards the current grid.
    pub fn clear(&mut self) {
        self.grid = TerrainGrid::empty(self.config.width, self.config.height, self.config.cell_size);
        self.stage = TerrainStage::Empty;
    }

    /// Clears and runs every stage.
    ///
    /// # Errors
    ///
    /// Only if a stage runs out of order, which cannot happen from here.
    pub fn generate(&mut self) -> GenerationResult<&TerrainGrid> {
        self.clear();
        self.generate_heights()?;
        self.derive_climate()?;
        self.classify()?;
        self.vegetate()?;

        let walkable = self.grid.cells().iter().filter(|c| c.walkable).count();
        info!(
            seed = self.config.seed,
            width = self.config.width,
            height = self.config.height,
            walkable,
            objects = self.grid.object_count(),
            "Terrain generated"
        );
        Ok(&self.grid)
    }

    /// Fills every cell with a fractal height.
    ///
    /// # Errors
    ///
    /// [`GenerationError::StageOutOfOrder`] unless the pipeline is empty.
    pub fn generate_heights(&mut self) -> GenerationResult<()> {
        self.require(TerrainStage::Empty)?;

        let noise = FractalNoise::new(self.seed, self.config.noise_octaves, self.config.noise_persistence);
        let (width, height) = (self.config.width, self.config.height);
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| TerrainCell::with_height(noise.height(x, y)))
            .collect();

        self.grid.set_cells(cells);
        self.advance(TerrainStage::HeightGenerated);
        Ok(())
    }

    /// Derives moisture and temperature from height and latitude.
    ///
    /// # Errors
    ///
    /// [`GenerationError::StageOutOfOrder`] unless heights are generated.
    pub fn derive_climate(&mut self) -> GenerationResult<()> {
        self.require(TerrainStage::HeightGenerated)?;

        let (width, rows) = (self.config.width as usize, self.config.height);
        for (i, cell) in self.grid.cells_mut().iter_mut().enumerate() {
            let y = (i / width) as u32;
            cell.moisture = biome::moisture_at(cell.height);
            cell.temperature = biome::temperature_at(cell.height, y, rows);
        }

        self.advance(TerrainStage::DerivedMapsGenerated);
        Ok(())
    }

    /// Assigns biome and walkability.
    ///
    /// # Errors
    ///
    /// [`GenerationError::StageOutOfOrder`] unless climate is derived.
    pub fn classify(&mut self) -> GenerationResult<()> {
        self.require(TerrainStage::DerivedMapsGenerated)?;

        for cell in self.grid.cells_mut() {
            cell.biome = biome::classify(&Climate {
                height: cell.height,
                moisture: cell.moisture,
                temperature: cell.temperature,
            });
            cell.walkable = biome::is_walkable(cell.height);
        }

        self.advance(TerrainStage::Classified);
        Ok(())
    }

    /// Scatters trees, rocks and bushes on walkable cells.
    ///
    /// # Errors
    ///
    /// [`GenerationError::StageOutOfOrder`] unless biomes are classified.
    pub fn vegetate(&mut self) -> GenerationResult<()> {
        self.require(TerrainStage::Classified)?;

        let density = VegetationDensity {
            tree: self.config.tree_density,
            rock: self.config.rock_density,
            bush: self.config.bush_density,
        };
        let seed = self.seed;
        let width = self.config.width as usize;
        for (i, cell) in self.grid.cells_mut().iter_mut().enumerate() {
            let (x, y) = ((i % width) as u32, (i / width) as u32);
            cell.objects = vegetation::scatter(seed, x, y, cell, &density);
        }

        self.advance(TerrainStage::Vegetated);
        Ok(())
    }

    fn require(&self, expected: TerrainStage) -> GenerationResult<()> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(GenerationError::StageOutOfOrder {
                pipeline: "terrain",
                expected: expected.as_str(),
                found: self.stage.as_str(),
            })
        }
    }

    fn advance(&mut self, stage: TerrainStage) {
        debug!(from = self.stage.as_str(), to = stage.as_str(), "Terrain stage complete");
        self.stage = stage;
    }
}

/// Validates `config` and runs the full pipeline.
///
/// # Errors
///
/// [`GenerationError::InvalidConfig`] if the config fails validation.
pub fn generate_terrain(config: &TerrainConfig) -> GenerationResult<TerrainGrid> {
    let mut generator = TerrainGenerator::new(config.clone())?;
    generator.generate()?;
    Ok(generator.into_grid())
}
