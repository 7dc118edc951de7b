//! # Chunk Generator
//!
//! Deterministic production of fully populated chunks from chunk-grid
//! coordinates.
//!
//! ## Strategies
//!
//! Generation is driven by a [`GenerationStrategy`]:
//!
//! * `Empty` - every voxel is void
//! * `Flat` - a single configured surface layer at y = 0, everything else void
//!
//! The flat fill is a placeholder world shape. The strategy enum is the
//! extension point where a seed-driven `height(x, z)` surface function and
//! per-column block selection (stone below a threshold, grass at the surface)
//! would slot in; the [`GeneratorConfig`] seed is already plumbed through for
//! those, and the flat strategy simply ignores it.
//!
//! ## Determinism
//!
//! `generate` is a pure function of the chunk-grid coordinate and the
//! generator configuration. Identical inputs always produce a bit-identical
//! block array, which is what makes stored chunks cacheable and tests
//! reproducible. Generation never reads or mutates the chunk store and
//! performs no I/O.

use cgmath::Point3;
use log::debug;

use super::block::BlockKind;
use super::chunk::{Chunk, ChunkPos, CHUNK_SIZE};
use super::TerrainError;

/// The world shape a generator produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GenerationStrategy {
    /// Every voxel is void.
    Empty,
    /// A single layer of `surface` blocks at y = 0; everything above is void.
    Flat {
        /// The block kind used for the y = 0 layer.
        surface: BlockKind,
    },
}

/// Configuration for a [`ChunkGenerator`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// The world shape to produce.
    pub strategy: GenerationStrategy,
    /// Seed for future height-function strategies. The flat strategy ignores
    /// it, but it participates in the determinism contract so changing it is
    /// allowed to change generated terrain.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            strategy: GenerationStrategy::Flat {
                surface: BlockKind::Grass,
            },
            seed: 0,
        }
    }
}

/// Produces chunks deterministically from chunk-grid coordinates.
pub struct ChunkGenerator {
    config: GeneratorConfig,
}

impl ChunkGenerator {
    /// Creates a generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        ChunkGenerator { config }
    }

    /// Replaces the generator seed, keeping the configured strategy.
    pub fn set_seed(&mut self, seed: u64) {
        debug!("Generator seed set to {seed}");
        self.config.seed = seed;
    }

    /// The active configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the chunk at the given chunk-grid coordinates.
    ///
    /// The returned chunk records `position` as handed in (its world origin is
    /// the grid-to-origin translation of it, negatives included) and has every
    /// voxel initialized.
    ///
    /// # Errors
    /// Returns [`TerrainError::IndexOutOfRange`] if a fill writes outside the
    /// chunk bounds; no partial chunk escapes in that case.
    pub fn generate(&self, position: ChunkPos) -> Result<Chunk, TerrainError> {
        let mut chunk = Chunk::new(position);

        match self.config.strategy {
            GenerationStrategy::Empty => {}
            GenerationStrategy::Flat { surface } => {
                for i in 0..CHUNK_SIZE {
                    for j in 0..CHUNK_SIZE {
                        chunk.set_block(Point3::new(i, 0, j), surface)?;
                    }
                }
            }
        }

        debug!(
            "Generated chunk ({}, {}) with {} solid blocks",
            position.x,
            position.y,
            chunk.solid_count()
        );

        Ok(chunk)
    }
}

impl Default for ChunkGenerator {
    fn default() -> Self {
        ChunkGenerator::new(GeneratorConfig::default())
    }
}
