//! # Chunk Module
//!
//! This module provides the `Chunk` struct and related functionality for managing
//! 16x64x16 columns of voxel data, the unit of terrain generation and export.
//!
//! ## Coordinate Spaces
//!
//! Two coordinate spaces exist and must not be confused:
//!
//! * *Chunk-local* coordinates ([`LocalPos`]) address a single voxel inside a
//!   chunk. Each axis is bounded: x and z by [`CHUNK_SIZE`], y by
//!   [`CHUNK_HEIGHT`].
//! * *Chunk-grid* coordinates ([`ChunkPos`]) address which chunk, in units of
//!   chunk width. They are unbounded two-dimensional integers; the `y`
//!   component of a `ChunkPos` is the grid position along the world z axis.
//!
//! ## Storage
//!
//! A chunk stores its blocks as one dense array of [`CHUNK_DATA_LENGTH`]
//! [`BlockKind`] values, addressed through the bit-packed mapping in
//! [`voxel_index`]. Every valid chunk-local coordinate maps to exactly one
//! array slot and back.

use cgmath::{Point2, Point3};

use super::block::BlockKind;
use super::TerrainError;

#[cfg(test)]
mod unit_tests;
pub mod voxel_index;

/// The width and depth of a chunk in blocks. Must stay a power of two for the
/// shift-based indexing in [`voxel_index`].
pub const CHUNK_SIZE: i32 = 16;
/// log2 of [`CHUNK_SIZE`].
pub const LOG_CHUNK_SIZE: usize = 4;
/// The height of a chunk in blocks. Must stay a power of two for the
/// shift-based indexing in [`voxel_index`].
pub const CHUNK_HEIGHT: i32 = 64;
/// log2 of [`CHUNK_HEIGHT`].
pub const LOG_CHUNK_HEIGHT: usize = 6;
/// The total number of blocks in a chunk (CHUNK_HEIGHT x CHUNK_SIZE x CHUNK_SIZE).
pub const CHUNK_DATA_LENGTH: usize = (CHUNK_HEIGHT * CHUNK_SIZE * CHUNK_SIZE) as usize;

/// A chunk-grid coordinate: which chunk, in units of chunk width.
///
/// The `y` field is the grid coordinate along the world z axis.
pub type ChunkPos = Point2<i32>;

/// A chunk-local voxel coordinate, bounded by the chunk dimensions.
pub type LocalPos = Point3<i32>;

/// Represents a 16x64x16 column of voxel blocks in the world.
///
/// Chunks are the fundamental unit of terrain data. Each chunk records its
/// position in chunk-grid coordinates and a dense array of blocks, one per
/// chunk-local voxel.
#[derive(Clone, Debug, PartialEq)]
pub struct Chunk {
    /// The position of this chunk in chunk-grid coordinates (not block coordinates).
    pub position: ChunkPos,

    /// One `BlockKind` per voxel, addressed via `voxel_index`.
    /// Invariant: length is exactly `CHUNK_DATA_LENGTH`.
    blocks: Vec<BlockKind>,
}

impl Chunk {
    /// Creates a new, completely empty chunk (all blocks are void).
    ///
    /// # Arguments
    /// * `position` - The chunk-grid coordinates of the new chunk
    pub fn new(position: ChunkPos) -> Self {
        Chunk {
            position,
            blocks: vec![BlockKind::Void; CHUNK_DATA_LENGTH],
        }
    }

    /// The world-space coordinates of this chunk's (0, 0, 0) voxel.
    ///
    /// Derived from the chunk-grid position, including for negative grid
    /// coordinates; never a constant.
    pub fn origin(&self) -> Point3<i32> {
        Point3::new(self.position.x * CHUNK_SIZE, 0, self.position.y * CHUNK_SIZE)
    }

    /// Gets the block at the specified chunk-local coordinates.
    ///
    /// # Errors
    /// Returns [`TerrainError::IndexOutOfRange`] if the coordinate is outside
    /// the chunk bounds.
    pub fn block_at(&self, pos: LocalPos) -> Result<BlockKind, TerrainError> {
        let index = voxel_index::encode(pos)?;
        Ok(self.blocks[index])
    }

    /// Sets the block at the specified chunk-local coordinates.
    ///
    /// # Errors
    /// Returns [`TerrainError::IndexOutOfRange`] if the coordinate is outside
    /// the chunk bounds; the chunk is left unchanged in that case.
    pub fn set_block(&mut self, pos: LocalPos, kind: BlockKind) -> Result<(), TerrainError> {
        let index = voxel_index::encode(pos)?;
        self.blocks[index] = kind;
        Ok(())
    }

    /// The dense block array, in [`voxel_index`] order.
    pub fn blocks(&self) -> &[BlockKind] {
        &self.blocks
    }

    /// Counts the blocks in this chunk that are not void.
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|kind| !kind.is_void()).count()
    }
}
