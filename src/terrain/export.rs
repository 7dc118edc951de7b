//! # Chunk Export
//!
//! Copy-out conversion of stored chunks into the flat representation the host
//! consumes.
//!
//! ## Lifetime Safety
//!
//! An exported [`ChunkData`] owns its buffer outright; it never aliases the
//! store's internal storage. Overwriting or evicting the source chunk after an
//! export cannot change a buffer the host already holds, which is what makes
//! the store free to apply any bounding policy it likes.
//!
//! ## Buffer Contract
//!
//! The exported buffer always has length exactly
//! [`CHUNK_DATA_LENGTH`](crate::terrain::chunk::CHUNK_DATA_LENGTH), and element
//! `i` holds the wire code of the voxel whose chunk-local coordinate is
//! `voxel_index::decode(i)`.

use cgmath::Point3;
use serde::Serialize;

use super::block::BlockCode;
use super::chunk::{Chunk, ChunkPos};
use super::store::ChunkStore;

/// A host-consumable snapshot of one chunk: its world origin plus a flat
/// buffer of block wire codes.
///
/// Serializes to the value-object shape the host marshaling expects
/// (`pos: {x, y, z}`, `blocks: [u8; CHUNK_DATA_LENGTH]`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChunkData {
    /// World-space coordinates of the chunk's (0, 0, 0) voxel.
    pub pos: Point3<i32>,
    /// One wire code per voxel, in voxel-index order.
    pub blocks: Vec<BlockCode>,
}

impl ChunkData {
    /// Copies a chunk out into its exported form.
    pub fn from_chunk(chunk: &Chunk) -> Self {
        ChunkData {
            pos: chunk.origin(),
            blocks: chunk.blocks().iter().map(|kind| kind.code()).collect(),
        }
    }
}

/// Exports the chunk stored at the given chunk-grid coordinates.
///
/// Returns `None` when no chunk is resident at that coordinate.
pub fn export(store: &mut ChunkStore, position: ChunkPos) -> Option<ChunkData> {
    store.get(position).map(ChunkData::from_chunk)
}
