//! # Terrain Core
//!
//! This module contains the core terrain functionality: representing chunks of
//! voxel data, generating them deterministically, owning them in a store, and
//! exporting them for a host environment.
//!
//! ## Architecture
//!
//! The terrain system is organized into several key components:
//!
//! * **Block**: The closed set of voxel content kinds and their wire codes
//! * **Chunk**: A fixed-size 16x64x16 column of blocks with bit-packed indexing
//! * **Generator**: Deterministic chunk production from chunk-grid coordinates
//! * **Store**: The authoritative owner of generated chunks, keyed by coordinate
//! * **Export**: Copy-out conversion of stored chunks into host-consumable data
//!
//! ## Data Flow
//!
//! 1. The host requests a chunk at a chunk-grid coordinate
//! 2. The generator produces a fully populated chunk for that coordinate
//! 3. The store takes ownership, replacing any previous chunk at that key
//! 4. The export layer copies the chunk out as an origin plus a flat block buffer
//!
//! ## Concurrency
//!
//! Everything here is synchronous and single-writer. The store is plain mutable
//! state; callers that need concurrent generation must serialize access per
//! coordinate externally.

use thiserror::Error;

pub mod block;
pub mod chunk;
pub mod export;
pub mod generator;
pub mod store;

/// Errors produced by the terrain core.
///
/// The taxonomy is deliberately narrow: the only failure mode is a chunk-local
/// coordinate outside its declared bounds. A missing chunk on lookup is an
/// `Option::None`, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TerrainError {
    /// A chunk-local voxel coordinate was outside the chunk bounds.
    ///
    /// Generation of the offending chunk is aborted; no partial chunk is ever
    /// stored or returned.
    #[error("voxel position ({x}, {y}, {z}) is outside chunk bounds")]
    IndexOutOfRange {
        /// X coordinate that was rejected.
        x: i32,
        /// Y coordinate that was rejected.
        y: i32,
        /// Z coordinate that was rejected.
        z: i32,
    },
}
