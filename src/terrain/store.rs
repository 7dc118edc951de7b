//! # Chunk Store
//!
//! This module provides the `ChunkStore` which owns all generated chunks,
//! keyed by chunk-grid coordinate.
//!
//! ## Ownership
//!
//! The store is the authoritative owner of chunk data. Anything handed across
//! the export boundary is a copy (see the export module), so overwriting or
//! evicting an entry can never corrupt a buffer the host is still reading.
//!
//! ## Bounding Policy
//!
//! Two policies are available:
//!
//! * [`ChunkStore::unbounded`] - a plain hash map; memory grows with the
//!   explored world. Capping that growth is the embedding application's call.
//! * [`ChunkStore::bounded`] - a least-recently-used cache with a fixed
//!   capacity for embedders that must cap memory.
//!
//! Either way there is at most one live chunk per coordinate key:
//! re-generation replaces, it never duplicates.
//!
//! ## Concurrency
//!
//! The store is shared mutable state with single-writer access. Concurrent
//! `put`/`get` calls require external serialization.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use log::debug;
use lru::LruCache;

use super::chunk::{Chunk, ChunkPos};

enum ChunkSlots {
    Unbounded(HashMap<ChunkPos, Chunk>),
    Bounded(LruCache<ChunkPos, Chunk>),
}

/// Owns generated chunks, keyed by chunk-grid coordinate.
pub struct ChunkStore {
    slots: ChunkSlots,
}

impl ChunkStore {
    /// Creates a store with no bound on resident chunks.
    pub fn unbounded() -> Self {
        ChunkStore {
            slots: ChunkSlots::Unbounded(HashMap::new()),
        }
    }

    /// Creates a store holding at most `capacity` chunks, evicting the least
    /// recently used entry when full.
    pub fn bounded(capacity: NonZeroUsize) -> Self {
        ChunkStore {
            slots: ChunkSlots::Bounded(LruCache::new(capacity)),
        }
    }

    /// Inserts a chunk under its own chunk-grid coordinate, replacing any
    /// previous chunk at that key.
    pub fn put(&mut self, chunk: Chunk) {
        let position = chunk.position;
        match &mut self.slots {
            ChunkSlots::Unbounded(map) => {
                if map.insert(position, chunk).is_some() {
                    debug!("Replaced chunk at ({}, {})", position.x, position.y);
                }
            }
            ChunkSlots::Bounded(cache) => {
                if let Some((evicted, _)) = cache.push(position, chunk) {
                    if evicted == position {
                        debug!("Replaced chunk at ({}, {})", position.x, position.y);
                    } else {
                        debug!("Evicted chunk at ({}, {})", evicted.x, evicted.y);
                    }
                }
            }
        }
    }

    /// Retrieves the chunk at the given chunk-grid coordinates.
    ///
    /// Returns `None` for a coordinate that was never written (or has been
    /// evicted); never a zeroed or stale chunk. Takes `&mut self` because the
    /// bounded policy refreshes recency on access.
    pub fn get(&mut self, position: ChunkPos) -> Option<&Chunk> {
        match &mut self.slots {
            ChunkSlots::Unbounded(map) => map.get(&position),
            ChunkSlots::Bounded(cache) => cache.get(&position),
        }
    }

    /// Whether a chunk is resident at the given coordinates.
    pub fn contains(&self, position: ChunkPos) -> bool {
        match &self.slots {
            ChunkSlots::Unbounded(map) => map.contains_key(&position),
            ChunkSlots::Bounded(cache) => cache.contains(&position),
        }
    }

    /// The number of resident chunks.
    pub fn len(&self) -> usize {
        match &self.slots {
            ChunkSlots::Unbounded(map) => map.len(),
            ChunkSlots::Bounded(cache) => cache.len(),
        }
    }

    /// Whether the store holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ChunkStore {
    fn default() -> Self {
        ChunkStore::unbounded()
    }
}
