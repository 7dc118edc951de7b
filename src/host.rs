//! # Host Boundary
//!
//! The WebAssembly surface the browser host drives. The host constructs one
//! [`TerrainService`] (typically inside a dedicated worker) and pulls chunks
//! out of it; all calls arrive on the single host thread.
//!
//! ## Lifetime Contract
//!
//! Every buffer returned here is an owned JavaScript `Uint8Array` copied out
//! of the chunk store, never a view into wasm linear memory. The host may hold
//! a returned buffer for as long as it likes; later `getChunk` calls,
//! re-generation, and store eviction cannot change it.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use js_sys::Uint8Array;
use log::info;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsError;

use crate::terrain::chunk::ChunkPos;
use crate::terrain::export::ChunkData;
use crate::terrain::generator::{ChunkGenerator, GeneratorConfig};
use crate::terrain::store::ChunkStore;
use crate::terrain::TerrainError;

#[wasm_bindgen(start)]
fn start() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    console_log::init_with_level(log::Level::Info).expect("Couldn't initialize logger");
}

/// A chunk as handed to the host: its world origin plus an owned copy of the
/// block buffer.
#[wasm_bindgen]
pub struct ChunkResult {
    /// World-space x of the chunk's (0, 0, 0) voxel.
    pub pos_x: i32,
    /// World-space y of the chunk's (0, 0, 0) voxel.
    pub pos_y: i32,
    /// World-space z of the chunk's (0, 0, 0) voxel.
    pub pos_z: i32,
    blocks: Uint8Array,
}

#[wasm_bindgen]
impl ChunkResult {
    /// The block buffer: one wire code per voxel, in voxel-index order,
    /// length exactly `CHUNK_DATA_LENGTH`.
    #[wasm_bindgen(getter)]
    pub fn blocks(&self) -> Uint8Array {
        self.blocks.clone()
    }
}

/// Generates terrain chunks on behalf of the host.
///
/// Owns a [`ChunkGenerator`] and the [`ChunkStore`] that keeps every chunk
/// generated in this session.
#[wasm_bindgen]
pub struct TerrainService {
    generator: ChunkGenerator,
    store: ChunkStore,
}

#[wasm_bindgen]
impl TerrainService {
    /// Creates a service with the default flat-grass world shape and an
    /// unbounded store.
    #[wasm_bindgen(constructor)]
    pub fn new() -> TerrainService {
        info!("Terrain service ready");
        TerrainService {
            generator: ChunkGenerator::new(GeneratorConfig::default()),
            store: ChunkStore::unbounded(),
        }
    }

    /// Seeds the generator from the host's seed string.
    ///
    /// The current flat strategy ignores the seed, but it is recorded so
    /// height-function strategies pick it up.
    #[wasm_bindgen(js_name = setSeed)]
    pub fn set_seed(&mut self, seed: &str) {
        let mut hasher = DefaultHasher::new();
        seed.hash(&mut hasher);
        self.generator.set_seed(hasher.finish());
    }

    /// Generates (or re-generates) the chunk at the given chunk-grid
    /// coordinates and returns it by copy as a value object.
    #[wasm_bindgen(js_name = getChunk)]
    pub fn get_chunk(&mut self, chunk_x: i32, chunk_z: i32) -> Result<ChunkResult, JsError> {
        let data = self.generate_and_export(chunk_x, chunk_z)?;
        Ok(ChunkResult {
            pos_x: data.pos.x,
            pos_y: data.pos.y,
            pos_z: data.pos.z,
            blocks: Uint8Array::from(data.blocks.as_slice()),
        })
    }

    /// Generates (or re-generates) the chunk at the given chunk-grid
    /// coordinates and returns just its block buffer.
    ///
    /// The returned array is an owned copy (see the module-level lifetime
    /// contract); it is not a view into this service's memory.
    #[wasm_bindgen(js_name = getChunkBlocks)]
    pub fn get_chunk_blocks(&mut self, chunk_x: i32, chunk_z: i32) -> Result<Uint8Array, JsError> {
        let data = self.generate_and_export(chunk_x, chunk_z)?;
        Ok(Uint8Array::from(data.blocks.as_slice()))
    }

    /// The number of chunks currently resident in the store.
    #[wasm_bindgen(js_name = residentChunks)]
    pub fn resident_chunks(&self) -> usize {
        self.store.len()
    }
}

impl TerrainService {
    fn generate_and_export(
        &mut self,
        chunk_x: i32,
        chunk_z: i32,
    ) -> Result<ChunkData, TerrainError> {
        let position = ChunkPos::new(chunk_x, chunk_z);
        let chunk = self.generator.generate(position)?;
        let data = ChunkData::from_chunk(&chunk);
        self.store.put(chunk);
        Ok(data)
    }
}

impl Default for TerrainService {
    fn default() -> Self {
        TerrainService::new()
    }
}
