#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Craft Terrain
//!
//! A voxel terrain chunk generator for a browser-hosted voxel-world renderer,
//! compiled to WebAssembly and driven by a JavaScript host.
//!
//! This crate owns the chunk data model, the bit-packed 3D-to-flat indexing
//! scheme, deterministic block-fill generation, and the copy-out export of
//! chunk buffers across the host boundary. Rendering, persistence, and
//! networking live on the host side.
//!
//! ## Key Modules
//!
//! * `terrain` - The core: blocks, chunks, generation, the chunk store, and
//!   chunk export
//! * `host` - The `wasm-bindgen` surface a JavaScript host drives
//!   (wasm targets only)
//!
//! ## Usage
//!
//! From JavaScript, construct one service per worker and pull chunks from it:
//!
//! ```js
//! const service = new TerrainService();
//! service.setSeed("bungus");
//! const chunk = service.getChunk(0, 0);
//! // chunk.pos_x/pos_y/pos_z, chunk.blocks: Uint8Array(16384)
//! ```
//!
//! From Rust, the core is usable directly:
//!
//! ```
//! use craft_terrain::terrain::chunk::ChunkPos;
//! use craft_terrain::terrain::export::export;
//! use craft_terrain::terrain::generator::ChunkGenerator;
//! use craft_terrain::terrain::store::ChunkStore;
//!
//! let generator = ChunkGenerator::default();
//! let mut store = ChunkStore::unbounded();
//! store.put(generator.generate(ChunkPos::new(0, 0)).unwrap());
//! let data = export(&mut store, ChunkPos::new(0, 0)).unwrap();
//! assert_eq!(data.blocks.len(), 16384);
//! ```

#[cfg(not(target_family = "wasm"))]
use log::info;

#[cfg(target_family = "wasm")]
pub mod host;
pub mod terrain;

#[cfg(not(target_family = "wasm"))]
use terrain::chunk::ChunkPos;
#[cfg(not(target_family = "wasm"))]
use terrain::export::export;
#[cfg(not(target_family = "wasm"))]
use terrain::generator::ChunkGenerator;
#[cfg(not(target_family = "wasm"))]
use terrain::store::ChunkStore;

/// Half-width, in chunks, of the square the native demo generates around the
/// origin.
#[cfg(not(target_family = "wasm"))]
const LOAD_DIST: i32 = 2;

/// Runs the native demo: generates a square of chunks around the origin and
/// prints the origin chunk in its serialized host form.
#[cfg(not(target_family = "wasm"))]
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let generator = ChunkGenerator::default();
    let mut store = ChunkStore::unbounded();

    for i in -LOAD_DIST..LOAD_DIST {
        for j in -LOAD_DIST..LOAD_DIST {
            match generator.generate(ChunkPos::new(i, j)) {
                Ok(chunk) => store.put(chunk),
                Err(e) => {
                    log::error!("Chunk ({i}, {j}) failed to generate: {e}");
                    return;
                }
            }
        }
    }

    info!("Generated {} chunks", store.len());

    if let Some(data) = export(&mut store, ChunkPos::new(0, 0)) {
        println!(
            "{}",
            serde_json::to_string(&data).expect("chunk data serializes to JSON")
        );
    }
}
