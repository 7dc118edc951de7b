//! # Terrain Demo Entry Point
//!
//! Native entry point for exercising the terrain core outside a browser. It
//! generates a small square of chunks and prints the origin chunk in the
//! serialized form the host consumes.
//!
//! For the browser, see the `host` module's `TerrainService`.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```

fn main() {
    #[cfg(not(target_family = "wasm"))]
    craft_terrain::run();
}
