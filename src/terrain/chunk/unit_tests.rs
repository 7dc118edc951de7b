use cgmath::{Point2, Point3};

use super::{Chunk, ChunkPos, CHUNK_DATA_LENGTH};
use crate::terrain::block::BlockKind;
use crate::terrain::TerrainError;

#[test]
fn defaults_to_void() {
    let chunk = Chunk::new(ChunkPos::new(0, 0));

    let block = chunk.block_at(Point3::new(0, 1, 1)).unwrap();

    assert_eq!(block, BlockKind::Void);
    assert_eq!(chunk.solid_count(), 0);
    assert_eq!(chunk.blocks().len(), CHUNK_DATA_LENGTH);
}

#[test]
fn stores_block() {
    let mut chunk = Chunk::new(ChunkPos::new(0, 0));

    chunk.set_block(Point3::new(1, 0, 1), BlockKind::Wood).unwrap();

    let block = chunk.block_at(Point3::new(1, 0, 1)).unwrap();

    assert_eq!(block, BlockKind::Wood);
    assert_eq!(chunk.solid_count(), 1);
}

#[test]
fn stores_first_block() {
    let mut chunk = Chunk::new(ChunkPos::new(0, 0));

    chunk.set_block(Point3::new(0, 0, 0), BlockKind::Stone).unwrap();

    assert_eq!(chunk.block_at(Point3::new(0, 0, 0)).unwrap(), BlockKind::Stone);
}

#[test]
fn stores_last_block() {
    let mut chunk = Chunk::new(ChunkPos::new(0, 0));

    chunk.set_block(Point3::new(15, 63, 15), BlockKind::Grass).unwrap();

    assert_eq!(
        chunk.block_at(Point3::new(15, 63, 15)).unwrap(),
        BlockKind::Grass
    );
}

#[test]
fn rejects_out_of_bounds_access() {
    let mut chunk = Chunk::new(ChunkPos::new(0, 0));

    assert_eq!(
        chunk.set_block(Point3::new(16, 0, 0), BlockKind::Grass),
        Err(TerrainError::IndexOutOfRange { x: 16, y: 0, z: 0 })
    );
    assert_eq!(
        chunk.block_at(Point3::new(0, 64, 0)),
        Err(TerrainError::IndexOutOfRange { x: 0, y: 64, z: 0 })
    );
    // rejected writes leave the chunk untouched
    assert_eq!(chunk.solid_count(), 0);
}

#[test]
fn origin_translates_the_grid_position() {
    fn do_test(position: ChunkPos, origin: Point3<i32>) {
        assert_eq!(Chunk::new(position).origin(), origin);
    }

    do_test(Point2::new(0, 0), Point3::new(0, 0, 0));
    do_test(Point2::new(1, 1), Point3::new(16, 0, 16));
    do_test(Point2::new(2, -3), Point3::new(32, 0, -48));
    do_test(Point2::new(-1, -1), Point3::new(-16, 0, -16));
}
