//! # Voxel Index
//!
//! The bijective mapping between a bounded chunk-local coordinate and a flat
//! array offset.
//!
//! The packing is shift-based rather than multiply-add because the chunk
//! dimensions are powers of two:
//!
//! ```text
//! offset = (x << (LOG_CHUNK_HEIGHT + LOG_CHUNK_SIZE)) + (y << LOG_CHUNK_SIZE) + z
//! ```
//!
//! [`encode`] is a bijection from the valid coordinate domain onto
//! `[0, CHUNK_DATA_LENGTH)`; [`decode`] is its inverse. This is the primary
//! correctness property of the whole generator, and is what lets element `i`
//! of an exported buffer be traced back to the coordinate it was written at.

use super::{
    LocalPos, CHUNK_DATA_LENGTH, CHUNK_HEIGHT, CHUNK_SIZE, LOG_CHUNK_HEIGHT, LOG_CHUNK_SIZE,
};
use crate::terrain::TerrainError;
use cgmath::Point3;

/// Whether a chunk-local coordinate is inside the chunk bounds.
pub fn in_bounds(pos: LocalPos) -> bool {
    (0..CHUNK_SIZE).contains(&pos.x)
        && (0..CHUNK_HEIGHT).contains(&pos.y)
        && (0..CHUNK_SIZE).contains(&pos.z)
}

/// Encodes a chunk-local coordinate into a flat array offset, checking bounds.
///
/// # Errors
/// Returns [`TerrainError::IndexOutOfRange`] when any axis is outside its
/// declared range, so an invalid coordinate can never alias another voxel's
/// slot.
pub fn encode(pos: LocalPos) -> Result<usize, TerrainError> {
    if !in_bounds(pos) {
        return Err(TerrainError::IndexOutOfRange {
            x: pos.x,
            y: pos.y,
            z: pos.z,
        });
    }
    Ok(encode_unchecked(pos))
}

/// Encodes a chunk-local coordinate without a bounds check, for per-voxel hot
/// loops whose bounds are already established by the loop structure.
///
/// Out-of-bounds input is a logic error; debug builds assert on it.
pub fn encode_unchecked(pos: LocalPos) -> usize {
    debug_assert!(in_bounds(pos), "voxel position out of chunk bounds: {pos:?}");
    ((pos.x as usize) << (LOG_CHUNK_HEIGHT + LOG_CHUNK_SIZE))
        + ((pos.y as usize) << LOG_CHUNK_SIZE)
        + pos.z as usize
}

/// Decodes a flat array offset back into the chunk-local coordinate it was
/// encoded from. Inverse of [`encode`] over `[0, CHUNK_DATA_LENGTH)`.
pub fn decode(offset: usize) -> LocalPos {
    debug_assert!(offset < CHUNK_DATA_LENGTH, "offset out of range: {offset}");
    let x = (offset >> (LOG_CHUNK_HEIGHT + LOG_CHUNK_SIZE)) as i32;
    let y = ((offset >> LOG_CHUNK_SIZE) & (CHUNK_HEIGHT - 1) as usize) as i32;
    let z = (offset & (CHUNK_SIZE - 1) as usize) as i32;
    Point3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn index_conversion() {
        fn do_test(index: usize, pos: LocalPos) {
            assert_eq!(encode(pos), Ok(index));
            assert_eq!(decode(index), pos);
        }

        do_test(0, Point3::new(0, 0, 0));
        do_test(1024 + 32 + 3, Point3::new(1, 2, 3));
        do_test(CHUNK_DATA_LENGTH - 1, Point3::new(15, 63, 15));
    }

    #[test]
    fn decode_inverts_encode_over_full_domain() {
        for x in 0..CHUNK_SIZE {
            for y in 0..CHUNK_HEIGHT {
                for z in 0..CHUNK_SIZE {
                    let pos = Point3::new(x, y, z);
                    let offset = encode(pos).unwrap();
                    assert_eq!(decode(offset), pos);
                }
            }
        }
    }

    #[test]
    fn encode_is_a_bijection_onto_the_data_range() {
        let mut seen = HashSet::new();
        for x in 0..CHUNK_SIZE {
            for y in 0..CHUNK_HEIGHT {
                for z in 0..CHUNK_SIZE {
                    let offset = encode(Point3::new(x, y, z)).unwrap();
                    assert!(offset < CHUNK_DATA_LENGTH);
                    assert!(seen.insert(offset), "offset {offset} collided");
                }
            }
        }
        assert_eq!(seen.len(), CHUNK_DATA_LENGTH);
    }

    #[test]
    fn out_of_bounds_coordinates_are_rejected() {
        let cases = [
            Point3::new(-1, 0, 0),
            Point3::new(0, -1, 0),
            Point3::new(0, 0, -1),
            Point3::new(CHUNK_SIZE, 0, 0),
            Point3::new(0, CHUNK_HEIGHT, 0),
            Point3::new(0, 0, CHUNK_SIZE),
        ];
        for pos in cases {
            assert_eq!(
                encode(pos),
                Err(TerrainError::IndexOutOfRange {
                    x: pos.x,
                    y: pos.y,
                    z: pos.z
                })
            );
        }
    }
}
