//! # Block Module
//!
//! This module defines the closed set of voxel block kinds and their numeric
//! wire encoding. The wire codes are what cross the host boundary; the enum is
//! what the rest of the crate works with.

use num_derive::FromPrimitive;

/// The underlying integer type used to represent block kinds on the wire.
///
/// Exported buffers are flat arrays of this type, one element per voxel.
pub type BlockCode = u8;

/// Enumerates all possible block kinds in the voxel world.
///
/// `Void` is the default/zero value and represents the absence of a block.
/// The discriminants are the stable wire codes; the `FromPrimitive` derive
/// provides the conversion back from a code at the boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[repr(u8)]
pub enum BlockKind {
    /// No block. The default content of every voxel.
    Void = 0,

    /// A grass block, the default surface material.
    Grass = 1,

    /// A stone block.
    Stone = 2,

    /// A wooden block.
    Wood = 3,
}

impl BlockKind {
    /// Decodes a wire code back into a `BlockKind`.
    ///
    /// Returns `None` for codes outside the closed set, so a corrupted or
    /// foreign buffer is rejected instead of silently reinterpreted.
    pub fn from_code(code: BlockCode) -> Option<Self> {
        num::FromPrimitive::from_u8(code)
    }

    /// The wire code for this block kind.
    pub fn code(self) -> BlockCode {
        self as BlockCode
    }

    /// Whether this is the `Void` kind.
    pub fn is_void(self) -> bool {
        self == BlockKind::Void
    }
}

impl Default for BlockKind {
    fn default() -> Self {
        BlockKind::Void
    }
}

#[cfg(test)]
mod tests {
    use super::BlockKind;

    #[test]
    fn codes_round_trip() {
        for kind in [
            BlockKind::Void,
            BlockKind::Grass,
            BlockKind::Stone,
            BlockKind::Wood,
        ] {
            assert_eq!(BlockKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn wire_codes_are_stable() {
        assert_eq!(BlockKind::Void.code(), 0);
        assert_eq!(BlockKind::Grass.code(), 1);
        assert_eq!(BlockKind::Stone.code(), 2);
        assert_eq!(BlockKind::Wood.code(), 3);
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(BlockKind::from_code(4), None);
        assert_eq!(BlockKind::from_code(255), None);
    }

    #[test]
    fn void_is_default() {
        assert_eq!(BlockKind::default(), BlockKind::Void);
        assert!(BlockKind::Void.is_void());
        assert!(!BlockKind::Grass.is_void());
    }
}
