//! Chunk-grid coordinates.

use crate::constants::CHUNK_SIDE_I64;

/// Chunk coordinate (identifies a chunk in the world grid).
///
/// World coordinate = chunk coordinate x 32 + local offset. World
/// coordinates are `i64` so every `i32` chunk maps without overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    /// X coordinate (in chunks, not voxels).
    pub x: i32,
    /// Y coordinate (in chunks, not voxels).
    pub y: i32,
    /// Z coordinate (in chunks, not voxels).
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a new chunk coordinate.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the chunk containing a world voxel.
    ///
    /// Uses Euclidean division, so voxel -1 belongs to chunk -1.
    /// World positions outside the `i32 x 32` range saturate.
    #[must_use]
    pub fn from_world_pos(world_x: i64, world_y: i64, world_z: i64) -> Self {
        let axis = |w: i64| -> i32 {
            let chunk = w.div_euclid(CHUNK_SIDE_I64);
            i32::try_from(chunk).unwrap_or(if chunk < 0 { i32::MIN } else { i32::MAX })
        };
        Self::new(axis(world_x), axis(world_y), axis(world_z))
    }

    /// World coordinates of the chunk's local (0, 0, 0) voxel.
    #[inline]
    #[must_use]
    pub const fn origin(self) -> (i64, i64, i64) {
        (
            self.x as i64 * CHUNK_SIDE_I64,
            self.y as i64 * CHUNK_SIDE_I64,
            self.z as i64 * CHUNK_SIDE_I64,
        )
    }
}

impl From<[i32; 3]> for ChunkCoord {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_world_pos() {
        assert_eq!(ChunkCoord::from_world_pos(0, 0, 0), ChunkCoord::new(0, 0, 0));
        assert_eq!(ChunkCoord::from_world_pos(31, 31, 31), ChunkCoord::new(0, 0, 0));
        assert_eq!(ChunkCoord::from_world_pos(32, 64, 96), ChunkCoord::new(1, 2, 3));
        assert_eq!(ChunkCoord::from_world_pos(-1, -32, -33), ChunkCoord::new(-1, -1, -2));
    }

    #[test]
    fn test_origin_does_not_overflow() {
        let coord = ChunkCoord::new(i32::MAX, i32::MIN, -1);
        let (x, y, z) = coord.origin();
        assert_eq!(x, i64::from(i32::MAX) * 32);
        assert_eq!(y, i64::from(i32::MIN) * 32);
        assert_eq!(z, -32);
        assert_eq!(ChunkCoord::from_world_pos(x, y, z), coord);
    }
}
