//! # Chunk Generation
//!
//! A chunk is a 32x32x32 cube of voxels. Generation classifies every
//! voxel with the terrain function and stores the result in a dense,
//! flat grid.
//!
//! ## Grid Layout
//!
//! Outer axis X, then Y, then Z:
//!
//! ```text
//! index = (lx * 32 + ly) * 32 + lz
//! ```
//!
//! The host rebuilds positions from this arithmetic alone, so the order
//! is part of the wire contract.

use strata_shared::constants::{CHUNK_SIDE, CHUNK_SIDE_I64, VOXELS_PER_CHUNK};
use strata_shared::{
    decode_voxels, encode_chunk_frame, encode_voxels, ChunkCoord, ChunkRequest, Material,
    ProtocolResult,
};

use crate::terrain::{column_material, height};

/// World seed carried with every request.
///
/// Reserved protocol space: terrain does not read it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WorldSeed(i32);

impl WorldSeed {
    /// Creates a new world seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: i32) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

/// Dense voxel grid for one chunk.
///
/// Always holds exactly [`VOXELS_PER_CHUNK`] entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    voxels: Box<[Material]>,
}

impl VoxelGrid {
    /// Creates a grid full of air.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            voxels: vec![Material::Air; VOXELS_PER_CHUNK].into_boxed_slice(),
        }
    }

    /// Flat index of a local coordinate.
    #[inline]
    #[must_use]
    pub const fn index(lx: usize, ly: usize, lz: usize) -> usize {
        (lx * CHUNK_SIDE + ly) * CHUNK_SIDE + lz
    }

    /// Local coordinate of a flat index. Inverse of [`Self::index`].
    #[inline]
    #[must_use]
    pub const fn position(index: usize) -> (usize, usize, usize) {
        (
            index / (CHUNK_SIDE * CHUNK_SIDE),
            (index / CHUNK_SIDE) % CHUNK_SIDE,
            index % CHUNK_SIDE,
        )
    }

    /// Material at a local coordinate, `None` outside `[0, 32)`.
    #[inline]
    #[must_use]
    pub fn get(&self, lx: usize, ly: usize, lz: usize) -> Option<Material> {
        if lx < CHUNK_SIDE && ly < CHUNK_SIDE && lz < CHUNK_SIDE {
            Some(self.voxels[Self::index(lx, ly, lz)])
        } else {
            None
        }
    }

    /// Number of voxels (always [`VOXELS_PER_CHUNK`]).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Always false; kept for `len` symmetry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// The voxels in grid order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Material] {
        &self.voxels
    }

    /// Iterates voxels in grid order.
    pub fn iter(&self) -> impl Iterator<Item = Material> + '_ {
        self.voxels.iter().copied()
    }

    /// Number of voxels of the given material.
    #[must_use]
    pub fn count(&self, material: Material) -> usize {
        self.voxels.iter().filter(|&&m| m == material).count()
    }

    /// Serializes the grid as big-endian `u16` ids.
    #[must_use]
    pub fn encode_payload(&self) -> Vec<u8> {
        encode_voxels(&self.voxels)
    }

    /// Serializes the grid as a complete length-prefixed response.
    ///
    /// # Errors
    ///
    /// None in practice: a grid always holds one chunk.
    pub fn to_frame(&self) -> ProtocolResult<Vec<u8>> {
        encode_chunk_frame(&self.voxels)
    }

    /// Rebuilds a grid from a response payload.
    ///
    /// # Errors
    ///
    /// Wrong payload length or an unknown material id.
    pub fn from_payload(payload: &[u8]) -> ProtocolResult<Self> {
        Ok(Self {
            voxels: decode_voxels(payload)?.into_boxed_slice(),
        })
    }
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::empty()
    }
}

/// Generates the grid for `coord`.
///
/// Surface heights are computed once per X/Z column and shared by the
/// 32 voxels above it.
#[must_use]
pub fn generate_chunk(coord: ChunkCoord) -> VoxelGrid {
    let (origin_x, origin_y, origin_z) = coord.origin();

    let mut heights = [0i64; CHUNK_SIDE * CHUNK_SIDE];
    for (column, surface) in heights.iter_mut().enumerate() {
        let lx = (column / CHUNK_SIDE) as i64;
        let lz = (column % CHUNK_SIDE) as i64;
        *surface = height(origin_x + lx, origin_z + lz);
    }

    let mut voxels = Vec::with_capacity(VOXELS_PER_CHUNK);
    for row in heights.chunks_exact(CHUNK_SIDE) {
        for ly in 0..CHUNK_SIDE_I64 {
            let world_y = origin_y + ly;
            voxels.extend(row.iter().map(|&surface| column_material(surface, world_y)));
        }
    }

    VoxelGrid {
        voxels: voxels.into_boxed_slice(),
    }
}

/// Chunk generator bound to one request's seed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChunkGenerator {
    seed: WorldSeed,
}

impl ChunkGenerator {
    /// Creates a new chunk generator.
    #[must_use]
    pub const fn new(seed: WorldSeed) -> Self {
        Self { seed }
    }

    /// Creates the generator for a decoded request.
    #[must_use]
    pub const fn for_request(request: &ChunkRequest) -> Self {
        Self::new(WorldSeed::new(request.seed))
    }

    /// The seed this generator was created with.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> WorldSeed {
        self.seed
    }

    /// Generates a chunk at the given coordinates.
    #[must_use]
    pub fn generate(&self, coord: ChunkCoord) -> VoxelGrid {
        generate_chunk(coord)
    }
}
