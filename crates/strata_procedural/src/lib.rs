//! # STRATA Procedural Generation
//!
//! Deterministic terrain for a voxel world.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: the same coordinate always produces the same material
//! 2. **Chunked**: the world is generated in fixed 32x32x32 chunks
//! 3. **Stateless**: every chunk is generated from scratch and discarded
//!
//! ## Core Components
//!
//! - `terrain`: `height` and `material_at`
//! - `VoxelGrid`: dense chunk storage in wire order
//! - `ChunkGenerator` / `generate_chunk`: fill a grid for a chunk coordinate
//!
//! ## Example
//!
//! ```rust
//! use strata_procedural::{generate_chunk, ChunkCoord, Material, VOXELS_PER_CHUNK};
//!
//! let grid = generate_chunk(ChunkCoord::new(0, 0, 0));
//! assert_eq!(grid.len(), VOXELS_PER_CHUNK);
//!
//! // World Y = 0 is always stone.
//! assert_eq!(grid.get(0, 0, 0), Some(Material::Stone));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod chunk;
pub mod terrain;

pub use chunk::{generate_chunk, ChunkGenerator, VoxelGrid, WorldSeed};
pub use strata_shared::{ChunkCoord, Material, CHUNK_SIDE, VOXELS_PER_CHUNK};
pub use terrain::{height, material_at};
