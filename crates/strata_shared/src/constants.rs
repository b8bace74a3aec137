//! # Wire Constants
//!
//! Fixed values shared implicitly between the worker and its host.
//!
//! **CRITICAL:** The host reconstructs voxel positions from these numbers
//! alone. Changing any of them is a breaking protocol change.

// =============================================================================
// CHUNK GEOMETRY
// =============================================================================

/// Chunk side length in voxels (X, Y and Z).
pub const CHUNK_SIDE: usize = 32;

/// [`CHUNK_SIDE`] as a signed world-space step.
pub const CHUNK_SIDE_I64: i64 = CHUNK_SIDE as i64;

/// Total voxels per chunk (32 x 32 x 32).
pub const VOXELS_PER_CHUNK: usize = CHUNK_SIDE * CHUNK_SIDE * CHUNK_SIDE;

// =============================================================================
// FRAMING
// =============================================================================

/// Size of one request: four big-endian `i32`.
pub const REQUEST_LEN: usize = 16;

/// Size of the big-endian `u32` length prefix in front of every response.
pub const LENGTH_PREFIX_LEN: usize = 4;

/// Each voxel travels as one big-endian `u16`.
pub const BYTES_PER_VOXEL: usize = 2;

/// Payload size of every response (65,536 bytes).
pub const PAYLOAD_LEN: usize = VOXELS_PER_CHUNK * BYTES_PER_VOXEL;

/// Full response size, prefix included.
pub const FRAME_LEN: usize = LENGTH_PREFIX_LEN + PAYLOAD_LEN;
