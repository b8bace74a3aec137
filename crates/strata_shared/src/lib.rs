//! # STRATA Shared
//!
//! The wire contract between the terrain worker and its host.
//!
//! ## What lives here
//!
//! - `constants`: chunk side, voxel count, frame sizes
//! - `Material`: the four stable material ids
//! - `ChunkCoord` / `ChunkRequest`: what the host asks for
//! - `protocol`: voxel payload encoding and length-prefixed framing,
//!   plus `FrameDecoder` for the reading side of the pipe
//!
//! Nothing in this crate performs I/O.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod coord;
pub mod error;
pub mod material;
pub mod protocol;

pub use constants::{CHUNK_SIDE, FRAME_LEN, PAYLOAD_LEN, REQUEST_LEN, VOXELS_PER_CHUNK};
pub use coord::ChunkCoord;
pub use error::{ProtocolError, ProtocolResult};
pub use material::Material;
pub use protocol::{
    decode_response, decode_voxels, encode_chunk_frame, encode_frame, encode_voxels, ChunkRequest,
    FrameDecoder,
};
