//! # Wire Protocol
//!
//! Request decoding and response framing over an ordered byte stream.
//!
//! ## Request (16 bytes)
//!
//! Four big-endian `i32`: `chunk_x`, `chunk_y`, `chunk_z`, `seed`.
//!
//! ## Response
//!
//! A big-endian `u32` payload length, then the payload: one big-endian
//! `u16` material id per voxel in X-major / Y / Z-minor order.

use crate::constants::{BYTES_PER_VOXEL, FRAME_LEN, LENGTH_PREFIX_LEN, PAYLOAD_LEN, REQUEST_LEN};
use crate::coord::ChunkCoord;
use crate::error::{ProtocolError, ProtocolResult};
use crate::material::Material;

/// One chunk request as read from the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkRequest {
    /// Chunk X coordinate.
    pub chunk_x: i32,
    /// Chunk Y coordinate.
    pub chunk_y: i32,
    /// Chunk Z coordinate.
    pub chunk_z: i32,
    /// Reserved. Parsed and carried, never consulted by generation.
    pub seed: i32,
}

impl ChunkRequest {
    /// Creates a request.
    #[must_use]
    pub const fn new(chunk_x: i32, chunk_y: i32, chunk_z: i32, seed: i32) -> Self {
        Self {
            chunk_x,
            chunk_y,
            chunk_z,
            seed,
        }
    }

    /// Decodes a request from exactly [`REQUEST_LEN`] bytes.
    #[must_use]
    pub fn decode(bytes: &[u8; REQUEST_LEN]) -> Self {
        let word = |at: usize| i32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
        Self::new(word(0), word(4), word(8), word(12))
    }

    /// Decodes a request from the front of `bytes`.
    ///
    /// Bytes past the first 16 are ignored.
    ///
    /// # Errors
    ///
    /// [`ProtocolError::TruncatedRequest`] if fewer than 16 bytes are given.
    pub fn try_from_slice(bytes: &[u8]) -> ProtocolResult<Self> {
        bytes
            .first_chunk::<REQUEST_LEN>()
            .map(Self::decode)
            .ok_or(ProtocolError::TruncatedRequest {
                received: bytes.len(),
            })
    }

    /// Encodes the request as the host sends it.
    #[must_use]
    pub fn encode(&self) -> [u8; REQUEST_LEN] {
        let mut out = [0u8; REQUEST_LEN];
        out[0..4].copy_from_slice(&self.chunk_x.to_be_bytes());
        out[4..8].copy_from_slice(&self.chunk_y.to_be_bytes());
        out[8..12].copy_from_slice(&self.chunk_z.to_be_bytes());
        out[12..16].copy_from_slice(&self.seed.to_be_bytes());
        out
    }

    /// The requested chunk.
    #[inline]
    #[must_use]
    pub const fn coord(&self) -> ChunkCoord {
        ChunkCoord::new(self.chunk_x, self.chunk_y, self.chunk_z)
    }
}

fn append_voxels(out: &mut Vec<u8>, voxels: &[Material]) {
    let ids: &[u16] = bytemuck::cast_slice(voxels);
    out.reserve(ids.len() * BYTES_PER_VOXEL);
    for id in ids {
        out.extend_from_slice(&id.to_be_bytes());
    }
}

/// Serializes voxels as big-endian `u16` ids, in slice order.
#[must_use]
pub fn encode_voxels(voxels: &[Material]) -> Vec<u8> {
    let mut out = Vec::new();
    append_voxels(&mut out, voxels);
    out
}

/// Parses a chunk payload back into materials.
///
/// # Errors
///
/// - [`ProtocolError::PayloadLength`] unless `payload` is exactly
///   [`PAYLOAD_LEN`] bytes.
/// - [`ProtocolError::UnknownMaterial`] for an id outside the set.
pub fn decode_voxels(payload: &[u8]) -> ProtocolResult<Vec<Material>> {
    if payload.len() != PAYLOAD_LEN {
        return Err(ProtocolError::chunk_payload(payload.len()));
    }
    payload
        .chunks_exact(BYTES_PER_VOXEL)
        .map(|pair| Material::try_from(u16::from_be_bytes([pair[0], pair[1]])))
        .collect()
}

/// Prepends the big-endian length prefix to `payload`.
///
/// The frame is one contiguous buffer so it can go out in a single write.
///
/// # Errors
///
/// [`ProtocolError::PayloadTooLarge`] if the length does not fit a `u32`.
pub fn encode_frame(payload: &[u8]) -> ProtocolResult<Vec<u8>> {
    let len = u32::try_from(payload.len()).map_err(|_| ProtocolError::PayloadTooLarge(payload.len()))?;
    let mut frame = Vec::with_capacity(LENGTH_PREFIX_LEN + payload.len());
    frame.extend_from_slice(&len.to_be_bytes());
    frame.extend_from_slice(payload);
    Ok(frame)
}

/// Builds the full response frame for a chunk in one allocation.
///
/// # Errors
///
/// [`ProtocolError::PayloadLength`] unless `voxels` holds exactly one
/// chunk.
pub fn encode_chunk_frame(voxels: &[Material]) -> ProtocolResult<Vec<u8>> {
    let payload_len = voxels.len() * BYTES_PER_VOXEL;
    if payload_len != PAYLOAD_LEN {
        return Err(ProtocolError::chunk_payload(payload_len));
    }
    let mut frame = Vec::with_capacity(FRAME_LEN);
    // PAYLOAD_LEN is 65,536, well inside u32.
    frame.extend_from_slice(&(PAYLOAD_LEN as u32).to_be_bytes());
    append_voxels(&mut frame, voxels);
    Ok(frame)
}

/// Decodes one complete response (prefix and payload) into materials.
///
/// # Errors
///
/// - [`ProtocolError::LengthPrefixMismatch`] if the prefix is missing or
///   disagrees with the bytes after it.
/// - Any error from [`decode_voxels`].
pub fn decode_response(frame: &[u8]) -> ProtocolResult<Vec<Material>> {
    let Some((prefix, payload)) = frame.split_first_chunk::<LENGTH_PREFIX_LEN>() else {
        return Err(ProtocolError::LengthPrefixMismatch {
            declared: 0,
            actual: frame.len(),
        });
    };
    let declared = u32::from_be_bytes(*prefix) as usize;
    if declared != payload.len() {
        return Err(ProtocolError::LengthPrefixMismatch {
            declared,
            actual: payload.len(),
        });
    }
    decode_voxels(payload)
}

/// Incremental response reader for the host side of the pipe.
///
/// Bytes arrive in arbitrary pieces; complete payloads come out in the
/// order they were framed.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buffer: Vec<u8>,
    expected: Option<usize>,
}

impl FrameDecoder {
    /// Creates an empty decoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends received bytes.
    pub fn push(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Pops the next complete payload, if one is fully buffered.
    pub fn next_frame(&mut self) -> Option<Vec<u8>> {
        if self.expected.is_none() {
            let (prefix, _) = self.buffer.split_first_chunk::<LENGTH_PREFIX_LEN>()?;
            self.expected = Some(u32::from_be_bytes(*prefix) as usize);
            self.buffer.drain(..LENGTH_PREFIX_LEN);
        }
        let expected = self.expected?;
        if self.buffer.len() < expected {
            return None;
        }
        self.expected = None;
        let rest = self.buffer.split_off(expected);
        Some(std::mem::replace(&mut self.buffer, rest))
    }

    /// Bytes held that do not yet form a complete frame.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buffer.len() + self.expected.map_or(0, |_| LENGTH_PREFIX_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::VOXELS_PER_CHUNK;

    #[test]
    fn test_request_decode_is_big_endian() {
        let bytes = [
            0, 0, 0, 1, // chunk_x = 1
            0xFF, 0xFF, 0xFF, 0xFE, // chunk_y = -2
            0x00, 0x01, 0x00, 0x00, // chunk_z = 65536
            0x80, 0, 0, 0, // seed = i32::MIN
        ];
        let request = ChunkRequest::decode(&bytes);
        assert_eq!(request, ChunkRequest::new(1, -2, 65_536, i32::MIN));
        assert_eq!(request.encode(), bytes);
        assert_eq!(request.coord(), ChunkCoord::new(1, -2, 65_536));
    }

    #[test]
    fn test_short_request_is_rejected() {
        assert_eq!(
            ChunkRequest::try_from_slice(&[0; 5]),
            Err(ProtocolError::TruncatedRequest { received: 5 })
        );
        assert_eq!(
            ChunkRequest::try_from_slice(&[]),
            Err(ProtocolError::TruncatedRequest { received: 0 })
        );
        let mut long = ChunkRequest::new(7, 8, 9, 10).encode().to_vec();
        long.extend_from_slice(&[0xAA; 3]);
        assert_eq!(
            ChunkRequest::try_from_slice(&long),
            Ok(ChunkRequest::new(7, 8, 9, 10))
        );
    }

    #[test]
    fn test_voxel_encoding_layout() {
        let bytes = encode_voxels(&[Material::Air, Material::Stone, Material::Grass]);
        assert_eq!(bytes, vec![0, 0, 0, 1, 0, 3]);
    }

    #[test]
    fn test_chunk_frame_prefix_and_decode() {
        let mut voxels = vec![Material::Air; VOXELS_PER_CHUNK];
        voxels[0] = Material::Stone;
        voxels[VOXELS_PER_CHUNK - 1] = Material::Grass;

        let frame = encode_chunk_frame(&voxels).unwrap();
        assert_eq!(frame.len(), FRAME_LEN);
        assert_eq!(&frame[..4], &[0x00, 0x01, 0x00, 0x00]);
        assert_eq!(frame, encode_frame(&encode_voxels(&voxels)).unwrap());
        assert_eq!(decode_response(&frame).unwrap(), voxels);
    }

    #[test]
    fn test_chunk_frame_rejects_partial_grid() {
        assert_eq!(
            encode_chunk_frame(&[Material::Air; 10]),
            Err(ProtocolError::chunk_payload(20))
        );
    }

    #[test]
    fn test_decode_rejects_bad_payloads() {
        assert_eq!(
            decode_voxels(&[0; 10]),
            Err(ProtocolError::chunk_payload(10))
        );

        let mut payload = vec![0u8; PAYLOAD_LEN];
        payload[PAYLOAD_LEN - 1] = 9;
        assert_eq!(decode_voxels(&payload), Err(ProtocolError::UnknownMaterial(9)));

        let mut frame = encode_frame(&payload).unwrap();
        frame.pop();
        assert_eq!(
            decode_response(&frame),
            Err(ProtocolError::LengthPrefixMismatch {
                declared: PAYLOAD_LEN,
                actual: PAYLOAD_LEN - 1,
            })
        );
        assert!(matches!(
            decode_response(&[0, 0]),
            Err(ProtocolError::LengthPrefixMismatch { .. })
        ));
    }

    #[test]
    fn test_frame_decoder_reassembles_split_frames() {
        let first = encode_frame(b"hello").unwrap();
        let second = encode_frame(b"terrain!").unwrap();
        let mut stream = first.clone();
        stream.extend_from_slice(&second);

        let mut decoder = FrameDecoder::new();
        let mut frames = Vec::new();
        // Feed one byte at a time to cross every header/payload boundary.
        for byte in &stream {
            decoder.push(std::slice::from_ref(byte));
            while let Some(frame) = decoder.next_frame() {
                frames.push(frame);
            }
        }

        assert_eq!(frames, vec![b"hello".to_vec(), b"terrain!".to_vec()]);
        assert_eq!(decoder.buffered(), 0);
    }

    #[test]
    fn test_frame_decoder_holds_partial_payload() {
        let frame = encode_frame(&[1, 2, 3, 4]).unwrap();
        let mut decoder = FrameDecoder::new();
        decoder.push(&frame[..6]);
        assert_eq!(decoder.next_frame(), None);
        assert_eq!(decoder.buffered(), 6);
        decoder.push(&frame[6..]);
        assert_eq!(decoder.next_frame(), Some(vec![1, 2, 3, 4]));
        assert_eq!(decoder.next_frame(), None);
    }

    #[test]
    fn test_empty_frame() {
        let mut decoder = FrameDecoder::new();
        decoder.push(&encode_frame(&[]).unwrap());
        assert_eq!(decoder.next_frame(), Some(Vec::new()));
    }
}
