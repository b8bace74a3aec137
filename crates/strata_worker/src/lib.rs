//! # STRATA Terrain Worker
//!
//! A standalone process that turns chunk requests into voxel grids.
//!
//! ## Protocol
//!
//! ```text
//! HOST                                   WORKER
//!   |                                       |
//!   |--- 16 bytes: x, y, z, seed (BE) ----->|
//!   |                                       | <- generate 32^3 voxels
//!   |<-- u32 len (BE) + 65536 bytes --------|
//!   |                                       |
//!   |--- close stdin ---------------------->| <- exit 0
//! ```
//!
//! One response per request, in request order. A failed request gets no
//! response and the worker keeps serving; the host owns timeouts and
//! retries.
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use strata_shared::{ChunkRequest, FRAME_LEN};
//! use strata_worker::Worker;
//!
//! let input = ChunkRequest::new(0, 0, 0, 0).encode();
//! let mut worker = Worker::new(Cursor::new(input), Vec::new());
//! let stats = worker.run();
//!
//! assert_eq!(stats.served, 1);
//! let (_, output) = worker.into_parts();
//! assert_eq!(output.len(), FRAME_LEN);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod stats;
pub mod worker;

pub use config::{WorkerConfig, CONFIG_ENV};
pub use error::{WorkerError, WorkerResult};
pub use stats::WorkerStats;
pub use worker::{Iteration, Worker, WorkerState};
