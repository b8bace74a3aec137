//! # Chunk Worker Loop
//!
//! Read a request, generate the chunk, write one framed response.
//!
//! ## State Machine
//!
//! ```text
//!            ┌──────────── response written / iteration failed ───────────┐
//!            ▼                                                            │
//!   ┌──────────────────┐   16 bytes read    ┌────────────┐                │
//!   │ AwaitingRequest  │ ─────────────────► │ Processing │ ───────────────┘
//!   └──────────────────┘                    └────────────┘
//!            │
//!            │ end of input (0 bytes, or a short trailing fragment)
//!            ▼
//!   ┌──────────────────┐
//!   │     ShutDown     │
//!   └──────────────────┘
//! ```
//!
//! Every iteration ends in an [`Iteration`]. Only end of input is
//! terminal; failures are logged and the loop moves on.

use std::io::{ErrorKind, Read, Write};
use std::time::{Duration, Instant};

use strata_procedural::ChunkGenerator;
use strata_shared::constants::REQUEST_LEN;
use strata_shared::{ChunkCoord, ChunkRequest};

use crate::config::WorkerConfig;
use crate::error::{WorkerError, WorkerResult};
use crate::stats::WorkerStats;

/// Where the worker is in its read/compute/write cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkerState {
    /// Blocked on the next request.
    AwaitingRequest,
    /// Generating and writing a response.
    Processing,
    /// Input is exhausted. Terminal.
    ShutDown,
}

/// Outcome of one iteration.
#[derive(Debug)]
pub enum Iteration {
    /// A complete response was written.
    Served {
        /// The chunk that was generated.
        coord: ChunkCoord,
        /// Frame size, prefix included.
        bytes: usize,
    },
    /// The iteration failed; no response was sent for it.
    Failed(WorkerError),
    /// Input closed on a request boundary.
    EndOfStream,
    /// Input closed partway through a request.
    Truncated {
        /// Bytes of the incomplete request.
        received: usize,
    },
}

impl Iteration {
    /// True when the loop must stop.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::EndOfStream | Self::Truncated { .. })
    }
}

enum ReadOutcome {
    Request(ChunkRequest),
    EndOfStream,
    Truncated(usize),
}

/// Blocks until 16 bytes are read or the input ends.
fn read_request<R: Read>(input: &mut R) -> std::io::Result<ReadOutcome> {
    let mut buf = [0u8; REQUEST_LEN];
    let mut filled = 0;
    while filled < REQUEST_LEN {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(match filled {
        0 => ReadOutcome::EndOfStream,
        REQUEST_LEN => ReadOutcome::Request(ChunkRequest::decode(&buf)),
        received => ReadOutcome::Truncated(received),
    })
}

/// The chunk worker, generic over its byte streams.
pub struct Worker<R, W> {
    input: R,
    output: W,
    config: WorkerConfig,
    stats: WorkerStats,
    state: WorkerState,
}

impl<R: Read, W: Write> Worker<R, W> {
    /// Creates a worker with the default configuration.
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, WorkerConfig::default())
    }

    /// Creates a worker with the given configuration.
    pub fn with_config(input: R, output: W, config: WorkerConfig) -> Self {
        Self {
            input,
            output,
            config,
            stats: WorkerStats::default(),
            state: WorkerState::AwaitingRequest,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> WorkerState {
        self.state
    }

    /// Counters so far.
    #[must_use]
    pub const fn stats(&self) -> &WorkerStats {
        &self.stats
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// Releases the streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Runs one read -> generate -> write cycle.
    ///
    /// Once shut down, every further call returns [`Iteration::EndOfStream`]
    /// without touching the input.
    pub fn step(&mut self) -> Iteration {
        if self.state == WorkerState::ShutDown {
            return Iteration::EndOfStream;
        }

        self.state = WorkerState::AwaitingRequest;
        let request = match read_request(&mut self.input) {
            Ok(ReadOutcome::Request(request)) => request,
            Ok(ReadOutcome::EndOfStream) => {
                self.state = WorkerState::ShutDown;
                return Iteration::EndOfStream;
            }
            Ok(ReadOutcome::Truncated(received)) => {
                self.state = WorkerState::ShutDown;
                return Iteration::Truncated { received };
            }
            Err(e) => {
                self.stats.record_failure();
                return Iteration::Failed(e.into());
            }
        };

        self.state = WorkerState::Processing;
        let iteration = match self.serve(&request) {
            Ok((bytes, generation)) => {
                self.stats.record_served(bytes, generation);
                Iteration::Served {
                    coord: request.coord(),
                    bytes,
                }
            }
            Err(e) => {
                self.stats.record_failure();
                Iteration::Failed(e)
            }
        };
        self.state = WorkerState::AwaitingRequest;
        iteration
    }

    /// Generates and writes the response for one request.
    fn serve(&mut self, request: &ChunkRequest) -> WorkerResult<(usize, Duration)> {
        let generator = ChunkGenerator::for_request(request);

        let started = Instant::now();
        let grid = generator.generate(request.coord());
        let generation = started.elapsed();

        // Whole frame is built before the first byte goes out.
        let frame = grid.to_frame()?;
        self.output.write_all(&frame)?;
        if self.config.flush_each_response {
            self.output.flush()?;
        }
        Ok((frame.len(), generation))
    }

    /// Serves requests until the input ends.
    ///
    /// Failed iterations are logged and skipped. Returns the final counters.
    pub fn run(&mut self) -> WorkerStats {
        loop {
            let iteration = self.step();
            match &iteration {
                Iteration::Served { coord, bytes } => {
                    tracing::debug!(
                        chunk_x = coord.x,
                        chunk_y = coord.y,
                        chunk_z = coord.z,
                        bytes = *bytes,
                        "chunk served"
                    );
                    self.log_periodic_stats();
                }
                Iteration::Failed(err) => {
                    tracing::error!(error = %err, "request failed, no response sent");
                }
                Iteration::EndOfStream => {
                    tracing::debug!("input closed");
                }
                Iteration::Truncated { received } => {
                    tracing::warn!(
                        received = *received,
                        expected = REQUEST_LEN,
                        "input closed inside a request, discarding fragment"
                    );
                }
            }
            if iteration.is_terminal() {
                break;
            }
        }

        if let Err(e) = self.output.flush() {
            tracing::warn!(error = %e, "final flush failed");
        }

        tracing::info!(
            served = self.stats.served,
            failed = self.stats.failed,
            bytes_written = self.stats.bytes_written,
            avg_generation_us = self.stats.average_generation().as_micros() as u64,
            "worker shut down"
        );
        self.stats.clone()
    }

    fn log_periodic_stats(&self) {
        let interval = self.config.stats_interval;
        if interval == 0 || self.stats.served % interval != 0 {
            return;
        }
        tracing::info!(
            served = self.stats.served,
            failed = self.stats.failed,
            avg_generation_us = self.stats.average_generation().as_micros() as u64,
            "worker stats"
        );
    }
}
