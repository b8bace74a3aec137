//! Counters for one worker session.

use std::time::Duration;

/// What the worker did since it started.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkerStats {
    /// Responses written in full.
    pub served: u64,
    /// Iterations that ended in an error.
    pub failed: u64,
    /// Bytes written to the response stream.
    pub bytes_written: u64,
    /// Time spent generating grids for served chunks.
    pub generation_time: Duration,
}

impl WorkerStats {
    /// Records one served response.
    pub fn record_served(&mut self, bytes: usize, generation: Duration) {
        self.served += 1;
        self.bytes_written += bytes as u64;
        self.generation_time += generation;
    }

    /// Records one failed iteration.
    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// Mean generation time per served chunk.
    #[must_use]
    pub fn average_generation(&self) -> Duration {
        match u32::try_from(self.served) {
            Ok(0) => Duration::ZERO,
            Ok(served) => self.generation_time / served,
            Err(_) => Duration::from_secs_f64(self.generation_time.as_secs_f64() / self.served as f64),
        }
    }
}
