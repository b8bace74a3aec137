//! # Terrain Worker
//!
//! Serves chunk requests from stdin and writes framed responses to stdout
//! until stdin closes.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=debug STRATA_WORKER_CONFIG=worker.toml terrain_worker
//! ```
//!
//! Logs go to stderr. stdout carries responses and nothing else.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use strata_shared::FRAME_LEN;
use strata_worker::{Worker, WorkerConfig};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match WorkerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "failed to load worker configuration");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        stats_interval = config.stats_interval,
        flush_each_response = config.flush_each_response,
        "terrain worker started"
    );

    let input = io::stdin().lock();
    let output = BufWriter::with_capacity(FRAME_LEN, io::stdout().lock());
    let mut worker = Worker::with_config(input, output, config);
    worker.run();

    ExitCode::SUCCESS
}
