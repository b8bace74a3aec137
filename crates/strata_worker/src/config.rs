//! # Worker Configuration
//!
//! Runtime knobs, loaded once at startup from an optional TOML file.
//! Nothing here affects the bytes of a response.
//!
//! ```toml
//! stats_interval = 1024
//! flush_each_response = true
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{WorkerError, WorkerResult};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "STRATA_WORKER_CONFIG";

/// Worker configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkerConfig {
    /// Log a stats line every this many served chunks. 0 disables it.
    pub stats_interval: u64,
    /// Flush after every response.
    ///
    /// The host waits on each response, so this must stay on when
    /// talking to a live host. Off only for batch runs into a file.
    pub flush_each_response: bool,
}

impl WorkerConfig {
    /// Default periodic stats interval.
    pub const DEFAULT_STATS_INTERVAL: u64 = 256;

    /// Parses a TOML document. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// [`WorkerError::Config`] on malformed TOML or unknown keys.
    pub fn from_toml_str(source: &str) -> WorkerResult<Self> {
        toml::from_str(source).map_err(|e| WorkerError::Config(e.to_string()))
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// [`WorkerError::Config`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> WorkerResult<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| WorkerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
            .map_err(|e| WorkerError::Config(format!("{}: {e}", path.display())))
    }

    /// Loads the file named by [`CONFIG_ENV`], or defaults when unset.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_env() -> WorkerResult<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            stats_interval: Self::DEFAULT_STATS_INTERVAL,
            flush_each_response: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(WorkerConfig::from_toml_str("").unwrap(), WorkerConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = WorkerConfig::from_toml_str("stats_interval = 0").unwrap();
        assert_eq!(config.stats_interval, 0);
        assert!(config.flush_each_response);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = WorkerConfig::from_toml_str("chunk_side = 16").unwrap_err();
        assert!(matches!(err, WorkerError::Config(_)), "got {err:?}");
    }

    #[test]
    fn test_missing_file_names_path() {
        let path = std::env::temp_dir().join("strata_worker_missing_config.toml");
        let err = WorkerConfig::load(&path).unwrap_err();
        match err {
            WorkerError::Config(message) => {
                assert!(message.contains("strata_worker_missing_config.toml"), "{message}");
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("strata_worker_test_config.toml");
        std::fs::write(&path, "stats_interval = 8\nflush_each_response = false\n").unwrap();

        let config = WorkerConfig::load(&path).unwrap();
        assert_eq!(
            config,
            WorkerConfig {
                stats_interval: 8,
                flush_each_response: false,
            }
        );

        std::fs::remove_file(&path).ok();
    }
}
