//! CLI configuration.
//!
//! Layered, lowest precedence first:
//!
//! 1. Built-in defaults ([`CliConfig::default`])
//! 2. A TOML file (`variate.toml` unless `--config` names another)
//! 3. Environment variables prefixed `VARIATE_`, e.g. `VARIATE_SAMPLES=5000`
//! 4. Command-line flags, applied by the commands themselves

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;
use variate_core::batch::{BatchConfig, DEFAULT_CHUNK_SIZE, DEFAULT_PARALLEL_THRESHOLD};

/// Configuration file looked up when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "variate.toml";

/// Largest supported export precision; `f64` carries at most 17
/// significant decimal digits.
pub const MAX_PRECISION: usize = 17;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid sample count: {0}. Must be at least 1")]
    InvalidSamples(usize),

    #[error("Invalid precision: {0}. Must be at most {max}", max = MAX_PRECISION)]
    InvalidPrecision(usize),

    #[error("Invalid chunk size: must be at least 1")]
    InvalidChunkSize,

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Configuration error: {0}")]
    Source(#[from] config::ConfigError),
}

/// Settings shared by the CLI commands.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Fixed seed; a fresh one is drawn (and logged) when absent.
    pub seed: Option<u64>,
    /// Number of variates per `generate` run.
    pub samples: usize,
    /// Digits after the decimal point in exported values.
    pub precision: usize,
    /// Directory for exports without an explicit `--output`.
    pub output_dir: PathBuf,
    /// Variates per independently seeded chunk.
    pub chunk_size: usize,
    /// Minimum sample count before chunks run in parallel.
    pub parallel_threshold: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            samples: 1000,
            precision: 3,
            output_dir: PathBuf::from("."),
            chunk_size: DEFAULT_CHUNK_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `path` (or the default file) and the
    /// environment, then validates it.
    ///
    /// The default file may be absent; an explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (file, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };
        if required && !file.exists() {
            return Err(ConfigError::FileNotFound(file.display().to_string()));
        }

        let settings = Config::builder()
            .add_source(File::new(&file.to_string_lossy(), FileFormat::Toml).required(required))
            .add_source(Environment::with_prefix("VARIATE").try_parsing(true))
            .build()?;

        let config: CliConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `samples` is 0
    /// - `precision` exceeds [`MAX_PRECISION`]
    /// - `chunk_size` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.samples == 0 {
            return Err(ConfigError::InvalidSamples(self.samples));
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize);
        }
        Ok(())
    }

    /// Chunking settings for parallel generation.
    pub fn batch_config(&self) -> BatchConfig {
        BatchConfig::new(self.chunk_size, self.parallel_threshold)
    }
}
