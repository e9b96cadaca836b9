//! Configuration for AqlStore
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{AqlError, Result};

/// Main configuration for a PersonStore instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding the store file
    ///   {data_dir}/
    ///     └── people.aql     (header + record blocks)
    pub data_dir: PathBuf,

    /// File name of the store inside `data_dir`
    pub file_name: String,

    /// Entity tag written into the header
    pub entity: String,

    // -------------------------------------------------------------------------
    // Format Configuration
    // -------------------------------------------------------------------------
    /// How blocks with a non-positive id are treated on read
    pub decode_mode: DecodeMode,

    // -------------------------------------------------------------------------
    // Durability Configuration
    // -------------------------------------------------------------------------
    /// fsync after every append and rewrite
    pub sync_writes: bool,
}

/// Policy for record blocks that parse but carry an invalid id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Skip the block and keep going
    #[default]
    Lenient,

    /// Fail the whole read with `AqlError::InvalidRecord`
    Strict,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./AqlData"),
            file_name: "people.aql".to_string(),
            entity: "person".to_string(),
            decode_mode: DecodeMode::Lenient,
            sync_writes: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the store file
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    /// Reject configurations that cannot name a single file
    pub fn validate(&self) -> Result<()> {
        if self.file_name.is_empty() {
            return Err(AqlError::Config("file name must not be empty".to_string()));
        }
        if self.file_name.contains(['/', '\\']) {
            return Err(AqlError::Config(format!(
                "file name must not contain a path separator: {}",
                self.file_name
            )));
        }
        if self.entity.trim().is_empty() {
            return Err(AqlError::Config("entity tag must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the store file name
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.config.file_name = name.into();
        self
    }

    /// Set the entity tag used in the header
    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.config.entity = entity.into();
        self
    }

    /// Set the decode mode
    pub fn decode_mode(mut self, mode: DecodeMode) -> Self {
        self.config.decode_mode = mode;
        self
    }

    /// Enable or disable fsync after writes
    pub fn sync_writes(mut self, sync: bool) -> Self {
        self.config.sync_writes = sync;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
