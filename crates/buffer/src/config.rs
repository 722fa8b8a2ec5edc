// Chunk: docs/chunks/buffer_config - Tab stop and read chunk configuration
//!
//! Buffer configuration.
//!
//! Only behaviour that users reasonably tune lives here: the tab stop width
//! and the read chunk size used when loading files. Allocation constants are
//! fixed in [`line`](crate::line) and [`document`](crate::document).
//!
//! ## File Location
//!
//! The config file is `buffer.json` under the platform config directory:
//! - Linux: `~/.config/plain-edit/buffer.json`
//! - macOS: `~/Library/Application Support/plain-edit/buffer.json`
//!
//! Every field is optional; missing fields take their defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default columns between tab stops.
pub const TAB_STOP: usize = 4;

/// Default number of bytes read per chunk when loading a file.
pub const READ_CHUNK_SIZE: usize = 4096;

/// Application name used for the config directory.
const APP_NAME: &str = "plain-edit";

/// Config file name.
const CONFIG_FILENAME: &str = "buffer.json";

/// Tunable buffer behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Columns between tab stops. Used by `tab`, indentation on split, and
    /// leading-whitespace backspace.
    pub tab_stop: usize,
    /// Bytes read per chunk when loading. Independent of line capacity.
    pub read_chunk_size: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            tab_stop: TAB_STOP,
            read_chunk_size: READ_CHUNK_SIZE,
        }
    }
}

impl BufferConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: BufferConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Loads the config from the platform config directory.
    ///
    /// Falls back to defaults when there is no config directory or no file.
    /// A file that exists but cannot be read or parsed is logged and ignored.
    pub fn load_or_default() -> Self {
        let Some(path) = config_file_path() else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), ?config, "loaded buffer config");
                config
            }
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Self::default()
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring invalid buffer config");
                Self::default()
            }
        }
    }

    /// Rejects values that would make editing operations ill-defined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_stop == 0 {
            return Err(ConfigError::Invalid("tab_stop must be at least 1".into()));
        }
        if self.read_chunk_size == 0 {
            return Err(ConfigError::Invalid(
                "read_chunk_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Returns the path to the config file, or `None` if the platform has no
/// config directory.
pub fn config_file_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join(APP_NAME).join(CONFIG_FILENAME))
}
