// Chunk: docs/chunks/buffer_errors - Typed load/save/config errors

//! Error types for the buffer crate.
//!
//! Only I/O and configuration failures are recoverable. Allocation failure
//! while growing a line or the line array is fatal: see [`abort_on_alloc_failure`].

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from loading or saving a document at a path.
#[derive(Debug, Error)]
pub enum FileError {
    /// The file could not be opened (load) or created (save).
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Reading failed after the file was opened.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing or flushing failed. The file may have been left truncated.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Returns the path the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            FileError::Open { path, .. }
            | FileError::Read { path, .. }
            | FileError::Write { path, .. } => path.as_path(),
        }
    }
}

/// Errors from loading a [`BufferConfig`](crate::BufferConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Reports a failed growth step and terminates the process.
///
/// A half-grown line or line array cannot be left behind, so there is no
/// recovery path.
#[cold]
pub(crate) fn abort_on_alloc_failure(what: &'static str, requested: usize, err: impl fmt::Display) -> ! {
    tracing::error!(what, requested, error = %err, "allocation failed while growing buffer");
    eprintln!("fatal: failed to grow {what} by {requested}: {err}");
    std::process::abort()
}
