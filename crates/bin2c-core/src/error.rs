//! Error types for the bin2c-core library.
//!
//! This module provides error handling using the `thiserror` crate,
//! with dedicated variants for validation and I/O failure modes.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bin2c operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all bin2c operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Element width outside the supported set {1, 2, 4}
    #[error("invalid element width {width}: must be 1, 2 or 4 bytes")]
    InvalidWidth {
        /// The rejected width value
        width: u32,
    },

    /// Failed to read input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        /// Path to the file that failed to write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Write to a caller-provided sink failed
    #[error("failed to write literal: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new invalid width error
    pub fn invalid_width(width: u32) -> Self {
        Self::InvalidWidth { width }
    }

    /// Creates a new file read error
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new file write error
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }
}
