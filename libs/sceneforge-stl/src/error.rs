//! # STL Errors
//!
//! Error types for mesh serialization.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing STL output.
///
/// Any failure aborts the whole write; a partially written file is not
/// valid output.
#[derive(Debug, Error)]
pub enum StlError {
    /// The destination file could not be created.
    #[error("failed to create {path}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The underlying stream rejected a write.
    #[error("I/O error while writing mesh: {0}")]
    Io(#[from] io::Error),
}
