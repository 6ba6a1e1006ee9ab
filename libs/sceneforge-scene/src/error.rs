//! # Scene Errors
//!
//! Error types for scene acquisition and archiving.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while acquiring or archiving a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene description could not be read from its source.
    #[error("failed to read scene description from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scene description is not valid JSON or does not match the schema.
    #[error("failed to parse scene description: {0}")]
    Parse(#[from] serde_json::Error),

    /// A generation record could not be written to the archive.
    #[error("failed to archive generation record to {path}")]
    Archive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
