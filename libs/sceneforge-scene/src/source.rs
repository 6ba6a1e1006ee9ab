//! # Scene Acquisition
//!
//! The boundary through which the pipeline obtains a scene description.
//! The core treats acquisition as a black box that either supplies a
//! [`Scene`] value or fails with a descriptive error before any geometry
//! work begins.

use std::fs;
use std::path::PathBuf;

use crate::error::SceneError;
use crate::shape::Scene;

/// A collaborator that produces a scene description.
pub trait SceneSource {
    /// Acquires the scene, or fails with a descriptive error.
    fn acquire(&self) -> Result<Scene, SceneError>;
}

/// Parses a scene from its JSON form.
///
/// Unknown shape type tags are tolerated and map to
/// [`ShapeKind::Unknown`](crate::ShapeKind::Unknown); structurally malformed
/// input is an error.
///
/// # Example
///
/// ```rust
/// use sceneforge_scene::parse_scene;
///
/// let scene = parse_scene(r#"{"shapes":[]}"#).unwrap();
/// assert!(scene.is_empty());
/// ```
pub fn parse_scene(json: &str) -> Result<Scene, SceneError> {
    Ok(serde_json::from_str(json)?)
}

/// Scene source backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading from the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SceneSource for JsonFileSource {
    fn acquire(&self) -> Result<Scene, SceneError> {
        let json = fs::read_to_string(&self.path).map_err(|source| SceneError::Read {
            path: self.path.clone(),
            source,
        })?;
        parse_scene(&json)
    }
}
