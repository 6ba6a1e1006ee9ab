//! # Generation Archive
//!
//! Optional persistence of generated scenes. An archive failure never
//! invalidates a successful mesh write; callers log and continue.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::shape::Scene;

/// Record of one successful conversion, stored alongside its timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Label of the input the scene was generated from.
    pub source: String,
    /// The generated scene description.
    pub scene: Scene,
    /// When the conversion ran.
    pub created_at: DateTime<Utc>,
}

impl GenerationRecord {
    /// Creates a record with the current timestamp.
    pub fn new(source: impl Into<String>, scene: Scene) -> Self {
        Self {
            source: source.into(),
            scene,
            created_at: Utc::now(),
        }
    }
}

/// A collaborator that persists generation records.
pub trait SceneArchive {
    /// Persists the record, returning where it was stored.
    fn record(&self, record: &GenerationRecord) -> Result<PathBuf, SceneError>;
}

/// Archive writing one pretty-printed JSON file per record into a directory.
///
/// Filenames derive from the record timestamp, e.g.
/// `generation-20260805T143205123.json`.
#[derive(Debug, Clone)]
pub struct DirectoryArchive {
    dir: PathBuf,
}

impl DirectoryArchive {
    /// Creates an archive rooted at the given directory. The directory is
    /// created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SceneArchive for DirectoryArchive {
    fn record(&self, record: &GenerationRecord) -> Result<PathBuf, SceneError> {
        fs::create_dir_all(&self.dir).map_err(|source| SceneError::Archive {
            path: self.dir.clone(),
            source,
        })?;

        let filename = format!(
            "generation-{}.json",
            record.created_at.format("%Y%m%dT%H%M%S%3f")
        );
        let path = self.dir.join(filename);
        let json = serde_json::to_string_pretty(record)
            .expect("generation record serialization should never fail");
        fs::write(&path, json).map_err(|source| SceneError::Archive {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Shape, ShapeKind};
    use glam::Vec3;

    fn sample_scene() -> Scene {
        Scene {
            shapes: vec![Shape {
                kind: ShapeKind::Cone,
                position: Vec3::ZERO,
                rotation: Vec3::ZERO,
                dimensions: Vec3::new(4.0, 8.0, 4.0),
            }],
        }
    }

    #[test]
    fn test_record_written_and_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let archive = DirectoryArchive::new(dir.path());
        let record = GenerationRecord::new("input.json", sample_scene());

        let path = archive.record(&record).unwrap();
        assert!(path.exists());

        let json = fs::read_to_string(&path).unwrap();
        let parsed: GenerationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.source, "input.json");
        assert_eq!(parsed.scene, record.scene);
    }

    #[test]
    fn test_archive_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("records").join("2026");
        let archive = DirectoryArchive::new(&nested);
        let record = GenerationRecord::new("input.json", Scene::default());

        assert!(archive.record(&record).is_ok());
        assert!(nested.exists());
    }

    #[test]
    fn test_archive_failure_is_descriptive() {
        let file = tempfile::NamedTempFile::new().unwrap();
        // A file where the archive expects a directory.
        let archive = DirectoryArchive::new(file.path());
        let record = GenerationRecord::new("input.json", Scene::default());

        assert!(matches!(
            archive.record(&record),
            Err(SceneError::Archive { .. })
        ));
    }
}
