//! # Conversion Pipeline
//!
//! Wires the collaborators together for one conversion run. Fatal errors
//! (malformed scene, invalid configuration, write failure) abort the run;
//! archive failures are logged and absorbed because the primary deliverable
//! already exists by then.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use config::constants::PipelineConfig;
use sceneforge_mesh::build_mesh;
use sceneforge_scene::{
    DirectoryArchive, GenerationRecord, JsonFileSource, SceneArchive, SceneSource,
};
use sceneforge_stl::save_stl;

/// Inputs for one conversion run.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Path to the scene description JSON.
    pub scene_path: PathBuf,
    /// Destination path for the binary STL file.
    pub output_path: PathBuf,
    /// Segment/stack count for curved shapes.
    pub resolution: u32,
    /// Directory to archive generation records into, if any.
    pub archive_dir: Option<PathBuf>,
}

/// Runs the full conversion: acquire → assemble → write → archive.
pub fn run(request: &ConversionRequest) -> Result<()> {
    let config = PipelineConfig::new(request.resolution)
        .context("invalid resolution for curved shape tessellation")?;

    let scene = JsonFileSource::new(&request.scene_path)
        .acquire()
        .context("failed to acquire scene description")?;
    info!(shapes = scene.shape_count(), "acquired scene description");

    let mesh = build_mesh(&scene, config.resolution);
    info!(triangles = mesh.triangle_count(), "generated mesh from scene");

    save_stl(&request.output_path, &mesh).with_context(|| {
        format!("failed to save STL file to {}", request.output_path.display())
    })?;
    info!(path = %request.output_path.display(), "saved STL file");

    if let Some(dir) = &request.archive_dir {
        let record = GenerationRecord::new(request.scene_path.display().to_string(), scene);
        match DirectoryArchive::new(dir).record(&record) {
            Ok(path) => info!(path = %path.display(), "archived generation record"),
            // The mesh file already exists; archiving is best-effort.
            Err(error) => warn!(%error, "failed to archive generation record"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_scene(dir: &Path, json: &str) -> PathBuf {
        let path = dir.join("scene.json");
        fs::write(&path, json).unwrap();
        path
    }

    fn request(scene_path: PathBuf, dir: &Path) -> ConversionRequest {
        ConversionRequest {
            scene_path,
            output_path: dir.join("out.stl"),
            resolution: 32,
            archive_dir: None,
        }
    }

    #[test]
    fn test_single_box_scene_produces_684_byte_file() {
        let dir = tempfile::tempdir().unwrap();
        let scene_path = write_scene(
            dir.path(),
            r#"{"shapes":[{"type":"box","position":[0,0,0],"rotation":[0,0,0],"dimensions":[10,10,10]}]}"#,
        );
        let request = request(scene_path, dir.path());

        run(&request).unwrap();

        let bytes = fs::read(&request.output_path).unwrap();
        assert_eq!(bytes.len(), 684);

        // 12 triangles in the count field.
        let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]);
        assert_eq!(count, 12);

        // Every vertex coordinate magnitude stays within the half-extents.
        for record in bytes[84..].chunks(50) {
            for coord in record[12..48].chunks(4) {
                let value = f32::from_le_bytes([coord[0], coord[1], coord[2], coord[3]]);
                assert!(value.abs() <= 5.0);
            }
        }
    }

    #[test]
    fn test_empty_scene_produces_84_byte_file() {
        let dir = tempfile::tempdir().unwrap();
        let scene_path = write_scene(dir.path(), r#"{"shapes":[]}"#);
        let request = request(scene_path, dir.path());

        run(&request).unwrap();

        assert_eq!(fs::metadata(&request.output_path).unwrap().len(), 84);
    }

    #[test]
    fn test_unrecognized_type_does_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        let scene_path = write_scene(
            dir.path(),
            r#"{"shapes":[{"type":"teapot","position":[0,0,0],"rotation":[0,0,0],"dimensions":[1,1,1]}]}"#,
        );
        let request = request(scene_path, dir.path());

        run(&request).unwrap();

        // Zero triangles, header and count only.
        assert_eq!(fs::metadata(&request.output_path).unwrap().len(), 84);
    }

    #[test]
    fn test_malformed_scene_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let scene_path = write_scene(dir.path(), "not json");
        let request = request(scene_path, dir.path());

        assert!(run(&request).is_err());
        assert!(!request.output_path.exists());
    }

    #[test]
    fn test_degenerate_resolution_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let scene_path = write_scene(dir.path(), r#"{"shapes":[]}"#);
        let mut request = request(scene_path, dir.path());
        request.resolution = 2;

        assert!(run(&request).is_err());
    }

    #[test]
    fn test_archive_record_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let scene_path = write_scene(dir.path(), r#"{"shapes":[]}"#);
        let mut request = request(scene_path, dir.path());
        request.archive_dir = Some(dir.path().join("records"));

        run(&request).unwrap();

        let records: Vec<_> = fs::read_dir(dir.path().join("records"))
            .unwrap()
            .collect();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_archive_failure_does_not_fail_conversion() {
        let dir = tempfile::tempdir().unwrap();
        let scene_path = write_scene(dir.path(), r#"{"shapes":[]}"#);
        let mut request = request(scene_path.clone(), dir.path());
        // A file where the archive expects a directory.
        request.archive_dir = Some(scene_path);

        run(&request).unwrap();
        assert!(request.output_path.exists());
    }
}
