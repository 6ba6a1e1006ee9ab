//! # Sceneforge CLI
//!
//! Converts a JSON scene description into a binary STL mesh.
//!
//! ```text
//! sceneforge scene.json model.stl [--resolution N] [--archive-dir DIR]
//! ```

mod pipeline;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::constants::DEFAULT_RESOLUTION;

use crate::pipeline::ConversionRequest;

/// Convert a JSON scene description into a binary STL mesh.
#[derive(Parser)]
#[command(name = "sceneforge")]
#[command(about = "Convert a JSON scene description into a binary STL mesh")]
#[command(version)]
struct Cli {
    /// Path to the scene description JSON.
    scene: PathBuf,

    /// Destination path for the binary STL file.
    output: PathBuf,

    /// Segment/stack count for curved shapes.
    #[arg(long, default_value_t = DEFAULT_RESOLUTION)]
    resolution: u32,

    /// Directory to archive generation records into.
    #[arg(long)]
    archive_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    pipeline::run(&ConversionRequest {
        scene_path: cli.scene,
        output_path: cli.output,
        resolution: cli.resolution,
        archive_dir: cli.archive_dir,
    })
}
