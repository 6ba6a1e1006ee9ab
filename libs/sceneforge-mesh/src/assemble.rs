//! # Mesh Assembly
//!
//! Fans tessellation work out over the shapes in a scene and collects the
//! triangles into one mesh.

use rayon::prelude::*;
use tracing::{info, warn};

use sceneforge_scene::{Scene, Shape, ShapeKind};

use crate::mesh::Mesh;
use crate::primitives::{create_box, create_cone, create_cylinder, create_sphere};
use crate::transform::Transform;
use crate::triangle::Triangle;

/// Builds the mesh for a whole scene.
///
/// Tessellation of distinct shapes is embarrassingly parallel: each shape
/// reads only its own value and the shared resolution, so the work is a
/// parallel map with the final collect as the sole synchronization point.
/// The resulting triangle order is stable for reproducible output, though
/// no consumer depends on it across shapes.
///
/// An empty scene, or one whose shapes all resolve to zero triangles,
/// yields a valid empty mesh.
pub fn build_mesh(scene: &Scene, resolution: u32) -> Mesh {
    let triangles: Vec<Triangle> = scene
        .shapes
        .par_iter()
        .flat_map_iter(|shape| tessellate_shape(shape, resolution))
        .collect();

    Mesh::from_triangles("GeneratedScene", triangles)
}

/// Dispatches a single shape to its tessellator.
///
/// Unknown kinds are skipped with a warning and contribute zero triangles;
/// the conversion continues.
pub fn tessellate_shape(shape: &Shape, resolution: u32) -> Vec<Triangle> {
    let transform = Transform::new(shape.position, shape.rotation);

    match shape.kind {
        ShapeKind::Box => {
            info!(dims = ?shape.dimensions, pos = ?shape.position, rot = ?shape.rotation, "generating box");
            create_box(shape.dimensions, &transform)
        }
        ShapeKind::Cylinder => {
            info!(dims = ?shape.dimensions, pos = ?shape.position, rot = ?shape.rotation, "generating cylinder");
            create_cylinder(shape.dimensions, &transform, resolution)
        }
        ShapeKind::Sphere => {
            info!(dims = ?shape.dimensions, pos = ?shape.position, rot = ?shape.rotation, "generating sphere");
            create_sphere(shape.dimensions, &transform, resolution, resolution)
        }
        ShapeKind::Cone => {
            info!(dims = ?shape.dimensions, pos = ?shape.position, rot = ?shape.rotation, "generating cone");
            create_cone(shape.dimensions, &transform, resolution)
        }
        ShapeKind::Unknown => {
            warn!("unknown shape type, skipping");
            Vec::new()
        }
    }
}
