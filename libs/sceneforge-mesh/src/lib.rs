//! # Sceneforge Mesh
//!
//! Converts a [`Scene`](sceneforge_scene::Scene) into a triangle soup ready
//! for serialization.
//!
//! ## Architecture
//!
//! ```text
//! sceneforge-scene (Scene) → sceneforge-mesh (Mesh) → sceneforge-stl
//! ```
//!
//! Each primitive tessellator builds vertices in a local frame centered at
//! the origin and maps every vertex through the shape's rigid [`Transform`].
//! The assembler fans tessellation out over the shapes in parallel and
//! collects the triangles into one [`Mesh`].
//!
//! ## Example
//!
//! ```rust
//! use sceneforge_mesh::build_mesh;
//! use sceneforge_scene::parse_scene;
//!
//! let scene = parse_scene(
//!     r#"{"shapes":[{"type":"box","position":[0,0,0],"rotation":[0,0,0],"dimensions":[10,10,10]}]}"#,
//! )
//! .unwrap();
//! let mesh = build_mesh(&scene, 32);
//! assert_eq!(mesh.triangle_count(), 12);
//! ```

pub mod assemble;
pub mod mesh;
pub mod primitives;
pub mod transform;
pub mod triangle;

pub use assemble::{build_mesh, tessellate_shape};
pub use mesh::Mesh;
pub use transform::Transform;
pub use triangle::Triangle;
