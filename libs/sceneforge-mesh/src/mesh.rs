//! # Mesh Data Structure
//!
//! A named triangle soup. Unlike an indexed mesh there is no vertex sharing:
//! every triangle owns its three vertices, which matches the layout the
//! binary STL writer consumes.

use glam::Vec3;

use crate::triangle::Triangle;

/// Triangle soup produced by the assembler and consumed once by the writer.
///
/// Triangle order is not a correctness requirement across shapes, but the
/// assembler keeps it stable for reproducible output.
///
/// # Example
///
/// ```rust
/// use sceneforge_mesh::Mesh;
///
/// let mesh = Mesh::new("empty");
/// assert!(mesh.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    name: String,
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh from an already-collected triangle list.
    pub fn from_triangles(name: impl Into<String>, triangles: Vec<Triangle>) -> Self {
        Self {
            name: name.into(),
            triangles,
        }
    }

    /// Returns the mesh name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Appends a triangle.
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Computes the axis-aligned bounding box over all vertices.
    ///
    /// Returns (min, max); an empty mesh yields (ZERO, ZERO).
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let mut vertices = self
            .triangles
            .iter()
            .flat_map(|t| [t.v1, t.v2, t.v3]);

        let Some(first) = vertices.next() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        vertices.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
    }
}
