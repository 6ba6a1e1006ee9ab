//! # Box Primitive
//!
//! Generates the triangle soup for a rectangular prism.

use glam::Vec3;

use crate::transform::Transform;
use crate::triangle::Triangle;

/// Triangle corner indices, two per face, wound so each face's normal
/// points away from the box center.
const FACES: [[usize; 3]; 12] = [
    // z = -depth/2
    [0, 2, 1],
    [0, 3, 2],
    // z = +depth/2
    [4, 5, 6],
    [4, 6, 7],
    // x = -width/2
    [0, 4, 7],
    [0, 7, 3],
    // x = +width/2
    [1, 6, 5],
    [1, 2, 6],
    // y = -height/2
    [0, 5, 4],
    [0, 1, 5],
    // y = +height/2
    [3, 7, 6],
    [3, 6, 2],
];

/// Creates the 12 triangles of a box with the given width/height/depth
/// dimensions, placed by `transform`.
///
/// The triangle count is an invariant: every box yields exactly 12
/// triangles regardless of dimensions.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use sceneforge_mesh::primitives::create_box;
/// use sceneforge_mesh::Transform;
///
/// let transform = Transform::new(Vec3::ZERO, Vec3::ZERO);
/// let triangles = create_box(Vec3::splat(10.0), &transform);
/// assert_eq!(triangles.len(), 12);
/// ```
pub fn create_box(dimensions: Vec3, transform: &Transform) -> Vec<Triangle> {
    let half = dimensions / 2.0;

    // 8 corners around the origin.
    let corners = [
        Vec3::new(-half.x, -half.y, -half.z),
        Vec3::new(half.x, -half.y, -half.z),
        Vec3::new(half.x, half.y, -half.z),
        Vec3::new(-half.x, half.y, -half.z),
        Vec3::new(-half.x, -half.y, half.z),
        Vec3::new(half.x, -half.y, half.z),
        Vec3::new(half.x, half.y, half.z),
        Vec3::new(-half.x, half.y, half.z),
    ];
    let v = corners.map(|c| transform.apply(c));

    FACES
        .iter()
        .map(|&[a, b, c]| Triangle::new(v[a], v[b], v[c]))
        .collect()
}
