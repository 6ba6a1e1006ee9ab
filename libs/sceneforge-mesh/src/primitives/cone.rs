//! # Cone Primitive
//!
//! Generates the triangle soup for a circular cone.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::transform::Transform;
use crate::triangle::Triangle;

/// Creates a cone from diameter/height dimensions, placed by `transform`.
///
/// Dimensions are interpreted as [diameter, height, diameter]. The base
/// ring sits at -height/2 with the apex at +height/2; per segment the
/// generator emits one base triangle and one side triangle, for
/// `2 * segments` triangles total.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use sceneforge_mesh::primitives::create_cone;
/// use sceneforge_mesh::Transform;
///
/// let transform = Transform::new(Vec3::ZERO, Vec3::ZERO);
/// let triangles = create_cone(Vec3::new(4.0, 8.0, 4.0), &transform, 32);
/// assert_eq!(triangles.len(), 2 * 32);
/// ```
pub fn create_cone(dimensions: Vec3, transform: &Transform, segments: u32) -> Vec<Triangle> {
    let radius = dimensions.x / 2.0;
    let half_height = dimensions.y / 2.0;
    let segments = segments as usize;

    let base_center = transform.apply(Vec3::new(0.0, -half_height, 0.0));
    let tip = transform.apply(Vec3::new(0.0, half_height, 0.0));

    let mut base = Vec::with_capacity(segments);
    for i in 0..segments {
        let angle = TAU * i as f32 / segments as f32;
        let x = radius * angle.cos();
        let z = radius * angle.sin();
        base.push(transform.apply(Vec3::new(x, -half_height, z)));
    }

    let mut triangles = Vec::with_capacity(2 * segments);
    for i in 0..segments {
        let next = (i + 1) % segments;

        // Base.
        triangles.push(Triangle::new(base_center, base[i], base[next]));

        // Side up to the apex.
        triangles.push(Triangle::new(tip, base[next], base[i]));
    }

    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Transform {
        Transform::new(Vec3::ZERO, Vec3::ZERO)
    }

    #[test]
    fn test_cone_triangle_count() {
        for segments in [3, 8, 32] {
            let triangles = create_cone(Vec3::new(4.0, 8.0, 4.0), &identity(), segments);
            assert_eq!(triangles.len(), 2 * segments as usize);
        }
    }

    #[test]
    fn test_cone_apex_and_base() {
        let triangles = create_cone(Vec3::new(4.0, 8.0, 4.0), &identity(), 8);
        // Side triangles lead with the apex.
        for chunk in triangles.chunks(2) {
            assert_eq!(chunk[1].v1, Vec3::new(0.0, 4.0, 0.0));
            assert_eq!(chunk[0].v1, Vec3::new(0.0, -4.0, 0.0));
        }
    }

    #[test]
    fn test_cone_base_faces_down() {
        let triangles = create_cone(Vec3::new(4.0, 8.0, 4.0), &identity(), 8);
        for chunk in triangles.chunks(2) {
            assert!(chunk[0].normal().y < 0.0);
        }
    }

    #[test]
    fn test_cone_sides_face_outward_and_up() {
        let triangles = create_cone(Vec3::new(4.0, 8.0, 4.0), &identity(), 16);
        for chunk in triangles.chunks(2) {
            let side = &chunk[1];
            let centroid = (side.v1 + side.v2 + side.v3) / 3.0;
            let radial = Vec3::new(centroid.x, 0.0, centroid.z);
            let normal = side.normal();
            assert!(normal.dot(radial) > 0.0);
            assert!(normal.y > 0.0, "slanted sides tilt upward");
        }
    }
}
