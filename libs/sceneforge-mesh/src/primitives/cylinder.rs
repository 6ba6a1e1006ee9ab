//! # Cylinder Primitive
//!
//! Generates the triangle soup for a circular cylinder.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::transform::Transform;
use crate::triangle::Triangle;

/// Creates a cylinder from diameter/height dimensions, placed by
/// `transform`.
///
/// Dimensions are interpreted as [diameter, height, diameter]. Per segment
/// the generator emits one bottom-cap triangle, one top-cap triangle
/// (reversed so both caps face outward), and two wall triangles, for
/// `4 * segments` triangles total.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use sceneforge_mesh::primitives::create_cylinder;
/// use sceneforge_mesh::Transform;
///
/// let transform = Transform::new(Vec3::ZERO, Vec3::ZERO);
/// let triangles = create_cylinder(Vec3::new(4.0, 8.0, 4.0), &transform, 32);
/// assert_eq!(triangles.len(), 4 * 32);
/// ```
pub fn create_cylinder(dimensions: Vec3, transform: &Transform, segments: u32) -> Vec<Triangle> {
    let radius = dimensions.x / 2.0;
    let half_height = dimensions.y / 2.0;
    let segments = segments as usize;

    let bottom_center = transform.apply(Vec3::new(0.0, -half_height, 0.0));
    let top_center = transform.apply(Vec3::new(0.0, half_height, 0.0));

    let mut bottom = Vec::with_capacity(segments);
    let mut top = Vec::with_capacity(segments);
    for i in 0..segments {
        let angle = TAU * i as f32 / segments as f32;
        let x = radius * angle.cos();
        let z = radius * angle.sin();
        bottom.push(transform.apply(Vec3::new(x, -half_height, z)));
        top.push(transform.apply(Vec3::new(x, half_height, z)));
    }

    let mut triangles = Vec::with_capacity(4 * segments);
    for i in 0..segments {
        let next = (i + 1) % segments;

        // Bottom cap.
        triangles.push(Triangle::new(bottom_center, bottom[i], bottom[next]));

        // Top cap, reversed relative to the bottom cap.
        triangles.push(Triangle::new(top_center, top[next], top[i]));

        // Wall quad.
        triangles.push(Triangle::new(bottom[i], top[i], top[next]));
        triangles.push(Triangle::new(bottom[i], top[next], bottom[next]));
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
    fn test_cylinder_triangle_count() {
        for segments in [3, 8, 32, 64] {
            let triangles =
                create_cylinder(Vec3::new(4.0, 8.0, 4.0), &identity(), segments);
            assert_eq!(triangles.len(), 4 * segments as usize);
        }
    }

    #[test]
    fn test_cylinder_stays_within_bounds() {
        let triangles = create_cylinder(Vec3::new(4.0, 8.0, 4.0), &identity(), 16);
        for tri in &triangles {
            for v in [tri.v1, tri.v2, tri.v3] {
                assert!(v.y.abs() <= 4.0 + 1e-5);
                assert!((v.x * v.x + v.z * v.z).sqrt() <= 2.0 + 1e-5);
            }
        }
    }

    #[test]
    fn test_cylinder_caps_face_outward() {
        let triangles = create_cylinder(Vec3::new(4.0, 8.0, 4.0), &identity(), 16);
        // Per segment: [bottom cap, top cap, wall, wall].
        for chunk in triangles.chunks(4) {
            assert!(chunk[0].normal().y < 0.0, "bottom cap must face down");
            assert!(chunk[1].normal().y > 0.0, "top cap must face up");
        }
    }

    #[test]
    fn test_cylinder_walls_face_away_from_axis() {
        let triangles = create_cylinder(Vec3::new(4.0, 8.0, 4.0), &identity(), 16);
        for chunk in triangles.chunks(4) {
            for wall in &chunk[2..] {
                let centroid = (wall.v1 + wall.v2 + wall.v3) / 3.0;
                let radial = Vec3::new(centroid.x, 0.0, centroid.z);
                assert!(wall.normal().dot(radial) > 0.0);
            }
        }
    }
}
