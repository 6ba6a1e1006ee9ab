//! # Rigid Transform
//!
//! The placement applied to every vertex a tessellator emits.

use glam::{Mat3, Vec3};

/// Rotation followed by translation.
///
/// Euler angles are given in degrees and applied in Y, then X, then Z order
/// using standard right-handed rotation matrices. This axis order is
/// load-bearing: shapes rotated about more than one axis only match
/// reference output under this exact composition.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use sceneforge_mesh::Transform;
///
/// let transform = Transform::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO);
/// assert_eq!(transform.apply(Vec3::ZERO), Vec3::new(1.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    rotation: Mat3,
    translation: Vec3,
}

impl Transform {
    /// Builds a transform from a world-space position and Euler rotation
    /// angles in degrees.
    pub fn new(position: Vec3, rotation_degrees: Vec3) -> Self {
        let rx = rotation_degrees.x.to_radians();
        let ry = rotation_degrees.y.to_radians();
        let rz = rotation_degrees.z.to_radians();

        // Composed right-to-left: Y first, then X, then Z.
        let rotation =
            Mat3::from_rotation_z(rz) * Mat3::from_rotation_x(rx) * Mat3::from_rotation_y(ry);

        Self {
            rotation,
            translation: position,
        }
    }

    /// Rotates and then translates a local-space point into world space.
    #[inline]
    pub fn apply(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }
}
