//! # Triangle
//!
//! The unit of the triangle soup.

use glam::Vec3;

/// An ordered triple of vertices.
///
/// Winding order is significant: it determines the sign of the computed
/// normal and is preserved exactly as produced by each tessellator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v1: Vec3,
    pub v2: Vec3,
    pub v3: Vec3,
}

impl Triangle {
    /// Creates a triangle from three vertices in winding order.
    #[inline]
    pub fn new(v1: Vec3, v2: Vec3, v3: Vec3) -> Self {
        Self { v1, v2, v3 }
    }

    /// Unit normal from the cross product of the two edges at `v1`.
    ///
    /// Degenerate triangles (zero cross-product magnitude) yield the zero
    /// vector rather than an error; consumers must tolerate it.
    pub fn normal(&self) -> Vec3 {
        let u = self.v2 - self.v1;
        let w = self.v3 - self.v1;
        u.cross(w).normalize_or_zero()
    }
}
