//! # Sphere Primitive
//!
//! Generates the triangle soup for a sphere using latitude/longitude
//! tessellation.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

use crate::transform::Transform;
use crate::triangle::Triangle;

/// Creates a UV sphere whose diameter is the first dimension component,
/// placed by `transform`.
///
/// The generator builds a `(stacks + 1) × (sectors + 1)` vertex grid: the
/// stack angle sweeps from +90° down to -90°, the sector angle a full turn.
/// Each grid cell contributes an upper triangle except along the top pole
/// row and a lower triangle except along the bottom pole row, skipping the
/// degenerate zero-area triangles the poles would otherwise produce. Total:
/// `2 * stacks * sectors - 2 * sectors` triangles.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use sceneforge_mesh::primitives::create_sphere;
/// use sceneforge_mesh::Transform;
///
/// let transform = Transform::new(Vec3::ZERO, Vec3::ZERO);
/// let triangles = create_sphere(Vec3::splat(10.0), &transform, 16, 16);
/// assert_eq!(triangles.len(), 2 * 16 * 16 - 2 * 16);
/// ```
pub fn create_sphere(
    dimensions: Vec3,
    transform: &Transform,
    stacks: u32,
    sectors: u32,
) -> Vec<Triangle> {
    let radius = dimensions.x / 2.0;
    let stacks = stacks as usize;
    let sectors = sectors as usize;

    let mut grid = Vec::with_capacity(stacks + 1);
    for i in 0..=stacks {
        // From +pi/2 at the top pole to -pi/2 at the bottom.
        let stack_angle = FRAC_PI_2 * (1.0 - 2.0 * i as f32 / stacks as f32);
        let ring_radius = radius * stack_angle.cos();
        let y = radius * stack_angle.sin();

        let mut row = Vec::with_capacity(sectors + 1);
        for j in 0..=sectors {
            let sector_angle = TAU * j as f32 / sectors as f32;
            let x = ring_radius * sector_angle.cos();
            let z = ring_radius * sector_angle.sin();
            row.push(transform.apply(Vec3::new(x, y, z)));
        }
        grid.push(row);
    }

    let mut triangles = Vec::with_capacity((2 * stacks * sectors).saturating_sub(2 * sectors));
    for i in 0..stacks {
        for j in 0..sectors {
            let v1 = grid[i][j];
            let v2 = grid[i + 1][j];
            let v3 = grid[i + 1][j + 1];
            let v4 = grid[i][j + 1];

            // At the top pole row v1 == v4; at the bottom row v2 == v3.
            // Skipping those cells avoids degenerate triangles.
            if i != 0 {
                triangles.push(Triangle::new(v1, v2, v4));
            }
            if i != stacks - 1 {
                triangles.push(Triangle::new(v2, v3, v4));
            }
        }
    }

    triangles
}
