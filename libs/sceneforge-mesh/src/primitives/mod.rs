//! # Primitive Tessellators
//!
//! Closed-form tessellation of the four primitive solids. Each generator
//! builds local-space vertices centered at the origin, then maps every
//! vertex through the shape's [`Transform`](crate::Transform). Y is the
//! vertical axis; circles lie in the XZ plane.
//!
//! Tessellators are infallible: degenerate dimensions or resolutions
//! produce degenerate or empty output rather than errors, and every loop is
//! bounded by the resolution parameter. Resolution bounds are enforced at
//! the configuration boundary instead.

mod cone;
mod cuboid;
mod cylinder;
mod sphere;

pub use cone::create_cone;
pub use cuboid::create_box;
pub use cylinder::create_cylinder;
pub use sphere::create_sphere;
