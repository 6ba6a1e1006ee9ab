//! # Scene Data Model
//!
//! Typed primitives making up a scene description.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Kind tag of a geometric primitive.
///
/// Deserialized from the JSON `type` string. Tags this pipeline does not
/// recognize map to [`ShapeKind::Unknown`], which is a valid zero-triangle
/// outcome rather than a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Rectangular prism with width/height/depth dimensions.
    Box,
    /// Circular cylinder with diameter/height dimensions.
    Cylinder,
    /// Sphere whose first dimension component is the diameter.
    Sphere,
    /// Circular cone with diameter/height dimensions.
    Cone,
    /// Fallback for unrecognized type tags.
    #[serde(other)]
    Unknown,
}

/// A single geometric primitive in a scene.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use sceneforge_scene::{Shape, ShapeKind};
///
/// let shape = Shape {
///     kind: ShapeKind::Sphere,
///     position: Vec3::ZERO,
///     rotation: Vec3::ZERO,
///     dimensions: Vec3::new(10.0, 10.0, 10.0),
/// };
/// assert_eq!(shape.kind, ShapeKind::Sphere);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Primitive kind tag.
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    /// World-space center of the shape.
    pub position: Vec3,
    /// Euler rotation angles in degrees, applied in Y, then X, then Z order.
    pub rotation: Vec3,
    /// Dimensions interpreted per kind: box width/height/depth,
    /// cylinder/cone diameter/height/diameter, sphere diameter (first
    /// component only).
    pub dimensions: Vec3,
}

/// An ordered collection of shapes.
///
/// Shapes carry no identity constraints between each other; overlapping
/// geometry is permitted and not merged. A scene with no shapes is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// The shapes in this scene.
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Returns the number of shapes in the scene.
    #[inline]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if the scene contains no shapes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
