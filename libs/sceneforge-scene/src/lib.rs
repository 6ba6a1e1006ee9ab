//! # Sceneforge Scene
//!
//! Scene description model and the external collaborators around it.
//!
//! ## Architecture
//!
//! ```text
//! JSON description → sceneforge-scene (Scene) → sceneforge-mesh (Mesh)
//! ```
//!
//! A [`Scene`] is a flat list of typed geometric primitives, each carrying a
//! world-space position, Euler rotation angles in degrees, and per-kind
//! dimensions. Scenes are acquired through the [`SceneSource`] boundary and
//! optionally archived as timestamped [`GenerationRecord`]s after a
//! successful conversion.
//!
//! ## Example
//!
//! ```rust
//! use sceneforge_scene::{parse_scene, ShapeKind};
//!
//! let scene = parse_scene(
//!     r#"{"shapes":[{"type":"box","position":[0,0,0],"rotation":[0,0,0],"dimensions":[10,10,10]}]}"#,
//! )
//! .unwrap();
//! assert_eq!(scene.shapes[0].kind, ShapeKind::Box);
//! ```

pub mod archive;
pub mod error;
pub mod shape;
pub mod source;

pub use archive::{DirectoryArchive, GenerationRecord, SceneArchive};
pub use error::SceneError;
pub use shape::{Scene, Shape, ShapeKind};
pub use source::{parse_scene, JsonFileSource, SceneSource};
