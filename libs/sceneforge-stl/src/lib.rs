//! # Sceneforge STL
//!
//! Serializes a [`Mesh`](sceneforge_mesh::Mesh) to the binary STL format.
//!
//! ## Binary Format
//!
//! All multi-byte fields little-endian:
//!
//! ```text
//! UINT8[80]    – Header (content-irrelevant, mesh name padded with zeros)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (always 0)
//! end
//! ```
//!
//! Total file size is `80 + 4 + 50 * N` bytes for `N` triangles.

pub mod error;
pub mod writer;

pub use error::StlError;
pub use writer::{binary_size, save_stl, write_stl};
