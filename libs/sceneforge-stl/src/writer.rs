//! # Binary STL Writer
//!
//! Sequential, single-threaded serialization of a triangle soup.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::Vec3;

use sceneforge_mesh::Mesh;

use crate::error::StlError;

/// STL binary header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Size of one triangle record (normal + 3 vertices + attribute).
pub const TRIANGLE_SIZE: usize = 50;

/// Size of the triangle count field.
const COUNT_SIZE: usize = 4;

/// Returns the exact byte length of the binary encoding for a mesh with
/// `triangle_count` triangles.
///
/// # Example
///
/// ```rust
/// use sceneforge_stl::binary_size;
///
/// assert_eq!(binary_size(0), 84);
/// assert_eq!(binary_size(12), 684);
/// ```
pub fn binary_size(triangle_count: usize) -> usize {
    HEADER_SIZE + COUNT_SIZE + TRIANGLE_SIZE * triangle_count
}

/// Writes the mesh to any byte sink in binary STL layout.
///
/// Normals are computed per triangle at write time; a degenerate triangle
/// produces a zero normal, which standard readers tolerate.
pub fn write_stl<W: Write>(writer: &mut W, mesh: &Mesh) -> Result<(), StlError> {
    // 80-byte header carrying the mesh name, zero-padded and truncated.
    let mut header = [0u8; HEADER_SIZE];
    let name = mesh.name().as_bytes();
    let len = name.len().min(HEADER_SIZE);
    header[..len].copy_from_slice(&name[..len]);
    writer.write_all(&header)?;

    let count = mesh.triangle_count() as u32;
    writer.write_all(&count.to_le_bytes())?;

    for triangle in mesh.triangles() {
        write_vector(writer, triangle.normal())?;
        write_vector(writer, triangle.v1)?;
        write_vector(writer, triangle.v2)?;
        write_vector(writer, triangle.v3)?;

        // Attribute byte count, always zero.
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Writes the mesh to a file, creating or truncating the destination.
///
/// Any I/O failure aborts the write and surfaces as an error; the partial
/// file, if any, is not deleted but must not be treated as valid output.
pub fn save_stl<P: AsRef<Path>>(path: P, mesh: &Mesh) -> Result<(), StlError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| StlError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    write_stl(&mut writer, mesh)?;
    writer.flush()?;
    Ok(())
}

fn write_vector<W: Write>(writer: &mut W, v: Vec3) -> Result<(), StlError> {
    writer.write_all(&v.x.to_le_bytes())?;
    writer.write_all(&v.y.to_le_bytes())?;
    writer.write_all(&v.z.to_le_bytes())?;
    Ok(())
}
