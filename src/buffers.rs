//! Flat buffers handed to the external renderer.
//!
//! Positions, colors and normals are parallel arrays of `f32` triples in
//! row-major vertex order; indices are `u32` triples in triangle emission
//! order.

use crate::errors::{MeshError, MeshResult};
use crate::geometry::mesh::GridMesh;
use crate::geometry::vector::Vec3;
use crate::scene::SceneConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Color assigned to every vertex: opaque red.
pub const BASE_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// Packed vertex attribute and index arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffers {
    /// `(x, y, z)` per vertex
    pub positions: Vec<f32>,
    /// `(r, g, b)` per vertex
    pub colors: Vec<f32>,
    /// Weighted, not unit-length, shading normal per vertex
    pub normals: Vec<f32>,
    /// Three vertex indices per triangle
    pub indices: Vec<u32>,
}

#[allow(clippy::cast_possible_truncation)]
fn extend_f32(buffer: &mut Vec<f32>, v: Vec3) {
    buffer.extend([v.x as f32, v.y as f32, v.z as f32]);
}

/// Flatten a mesh and its final normals into renderer buffers.
///
/// # Errors
///
/// Returns [`MeshError::InvalidGridParameter`] if there is not exactly one
/// normal per vertex.
pub fn pack_buffers(mesh: &GridMesh, normals: &[Vec3]) -> MeshResult<MeshBuffers> {
    if normals.len() != mesh.vertex_count() {
        return Err(MeshError::InvalidGridParameter {
            resolution: mesh.resolution(),
            reason: format!(
                "expected {} normals, got {}",
                mesh.vertex_count(),
                normals.len()
            ),
        });
    }

    let attribute_len = 3 * mesh.vertex_count();
    let mut positions = Vec::with_capacity(attribute_len);
    let mut packed_normals = Vec::with_capacity(attribute_len);
    for (&position, &normal) in mesh.vertices().iter().zip(normals) {
        extend_f32(&mut positions, position);
        extend_f32(&mut packed_normals, normal);
    }

    let colors = BASE_COLOR.repeat(mesh.vertex_count());
    let indices = mesh
        .triangles()
        .iter()
        .flat_map(|triangle| triangle.vertex_indices)
        .collect();

    Ok(MeshBuffers {
        positions,
        colors,
        normals: packed_normals,
        indices,
    })
}

impl MeshBuffers {
    /// Get the number of vertices
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get the number of triangles
    #[must_use]
    pub const fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of indices to draw
    #[must_use]
    pub const fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Position of vertex `index` as an `(x, y, z)` triple.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<[f32; 3]> {
        triple(&self.positions, index)
    }

    /// Normal of vertex `index` as an `(x, y, z)` triple.
    #[must_use]
    pub fn normal(&self, index: usize) -> Option<[f32; 3]> {
        triple(&self.normals, index)
    }

    /// Serialize the buffers, together with the scene settings, as JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization or I/O error from the writer.
    pub fn write_json<W: Write>(
        &self,
        writer: W,
        resolution: u32,
        scene: &SceneConfig,
    ) -> serde_json::Result<()> {
        let document = ExportDocument {
            resolution,
            scene,
            buffers: self,
        };
        serde_json::to_writer(writer, &document)
    }

    /// Write the JSON export to a file.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::Export`] if the file cannot be created or written.
    pub fn export_json(&self, path: &Path, resolution: u32, scene: &SceneConfig) -> MeshResult<()> {
        let export_error = |message: String| MeshError::Export {
            path: path.to_path_buf(),
            message,
        };

        let file = File::create(path).map_err(|e| export_error(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        self.write_json(&mut writer, resolution, scene)
            .map_err(|e| export_error(e.to_string()))?;
        writer.flush().map_err(|e| export_error(e.to_string()))?;

        log::info!(
            "Wrote {} vertices and {} triangles to {}",
            self.vertex_count(),
            self.triangle_count(),
            path.display()
        );
        Ok(())
    }
}

fn triple(buffer: &[f32], index: usize) -> Option<[f32; 3]> {
    let start = index.checked_mul(3)?;
    let slice = buffer.get(start..start.checked_add(3)?)?;
    Some([slice[0], slice[1], slice[2]])
}

/// On-disk layout of an exported mesh.
#[derive(Serialize)]
struct ExportDocument<'a> {
    resolution: u32,
    scene: &'a SceneConfig,
    #[serde(flatten)]
    buffers: &'a MeshBuffers,
}
