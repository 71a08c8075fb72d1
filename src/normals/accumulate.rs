//! Face normals and their per-vertex accumulation.
//!
//! Every triangle contributes its unit face normal to each of its three
//! vertices. The sums are owned by the build pass and handed to the weighting
//! stage; nothing here is shared with the renderer.

use crate::errors::{MeshError, MeshResult};
use crate::geometry::mesh::{GridMesh, Triangle};
use crate::geometry::vector::Vec3;

/// Unit normal of the triangle `(a, b, c)`, `(b − a) × (c − a)` normalized.
///
/// Returns `None` for a degenerate triangle whose cross product has zero length.
#[must_use]
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Option<Vec3> {
    (b - a).cross(c - a).try_normalize()
}

fn triangle_normal(mesh: &GridMesh, index: usize, triangle: &Triangle) -> MeshResult<Vec3> {
    let [i1, i2, i3] = triangle.vertex_indices;
    face_normal(mesh.position(i1), mesh.position(i2), mesh.position(i3)).ok_or(
        MeshError::DegenerateTriangle {
            triangle: index,
            vertices: triangle.vertex_indices,
        },
    )
}

/// Unit face normal of every triangle, in emission order.
///
/// # Errors
///
/// Returns [`MeshError::DegenerateTriangle`] for the first triangle with a
/// zero-length cross product.
pub fn face_normals(mesh: &GridMesh) -> MeshResult<Vec<Vec3>> {
    mesh.triangles()
        .iter()
        .enumerate()
        .map(|(index, triangle)| triangle_normal(mesh, index, triangle))
        .collect()
}

/// Unit face normals computed on the rayon thread pool.
///
/// Results keep emission order, so they match [`face_normals`] exactly.
///
/// # Errors
///
/// Returns [`MeshError::DegenerateTriangle`] if any triangle is degenerate.
#[cfg(feature = "parallel")]
pub fn face_normals_parallel(mesh: &GridMesh) -> MeshResult<Vec<Vec3>> {
    use rayon::prelude::*;

    mesh.triangles()
        .par_iter()
        .enumerate()
        .map(|(index, triangle)| triangle_normal(mesh, index, triangle))
        .collect()
}

/// Add each face normal into the sums of its triangle's vertices.
///
/// Scattering runs in emission order so the floating-point sums are
/// reproducible regardless of how the face normals were computed.
#[must_use]
pub fn scatter_face_normals(mesh: &GridMesh, face_normals: &[Vec3]) -> Vec<Vec3> {
    let mut sums = vec![Vec3::ZERO; mesh.vertex_count()];
    for (triangle, &normal) in mesh.triangles().iter().zip(face_normals) {
        for &i in &triangle.vertex_indices {
            sums[i as usize] += normal;
        }
    }
    sums
}

/// Raw per-vertex sums of incident unit face normals.
///
/// # Errors
///
/// Returns [`MeshError::DegenerateTriangle`] instead of letting a NaN normal
/// reach the shading buffers.
pub fn accumulate_normals(mesh: &GridMesh) -> MeshResult<Vec<Vec3>> {
    let normals = face_normals(mesh)?;
    Ok(scatter_face_normals(mesh, &normals))
}

/// [`accumulate_normals`] with face normals computed in parallel.
///
/// # Errors
///
/// Returns [`MeshError::DegenerateTriangle`] if any triangle is degenerate.
#[cfg(feature = "parallel")]
pub fn accumulate_normals_parallel(mesh: &GridMesh) -> MeshResult<Vec<Vec3>> {
    let normals = face_normals_parallel(mesh)?;
    Ok(scatter_face_normals(mesh, &normals))
}
