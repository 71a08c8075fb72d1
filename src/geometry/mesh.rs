//! Grid mesh data structures.
//!
//! Vertices live in a flat array indexed row-major by `row * (K+1) + col`.
//! Triangles store three vertex indices in counter-clockwise order when seen
//! from +z.

use super::vector::Vec3;
use crate::errors::{MeshError, MeshResult};
use crate::util;
use serde::{Deserialize, Serialize};

/// Position of a vertex in a `(K+1) × (K+1)` lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridIndex {
    /// Row, `0..=K`, increasing with y
    pub row: u32,
    /// Column, `0..=K`, increasing with x
    pub col: u32,
}

impl GridIndex {
    /// Create a grid index.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Recover `(row, col)` from a linear vertex index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside a grid of resolution `resolution`.
    #[must_use]
    pub fn from_linear(index: u32, resolution: u32) -> Self {
        let side = u64::from(resolution) + 1;
        let index = u64::from(index);
        assert!(
            index < side * side,
            "vertex index {index} out of bounds for resolution {resolution}"
        );
        // Both quotient and remainder are at most K, which is a u32.
        #[allow(clippy::cast_possible_truncation)]
        Self {
            row: (index / side) as u32,
            col: (index % side) as u32,
        }
    }

    /// Linear row-major index of this position.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside a grid of resolution `resolution`.
    #[must_use]
    pub fn to_linear(self, resolution: u32) -> u32 {
        assert!(
            self.row <= resolution && self.col <= resolution,
            "grid position ({}, {}) out of bounds for resolution {resolution}",
            self.row,
            self.col
        );
        self.row * (resolution + 1) + self.col
    }
}

/// A triangle, as three vertex indices in winding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle {
    /// Indices of the vertices forming this triangle
    pub vertex_indices: [u32; 3],
}

impl Triangle {
    /// Create a triangle from three vertex indices.
    #[must_use]
    pub const fn new(i1: u32, i2: u32, i3: u32) -> Self {
        Self {
            vertex_indices: [i1, i2, i3],
        }
    }

    /// Whether the triangle references `vertex`.
    #[must_use]
    pub fn contains(&self, vertex: u32) -> bool {
        self.vertex_indices.contains(&vertex)
    }
}

/// A regular grid mesh over the unit square.
///
/// Built once and immutable afterwards; a new resolution means a new mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMesh {
    resolution: u32,
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
}

impl GridMesh {
    /// Assemble a mesh from precomputed parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolution is invalid, the vertex or triangle
    /// counts do not match the resolution, or a triangle references a vertex
    /// outside the grid.
    pub fn from_parts(
        resolution: u32,
        vertices: Vec<Vec3>,
        triangles: Vec<Triangle>,
    ) -> MeshResult<Self> {
        let expected_vertices = util::vertex_count(resolution)?;
        let expected_triangles = util::triangle_count(resolution)?;

        if vertices.len() != expected_vertices {
            return Err(MeshError::InvalidGridParameter {
                resolution,
                reason: format!(
                    "expected {expected_vertices} vertices, got {}",
                    vertices.len()
                ),
            });
        }
        if triangles.len() != expected_triangles {
            return Err(MeshError::InvalidGridParameter {
                resolution,
                reason: format!(
                    "expected {expected_triangles} triangles, got {}",
                    triangles.len()
                ),
            });
        }
        if let Some((t, triangle)) = triangles.iter().enumerate().find(|(_, triangle)| {
            triangle
                .vertex_indices
                .iter()
                .any(|&i| i as usize >= expected_vertices)
        }) {
            return Err(MeshError::InvalidGridParameter {
                resolution,
                reason: format!(
                    "triangle {t} references a vertex outside the grid: {:?}",
                    triangle.vertex_indices
                ),
            });
        }

        Ok(Self {
            resolution,
            vertices,
            triangles,
        })
    }

    /// Grid resolution K.
    #[must_use]
    pub const fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Vertex positions in row-major order.
    #[must_use]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Triangles in emission order.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Position of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a vertex of this mesh.
    #[must_use]
    pub fn position(&self, index: u32) -> Vec3 {
        self.vertices[index as usize]
    }

    /// Get the number of vertices
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    #[must_use]
    pub const fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of triangles that reference each vertex.
    #[must_use]
    pub fn incidence_counts(&self) -> Vec<u32> {
        let mut counts = vec![0; self.vertices.len()];
        for triangle in &self.triangles {
            for &i in &triangle.vertex_indices {
                counts[i as usize] += 1;
            }
        }
        counts
    }
}
