//! Regular grid triangulation of the unit square.
//!
//! Vertex `(row j, col i)` sits at `(i/K, j/K, f(i/K, j/K))`. Each cell is
//! split along its rising diagonal into a lower-right and an upper-left
//! triangle:
//!
//! ```text
//!  v+K+1 ---- v+K+2
//!    |  upper  / |
//!    |  left  /  |
//!    |       /   |
//!    |      / lower
//!    |     /  right
//!    v -------- v+1
//! ```

use crate::errors::MeshResult;
use crate::geometry::field::ScalarField;
use crate::geometry::mesh::{GridMesh, Triangle};
use crate::geometry::vector::Vec3;
use crate::util;

/// Sample the field on a `(K+1) × (K+1)` lattice in row-major order.
///
/// The caller is responsible for passing a validated resolution.
pub fn grid_vertices<F: ScalarField + ?Sized>(resolution: u32, field: &F) -> Vec<Vec3> {
    let k = f64::from(resolution);
    let side = resolution as usize + 1;
    let mut vertices = Vec::with_capacity(side * side);

    for row in 0..=resolution {
        let y = f64::from(row) / k;
        for col in 0..=resolution {
            let x = f64::from(col) / k;
            vertices.push(Vec3::new(x, y, field.height(x, y)));
        }
    }

    vertices
}

/// The two triangles of grid cell `(row, col)`: lower-right then upper-left.
#[must_use]
pub const fn cell_triangles(row: u32, col: u32, resolution: u32) -> [Triangle; 2] {
    let stride = resolution + 1;
    let v = row * stride + col;
    [
        Triangle::new(v, v + 1, v + stride + 1),
        Triangle::new(v, v + stride + 1, v + stride),
    ]
}

/// Triangulate every cell in row-major cell order, `2K²` triangles total.
///
/// The caller is responsible for passing a validated resolution.
#[must_use]
pub fn grid_triangles(resolution: u32) -> Vec<Triangle> {
    let cells = resolution as usize * resolution as usize;
    let mut triangles = Vec::with_capacity(2 * cells);

    for row in 0..resolution {
        for col in 0..resolution {
            triangles.extend(cell_triangles(row, col, resolution));
        }
    }

    triangles
}

/// Build the grid mesh for resolution K over the given field.
///
/// # Errors
///
/// Returns [`crate::MeshError::InvalidGridParameter`] if K is zero or too
/// large for `u32` vertex indices. Nothing is allocated in that case.
pub fn build_grid<F: ScalarField + ?Sized>(resolution: u32, field: &F) -> MeshResult<GridMesh> {
    util::validate_resolution(resolution)?;

    let vertices = grid_vertices(resolution, field);
    let triangles = grid_triangles(resolution);
    log::debug!(
        "Built grid K={resolution}: {} vertices, {} triangles",
        vertices.len(),
        triangles.len()
    );

    GridMesh::from_parts(resolution, vertices, triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MeshError;
    use crate::geometry::field::{DampedRipple, Flat};
    use crate::geometry::mesh::GridIndex;
    use std::collections::HashMap;

    #[test]
    fn test_single_cell() {
        let mesh = build_grid(1, &Flat::default()).expect("K=1 is valid");

        assert_eq!(
            mesh.vertices(),
            &[
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
            ]
        );
        assert_eq!(
            mesh.triangles(),
            &[Triangle::new(0, 1, 3), Triangle::new(0, 3, 2)]
        );
    }

    #[test]
    fn test_vertex_layout_is_row_major() {
        let k = 4;
        let vertices = grid_vertices(k, &DampedRipple);
        assert_eq!(vertices.len(), 25);

        for (index, vertex) in (0u32..).zip(&vertices) {
            let position = GridIndex::from_linear(index, k);
            assert_eq!(vertex.x, f64::from(position.col) / 4.0);
            assert_eq!(vertex.y, f64::from(position.row) / 4.0);
            assert_eq!(vertex.z, DampedRipple.height(vertex.x, vertex.y));
        }
        // Centre vertex of an even grid hits the ripple peak.
        assert_eq!(vertices[12].z, 0.5);
    }

    #[test]
    fn test_cell_triangles() {
        // K = 3, cell (1, 2): v = 1*4 + 2 = 6
        assert_eq!(
            cell_triangles(1, 2, 3),
            [Triangle::new(6, 7, 11), Triangle::new(6, 11, 10)]
        );
    }

    #[test]
    fn test_triangle_emission_order() {
        let triangles = grid_triangles(2);
        assert_eq!(
            triangles,
            vec![
                Triangle::new(0, 1, 4),
                Triangle::new(0, 4, 3),
                Triangle::new(1, 2, 5),
                Triangle::new(1, 5, 4),
                Triangle::new(3, 4, 7),
                Triangle::new(3, 7, 6),
                Triangle::new(4, 5, 8),
                Triangle::new(4, 8, 7),
            ]
        );
    }

    #[test]
    fn test_interior_edges_shared_by_two_triangles() {
        let k = 5;
        let mut edge_uses: HashMap<(u32, u32), u32> = HashMap::new();
        for triangle in grid_triangles(k) {
            let [a, b, c] = triangle.vertex_indices;
            for (p, q) in [(a, b), (b, c), (c, a)] {
                *edge_uses.entry((p.min(q), p.max(q))).or_default() += 1;
            }
        }

        let on_boundary = |i: u32| {
            let g = GridIndex::from_linear(i, k);
            (g.row == 0 || g.row == k, g.col == 0 || g.col == k)
        };
        for ((p, q), uses) in edge_uses {
            let (gp, gq) = (GridIndex::from_linear(p, k), GridIndex::from_linear(q, k));
            let boundary_edge = (gp.row == gq.row && on_boundary(p).0 && on_boundary(q).0)
                || (gp.col == gq.col && on_boundary(p).1 && on_boundary(q).1);
            assert_eq!(uses, if boundary_edge { 1 } else { 2 }, "edge ({p}, {q})");
        }
    }

    #[test]
    fn test_zero_resolution_rejected() {
        assert!(matches!(
            build_grid(0, &DampedRipple),
            Err(MeshError::InvalidGridParameter { resolution: 0, .. })
        ));
    }
}
