//! Boundary classification of grid vertices.
//!
//! The class of a vertex fixes the divisor applied to its accumulated normal.
//! Under the rising-diagonal split the divisor is the number of triangles in
//! the vertex's fan:
//!
//! ```text
//!  row K   C2  R  R  R  C1
//!          E   I  I  I  E
//!          E   I  I  I  E
//!  row 0   C1  R  R  R  C2
//!         col 0        col K
//! ```

use crate::geometry::mesh::GridIndex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position class of a grid vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexClass {
    /// Corner on the split diagonal, `(0, 0)` or `(K, K)`: two triangles
    Corner1,
    /// Corner off the split diagonal, `(0, K)` or `(K, 0)`: one triangle
    Corner2,
    /// First or last row, not a corner: three triangles
    RowEdge,
    /// First or last column of an inner row: three triangles
    ColEdge,
    /// Everything else: six triangles
    Interior,
}

impl VertexClass {
    /// Divisor applied to the accumulated normal of this class.
    #[must_use]
    pub const fn divisor(self) -> u32 {
        match self {
            Self::Corner1 => 2,
            Self::Corner2 => 1,
            Self::RowEdge | Self::ColEdge => 3,
            Self::Interior => 6,
        }
    }

    /// Whether the vertex lies on the border of the grid.
    #[must_use]
    pub const fn is_boundary(self) -> bool {
        !matches!(self, Self::Interior)
    }
}

impl fmt::Display for VertexClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Corner1 => "diagonal corner",
            Self::Corner2 => "off-diagonal corner",
            Self::RowEdge => "row edge",
            Self::ColEdge => "column edge",
            Self::Interior => "interior",
        };
        f.write_str(name)
    }
}

/// Classify the vertex at `(row, col)` in a grid of resolution K.
#[must_use]
pub const fn classify(row: u32, col: u32, resolution: u32) -> VertexClass {
    let k = resolution;
    let row_edge = row == 0 || row == k;
    let col_edge = col == 0 || col == k;

    match (row_edge, col_edge) {
        (true, true) if row == col => VertexClass::Corner1,
        (true, true) => VertexClass::Corner2,
        (true, false) => VertexClass::RowEdge,
        (false, true) => VertexClass::ColEdge,
        (false, false) => VertexClass::Interior,
    }
}

/// Classify a vertex by its linear index.
///
/// # Panics
///
/// Panics if `index` is outside a grid of resolution `resolution`.
#[must_use]
pub fn classify_index(index: u32, resolution: u32) -> VertexClass {
    let GridIndex { row, col } = GridIndex::from_linear(index, resolution);
    classify(row, col, resolution)
}
