use crate::errors::{MeshError, MeshResult};

/// Largest grid resolution whose vertex indices all fit in a `u32`.
pub const MAX_RESOLUTION: u32 = u16::MAX as u32;

/// Checks that a grid resolution K can produce a mesh.
///
/// # Errors
///
/// Returns [`MeshError::InvalidGridParameter`] if K is zero or if `(K+1)²`
/// vertex indices would not fit in a `u32` index buffer.
pub fn validate_resolution(resolution: u32) -> MeshResult<()> {
    if resolution == 0 {
        return Err(MeshError::InvalidGridParameter {
            resolution,
            reason: "must be at least 1".to_string(),
        });
    }

    if resolution > MAX_RESOLUTION {
        return Err(MeshError::InvalidGridParameter {
            resolution,
            reason: format!("must be at most {MAX_RESOLUTION} so vertex indices fit in u32"),
        });
    }

    Ok(())
}

/// Number of vertices in a grid of resolution K: `(K+1)²`.
///
/// # Errors
///
/// Returns an error if the resolution is invalid or the count overflows `usize`.
pub fn vertex_count(resolution: u32) -> MeshResult<usize> {
    validate_resolution(resolution)?;
    let side = usize::try_from(resolution).map_err(|_| overflow(resolution))? + 1;
    side.checked_mul(side).ok_or_else(|| overflow(resolution))
}

/// Number of triangles in a grid of resolution K: `2K²`.
///
/// # Errors
///
/// Returns an error if the resolution is invalid or the count overflows `usize`.
pub fn triangle_count(resolution: u32) -> MeshResult<usize> {
    validate_resolution(resolution)?;
    let k = usize::try_from(resolution).map_err(|_| overflow(resolution))?;
    k.checked_mul(k)
        .and_then(|cells| cells.checked_mul(2))
        .ok_or_else(|| overflow(resolution))
}

/// Length of the flat index buffer for a grid of resolution K: `6K²`.
///
/// # Errors
///
/// Returns an error if the resolution is invalid or the count overflows `usize`.
pub fn index_count(resolution: u32) -> MeshResult<usize> {
    triangle_count(resolution)?
        .checked_mul(3)
        .ok_or_else(|| overflow(resolution))
}

fn overflow(resolution: u32) -> MeshError {
    MeshError::InvalidGridParameter {
        resolution,
        reason: "mesh size overflows the address space".to_string(),
    }
}
