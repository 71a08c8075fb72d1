//! Fan-size weighting of accumulated normals.
//!
//! The weighted normal is intentionally left at its averaged length. Shaders
//! renormalize after interpolation, so no renormalization happens here.

use super::classify::classify_index;
use crate::errors::{MeshError, MeshResult};
use crate::geometry::vector::Vec3;
use crate::util;

/// Divide each raw normal sum by its vertex class divisor.
///
/// # Errors
///
/// Returns [`MeshError::InvalidGridParameter`] if the resolution is invalid
/// or `raw_sums` does not hold one entry per grid vertex.
pub fn weight_normals(raw_sums: &[Vec3], resolution: u32) -> MeshResult<Vec<Vec3>> {
    let expected = util::vertex_count(resolution)?;
    if raw_sums.len() != expected {
        return Err(MeshError::InvalidGridParameter {
            resolution,
            reason: format!(
                "expected {expected} normal sums, got {}",
                raw_sums.len()
            ),
        });
    }

    Ok((0u32..)
        .zip(raw_sums)
        .map(|(index, &sum)| sum / f64::from(classify_index(index, resolution).divisor()))
        .collect())
}
