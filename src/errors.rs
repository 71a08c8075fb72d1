//! Error types for mesh generation.

use std::path::PathBuf;

/// Main error type for mesh generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    /// The grid resolution K cannot produce a mesh
    #[error("Invalid grid resolution {resolution}: {reason}")]
    InvalidGridParameter {
        /// The rejected resolution
        resolution: u32,
        /// Why it was rejected
        reason: String,
    },

    /// A triangle has a zero-length cross product, so its face normal is undefined
    #[error("Degenerate triangle {triangle} with vertices {vertices:?}")]
    DegenerateTriangle {
        /// Emission index of the triangle
        triangle: usize,
        /// Grid indices of its three vertices
        vertices: [u32; 3],
    },

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Writing the packed buffers failed
    #[error("Failed to export mesh to {}: {message}", .path.display())]
    Export {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O or serialization error
        message: String,
    },
}

/// Result type for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MeshError::InvalidGridParameter {
            resolution: 0,
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid grid resolution 0: must be at least 1"
        );

        let err = MeshError::DegenerateTriangle {
            triangle: 4,
            vertices: [1, 2, 5],
        };
        assert_eq!(err.to_string(), "Degenerate triangle 4 with vertices [1, 2, 5]");

        let err = MeshError::Export {
            path: PathBuf::from("out.json"),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to export mesh to out.json: permission denied"
        );
    }
}
