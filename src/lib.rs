#![allow(clippy::multiple_crate_versions)]
#![warn(missing_docs)]

//! Triangulated surface meshes of bivariate functions over the unit square.
//!
//! This library samples a height function `z = f(x, y)` on a regular
//! `(K+1) × (K+1)` grid, splits each cell into two triangles, and computes
//! smooth per-vertex shading normals by averaging the unit normals of each
//! vertex's triangle fan. The result is packed into flat position, color,
//! normal and index buffers for a real-time renderer.
//!
//! # Key Features
//!
//! - Deterministic row-major grid layout with counter-clockwise winding
//! - Fan-size weighted vertex normals, left unnormalized for per-pixel shading
//! - Pluggable height functions through [`ScalarField`]
//! - Optional parallel face-normal computation (`parallel` feature)
//! - Whole-mesh swap on rebuild through [`MeshHandle`]
//!
//! # Example
//!
//! ```rust
//! use bivariate_mesh::SurfaceBuilder;
//!
//! let surface = SurfaceBuilder::new(4).build()?;
//! assert_eq!(surface.buffers().vertex_count(), 25);
//! assert_eq!(surface.buffers().index_count(), 96);
//! # Ok::<(), bivariate_mesh::MeshError>(())
//! ```

// Module declarations (avoiding mod.rs files)
/// Error types for mesh generation.
pub mod errors;

/// Grid size arithmetic and resolution checks.
pub mod util;

/// Command-line configuration.
pub mod config;

/// Flat renderer buffers and JSON export.
pub mod buffers;

/// Light, camera and animation settings for the renderer.
pub mod scene;

/// Full generation pipeline and rebuildable mesh handle.
pub mod surface;

/// Geometric primitives shared by every stage.
pub mod geometry {
    /// Height functions over the unit square.
    pub mod field;
    /// Grid mesh data structures.
    pub mod mesh;
    /// Three-component vector type.
    pub mod vector;
}

/// Mesh construction.
pub mod mesh {
    /// Regular grid triangulation.
    pub mod grid;
}

/// Per-vertex shading normals.
pub mod normals {
    /// Face normal computation and per-vertex accumulation.
    pub mod accumulate;
    /// Vertex classification by grid position.
    pub mod classify;
    /// Fan-size weighting of accumulated normals.
    pub mod weight;
}

// Re-exports for convenience
pub use buffers::{BASE_COLOR, MeshBuffers, pack_buffers};
pub use config::MeshConfig;
pub use errors::{MeshError, MeshResult};
pub use geometry::field::{DampedRipple, Flat, ScalarField, damped_ripple};
pub use geometry::mesh::{GridIndex, GridMesh, Triangle};
pub use geometry::vector::Vec3;
pub use mesh::grid::build_grid;
pub use normals::accumulate::accumulate_normals;
pub use normals::classify::{VertexClass, classify};
pub use normals::weight::weight_normals;
pub use scene::SceneConfig;
pub use surface::{MeshHandle, Surface, SurfaceBuilder, generate_surface};

/// Runs one surface build with the given configuration.
///
/// The configuration is validated before anything is allocated. When an
/// output path is set, the packed buffers are written there as JSON together
/// with the scene settings.
///
/// # Errors
///
/// Returns [`MeshError::InvalidConfiguration`] for invalid settings, any
/// error from [`SurfaceBuilder::build`], or [`MeshError::Export`] if the
/// output file cannot be written.
pub fn run(config: &MeshConfig) -> MeshResult<Surface> {
    config.validate()?;

    log::info!("Grid resolution: {}", config.resolution);
    log::info!(
        "Height field: {}",
        if config.flat { "flat" } else { "damped ripple" }
    );
    if config.resolution > 2000 {
        log::warn!(
            "Resolution {} produces {} vertices; expect a large build",
            config.resolution,
            util::vertex_count(config.resolution)?
        );
    }

    let builder = SurfaceBuilder::new(config.resolution).parallel(config.parallel);
    let surface = if config.flat {
        builder.with_field(Flat::default()).build()?
    } else {
        builder.build()?
    };

    log::info!(
        "Mesh created with {} vertices, {} triangles, {} indices",
        surface.buffers().vertex_count(),
        surface.buffers().triangle_count(),
        surface.buffers().index_count()
    );

    if let Some(path) = &config.output {
        surface
            .buffers()
            .export_json(path, config.resolution, &config.to_scene_config())?;
    }

    Ok(surface)
}
