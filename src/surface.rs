//! End-to-end surface generation.
//!
//! `field → grid → face normals → weighted vertex normals → flat buffers`.
//! Each build owns its intermediate arrays; nothing is kept between builds.

use crate::buffers::{MeshBuffers, pack_buffers};
use crate::errors::MeshResult;
use crate::geometry::field::{DampedRipple, ScalarField};
use crate::geometry::mesh::GridMesh;
use crate::geometry::vector::Vec3;
use crate::mesh::grid::build_grid;
use crate::normals::accumulate::accumulate_normals;
use crate::normals::weight::weight_normals;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;

/// Resolution used when none is given.
pub const DEFAULT_RESOLUTION: u32 = 50;

/// A fully built surface: grid, final shading normals and packed buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    mesh: GridMesh,
    normals: Vec<Vec3>,
    buffers: MeshBuffers,
}

impl Surface {
    /// The underlying grid mesh
    #[must_use]
    pub const fn mesh(&self) -> &GridMesh {
        &self.mesh
    }

    /// Final per-vertex shading normals
    #[must_use]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Packed renderer buffers
    #[must_use]
    pub const fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    /// Grid resolution K
    #[must_use]
    pub const fn resolution(&self) -> u32 {
        self.mesh.resolution()
    }

    /// Consume the surface, keeping only the renderer buffers
    #[must_use]
    pub fn into_buffers(self) -> MeshBuffers {
        self.buffers
    }
}

/// Configures and runs one surface build.
#[derive(Debug, Clone)]
pub struct SurfaceBuilder<F = DampedRipple> {
    resolution: u32,
    field: F,
    parallel: bool,
}

impl SurfaceBuilder<DampedRipple> {
    /// Builder for the default ripple surface at resolution K.
    #[must_use]
    pub const fn new(resolution: u32) -> Self {
        Self {
            resolution,
            field: DampedRipple,
            parallel: false,
        }
    }
}

impl Default for SurfaceBuilder<DampedRipple> {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLUTION)
    }
}

impl<F: ScalarField> SurfaceBuilder<F> {
    /// Replace the height function.
    #[must_use]
    pub fn with_field<G: ScalarField>(self, field: G) -> SurfaceBuilder<G> {
        SurfaceBuilder {
            resolution: self.resolution,
            field,
            parallel: self.parallel,
        }
    }

    /// Change the grid resolution.
    #[must_use]
    pub const fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    /// Compute face normals on the rayon pool when the `parallel` feature is enabled.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Grid resolution K
    #[must_use]
    pub const fn resolution(&self) -> u32 {
        self.resolution
    }

    /// The height function
    #[must_use]
    pub const fn field(&self) -> &F {
        &self.field
    }

    /// Run the full pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MeshError::InvalidGridParameter`] for an unusable
    /// resolution, or [`crate::MeshError::DegenerateTriangle`] if the field
    /// produces a triangle without a face normal.
    pub fn build(&self) -> MeshResult<Surface> {
        let start = Instant::now();

        let mesh = build_grid(self.resolution, &self.field)?;
        let raw_sums = self.accumulate(&mesh)?;
        let normals = weight_normals(&raw_sums, self.resolution)?;
        let buffers = pack_buffers(&mesh, &normals)?;

        log::info!(
            "Surface K={} built in {:.2?}: {} vertices, {} triangles",
            self.resolution,
            start.elapsed(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(Surface {
            mesh,
            normals,
            buffers,
        })
    }

    #[cfg(feature = "parallel")]
    fn accumulate(&self, mesh: &GridMesh) -> MeshResult<Vec<Vec3>> {
        if self.parallel {
            crate::normals::accumulate::accumulate_normals_parallel(mesh)
        } else {
            accumulate_normals(mesh)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn accumulate(&self, mesh: &GridMesh) -> MeshResult<Vec<Vec3>> {
        if self.parallel {
            log::warn!("Built without the `parallel` feature; computing normals sequentially");
        }
        accumulate_normals(mesh)
    }
}

/// Build the default ripple surface at resolution K and return its buffers.
///
/// # Errors
///
/// Returns an error if K is zero or too large.
pub fn generate_surface(resolution: u32) -> MeshResult<MeshBuffers> {
    SurfaceBuilder::new(resolution)
        .build()
        .map(Surface::into_buffers)
}

/// Shared handle to the current surface, replaced whole on rebuild.
///
/// Readers hold an `Arc` to a complete surface. A rebuild runs without the
/// lock and swaps only after success, so a failed or in-progress rebuild is
/// never visible.
#[derive(Debug)]
pub struct MeshHandle {
    current: RwLock<(u64, Arc<Surface>)>,
}

impl MeshHandle {
    /// Wrap an already built surface as generation 0.
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        Self {
            current: RwLock::new((0, Arc::new(surface))),
        }
    }

    /// Build a surface and wrap it.
    ///
    /// # Errors
    ///
    /// Returns any error from [`SurfaceBuilder::build`].
    pub fn build<F: ScalarField>(builder: &SurfaceBuilder<F>) -> MeshResult<Self> {
        builder.build().map(Self::new)
    }

    /// The current surface.
    #[must_use]
    pub fn current(&self) -> Arc<Surface> {
        Arc::clone(&self.current.read().1)
    }

    /// Number of successful rebuilds so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.current.read().0
    }

    /// Build a replacement surface and swap it in.
    ///
    /// # Errors
    ///
    /// Returns any error from [`SurfaceBuilder::build`]; the current surface
    /// is left unchanged in that case.
    pub fn rebuild<F: ScalarField>(&self, builder: &SurfaceBuilder<F>) -> MeshResult<Arc<Surface>> {
        let surface = Arc::new(builder.build()?);

        let mut current = self.current.write();
        current.0 += 1;
        current.1 = Arc::clone(&surface);
        log::debug!(
            "Swapped in surface generation {} (K={})",
            current.0,
            surface.resolution()
        );

        Ok(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MeshError;
    use crate::geometry::field::Flat;

    #[test]
    fn test_build_default_surface() {
        let surface = SurfaceBuilder::new(8).build().expect("valid build");
        assert_eq!(surface.resolution(), 8);
        assert_eq!(surface.mesh().vertex_count(), 81);
        assert_eq!(surface.normals().len(), 81);
        assert_eq!(surface.buffers().index_count(), 6 * 64);
    }

    #[test]
    fn test_default_builder_resolution() {
        let builder = SurfaceBuilder::default();
        assert_eq!(builder.resolution(), DEFAULT_RESOLUTION);
        assert_eq!(builder.field(), &DampedRipple);
    }

    #[test]
    fn test_custom_field() {
        let surface = SurfaceBuilder::new(3)
            .with_field(Flat { level: 0.25 })
            .build()
            .expect("valid build");
        assert!(surface.normals().iter().all(|&n| n == Vec3::UNIT_Z));
        assert!(surface.mesh().vertices().iter().all(|v| v.z == 0.25));
    }

    #[test]
    fn test_parallel_flag_gives_same_buffers() {
        let sequential = SurfaceBuilder::new(12).build().expect("valid build");
        let parallel = SurfaceBuilder::new(12)
            .parallel(true)
            .build()
            .expect("valid build");
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_generate_surface() {
        let buffers = generate_surface(2).expect("valid build");
        assert_eq!(buffers.vertex_count(), 9);
        assert!(generate_surface(0).is_err());
    }

    #[test]
    fn test_handle_rebuild_swaps() {
        let handle = MeshHandle::build(&SurfaceBuilder::new(2)).expect("valid build");
        let before = handle.current();
        assert_eq!(handle.generation(), 0);

        let rebuilt = handle
            .rebuild(&SurfaceBuilder::new(4))
            .expect("valid rebuild");
        assert_eq!(rebuilt.resolution(), 4);
        assert_eq!(handle.current().resolution(), 4);
        assert_eq!(handle.generation(), 1);

        // Readers holding the old surface keep a complete mesh.
        assert_eq!(before.resolution(), 2);
        assert_eq!(before.buffers().vertex_count(), 9);
    }

    #[test]
    fn test_handle_failed_rebuild_keeps_current() {
        let handle = MeshHandle::build(&SurfaceBuilder::new(3)).expect("valid build");
        let result = handle.rebuild(&SurfaceBuilder::new(0));
        assert!(matches!(
            result,
            Err(MeshError::InvalidGridParameter { resolution: 0, .. })
        ));
        assert_eq!(handle.current().resolution(), 3);
        assert_eq!(handle.generation(), 0);
    }

    #[test]
    fn test_handle_is_shareable_across_threads() {
        let handle = Arc::new(MeshHandle::build(&SurfaceBuilder::new(2)).expect("valid build"));
        let reader = {
            let handle = Arc::clone(&handle);
            std::thread::spawn(move || {
                for _ in 0..50 {
                    let surface = handle.current();
                    let k = surface.resolution() as usize;
                    assert_eq!(surface.buffers().vertex_count(), (k + 1) * (k + 1));
                }
            })
        };
        for k in 3..8 {
            handle
                .rebuild(&SurfaceBuilder::new(k))
                .expect("valid rebuild");
        }
        reader.join().expect("reader thread finished");
        assert_eq!(handle.generation(), 5);
    }
}
