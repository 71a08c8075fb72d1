//! Configuration management for surface generation.
//!
//! This module provides the command-line configuration for a single build:
//! - Grid resolution K
//! - Optional JSON export of the renderer buffers
//! - Height field and normal computation options
//! - Scene settings forwarded to the renderer

use crate::errors::{MeshError, MeshResult};
use crate::scene::{DEFAULT_ROTATION_SPEED, SceneConfig};
use crate::surface::DEFAULT_RESOLUTION;
use crate::util::MAX_RESOLUTION;
use clap::Parser;
use std::path::PathBuf;

/// Main configuration structure for a surface build.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct MeshConfig {
    /// Grid resolution K: the mesh has (K+1)² vertices and 2K² triangles
    #[arg(short = 'k', long, default_value_t = DEFAULT_RESOLUTION,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub resolution: u32,

    /// Write positions, colors, normals and indices as JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Compute face normals in parallel (requires the `parallel` feature)
    #[arg(long, default_value = "false")]
    pub parallel: bool,

    /// Use a flat plane instead of the ripple surface
    #[arg(long, default_value = "false")]
    pub flat: bool,

    /// Model spin rate about +z in degrees per second
    #[arg(long, default_value_t = DEFAULT_ROTATION_SPEED, allow_negative_numbers = true)]
    pub rotation_speed: f64,
}

impl MeshConfig {
    /// Builds a new instance of `MeshConfig` from command line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Creates a new `MeshConfig` with the given resolution and default options.
    #[must_use]
    pub const fn new(resolution: u32) -> Self {
        Self {
            resolution,
            output: None,
            parallel: false,
            flat: false,
            rotation_speed: DEFAULT_ROTATION_SPEED,
        }
    }

    /// Creates the `SceneConfig` forwarded to the renderer.
    #[must_use]
    pub fn to_scene_config(&self) -> SceneConfig {
        SceneConfig::with_rotation_speed(self.rotation_speed)
    }

    /// Validates the configuration parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidConfiguration`] if any parameter is invalid.
    pub fn validate(&self) -> MeshResult<()> {
        if self.resolution == 0 {
            return Err(MeshError::InvalidConfiguration(
                "Grid resolution must be at least 1".to_string(),
            ));
        }

        if self.resolution > MAX_RESOLUTION {
            return Err(MeshError::InvalidConfiguration(format!(
                "Grid resolution cannot exceed {MAX_RESOLUTION}"
            )));
        }

        if let Some(path) = &self.output
            && path.as_os_str().is_empty()
        {
            return Err(MeshError::InvalidConfiguration(
                "Output path must not be empty".to_string(),
            ));
        }

        self.to_scene_config().validate()
    }
}

/// Configuration preset for quick testing.
#[derive(Debug, Clone)]
pub struct TestConfig;

impl TestConfig {
    /// Creates a small, fast configuration suitable for unit tests.
    #[must_use]
    pub const fn small() -> MeshConfig {
        MeshConfig::new(4)
    }

    /// Creates a medium-sized configuration for integration tests.
    #[must_use]
    pub const fn medium() -> MeshConfig {
        MeshConfig::new(DEFAULT_RESOLUTION)
    }

    /// Creates a large configuration for performance testing.
    #[must_use]
    pub const fn large() -> MeshConfig {
        MeshConfig::new(400)
    }
}
