//! Viewing and lighting settings passed along with the mesh.
//!
//! The renderer owns the camera, projection and draw loop. These values are
//! the configuration it is expected to apply: one white directional light,
//! a fixed perspective camera and a constant spin about +z.

use crate::errors::{MeshError, MeshResult};
use crate::geometry::vector::Vec3;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default spin rate of the model about +z, in degrees per second.
pub const DEFAULT_ROTATION_SPEED: f64 = 30.0;

/// Light, camera and animation settings for the external renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Unit direction towards the light, world coordinates
    pub light_direction: Vec3,
    /// Light color, linear RGB
    pub light_color: Vec3,
    /// Camera position
    pub eye: Vec3,
    /// Point the camera looks at
    pub center: Vec3,
    /// Camera up vector
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_degrees: f64,
    /// Near clip plane distance
    pub near: f64,
    /// Far clip plane distance
    pub far: f64,
    /// Translation applied before rotating, centering the unit square on the axis
    pub model_offset: Vec3,
    /// Spin rate about +z in degrees per second
    pub rotation_speed: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let light = Vec3::new(0.5, 3.0, 4.0);
        Self {
            light_direction: light / light.magnitude(),
            light_color: Vec3::new(1.0, 1.0, 1.0),
            eye: Vec3::new(-4.0, 3.2, 2.4),
            center: Vec3::new(5.0, -4.0, -3.0),
            up: Vec3::UNIT_Z,
            fov_degrees: 20.0,
            near: 1.0,
            far: 100.0,
            model_offset: Vec3::new(-0.5, -0.5, 0.0),
            rotation_speed: DEFAULT_ROTATION_SPEED,
        }
    }
}

impl SceneConfig {
    /// Default scene with a different spin rate.
    #[must_use]
    pub fn with_rotation_speed(rotation_speed: f64) -> Self {
        Self {
            rotation_speed,
            ..Self::default()
        }
    }

    /// Point the light along `direction`, normalizing it.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidConfiguration`] for a zero or non-finite direction.
    pub fn set_light_direction(&mut self, direction: Vec3) -> MeshResult<()> {
        self.light_direction = direction.try_normalize().ok_or_else(|| {
            MeshError::InvalidConfiguration(format!(
                "light direction {:?} cannot be normalized",
                direction.to_array()
            ))
        })?;
        Ok(())
    }

    /// Advance a rotation angle by the elapsed time, wrapping into `[0, 360)`.
    #[must_use]
    pub fn advance_angle(&self, angle: f64, elapsed: Duration) -> f64 {
        advance_angle(angle, elapsed, self.rotation_speed)
    }

    /// Validates the scene parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidConfiguration`] describing the first bad value.
    pub fn validate(&self) -> MeshResult<()> {
        if !self.rotation_speed.is_finite() {
            return Err(MeshError::InvalidConfiguration(
                "Rotation speed must be finite".to_string(),
            ));
        }

        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(MeshError::InvalidConfiguration(format!(
                "Field of view must be between 0 and 180 degrees, got {}",
                self.fov_degrees
            )));
        }

        if !(self.near > 0.0 && self.far > self.near) {
            return Err(MeshError::InvalidConfiguration(format!(
                "Clip planes must satisfy 0 < near < far, got near={} far={}",
                self.near, self.far
            )));
        }

        if self.light_direction.try_normalize().is_none() {
            return Err(MeshError::InvalidConfiguration(
                "Light direction must be a non-zero vector".to_string(),
            ));
        }

        if (self.eye - self.center).try_normalize().is_none() {
            return Err(MeshError::InvalidConfiguration(
                "Camera eye and center must differ".to_string(),
            ));
        }

        Ok(())
    }
}

/// `(angle + speed · seconds) mod 360`, always in `[0, 360)`.
#[must_use]
pub fn advance_angle(angle: f64, elapsed: Duration, degrees_per_second: f64) -> f64 {
    (angle + degrees_per_second * elapsed.as_secs_f64()).rem_euclid(360.0)
}
