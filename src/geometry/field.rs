//! Bivariate scalar fields sampled over the unit square.
//!
//! A [`ScalarField`] is the only customization point for the surface shape:
//! swapping it changes the generated heights without touching triangulation,
//! normals or buffer packing.

/// A height function `z = f(x, y)` over `[0, 1] × [0, 1]`.
pub trait ScalarField {
    /// Evaluate the height at domain coordinate `(x, y)`.
    fn height(&self, x: f64, y: f64) -> f64;
}

impl<F> ScalarField for F
where
    F: Fn(f64, f64) -> f64,
{
    fn height(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

/// Radially damped cosine ripple centred on the middle of the unit square.
///
/// f(x, y) = 0.5 · e^(−0.04 r) · cos(0.15 r), with
/// r = √((80x − 40)² + (90y − 45)²)
#[must_use]
pub fn damped_ripple(x: f64, y: f64) -> f64 {
    let dx = 80.0 * x - 40.0;
    let dy = 90.0 * y - 45.0;
    let r = (dx * dx + dy * dy).sqrt();
    0.5 * (-0.04 * r).exp() * (0.15 * r).cos()
}

/// The default surface, see [`damped_ripple`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DampedRipple;

impl ScalarField for DampedRipple {
    fn height(&self, x: f64, y: f64) -> f64 {
        damped_ripple(x, y)
    }
}

/// Constant-height plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Flat {
    /// Height of the plane
    pub level: f64,
}

impl ScalarField for Flat {
    fn height(&self, _x: f64, _y: f64) -> f64 {
        self.level
    }
}
