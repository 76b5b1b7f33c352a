pub mod geometry;
pub mod conductor;

// Re-export the engine entry points at crate root for convenience.
pub use conductor::assemble::{assemble, assemble_with, build_outline, build_outline_with};
pub use conductor::error::GeometryError;
pub use conductor::outline::{Outline, RightSide};
pub use conductor::spec::ConductorSpec;
pub use geometry::intersection::{intersect_circles, CircleIntersection};
pub use geometry::point::Point2d;
pub use geometry::primitives::{Arc, Circle, Segment};
pub use geometry::transform::{BoundingBox2d, Rotation};

/// Global tolerance configuration for geometric comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Relative length tolerance. Scaled by the problem size before use.
    pub linear: f64,
    /// Angles smaller than this (degrees) are considered zero.
    pub angular: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            linear: 1e-9,
            angular: 1e-9,
        }
    }
}

impl Tolerance {
    /// Absolute length tolerance for a problem whose lengths are around `scale`.
    pub fn scaled_linear(&self, scale: f64) -> f64 {
        self.linear * scale.abs().max(1.0)
    }

    pub fn is_zero_angle(&self, angle_degrees: f64) -> bool {
        angle_degrees.abs() < self.angular
    }
}

/// Default tolerance used by [`assemble`] and [`build_outline`].
pub fn default_tolerance() -> Tolerance {
    Tolerance::default()
}
