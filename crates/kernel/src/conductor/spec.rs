use serde::{Deserialize, Serialize};

use super::error::GeometryError;
use crate::geometry::point::Point2d;
use crate::geometry::primitives::Circle;
use crate::Tolerance;

/// Input parameters of a conductor cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConductorSpec {
    pub length: f64,
    pub height: f64,
    /// Rounding radius of the top-right corner.
    pub upper_radius: f64,
    /// Rounding radius of the bottom-right corner.
    pub lower_radius: f64,
    /// Counter-clockwise rotation in degrees, applied about [`Self::center`].
    #[serde(default)]
    pub rotation_angle: f64,
}

impl ConductorSpec {
    pub fn new(length: f64, height: f64, upper_radius: f64, lower_radius: f64) -> Self {
        Self {
            length,
            height,
            upper_radius,
            lower_radius,
            rotation_angle: 0.0,
        }
    }

    pub fn with_rotation(mut self, angle_degrees: f64) -> Self {
        self.rotation_angle = angle_degrees;
        self
    }

    pub fn upper_center(&self) -> Point2d {
        Point2d::new(self.length - self.upper_radius, self.height - self.upper_radius)
    }

    pub fn lower_center(&self) -> Point2d {
        Point2d::new(self.length - self.lower_radius, self.lower_radius)
    }

    pub fn upper_circle(&self) -> Circle {
        Circle::new(self.upper_center(), self.upper_radius)
    }

    pub fn lower_circle(&self) -> Circle {
        Circle::new(self.lower_center(), self.lower_radius)
    }

    /// Center of the bounding rectangle, the default rotation center.
    pub fn center(&self) -> Point2d {
        Point2d::new(self.length / 2.0, self.height / 2.0)
    }

    /// Largest dimension, used to scale length tolerances.
    pub fn scale(&self) -> f64 {
        self.length.max(self.height)
    }

    /// View margin a plot of this outline should leave around its extent.
    pub fn plot_margin(&self) -> f64 {
        self.upper_radius.max(self.lower_radius) * 0.2
    }

    /// Check the tolerance and dimensions, then corner ordering.
    pub fn validate(&self, tol: &Tolerance) -> Result<(), GeometryError> {
        for (name, value) in [("linear", tol.linear), ("angular", tol.angular)] {
            if !value.is_finite() || value < 0.0 {
                return Err(GeometryError::dimensions(format!(
                    "{name} tolerance must be finite and non-negative, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("length", self.length),
            ("height", self.height),
            ("upper_radius", self.upper_radius),
            ("lower_radius", self.lower_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GeometryError::dimensions(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        if !self.rotation_angle.is_finite() {
            return Err(GeometryError::dimensions(format!(
                "rotation_angle must be finite, got {}",
                self.rotation_angle
            )));
        }

        let eps = tol.scaled_linear(self.scale());
        for (name, radius) in [("upper_radius", self.upper_radius), ("lower_radius", self.lower_radius)] {
            if radius > self.height + eps {
                return Err(GeometryError::dimensions(format!(
                    "{name} {radius} exceeds height {}",
                    self.height
                )));
            }
            if radius > self.length + eps {
                return Err(GeometryError::dimensions(format!(
                    "{name} {radius} exceeds length {}",
                    self.length
                )));
            }
        }

        let upper_y = self.upper_center().y;
        let lower_y = self.lower_center().y;
        if upper_y - lower_y <= eps {
            return Err(GeometryError::InvalidCornerOrdering {
                upper_center_y: upper_y,
                lower_center_y: lower_y,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_centers() {
        let spec = ConductorSpec::new(100.0, 40.0, 20.0, 10.0);
        assert_eq!(spec.upper_center(), Point2d::new(80.0, 20.0));
        assert_eq!(spec.lower_center(), Point2d::new(90.0, 10.0));
        assert_eq!(spec.center(), Point2d::new(50.0, 20.0));
        assert!((spec.plot_margin() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_valid_spec() {
        let spec = ConductorSpec::new(100.0, 40.0, 20.0, 10.0);
        assert!(spec.validate(&Tolerance::default()).is_ok());
    }

    #[test]
    fn test_radius_exceeding_height() {
        let spec = ConductorSpec::new(100.0, 40.0, 41.0, 10.0);
        let err = spec.validate(&Tolerance::default()).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidDimensions { .. }));
        assert!(err.to_string().contains("exceeds height"));
    }

    #[test]
    fn test_radius_exceeding_length() {
        let spec = ConductorSpec::new(5.0, 40.0, 10.0, 6.0);
        let err = spec.validate(&Tolerance::default()).unwrap_err();
        assert!(err.to_string().contains("exceeds length"));
    }

    #[test]
    fn test_non_positive_and_non_finite() {
        let tol = Tolerance::default();
        for spec in [
            ConductorSpec::new(0.0, 40.0, 20.0, 10.0),
            ConductorSpec::new(100.0, -1.0, 20.0, 10.0),
            ConductorSpec::new(100.0, 40.0, f64::NAN, 10.0),
            ConductorSpec::new(100.0, 40.0, 20.0, 0.0),
            ConductorSpec::new(100.0, 40.0, 20.0, 10.0).with_rotation(f64::INFINITY),
        ] {
            assert!(matches!(
                spec.validate(&tol),
                Err(GeometryError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn test_corner_ordering() {
        // height - upper_radius == lower_radius: centers level, not strictly above.
        let spec = ConductorSpec::new(100.0, 30.0, 20.0, 10.0);
        let err = spec.validate(&Tolerance::default()).unwrap_err();
        assert_eq!(
            err,
            GeometryError::InvalidCornerOrdering {
                upper_center_y: 10.0,
                lower_center_y: 10.0,
            }
        );
    }

    #[test]
    fn test_tolerance_must_be_finite_and_non_negative() {
        // Swapped corners would slip through every comparison against NaN.
        let swapped = ConductorSpec::new(100.0, 20.0, 20.0, 15.0);
        // Level centers would pass "strictly above" with a negative epsilon.
        let level = ConductorSpec::new(100.0, 30.0, 20.0, 10.0);
        for (spec, tol) in [
            (swapped, Tolerance { linear: f64::NAN, ..Tolerance::default() }),
            (swapped, Tolerance { angular: f64::NAN, ..Tolerance::default() }),
            (level, Tolerance { linear: -1e-3, ..Tolerance::default() }),
            (level, Tolerance { linear: f64::INFINITY, ..Tolerance::default() }),
        ] {
            let err = spec.validate(&tol).unwrap_err();
            assert!(matches!(err, GeometryError::InvalidDimensions { .. }), "{err}");
            assert!(err.to_string().contains("tolerance"));
        }
        let exact = Tolerance { linear: 0.0, angular: 0.0 };
        assert!(ConductorSpec::new(100.0, 40.0, 20.0, 10.0).validate(&exact).is_ok());
    }

    #[test]
    fn test_rotation_defaults_to_zero_when_missing() {
        let json = r#"{"length": 100.0, "height": 40.0, "upper_radius": 20.0, "lower_radius": 10.0}"#;
        let spec: ConductorSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.rotation_angle, 0.0);
        assert_eq!(spec, ConductorSpec::new(100.0, 40.0, 20.0, 10.0));
    }
}
