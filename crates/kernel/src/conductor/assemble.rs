//! Outline assembly from conductor parameters.
//!
//! The right-hand side takes one of two forms:
//! - the corner circles do not meet: a vertical edge at `x = length` joins a
//!   0°→90° upper quarter arc and a 270°→360° lower quarter arc;
//! - the corner circles meet: the arcs run directly into each other at the
//!   intersection point right of the upper corner center.
//!
//! The fixed quarter sweeps assume each corner circle is tangent to its
//! horizontal edge and to the line `x = length`, which holds because the
//! corner centers are placed one radius in from both.

use tracing::{debug, info, instrument};

use super::error::GeometryError;
use super::outline::{Outline, RightSide};
use super::spec::ConductorSpec;
use crate::geometry::intersection::{intersect_circles, CircleIntersection};
use crate::geometry::point::Point2d;
use crate::geometry::primitives::{Arc, Segment};
use crate::geometry::transform::Rotation;
use crate::Tolerance;

/// Assemble the unrotated outline with the default tolerance.
pub fn assemble(spec: &ConductorSpec) -> Result<Outline, GeometryError> {
    assemble_with(spec, &crate::default_tolerance())
}

/// Assemble the unrotated outline. `spec.rotation_angle` is ignored here;
/// see [`build_outline_with`].
#[instrument(skip(tol))]
pub fn assemble_with(spec: &ConductorSpec, tol: &Tolerance) -> Result<Outline, GeometryError> {
    spec.validate(tol)?;

    let ConductorSpec {
        length,
        height,
        upper_radius,
        lower_radius,
        ..
    } = *spec;
    let upper = spec.upper_circle();
    let lower = spec.lower_circle();
    debug!(
        upper_center = ?upper.center.to_array(),
        lower_center = ?lower.center.to_array(),
        center_distance = upper.center.distance_to(&lower.center),
        "corner circles"
    );

    let left = Segment::new(Point2d::ORIGIN, Point2d::new(0.0, height));
    let top = Segment::new(Point2d::new(0.0, height), Point2d::new(length - upper_radius, height));
    let bottom = Segment::new(Point2d::ORIGIN, Point2d::new(length - lower_radius, 0.0));

    let eps = tol.scaled_linear(spec.scale());
    let intersection = intersect_circles(&upper, &lower, tol);

    let (right, upper_arc, lower_arc) = match intersection {
        CircleIntersection::None => {
            if upper.strictly_contains(&lower, eps) || lower.strictly_contains(&upper, eps) {
                return Err(GeometryError::NestedCorners);
            }
            let right = Segment::new(
                Point2d::new(length, height - upper_radius),
                Point2d::new(length, lower_radius),
            );
            debug!(length = right.length(), "corner circles apart, straight right edge");
            (
                RightSide::Straight(right),
                Arc::new(upper.center, upper_radius, 0.0, 90.0),
                Arc::new(lower.center, lower_radius, 270.0, 360.0),
            )
        }
        CircleIntersection::Tangent(_) | CircleIntersection::Crossing(..) => {
            let candidates = intersection.points();
            // First qualifying point in solver order. The solver lists the
            // point left of the upper-to-lower direction first, which is the
            // outward one for a valid corner pair.
            let point = candidates
                .iter()
                .copied()
                .find(|p| p.x >= upper.center.x - eps)
                .ok_or_else(|| GeometryError::DegenerateIntersection {
                    candidates: candidates.clone(),
                })?;

            let upper_angle = (point - upper.center).angle_degrees();
            let lower_angle = (point - lower.center).angle_degrees();
            debug!(
                candidates = candidates.len(),
                tangent_point = ?point.to_array(),
                upper_angle,
                lower_angle,
                "corner circles meet"
            );
            (
                RightSide::Joined { point },
                Arc::new(upper.center, upper_radius, upper_angle, 90.0),
                Arc::new(lower.center, lower_radius, 270.0, lower_angle),
            )
        }
    };

    Ok(Outline {
        left,
        top,
        bottom,
        right,
        upper_arc,
        lower_arc,
    })
}

/// Assemble and apply `spec.rotation_angle` about the shape's center.
pub fn build_outline(spec: &ConductorSpec) -> Result<Outline, GeometryError> {
    build_outline_with(spec, None, &crate::default_tolerance())
}

/// Assemble and rotate by `spec.rotation_angle` about `center`, or about
/// [`ConductorSpec::center`] when `center` is `None`.
#[instrument(skip(tol))]
pub fn build_outline_with(
    spec: &ConductorSpec,
    center: Option<Point2d>,
    tol: &Tolerance,
) -> Result<Outline, GeometryError> {
    let outline = assemble_with(spec, tol)?;
    if tol.is_zero_angle(spec.rotation_angle) {
        return Ok(outline);
    }

    let rotation = Rotation::about(center.unwrap_or_else(|| spec.center()), spec.rotation_angle);
    info!(
        angle = rotation.angle_degrees(),
        center = ?rotation.center().to_array(),
        "rotating outline"
    );
    Ok(outline.transformed(&rotation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separate_corners_get_straight_edge() {
        let outline = assemble(&ConductorSpec::new(100.0, 100.0, 20.0, 10.0)).unwrap();
        let right = outline.right_edge().unwrap();
        assert_eq!(right.start, Point2d::new(100.0, 80.0));
        assert_eq!(right.end, Point2d::new(100.0, 10.0));
        assert_eq!((outline.upper_arc.start_angle, outline.upper_arc.end_angle), (0.0, 90.0));
        assert_eq!((outline.lower_arc.start_angle, outline.lower_arc.end_angle), (270.0, 360.0));
    }

    #[test]
    fn test_fixed_edges() {
        let outline = assemble(&ConductorSpec::new(100.0, 40.0, 20.0, 10.0)).unwrap();
        assert_eq!(outline.left, Segment::new(Point2d::ORIGIN, Point2d::new(0.0, 40.0)));
        assert_eq!(outline.top, Segment::new(Point2d::new(0.0, 40.0), Point2d::new(80.0, 40.0)));
        assert_eq!(outline.bottom, Segment::new(Point2d::ORIGIN, Point2d::new(90.0, 0.0)));
    }

    #[test]
    fn test_crossing_corners_meet_at_outward_point() {
        let outline = assemble(&ConductorSpec::new(100.0, 40.0, 20.0, 10.0)).unwrap();
        assert!(!outline.has_right_edge());
        let point = outline.tangent_point().unwrap();
        // Both candidates lie right of x = 80; the outward one is picked.
        assert!(point.x > 99.0 && point.y > 14.0);
        assert!(outline.upper_arc.start_point().approx_eq(&point, 1e-9));
        assert!(outline.lower_arc.end_point().approx_eq(&point, 1e-9));
        assert_eq!(outline.upper_arc.end_angle, 90.0);
        assert_eq!(outline.lower_arc.start_angle, 270.0);
    }

    #[test]
    fn test_tangent_corners() {
        let outline = assemble(&ConductorSpec::new(100.0, 40.0, 10.0, 10.0)).unwrap();
        assert_eq!(outline.tangent_point(), Some(Point2d::new(90.0, 20.0)));
        assert!((outline.upper_arc.start_angle + 90.0).abs() < 1e-12);
        assert!((outline.lower_arc.end_angle - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_bad_tolerance_is_rejected_before_assembly() {
        let nan = Tolerance { linear: f64::NAN, ..Tolerance::default() };
        for spec in [
            ConductorSpec::new(100.0, 20.0, 20.0, 15.0),
            ConductorSpec::new(100.0, 20.0, 50.0, 5.0),
        ] {
            assert!(matches!(
                assemble_with(&spec, &nan),
                Err(GeometryError::InvalidDimensions { .. })
            ));
        }
        let negative = Tolerance { linear: -1e-3, ..Tolerance::default() };
        assert!(matches!(
            build_outline_with(&ConductorSpec::new(100.0, 30.0, 20.0, 10.0), None, &negative),
            Err(GeometryError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_zero_rotation_skips_transform() {
        let spec = ConductorSpec::new(100.0, 40.0, 20.0, 10.0);
        assert_eq!(build_outline(&spec).unwrap(), assemble(&spec).unwrap());
    }

    #[test]
    fn test_rotation_about_custom_center() {
        let spec = ConductorSpec::new(100.0, 100.0, 20.0, 10.0).with_rotation(90.0);
        let outline =
            build_outline_with(&spec, Some(Point2d::ORIGIN), &Tolerance::default()).unwrap();
        // (0, 100) rotated 90° about the origin lands on (-100, 0).
        assert!(outline.left.end.approx_eq(&Point2d::new(-100.0, 0.0), 1e-9));
        assert!((outline.upper_arc.start_angle - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_input_surfaces() {
        assert!(matches!(
            assemble(&ConductorSpec::new(100.0, 20.0, 21.0, 5.0)),
            Err(GeometryError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            assemble(&ConductorSpec::new(100.0, 20.0, 20.0, 15.0)),
            Err(GeometryError::InvalidCornerOrdering { .. })
        ));
    }
}
