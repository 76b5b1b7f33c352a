use serde::{Deserialize, Serialize};
use tracing::trace;

use super::point::Point2d;
use super::primitives::Circle;
use crate::Tolerance;

/// Result of a circle-circle intersection.
///
/// Points are reported in a fixed order: for `Crossing(first, second)`,
/// `first` lies to the left of the directed line from the first circle's
/// center to the second's, `second` to the right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CircleIntersection {
    /// Disjoint, nested, or concentric circles.
    None,
    /// The circles touch at exactly one point.
    Tangent(Point2d),
    /// The circles cross at two distinct points.
    Crossing(Point2d, Point2d),
}

impl CircleIntersection {
    /// The intersection points in solver order.
    pub fn points(&self) -> Vec<Point2d> {
        match *self {
            CircleIntersection::None => vec![],
            CircleIntersection::Tangent(p) => vec![p],
            CircleIntersection::Crossing(p, q) => vec![p, q],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CircleIntersection::None => 0,
            CircleIntersection::Tangent(_) => 1,
            CircleIntersection::Crossing(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CircleIntersection::None)
    }
}

// ─── Circle-Circle Intersection ─────────────────────────────────────────────

/// Intersect two circles.
///
/// Never fails: "no intersection" is a normal outcome. Distances within the
/// scaled linear tolerance of `r1 + r2` or `|r1 - r2|` are treated as
/// tangency, so boundary configurations yield exactly one point.
pub fn intersect_circles(c1: &Circle, c2: &Circle, tol: &Tolerance) -> CircleIntersection {
    let (r1, r2) = (c1.radius, c2.radius);
    let offset = c2.center - c1.center;
    let d = offset.length();
    let eps = tol.scaled_linear(r1.max(r2).max(d));

    // Concentric: either no common point or (equal radii) a continuum.
    let Some(u) = offset.normalized().filter(|_| d > eps) else {
        trace!(d, r1, r2, "concentric circles");
        return CircleIntersection::None;
    };

    let outer_gap = d - (r1 + r2);
    let inner_gap = d - (r1 - r2).abs();
    if outer_gap > eps || inner_gap < -eps {
        trace!(d, r1, r2, "circles do not meet");
        return CircleIntersection::None;
    }

    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let p3 = c1.center + u * a;

    // Floating point noise can push r1² - a² slightly negative at tangency.
    let h = (r1 * r1 - a * a).max(0.0).sqrt();

    if outer_gap.abs() <= eps || inner_gap.abs() <= eps || h <= eps {
        trace!(d, r1, r2, x = p3.x, y = p3.y, "circles are tangent");
        return CircleIntersection::Tangent(p3);
    }

    let n = u.perpendicular() * h;
    CircleIntersection::Crossing(p3 + n, p3 - n)
}
