use serde::{Deserialize, Serialize};

use crate::geometry::point::Point2d;
use crate::geometry::primitives::{Arc, Segment};
use crate::geometry::transform::{BoundingBox2d, Rotation};
use crate::Tolerance;

/// How the two corner arcs are connected on the right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RightSide {
    /// The corner circles do not meet: a vertical edge joins the arcs.
    Straight(Segment),
    /// The corner circles meet: the arcs join directly at `point`.
    Joined { point: Point2d },
}

/// The assembled outline of a conductor cross-section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub left: Segment,
    pub top: Segment,
    pub bottom: Segment,
    pub right: RightSide,
    pub upper_arc: Arc,
    pub lower_arc: Arc,
}

impl Outline {
    /// Straight edges in drawing order: left, top, bottom, then the right
    /// edge when there is one.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = vec![self.left, self.top, self.bottom];
        if let RightSide::Straight(right) = self.right {
            segments.push(right);
        }
        segments
    }

    pub fn arcs(&self) -> [Arc; 2] {
        [self.upper_arc, self.lower_arc]
    }

    pub fn has_right_edge(&self) -> bool {
        matches!(self.right, RightSide::Straight(_))
    }

    pub fn right_edge(&self) -> Option<Segment> {
        match self.right {
            RightSide::Straight(s) => Some(s),
            RightSide::Joined { .. } => None,
        }
    }

    pub fn tangent_point(&self) -> Option<Point2d> {
        match self.right {
            RightSide::Straight(_) => None,
            RightSide::Joined { point } => Some(point),
        }
    }

    /// Every defining point in a fixed order: segment endpoints, the tangent
    /// point if any, then the arc centers.
    pub fn points(&self) -> Vec<Point2d> {
        let mut points: Vec<Point2d> = self
            .segments()
            .iter()
            .flat_map(|s| [s.start, s.end])
            .collect();
        points.extend(self.tangent_point());
        points.push(self.upper_arc.center);
        points.push(self.lower_arc.center);
        points
    }

    /// Extent of the drawn outline, arcs included.
    pub fn bounding_box(&self) -> BoundingBox2d {
        self.bounding_box_with(&crate::default_tolerance())
    }

    /// Like [`Self::bounding_box`]; an axis direction within `tol.angular`
    /// of an arc's sweep counts as inside it.
    pub fn bounding_box_with(&self, tol: &Tolerance) -> BoundingBox2d {
        let mut bb = BoundingBox2d::empty();
        for s in self.segments() {
            bb.expand_to_include(&s.start);
            bb.expand_to_include(&s.end);
        }
        if let Some(p) = self.tangent_point() {
            bb.expand_to_include(&p);
        }
        for arc in self.arcs() {
            bb.expand_to_include(&arc.start_point());
            bb.expand_to_include(&arc.end_point());
            for extreme in [0.0, 90.0, 180.0, 270.0] {
                if arc.contains_angle(extreme, tol.angular) {
                    bb.expand_to_include(&arc.point_at(extreme));
                }
            }
        }
        bb
    }

    /// Apply a rotation to every point and arc sweep.
    pub fn transformed(&self, rotation: &Rotation) -> Outline {
        Outline {
            left: rotation.apply_segment(&self.left),
            top: rotation.apply_segment(&self.top),
            bottom: rotation.apply_segment(&self.bottom),
            right: match self.right {
                RightSide::Straight(s) => RightSide::Straight(rotation.apply_segment(&s)),
                RightSide::Joined { point } => RightSide::Joined {
                    point: rotation.apply_point(&point),
                },
            },
            upper_arc: rotation.apply_arc(&self.upper_arc),
            lower_arc: rotation.apply_arc(&self.lower_arc),
        }
    }

    /// Rotate by `angle_degrees` (counter-clockwise) about `center`.
    pub fn rotated(&self, angle_degrees: f64, center: Point2d) -> Outline {
        self.transformed(&Rotation::about(center, angle_degrees))
    }
}
