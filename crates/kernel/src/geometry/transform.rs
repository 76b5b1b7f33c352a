use nalgebra::{Isometry2, Point2 as NaPoint2};
use serde::{Deserialize, Serialize};

use super::point::Point2d;
use super::primitives::{Arc, Segment};

/// A rigid rotation of the plane by `angle_degrees` (counter-clockwise
/// positive) about `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    center: Point2d,
    angle_degrees: f64,
    iso: Isometry2<f64>,
}

impl Rotation {
    /// Translate by `-center`, rotate, translate back by `+center`.
    pub fn about(center: Point2d, angle_degrees: f64) -> Self {
        let to_origin = Isometry2::translation(-center.x, -center.y);
        let spin = Isometry2::rotation(angle_degrees.to_radians());
        let back = Isometry2::translation(center.x, center.y);
        Self {
            center,
            angle_degrees,
            iso: back * spin * to_origin,
        }
    }

    pub fn identity() -> Self {
        Self::about(Point2d::ORIGIN, 0.0)
    }

    pub fn center(&self) -> Point2d {
        self.center
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// The rotation that undoes this one.
    pub fn inverse(&self) -> Self {
        Self::about(self.center, -self.angle_degrees)
    }

    pub fn apply_point(&self, p: &Point2d) -> Point2d {
        let mapped = self.iso.transform_point(&NaPoint2::new(p.x, p.y));
        Point2d::from(mapped)
    }

    pub fn apply_segment(&self, s: &Segment) -> Segment {
        Segment::new(self.apply_point(&s.start), self.apply_point(&s.end))
    }

    /// Moves the center; the sweep shifts by the rotation angle because arc
    /// angles are measured against fixed, unrotated axes.
    pub fn apply_arc(&self, arc: &Arc) -> Arc {
        Arc::new(
            self.apply_point(&arc.center),
            arc.radius,
            arc.start_angle + self.angle_degrees,
            arc.end_angle + self.angle_degrees,
        )
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

/// Axis-aligned bounding box in the cross-section plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2d {
    pub min: Point2d,
    pub max: Point2d,
}

impl BoundingBox2d {
    pub fn new(min: Point2d, max: Point2d) -> Self {
        Self { min, max }
    }

    pub fn empty() -> Self {
        Self {
            min: Point2d::new(f64::INFINITY, f64::INFINITY),
            max: Point2d::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn from_points(points: &[Point2d]) -> Self {
        let mut bb = Self::empty();
        for p in points {
            bb.expand_to_include(p);
        }
        bb
    }

    pub fn expand_to_include(&mut self, p: &Point2d) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    pub fn center(&self) -> Point2d {
        self.min.midpoint(&self.max)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min: Point2d::new(self.min.x - margin, self.min.y - margin),
            max: Point2d::new(self.max.x + margin, self.max.y + margin),
        }
    }
}
