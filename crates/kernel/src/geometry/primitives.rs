use serde::{Deserialize, Serialize};

use super::point::Point2d;
use super::vector::Vec2;
use super::normalize_degrees;

/// A circle in the cross-section plane, used to model one rounded corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2d,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point2d, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Signed distance from `p` to the circle (negative inside).
    pub fn signed_distance(&self, p: &Point2d) -> f64 {
        self.center.distance_to(p) - self.radius
    }

    /// True when `other` lies strictly inside this circle without touching it.
    pub fn strictly_contains(&self, other: &Circle, tol: f64) -> bool {
        self.center.distance_to(&other.center) + other.radius < self.radius - tol
    }
}

/// A straight edge between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2d,
    pub end: Point2d,
}

impl Segment {
    pub fn new(start: Point2d, end: Point2d) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Orientation of `end - start` in degrees, in `(-180, 180]`.
    pub fn direction_degrees(&self) -> f64 {
        (self.end - self.start).angle_degrees()
    }
}

/// A circular arc drawn counter-clockwise from `start_angle` to `end_angle`.
///
/// Angles are in degrees measured from the positive x axis of the arc's own
/// center. They are kept as produced (not normalized) so a renderer receives
/// exactly the values the engine computed; `end_angle` may be smaller than
/// `start_angle`, in which case the sweep wraps through 360.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point2d,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Arc {
    pub fn new(center: Point2d, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
        }
    }

    /// Point on the arc's circle at `angle` degrees.
    pub fn point_at(&self, angle: f64) -> Point2d {
        let rad = angle.to_radians();
        self.center + Vec2::new(rad.cos(), rad.sin()) * self.radius
    }

    pub fn start_point(&self) -> Point2d {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Point2d {
        self.point_at(self.end_angle)
    }

    /// Counter-clockwise sweep in degrees, in `[0, 360)`.
    pub fn sweep(&self) -> f64 {
        normalize_degrees(self.end_angle - self.start_angle)
    }

    /// Whether the direction `angle` (degrees) falls inside the sweep.
    pub fn contains_angle(&self, angle: f64, angular_tol: f64) -> bool {
        let offset = normalize_degrees(angle - self.start_angle);
        offset <= self.sweep() + angular_tol || offset >= 360.0 - angular_tol
    }

    pub fn length(&self) -> f64 {
        self.radius * self.sweep().to_radians()
    }
}
