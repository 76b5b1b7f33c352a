use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use super::vector::Vec2;

/// A point in the 2D cross-section plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2d {
    pub x: f64,
    pub y: f64,
}

impl Point2d {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    pub fn distance_squared_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            x: (self.x + other.x) * 0.5,
            y: (self.y + other.y) * 0.5,
        }
    }

    /// Component-wise comparison within an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol && (self.y - other.y).abs() <= tol
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Add<Vec2> for Point2d {
    type Output = Point2d;
    fn add(self, rhs: Vec2) -> Self::Output {
        Point2d::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2d {
    type Output = Vec2;
    fn sub(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<Vec2> for Point2d {
    type Output = Point2d;
    fn sub(self, rhs: Vec2) -> Self::Output {
        Point2d::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<nalgebra::Point2<f64>> for Point2d {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point2d> for nalgebra::Point2<f64> {
    fn from(p: Point2d) -> Self {
        nalgebra::Point2::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point2d::new(80.0, 20.0);
        let b = Point2d::new(90.0, 10.0);
        assert!((a.distance_to(&b) - 200.0_f64.sqrt()).abs() < 1e-12);
        assert!((a.distance_squared_to(&b) - 200.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_midpoint() {
        let m = Point2d::ORIGIN.midpoint(&Point2d::new(100.0, 40.0));
        assert!((m.x - 50.0).abs() < 1e-12);
        assert!((m.y - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_sub_gives_vector() {
        let v = Point2d::new(3.0, 4.0) - Point2d::new(1.0, 1.0);
        assert!((v.x - 2.0).abs() < 1e-12);
        assert!((v.y - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_add_vector() {
        let p = Point2d::new(1.0, 2.0) + Vec2::new(10.0, 20.0);
        assert!(p.approx_eq(&Point2d::new(11.0, 22.0), 1e-12));
    }

    #[test]
    fn test_nalgebra_round_trip() {
        let p = Point2d::new(-3.5, 7.25);
        let na: nalgebra::Point2<f64> = p.into();
        assert_eq!(Point2d::from(na), p);
    }
}
