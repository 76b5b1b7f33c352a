pub mod point;
pub mod vector;
pub mod primitives;
pub mod intersection;
pub mod transform;

/// Normalize an angle in degrees to `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if a >= 360.0 { 0.0 } else { a }
}

/// Angle in degrees of the direction `(dx, dy)`, in `(-180, 180]`.
pub fn atan2_degrees(dy: f64, dx: f64) -> f64 {
    dy.atan2(dx).to_degrees()
}
