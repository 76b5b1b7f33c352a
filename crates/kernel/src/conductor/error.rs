use thiserror::Error;

use crate::geometry::point::Point2d;

/// Errors raised while assembling a conductor outline.
///
/// Every variant reflects invalid input; the assembler never substitutes a
/// best-effort outline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid dimensions: {reason}")]
    InvalidDimensions { reason: String },

    #[error(
        "upper corner center (y = {upper_center_y}) must lie strictly above \
         lower corner center (y = {lower_center_y})"
    )]
    InvalidCornerOrdering {
        upper_center_y: f64,
        lower_center_y: f64,
    },

    #[error("corner circles intersect but no candidate lies right of the upper corner center: {candidates:?}")]
    DegenerateIntersection { candidates: Vec<Point2d> },

    #[error("corner circles are nested one inside the other")]
    NestedCorners,
}

impl GeometryError {
    pub(crate) fn dimensions(reason: impl Into<String>) -> Self {
        GeometryError::InvalidDimensions {
            reason: reason.into(),
        }
    }
}
