//! Validation errors

use crate::float_types::Real;
use nalgebra::Point2;

/// All the possible validation issues we might encounter while building or querying a solver
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (InvalidCoordinate) A wall endpoint, the source or the listener has a NaN or infinite
    #[error("(InvalidCoordinate) The coordinate ({0}) has a NaN or infinite")]
    InvalidCoordinate(Point2<Real>),
    /// (DegenerateWall) A wall is no longer than the tolerance
    #[error("(DegenerateWall) Wall {index} is too short at: {point}")]
    DegenerateWall { index: usize, point: Point2<Real> },
    /// (BeamTreeTooLarge) The beam tree outgrew the configured node budget
    #[error("(BeamTreeTooLarge) The beam tree exceeded {limit} nodes")]
    BeamTreeTooLarge { limit: usize },
}
