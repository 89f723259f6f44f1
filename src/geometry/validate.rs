//! Input checks run once, before any tree is built.

use crate::errors::ValidationError;
use crate::float_types::{Real, tolerance};
use crate::geometry::Wall;
use nalgebra::Point2;

/// Reject points with a NaN or infinite coordinate.
pub fn validate_point(point: &Point2<Real>) -> Result<(), ValidationError> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidCoordinate(*point))
    }
}

/// Every wall must have finite endpoints that are further apart than [`tolerance`].
pub fn validate_walls(walls: &[Wall]) -> Result<(), ValidationError> {
    walls.iter().enumerate().try_for_each(|(index, wall)| {
        validate_point(&wall.p1)?;
        validate_point(&wall.p2)?;
        if wall.length() <= tolerance() {
            return Err(ValidationError::DegenerateWall {
                index,
                point: wall.p1,
            });
        }
        Ok(())
    })
}
