//! Reflection paths: validating beam-tree chains against a listener position.
//!
//! This module mirrors the layout of [`crate::bsp`]: a [`PathOps`] trait with a serial
//! implementation and, behind the `parallel` feature, a rayon-backed one.

pub mod traits;
pub mod validate;

pub mod serial;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use traits::PathOps;
pub use validate::validate;

pub use serial::SerialPathOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelPathOps;

use crate::float_types::Real;
use crate::geometry::WallId;
use nalgebra::Point2;

/// A vertex of a reflection path. Interior vertices carry the wall they reflect off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub point: Point2<Real>,
    pub wall: Option<WallId>,
}

impl PathPoint {
    pub const fn new(point: Point2<Real>, wall: Option<WallId>) -> Self {
        PathPoint { point, wall }
    }
}

/// A propagation path from the listener back to the source.
///
/// The first point is the listener, the last the source, and every point in between is a
/// reflection tagged with its wall.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectionPath {
    points: Vec<PathPoint>,
}

impl ReflectionPath {
    /// Wrap a point list; it must start at the listener and end at the source.
    pub(crate) const fn new(points: Vec<PathPoint>) -> Self {
        ReflectionPath { points }
    }

    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<PathPoint> {
        self.points
    }

    pub fn listener(&self) -> Point2<Real> {
        self.points[0].point
    }

    pub fn source(&self) -> Point2<Real> {
        self.points[self.points.len() - 1].point
    }

    /// Number of reflections.
    pub fn order(&self) -> usize {
        self.points.len() - 2
    }

    pub fn reflection_points(&self) -> &[PathPoint] {
        &self.points[1..self.points.len() - 1]
    }

    /// Walls reflected off, listener side first.
    pub fn walls(&self) -> Vec<WallId> {
        self.points.iter().filter_map(|p| p.wall).collect()
    }

    /// Total distance travelled from source to listener.
    pub fn length(&self) -> Real {
        self.points
            .windows(2)
            .map(|pair| (pair[1].point - pair[0].point).norm())
            .sum()
    }
}
