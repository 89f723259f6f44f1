use crate::float_types::Real;
use crate::geometry::intersection::{
    Intersection, in_front_of, line_normal, mirror, segment_intersect,
};
use nalgebra::{Point2, Vector2};

/// Endpoint lies strictly in front of a directed line.
pub const FRONT: i8 = 1;
/// Endpoint lies behind or exactly on a directed line.
pub const BACK: i8 = 2;
/// One endpoint in front, the other behind.
pub const SPANNING: i8 = 3;

/// A directed, finite line segment `p1→p2`.
///
/// Walls, BSP fragments and beam windows are all segments. The endpoint order is
/// significant: it fixes which side of the supporting line is "in front".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Point2<Real>,
    pub p2: Point2<Real>,
}

impl Segment {
    pub const fn new(p1: Point2<Real>, p2: Point2<Real>) -> Self {
        Segment { p1, p2 }
    }

    /// Build a segment from raw `[x, y]` pairs.
    pub fn from_coords(p1: [Real; 2], p2: [Real; 2]) -> Self {
        Segment::new(Point2::new(p1[0], p1[1]), Point2::new(p2[0], p2[1]))
    }

    pub fn direction(&self) -> Vector2<Real> {
        self.p2 - self.p1
    }

    /// Non-unit normal pointing to the front side.
    pub fn normal(&self) -> Vector2<Real> {
        line_normal(&self.p1, &self.p2)
    }

    pub fn length(&self) -> Real {
        self.direction().norm()
    }

    pub fn midpoint(&self) -> Point2<Real> {
        self.p1 + self.direction() * 0.5
    }

    /// Same segment with its endpoints swapped (front and back exchange roles).
    pub const fn reversed(&self) -> Self {
        Segment::new(self.p2, self.p1)
    }

    pub fn is_finite(&self) -> bool {
        [self.p1.x, self.p1.y, self.p2.x, self.p2.y]
            .iter()
            .all(|c| c.is_finite())
    }

    /// Classify a point against the supporting line: [`FRONT`] or [`BACK`].
    #[inline]
    pub fn orient_point(&self, point: &Point2<Real>) -> i8 {
        if in_front_of(point, &self.p1, &self.p2) {
            FRONT
        } else {
            BACK
        }
    }

    /// Classify another segment against the supporting line: [`FRONT`], [`BACK`] or [`SPANNING`].
    pub fn classify(&self, other: &Segment) -> i8 {
        self.orient_point(&other.p1) | self.orient_point(&other.p2)
    }

    /// Cut a spanning segment with this segment's supporting line.
    ///
    /// Returns `(front_piece, back_piece)`, both keeping `other`'s direction, or `None`
    /// if the lines are parallel.
    pub fn split(&self, other: &Segment) -> Option<(Segment, Segment)> {
        let cut = self.intersect(other)?.point;
        if self.orient_point(&other.p1) == FRONT {
            Some((Segment::new(other.p1, cut), Segment::new(cut, other.p2)))
        } else {
            Some((Segment::new(cut, other.p2), Segment::new(other.p1, cut)))
        }
    }

    /// Intersect the supporting lines of `self` (side A) and `other` (side B).
    pub fn intersect(&self, other: &Segment) -> Option<Intersection> {
        segment_intersect(&self.p1, &self.p2, &other.p1, &other.p2)
    }

    /// Reflect `point` across the supporting line.
    pub fn mirror_point(&self, point: &Point2<Real>) -> Point2<Real> {
        mirror(point, &self.p1, &self.p2)
    }

    /// Euclidean distance from `point` to the closest point of the finite segment.
    pub fn distance_to_point(&self, point: &Point2<Real>) -> Real {
        let d = self.direction();
        let len_sq = d.norm_squared();
        if len_sq == 0.0 {
            return (point - self.p1).norm();
        }
        let t = ((point - self.p1).dot(&d) / len_sq).clamp(0.0, 1.0);
        (point - (self.p1 + d * t)).norm()
    }

    /// True if `point` is within `tolerance` of the finite segment.
    pub fn contains_point(&self, point: &Point2<Real>, tolerance: Real) -> bool {
        self.distance_to_point(point) <= tolerance
    }
}

impl From<[[Real; 2]; 2]> for Segment {
    fn from(coords: [[Real; 2]; 2]) -> Self {
        Segment::from_coords(coords[0], coords[1])
    }
}
