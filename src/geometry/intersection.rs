//! Line/segment intersection, sidedness and mirroring in the plane.

use crate::float_types::Real;
use nalgebra::{Point2, Vector2};

/// Result of intersecting the infinite lines through two segments `a1→a2` and `b1→b2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Where the two lines cross.
    pub point: Point2<Real>,
    /// `point` lies strictly between `a1` and `a2`.
    pub on_segment_a: bool,
    /// `point` lies strictly between `b1` and `b2`.
    pub on_segment_b: bool,
    /// `point` lies on the open ray from `a1` through `a2`.
    pub on_ray_a: bool,
    /// `point` lies on the open ray from `b1` through `b2`.
    pub on_ray_b: bool,
}

impl Intersection {
    /// True if the crossing is strictly inside both segments.
    #[inline]
    pub const fn is_interior(&self) -> bool {
        self.on_segment_a && self.on_segment_b
    }
}

/// Intersect the lines through `a1→a2` and `b1→b2`.
///
/// Returns `None` when the lines are parallel or collinear; an overlapping collinear pair is
/// *not* distinguished from a disjoint parallel pair.
pub fn segment_intersect(
    a1: &Point2<Real>,
    a2: &Point2<Real>,
    b1: &Point2<Real>,
    b2: &Point2<Real>,
) -> Option<Intersection> {
    let da = a2 - a1;
    let db = b2 - b1;
    let denominator = db.y * da.x - db.x * da.y;
    if denominator == 0.0 {
        return None;
    }

    let offset = a1 - b1;
    let ua = (db.x * offset.y - db.y * offset.x) / denominator;
    let ub = (da.x * offset.y - da.y * offset.x) / denominator;

    Some(Intersection {
        point: a1 + da * ua,
        on_segment_a: ua > 0.0 && ua < 1.0,
        on_segment_b: ub > 0.0 && ub < 1.0,
        on_ray_a: ua > 0.0,
        on_ray_b: ub > 0.0,
    })
}

/// Left-hand normal of the directed line `p1→p2` (direction rotated by -90° in screen space).
#[inline]
pub fn line_normal(p1: &Point2<Real>, p2: &Point2<Real>) -> Vector2<Real> {
    let d = p2 - p1;
    Vector2::new(-d.y, d.x)
}

/// True iff `p` lies strictly on the positive side of the directed line `p1→p2`.
///
/// Points exactly on the line are *not* in front. Swapping `p1` and `p2` flips the answer
/// for every point off the line.
#[inline]
pub fn in_front_of(p: &Point2<Real>, p1: &Point2<Real>, p2: &Point2<Real>) -> bool {
    line_normal(p1, p2).dot(&(p - p1)) > 0.0
}

/// Reflect `p` across the infinite line through `p1` and `p2`.
///
/// `p1` and `p2` must differ; a zero-length line produces non-finite coordinates.
pub fn mirror(p: &Point2<Real>, p1: &Point2<Real>, p2: &Point2<Real>) -> Point2<Real> {
    let n = line_normal(p1, p2).normalize();
    let twice_distance = 2.0 * n.dot(&(p - p1));
    p - n * twice_distance
}
