//! Stateless 2D geometry kernel: segments, line intersection, sidedness and mirroring.

pub mod intersection;
pub mod segment;
pub mod validate;

pub use intersection::{Intersection, in_front_of, line_normal, mirror, segment_intersect};
pub use segment::{BACK, FRONT, SPANNING, Segment};
pub use validate::{validate_point, validate_walls};

/// A wall of the enclosure. Its id is its position in the wall sequence.
pub type Wall = Segment;

/// Position of a wall in the sequence handed to the solver.
pub type WallId = usize;
