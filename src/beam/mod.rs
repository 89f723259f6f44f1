//! Beam tree construction: recursive clipping of walls against reflection beams.
//!
//! A beam is the wedge of space lit by a (virtual) source through a window on a wall.
//! Reflecting it off another wall mirrors the source and narrows the window to the part of
//! that wall the beam actually reaches; repeating this up to the maximum order yields a tree
//! of every geometrically possible reflection chain.

pub mod clip;
pub mod region;
pub mod tree;

pub use clip::Beam;
pub use region::{EndpointClass, PAIR_CROSSING, PairCrossing, SINGLE_CROSSING};
pub use tree::{BeamNode, BeamTree, NodeId};
