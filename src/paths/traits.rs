//! Traits defining path search for dependency inversion

use crate::beam::BeamTree;
use crate::bsp::BspTree;
use crate::float_types::Real;
use crate::paths::ReflectionPath;
use nalgebra::Point2;

/// Finds every valid reflection path for one listener
pub trait PathOps {
    /// Validate every node of `tree` and return the accepted paths in the tree's
    /// post-order (children before parent, walls in index order, direct path last).
    fn find_paths(
        &self,
        bsp: &BspTree,
        tree: &BeamTree,
        listener: &Point2<Real>,
    ) -> Vec<ReflectionPath>;
}
