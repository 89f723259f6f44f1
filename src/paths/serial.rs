//! Serial implementation of path search

use crate::beam::BeamTree;
use crate::bsp::BspTree;
use crate::float_types::Real;
use crate::paths::traits::PathOps;
use crate::paths::{ReflectionPath, validate};
use nalgebra::Point2;

/// Serial implementation of path search
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialPathOps;

impl SerialPathOps {
    pub const fn new() -> Self {
        SerialPathOps
    }
}

impl PathOps for SerialPathOps {
    fn find_paths(
        &self,
        bsp: &BspTree,
        tree: &BeamTree,
        listener: &Point2<Real>,
    ) -> Vec<ReflectionPath> {
        tree.post_order()
            .iter()
            .filter_map(|&id| validate(bsp, tree, listener, id))
            .collect()
    }
}
