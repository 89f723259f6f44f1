//! Parallel implementation of path search

use crate::beam::BeamTree;
use crate::bsp::BspTree;
use crate::float_types::Real;
use crate::paths::traits::PathOps;
use crate::paths::{ReflectionPath, validate};
use nalgebra::Point2;
use rayon::prelude::*;

/// Validates beam-tree nodes on the rayon pool.
///
/// Nodes are independent of each other, and collecting an indexed parallel iterator keeps
/// the post-order, so the output matches [`SerialPathOps`](crate::paths::SerialPathOps).
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelPathOps;

impl ParallelPathOps {
    pub const fn new() -> Self {
        ParallelPathOps
    }
}

impl PathOps for ParallelPathOps {
    fn find_paths(
        &self,
        bsp: &BspTree,
        tree: &BeamTree,
        listener: &Point2<Real>,
    ) -> Vec<ReflectionPath> {
        tree.post_order()
            .par_iter()
            .filter_map(|&id| validate(bsp, tree, listener, id))
            .collect()
    }
}
