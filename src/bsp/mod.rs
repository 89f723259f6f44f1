//! Binary Space Partitioning (BSP) occlusion index over the walls
//!
//! This module provides BSP tree construction with dependency inversion,
//! allowing for different algorithm implementations (serial/parallel),
//! and the front-to-back occlusion query used to validate reflection paths.

pub mod node;
pub mod traits;

pub mod serial;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use node::{Fragment, Node, RayHit};
pub use traits::{BalancedSplittingStrategy, BspOps, FirstFragmentStrategy, SplittingStrategy};

pub use serial::SerialBspOps;

#[cfg(feature = "parallel")]
pub use parallel::ParallelBspOps;

use crate::float_types::Real;
use crate::geometry::{Wall, WallId};
use nalgebra::Point2;

/// An immutable BSP tree over a wall sequence. Each wall's id is its index in that sequence.
#[derive(Debug, Clone, Default)]
pub struct BspTree {
    root: Option<Box<Node>>,
}

impl BspTree {
    /// Build with the default operations (parallel when the `parallel` feature is on)
    /// and [`FirstFragmentStrategy`].
    pub fn from_walls(walls: &[Wall]) -> Self {
        #[cfg(not(feature = "parallel"))]
        let ops = SerialBspOps::new();
        #[cfg(feature = "parallel")]
        let ops = ParallelBspOps::new();

        Self::from_walls_with(walls, &ops)
    }

    /// Build with caller-supplied operations.
    pub fn from_walls_with<O: BspOps>(walls: &[Wall], ops: &O) -> Self {
        let fragments = walls
            .iter()
            .enumerate()
            .map(|(id, wall)| Fragment::new(id, *wall))
            .collect();
        Self {
            root: ops.build(fragments),
        }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.node_count())
    }

    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.depth())
    }

    /// First wall fragment strictly crossed by the segment `from→to`, in front-to-back order
    /// as seen from `from`, skipping wall `ignore`. `None` if nothing blocks it.
    pub fn ray_trace(
        &self,
        from: &Point2<Real>,
        to: &Point2<Real>,
        ignore: Option<WallId>,
    ) -> Option<RayHit> {
        self.root.as_ref()?.ray_trace(from, to, ignore)
    }

    /// True if any wall other than `ignore` strictly crosses `from→to`.
    pub fn is_occluded(
        &self,
        from: &Point2<Real>,
        to: &Point2<Real>,
        ignore: Option<WallId>,
    ) -> bool {
        self.ray_trace(from, to, ignore).is_some()
    }

    /// Every fragment stored in the tree (pre-order).
    pub fn fragments(&self) -> Vec<Fragment> {
        self.root.as_ref().map_or_else(Vec::new, |root| root.all_fragments())
    }
}
