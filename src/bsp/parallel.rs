//! Parallel implementation of BSP operations

use crate::bsp::node::{Fragment, Node};
use crate::bsp::traits::{BspOps, FirstFragmentStrategy, SplittingStrategy};

/// Below this many pending fragments both subtrees are built on the current thread.
const SEQUENTIAL_THRESHOLD: usize = 64;

/// Parallel implementation of BSP operations.
///
/// Produces exactly the tree [`SerialBspOps`](crate::bsp::serial::SerialBspOps) builds
/// with the same strategy; only the front and back subtrees are built concurrently.
#[derive(Debug, Clone, Default)]
pub struct ParallelBspOps<SP: SplittingStrategy = FirstFragmentStrategy> {
    splitting_strategy: SP,
}

impl ParallelBspOps<FirstFragmentStrategy> {
    pub const fn new() -> Self {
        Self {
            splitting_strategy: FirstFragmentStrategy,
        }
    }
}

impl<SP: SplittingStrategy> ParallelBspOps<SP> {
    pub const fn with_strategy(strategy: SP) -> Self {
        Self {
            splitting_strategy: strategy,
        }
    }
}

impl<SP: SplittingStrategy + Sync> BspOps for ParallelBspOps<SP> {
    fn build(&self, fragments: Vec<Fragment>) -> Option<Box<Node>> {
        if fragments.is_empty() {
            return None;
        }

        let pending = fragments.len();
        let splitter = self.splitting_strategy.pick_splitter(&fragments);
        let (split_by, front, back) = Node::partition(fragments, splitter);

        let mut node = Node::new(split_by);
        let (front, back) = if pending < SEQUENTIAL_THRESHOLD {
            (self.build(front), self.build(back))
        } else {
            rayon::join(|| self.build(front), || self.build(back))
        };
        node.front = front;
        node.back = back;
        Some(Box::new(node))
    }
}
