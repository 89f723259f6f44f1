//! Serial implementation of BSP operations

use crate::bsp::node::{Fragment, Node};
use crate::bsp::traits::{BspOps, FirstFragmentStrategy, SplittingStrategy};

/// Serial implementation of BSP operations
#[derive(Debug, Clone, Default)]
pub struct SerialBspOps<SP: SplittingStrategy = FirstFragmentStrategy> {
    splitting_strategy: SP,
}

impl SerialBspOps<FirstFragmentStrategy> {
    pub const fn new() -> Self {
        Self {
            splitting_strategy: FirstFragmentStrategy,
        }
    }
}

impl<SP: SplittingStrategy> SerialBspOps<SP> {
    pub const fn with_strategy(strategy: SP) -> Self {
        Self {
            splitting_strategy: strategy,
        }
    }
}

impl<SP: SplittingStrategy> BspOps for SerialBspOps<SP> {
    fn build(&self, fragments: Vec<Fragment>) -> Option<Box<Node>> {
        if fragments.is_empty() {
            return None;
        }

        let splitter = self.splitting_strategy.pick_splitter(&fragments);
        let (split_by, front, back) = Node::partition(fragments, splitter);

        let mut node = Node::new(split_by);
        node.front = self.build(front);
        node.back = self.build(back);
        Some(Box::new(node))
    }
}
