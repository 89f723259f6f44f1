//! Traits defining BSP tree construction for dependency inversion

use crate::bsp::node::{Fragment, Node};
use crate::float_types::Real;
use crate::geometry::{BACK, FRONT};

/// Builds a BSP tree out of wall fragments
pub trait BspOps {
    /// Build a BSP tree from the given fragments; `None` for an empty set
    fn build(&self, fragments: Vec<Fragment>) -> Option<Box<Node>>;
}

/// Trait for picking the splitting fragment at each level
pub trait SplittingStrategy {
    /// Index into `fragments` of the fragment to split by. `fragments` is never empty.
    fn pick_splitter(&self, fragments: &[Fragment]) -> usize;
}

/// Always split by the first pending fragment.
///
/// With walls fed in sequence order this makes the first wall the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFragmentStrategy;

impl SplittingStrategy for FirstFragmentStrategy {
    fn pick_splitter(&self, _fragments: &[Fragment]) -> usize {
        0
    }
}

/// Splitting strategy using a balanced heuristic over a sample of candidates
#[derive(Debug, Clone, Copy)]
pub struct BalancedSplittingStrategy {
    pub span_weight: Real,
    pub balance_weight: Real,
}

impl Default for BalancedSplittingStrategy {
    fn default() -> Self {
        Self {
            span_weight: 8.0,
            balance_weight: 1.0,
        }
    }
}

impl SplittingStrategy for BalancedSplittingStrategy {
    fn pick_splitter(&self, fragments: &[Fragment]) -> usize {
        let mut best_index = 0;
        let mut best_score = Real::MAX;

        // Take a sample of fragments as candidate splitters
        let sample_size = fragments.len().min(20);

        fragments.iter().take(sample_size).enumerate().for_each(|(index, candidate)| {
            let (num_front, num_back, num_spanning) = fragments
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != index)
                .map(|(_, fragment)| match candidate.segment.classify(&fragment.segment) {
                    FRONT => (1, 0, 0),
                    BACK => (0, 1, 0),
                    _ => (0, 0, 1),
                })
                .fold((0i64, 0i64, 0i64), |acc, x| (acc.0 + x.0, acc.1 + x.1, acc.2 + x.2));

            let score = self.span_weight * num_spanning as Real
                + self.balance_weight * ((num_front - num_back) as Real).abs();

            if score < best_score {
                best_score = score;
                best_index = index;
            }
        });

        best_index
    }
}
