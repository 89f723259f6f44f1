//! Solver facade: builds the occlusion index and the beam tree once, then answers
//! listener queries against them.

use crate::beam::BeamTree;
use crate::bsp::{BalancedSplittingStrategy, BspTree};
use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::geometry::{Wall, validate_point, validate_walls};
use crate::paths::{PathOps, ReflectionPath};
use nalgebra::Point2;

#[cfg(not(feature = "parallel"))]
use crate::bsp::SerialBspOps as DefaultBspOps;
#[cfg(not(feature = "parallel"))]
use crate::paths::SerialPathOps as DefaultPathOps;

#[cfg(feature = "parallel")]
use crate::bsp::ParallelBspOps as DefaultBspOps;
#[cfg(feature = "parallel")]
use crate::paths::ParallelPathOps as DefaultPathOps;

/// How the occlusion index picks its splitting walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Splitting {
    /// Split by walls in sequence order.
    #[default]
    First,
    /// [`BalancedSplittingStrategy`] with its default weights.
    Balanced,
}

/// Reflection order used when none is given.
pub const DEFAULT_MAX_ORDER: usize = 4;

/// Construction parameters for a [`Solver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum number of reflections per path. `0` keeps only the direct path.
    pub max_order: usize,
    /// Fail construction instead of growing the beam tree past this many nodes.
    pub max_beam_nodes: Option<usize>,
    pub splitting: Splitting,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_order: DEFAULT_MAX_ORDER,
            max_beam_nodes: None,
            splitting: Splitting::First,
        }
    }
}

/// Reflection paths for a fixed set of walls and a fixed source.
///
/// Both trees are built in the constructor and never change afterwards, so a `Solver` can be
/// shared across threads and queried concurrently. Moving the source or editing the walls
/// means building a new `Solver`; moving the listener does not.
///
/// ```
/// use beamtrace2d::{Segment, Solver};
/// use nalgebra::Point2;
///
/// let walls = vec![Segment::from_coords([-10.0, 0.0], [10.0, 0.0])];
/// let solver = Solver::with_max_order(walls, Point2::new(-2.0, 2.0), 1).unwrap();
/// let paths = solver.get_paths(&Point2::new(2.0, 2.0)).unwrap();
///
/// // The floor bounce, then the direct path.
/// assert_eq!(paths.len(), 2);
/// assert_eq!(paths[0].walls(), vec![0]);
/// assert_eq!(paths[1].order(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    walls: Vec<Wall>,
    source: Point2<Real>,
    config: SolverConfig,
    bsp: BspTree,
    beam_tree: BeamTree,
}

impl Solver {
    /// Solver for paths of up to [`DEFAULT_MAX_ORDER`] reflections.
    pub fn new(walls: Vec<Wall>, source: Point2<Real>) -> Result<Self, ValidationError> {
        Self::with_config(walls, source, SolverConfig::default())
    }

    pub fn with_max_order(
        walls: Vec<Wall>,
        source: Point2<Real>,
        max_order: usize,
    ) -> Result<Self, ValidationError> {
        Self::with_config(
            walls,
            source,
            SolverConfig {
                max_order,
                ..SolverConfig::default()
            },
        )
    }

    /// Validate the input, then build the occlusion index and the beam tree.
    pub fn with_config(
        walls: Vec<Wall>,
        source: Point2<Real>,
        config: SolverConfig,
    ) -> Result<Self, ValidationError> {
        validate_walls(&walls)?;
        validate_point(&source)?;

        let bsp = match config.splitting {
            Splitting::First => BspTree::from_walls(&walls),
            Splitting::Balanced => BspTree::from_walls_with(
                &walls,
                &DefaultBspOps::with_strategy(BalancedSplittingStrategy::default()),
            ),
        };
        let beam_tree = BeamTree::build(source, &walls, config.max_order, config.max_beam_nodes)?;

        log::debug!(
            "solver: {} walls, bsp {} nodes (depth {}), beam tree {} nodes up to order {}",
            walls.len(),
            bsp.node_count(),
            bsp.depth(),
            beam_tree.len(),
            beam_tree.max_depth(),
        );

        Ok(Self {
            walls,
            source,
            config,
            bsp,
            beam_tree,
        })
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub const fn source(&self) -> Point2<Real> {
        self.source
    }

    pub const fn max_order(&self) -> usize {
        self.config.max_order
    }

    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub const fn bsp(&self) -> &BspTree {
        &self.bsp
    }

    pub const fn beam_tree(&self) -> &BeamTree {
        &self.beam_tree
    }

    /// Every unobstructed reflection path between `listener` and the source.
    ///
    /// Paths come in beam-tree post-order: deeper chains before the chains they extend,
    /// walls in index order at each branch, and the direct path (if clear) last.
    pub fn get_paths(
        &self,
        listener: &Point2<Real>,
    ) -> Result<Vec<ReflectionPath>, ValidationError> {
        self.get_paths_with(listener, &DefaultPathOps::new())
    }

    /// [`Solver::get_paths`] with caller-supplied path search.
    pub fn get_paths_with<O: PathOps>(
        &self,
        listener: &Point2<Real>,
        ops: &O,
    ) -> Result<Vec<ReflectionPath>, ValidationError> {
        validate_point(listener)?;
        let paths = ops.find_paths(&self.bsp, &self.beam_tree, listener);
        log::trace!(
            "listener {}: {} of {} candidates valid",
            listener,
            paths.len(),
            self.beam_tree.len()
        );
        Ok(paths)
    }

    /// Paths with at most `order` reflections, in [`Solver::get_paths`] order.
    pub fn get_paths_up_to(
        &self,
        listener: &Point2<Real>,
        order: usize,
    ) -> Result<Vec<ReflectionPath>, ValidationError> {
        let mut paths = self.get_paths(listener)?;
        paths.retain(|path| path.order() <= order);
        Ok(paths)
    }
}
