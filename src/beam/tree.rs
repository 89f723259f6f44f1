//! Arena-backed beam tree: every legal reflection chain up to a maximum order.

use crate::beam::clip::Beam;
use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::geometry::{Segment, Wall, WallId};
use nalgebra::Point2;
use std::collections::VecDeque;

/// Index of a node inside its [`BeamTree`].
pub type NodeId = usize;

/// One reflection chain. The chain's walls are read by following `parent` links to the root.
#[derive(Debug, Clone, PartialEq)]
pub struct BeamNode {
    /// Wall reflected off last; `None` for the root, which stands for the real source.
    pub wall: Option<WallId>,
    pub parent: Option<NodeId>,
    /// The source mirrored across every wall of the chain.
    pub image_source: Point2<Real>,
    /// Part of `wall` reachable through the parent beam; `None` for the root.
    pub window: Option<Segment>,
    /// Children in wall-index order.
    pub children: Vec<NodeId>,
    /// Number of reflections in the chain.
    pub order: usize,
}

impl BeamNode {
    fn root(source: Point2<Real>) -> Self {
        BeamNode {
            wall: None,
            parent: None,
            image_source: source,
            window: None,
            children: Vec::new(),
            order: 0,
        }
    }

    pub const fn is_root(&self) -> bool {
        self.wall.is_none()
    }
}

/// Immutable tree of beams rooted at the real source. The root is always node `0`.
#[derive(Debug, Clone)]
pub struct BeamTree {
    nodes: Vec<BeamNode>,
    post_order: Vec<NodeId>,
    max_order: usize,
}

impl BeamTree {
    /// Enumerate every reflection chain of at most `max_order` reflections off `walls`.
    ///
    /// First-order beams pass through whole walls; deeper ones through the part of a wall
    /// left after clipping against the parent beam. Chains whose window clips away are not
    /// materialized, and no chain reflects off the same wall twice in a row.
    ///
    /// With `limit = Some(n)` construction fails once the tree would hold more than `n`
    /// nodes (root included).
    pub fn build(
        source: Point2<Real>,
        walls: &[Wall],
        max_order: usize,
        limit: Option<usize>,
    ) -> Result<Self, ValidationError> {
        let check_budget = |count: usize| match limit {
            Some(limit) if count > limit => Err(ValidationError::BeamTreeTooLarge { limit }),
            _ => Ok(()),
        };

        let mut nodes = vec![BeamNode::root(source)];
        check_budget(nodes.len())?;

        // Breadth-first, so ids grow with order and siblings stay in wall order.
        let mut pending = VecDeque::from([0]);
        while let Some(id) = pending.pop_front() {
            let node = &nodes[id];
            if node.order >= max_order {
                continue;
            }

            let beam = node
                .window
                .map(|window| Beam::new(node.image_source, window).normalized());
            let children: Vec<BeamNode> = walls
                .iter()
                .enumerate()
                .filter(|(wall_id, _)| node.wall != Some(*wall_id))
                .filter_map(|(wall_id, wall)| {
                    let window = match &beam {
                        Some(beam) => beam.clip(wall)?,
                        None => *wall,
                    };
                    Some(BeamNode {
                        wall: Some(wall_id),
                        parent: Some(id),
                        image_source: wall.mirror_point(&node.image_source),
                        window: Some(window),
                        children: Vec::new(),
                        order: node.order + 1,
                    })
                })
                .collect();

            check_budget(nodes.len() + children.len())?;

            for child in children {
                let child_id = nodes.len();
                nodes[id].children.push(child_id);
                nodes.push(child);
                pending.push_back(child_id);
            }
        }

        let post_order = post_order(&nodes);
        Ok(BeamTree {
            nodes,
            post_order,
            max_order,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true for a built tree; the root always exists.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> &BeamNode {
        &self.nodes[0]
    }

    pub fn node(&self, id: NodeId) -> Option<&BeamNode> {
        self.nodes.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &BeamNode)> {
        self.nodes.iter().enumerate()
    }

    /// The order the tree was built for.
    pub const fn max_order(&self) -> usize {
        self.max_order
    }

    /// Highest order actually reached; can be lower than [`BeamTree::max_order`]
    /// when every deeper chain clips away.
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|node| node.order).max().unwrap_or(0)
    }

    /// Depth-first order with children (in wall order) before their parent; the root is last.
    pub fn post_order(&self) -> &[NodeId] {
        &self.post_order
    }

    /// Walls of the chain ending at `id`, last reflection first.
    pub fn chain(&self, id: NodeId) -> Vec<WallId> {
        let mut walls = Vec::new();
        let mut current = self.nodes.get(id);
        while let Some(node) = current {
            walls.extend(node.wall);
            current = node.parent.and_then(|parent| self.nodes.get(parent));
        }
        walls
    }

    pub fn nodes_at_order(&self, order: usize) -> impl Iterator<Item = NodeId> + '_ {
        self.iter()
            .filter(move |(_, node)| node.order == order)
            .map(|(id, _)| id)
    }
}

fn post_order(nodes: &[BeamNode]) -> Vec<NodeId> {
    let mut order = Vec::with_capacity(nodes.len());
    let mut stack = vec![(0, false)];
    while let Some((id, visited)) = stack.pop() {
        if visited {
            order.push(id);
            continue;
        }
        stack.push((id, true));
        stack.extend(nodes[id].children.iter().rev().map(|&child| (child, false)));
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Wall> {
        vec![
            Segment::from_coords([0.0, 0.0], [10.0, 0.0]),
            Segment::from_coords([10.0, 0.0], [10.0, 10.0]),
            Segment::from_coords([10.0, 10.0], [0.0, 10.0]),
            Segment::from_coords([0.0, 10.0], [0.0, 0.0]),
        ]
    }

    fn source() -> Point2<Real> {
        Point2::new(3.0, 4.0)
    }

    #[test]
    fn order_zero_is_root_only() {
        let tree = BeamTree::build(source(), &square(), 0, None).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.root().is_root());
        assert_eq!(tree.post_order(), &[0]);
        assert_eq!(tree.max_depth(), 0);
    }

    #[test]
    fn first_order_has_one_child_per_wall() {
        let walls = square();
        let tree = BeamTree::build(source(), &walls, 1, None).unwrap();
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.root().children, vec![1, 2, 3, 4]);
        for (index, &child) in tree.root().children.iter().enumerate() {
            let node = tree.node(child).unwrap();
            assert_eq!(node.wall, Some(index));
            assert_eq!(node.window, Some(walls[index]));
            assert_eq!(node.image_source, walls[index].mirror_point(&source()));
            assert_eq!(node.order, 1);
        }
        // Mirror across the floor y = 0.
        assert_eq!(tree.node(1).unwrap().image_source, Point2::new(3.0, -4.0));
    }

    #[test]
    fn chains_never_repeat_a_wall_back_to_back() {
        let tree = BeamTree::build(source(), &square(), 4, None).unwrap();
        assert_eq!(tree.max_depth(), 4);
        for (_, node) in tree.iter() {
            for &child in &node.children {
                let child = tree.node(child).unwrap();
                assert_ne!(child.wall, node.wall);
                assert_eq!(child.order, node.order + 1);
            }
        }
    }

    #[test]
    fn post_order_visits_children_first() {
        let tree = BeamTree::build(source(), &square(), 3, None).unwrap();
        let order = tree.post_order();
        assert_eq!(order.len(), tree.len());
        assert_eq!(order.last(), Some(&0));

        let mut position = vec![0; tree.len()];
        for (index, &id) in order.iter().enumerate() {
            position[id] = index;
        }
        for (id, node) in tree.iter() {
            for pair in node.children.windows(2) {
                assert!(position[pair[0]] < position[pair[1]]);
            }
            if let Some(parent) = node.parent {
                assert!(position[id] < position[parent]);
            }
        }
    }

    #[test]
    fn chain_lists_walls_towards_the_root() {
        let tree = BeamTree::build(source(), &square(), 2, None).unwrap();
        let (id, node) = tree
            .iter()
            .find(|(_, node)| node.order == 2)
            .expect("second-order beam");
        let parent = tree.node(node.parent.unwrap()).unwrap();
        assert_eq!(tree.chain(id), vec![node.wall.unwrap(), parent.wall.unwrap()]);
        assert!(tree.chain(0).is_empty());
        assert_eq!(tree.nodes_at_order(1).count(), 4);
    }

    #[test]
    fn node_budget_is_enforced() {
        let err = BeamTree::build(source(), &square(), 3, Some(10)).unwrap_err();
        assert_eq!(err, ValidationError::BeamTreeTooLarge { limit: 10 });

        let tree = BeamTree::build(source(), &square(), 1, Some(5)).unwrap();
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn no_walls_means_no_reflections() {
        let tree = BeamTree::build(source(), &[], 4, None).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.max_order(), 4);
        assert_eq!(tree.max_depth(), 0);
    }
}
