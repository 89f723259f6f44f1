//! Validation of a single beam-tree chain for one listener

use crate::beam::{BeamTree, NodeId};
use crate::bsp::BspTree;
use crate::float_types::Real;
use crate::paths::{PathPoint, ReflectionPath};
use nalgebra::Point2;

/// Check whether the chain ending at `id` is an unobstructed path to `listener`.
///
/// Starting at the listener, each hop aims at the node's image source and must first hit
/// the node's own wall, strictly inside it, ignoring the wall just reflected off. The hit
/// becomes the next reflection point and the walk continues at the parent. At the root the
/// remaining hop to the real source must be unobstructed.
pub fn validate(
    bsp: &BspTree,
    tree: &BeamTree,
    listener: &Point2<Real>,
    id: NodeId,
) -> Option<ReflectionPath> {
    let mut node = tree.node(id)?;
    let mut points = Vec::with_capacity(node.order + 2);
    points.push(PathPoint::new(*listener, None));

    let mut from = *listener;
    let mut ignore = None;
    for _ in 0..=node.order {
        let hit = bsp.ray_trace(&from, &node.image_source, ignore);
        match node.wall {
            None => {
                if hit.is_some() {
                    return None;
                }
                points.push(PathPoint::new(node.image_source, None));
                return Some(ReflectionPath::new(points));
            },
            Some(wall) => {
                let hit = hit.filter(|hit| hit.wall == wall)?;
                points.push(PathPoint::new(hit.point, Some(wall)));
                from = hit.point;
                ignore = Some(wall);
                node = tree.node(node.parent?)?;
            },
        }
    }
    None
}
