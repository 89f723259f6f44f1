//! BSP tree node data structure

use crate::float_types::Real;
use crate::geometry::{FRONT, SPANNING, Segment, WallId, segment_intersect};
use nalgebra::Point2;

/// A piece of a wall, tagged with the id of the wall it was cut from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    pub wall: WallId,
    pub segment: Segment,
}

impl Fragment {
    pub const fn new(wall: WallId, segment: Segment) -> Self {
        Fragment { wall, segment }
    }
}

/// First wall crossed by an occlusion query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: Point2<Real>,
    pub wall: WallId,
}

/// A BSP tree node: one wall fragment acting as splitting line, plus optional
/// front/back subtrees holding the fragments of every other wall.
#[derive(Debug, Clone)]
pub struct Node {
    /// Id of the *original* wall, even when `segment` is a clipped sub-range of it.
    pub wall: WallId,

    /// Splitting segment, collinear with the original wall and sharing its direction.
    pub segment: Segment,

    /// Fragments strictly in front of `segment`.
    pub front: Option<Box<Node>>,

    /// Fragments behind or on `segment`.
    pub back: Option<Box<Node>>,
}

impl Node {
    /// Create a new leaf node from a fragment
    pub const fn new(fragment: Fragment) -> Self {
        Self {
            wall: fragment.wall,
            segment: fragment.segment,
            front: None,
            back: None,
        }
    }

    /// Remove `fragments[splitter]` and distribute the rest into `(front, back)`.
    ///
    /// Fragments are visited last-to-first, so each output set lists them in reverse
    /// pending order. Spanning fragments are cut in two, both halves keeping their wall id.
    pub fn partition(
        mut fragments: Vec<Fragment>,
        splitter: usize,
    ) -> (Fragment, Vec<Fragment>, Vec<Fragment>) {
        let split_by = fragments.remove(splitter);
        let plane = split_by.segment;

        let mut front = Vec::with_capacity(fragments.len() / 2);
        let mut back = Vec::with_capacity(fragments.len() / 2);

        for fragment in fragments.into_iter().rev() {
            match plane.classify(&fragment.segment) {
                FRONT => front.push(fragment),
                SPANNING => match plane.split(&fragment.segment) {
                    Some((front_part, back_part)) => {
                        front.push(Fragment::new(fragment.wall, front_part));
                        back.push(Fragment::new(fragment.wall, back_part));
                    },
                    None => {
                        log::warn!(
                            "wall {} spans wall {} but cannot be split; keeping it behind",
                            fragment.wall,
                            split_by.wall
                        );
                        back.push(fragment);
                    },
                },
                _ => back.push(fragment),
            }
        }

        (split_by, front, back)
    }

    /// Front-to-back occlusion query along the segment `from→to`.
    ///
    /// Subtrees on `from`'s side are searched first, then this node's own segment, then the
    /// far side. Only crossings strictly inside both the query and the fragment count, and
    /// fragments of wall `ignore` are skipped.
    pub fn ray_trace(
        &self,
        from: &Point2<Real>,
        to: &Point2<Real>,
        ignore: Option<WallId>,
    ) -> Option<RayHit> {
        let (near, far) = if self.segment.orient_point(from) == FRONT {
            (&self.front, &self.back)
        } else {
            (&self.back, &self.front)
        };

        if let Some(hit) = near.as_ref().and_then(|node| node.ray_trace(from, to, ignore)) {
            return Some(hit);
        }

        if ignore != Some(self.wall) {
            let crossing = segment_intersect(from, to, &self.segment.p1, &self.segment.p2);
            if let Some(crossing) = crossing.filter(|c| c.is_interior()) {
                return Some(RayHit {
                    point: crossing.point,
                    wall: self.wall,
                });
            }
        }

        far.as_ref().and_then(|node| node.ray_trace(from, to, ignore))
    }

    /// Number of nodes in this subtree
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(
                [&node.front, &node.back]
                    .iter()
                    .filter_map(|child| child.as_ref().map(|boxed| boxed.as_ref())),
            );
        }
        count
    }

    /// Length of the longest root-to-leaf chain
    pub fn depth(&self) -> usize {
        let front = self.front.as_ref().map_or(0, |n| n.depth());
        let back = self.back.as_ref().map_or(0, |n| n.depth());
        1 + front.max(back)
    }

    /// All fragments of this subtree, in pre-order (node, front, back)
    pub fn all_fragments(&self) -> Vec<Fragment> {
        let mut result = Vec::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            result.push(Fragment::new(node.wall, node.segment));
            if let Some(back) = &node.back {
                stack.push(back);
            }
            if let Some(front) = &node.front {
                stack.push(front);
            }
        }
        result
    }
}
