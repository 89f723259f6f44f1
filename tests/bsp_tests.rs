mod support;

use beamtrace2d::{
    Real, Segment,
    bsp::{BalancedSplittingStrategy, BspTree, SerialBspOps},
};
use nalgebra::Point2;
use std::collections::BTreeSet;

use crate::support::{
    approx_point, canonical_listener, canonical_room, canonical_source, furnished_room, walls,
};

/// Pairs of points scattered over the canonical room, off any grid the walls line up with.
fn probe_pairs() -> Vec<(Point2<Real>, Point2<Real>)> {
    let points: Vec<Point2<Real>> = (0..9)
        .flat_map(|i| (0..9).map(move |j| (i, j)))
        .map(|(i, j)| Point2::new(31.7 + 29.3 * i as Real, 47.9 + 27.1 * j as Real))
        .collect();
    points
        .iter()
        .enumerate()
        .flat_map(|(i, a)| points.iter().skip(i + 1).step_by(7).map(move |b| (*a, *b)))
        .collect()
}

#[test]
fn empty_tree_blocks_nothing() {
    let tree = BspTree::from_walls(&[]);
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert_eq!(tree.node_count(), 0);
    assert_eq!(tree.depth(), 0);
    assert!(tree.fragments().is_empty());
    assert!(tree.ray_trace(&Point2::new(0.0, 0.0), &Point2::new(1.0, 1.0), None).is_none());
}

#[test]
fn first_wall_is_the_root_and_every_wall_is_kept() {
    let room = canonical_room();
    let tree = BspTree::from_walls(&room);
    let root = tree.root().expect("non-empty");
    assert_eq!(root.wall, 0);
    assert_eq!(root.segment, room[0]);

    let fragments = tree.fragments();
    assert_eq!(fragments.len(), tree.node_count());
    assert!(tree.node_count() >= room.len());
    assert!(tree.depth() <= tree.node_count());

    let ids: BTreeSet<_> = fragments.iter().map(|f| f.wall).collect();
    assert_eq!(ids, (0..room.len()).collect());
}

#[test]
fn fragments_stay_on_their_wall() {
    let room = furnished_room();
    let tree = BspTree::from_walls(&room);
    for fragment in tree.fragments() {
        let wall = room[fragment.wall];
        for end in [fragment.segment.p1, fragment.segment.p2] {
            assert!(wall.contains_point(&end, 1e-6), "{fragment:?} left wall {wall:?}");
        }
        // Splitting never flips a fragment; cuts at a shared corner leave empty pieces.
        assert!(fragment.segment.direction().dot(&wall.direction()) >= 0.0);
    }
}

#[test]
fn ray_trace_reports_nearest_wall_and_honours_ignore() {
    let mut room = walls(&[
        [[0.0, 0.0], [100.0, 0.0]],
        [[100.0, 0.0], [100.0, 60.0]],
        [[100.0, 60.0], [0.0, 60.0]],
        [[0.0, 60.0], [0.0, 0.0]],
    ]);
    room.push(Segment::from_coords([80.0, 10.0], [80.0, 50.0]));
    let tree = BspTree::from_walls(&room);

    let from = Point2::new(50.0, 30.0);
    let to = Point2::new(150.0, 30.0);
    let hit = tree.ray_trace(&from, &to, None).expect("blocked");
    assert_eq!(hit.wall, 4);
    assert!(approx_point(&hit.point, &Point2::new(80.0, 30.0), 1e-9));

    let hit = tree.ray_trace(&from, &to, Some(4)).expect("blocked");
    assert_eq!(hit.wall, 1);
    assert!(approx_point(&hit.point, &Point2::new(100.0, 30.0), 1e-9));

    // Ending short of every wall.
    assert!(!tree.is_occluded(&from, &Point2::new(70.0, 30.0), None));
    // Passing below the free-standing wall.
    assert!(!tree.is_occluded(&from, &Point2::new(90.0, 2.0), None));
}

#[test]
fn direct_sound_in_canonical_room_is_clear() {
    let tree = BspTree::from_walls(&canonical_room());
    assert!(!tree.is_occluded(&canonical_listener(), &canonical_source(), None));
    // Walls 0 and 3 separate the listener from the alcove.
    assert!(tree.is_occluded(&canonical_listener(), &Point2::new(150.0, 250.0), None));
}

#[test]
fn splitting_strategy_does_not_change_occlusion() {
    let room = canonical_room();
    let first = BspTree::from_walls(&room);
    let balanced = BspTree::from_walls_with(
        &room,
        &SerialBspOps::with_strategy(BalancedSplittingStrategy::default()),
    );
    let mut blocked = 0;
    for (a, b) in probe_pairs() {
        let expected = first.is_occluded(&a, &b, None);
        assert_eq!(expected, balanced.is_occluded(&a, &b, None), "{a} -> {b}");
        blocked += expected as usize;
    }
    // The probes actually exercise both outcomes.
    assert!(blocked > 0);
}

#[test]
fn reversed_walls_block_the_same_rays() {
    let room = canonical_room();
    let forward = BspTree::from_walls(&room);
    let backward = BspTree::from_walls(&crate::support::reversed(&room));
    for (a, b) in probe_pairs() {
        let hit = forward.ray_trace(&a, &b, None).map(|h| h.wall);
        let reversed_hit = backward.ray_trace(&a, &b, None).map(|h| h.wall);
        assert_eq!(hit.is_some(), reversed_hit.is_some(), "{a} -> {b}");
    }
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_build_matches_serial() {
    use beamtrace2d::bsp::ParallelBspOps;

    let room = furnished_room();
    let serial = BspTree::from_walls_with(&room, &SerialBspOps::new());
    let parallel = BspTree::from_walls_with(&room, &ParallelBspOps::new());
    assert_eq!(serial.fragments(), parallel.fragments());
    assert_eq!(serial.depth(), parallel.depth());
}
