// Motion rules: boundary invariants for every entity kind.

use dg_core::update::{step_bee, step_butterfly, step_node};
use dg_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn inside(p: Vec2, bounds: Vec2) -> bool {
    p.x >= 0.0 && p.x <= bounds.x && p.y >= 0.0 && p.y <= bounds.y
}

fn node_at(pos: Vec2, vel: Vec2) -> BackgroundNode {
    let mut rng = StdRng::seed_from_u64(0);
    let mut n = BackgroundNode::spawn(0, NodeBias::Bottom, Vec2::new(100.0, 100.0), &mut rng);
    n.pos = pos;
    n.vel = vel;
    n
}

#[test]
fn node_velocity_flips_only_on_crossing() {
    let bounds = Vec2::new(100.0, 100.0);

    let mut n = node_at(Vec2::new(50.0, 50.0), Vec2::new(0.2, -0.2));
    step_node(&mut n, bounds);
    assert_eq!(n.vel, Vec2::new(0.2, -0.2));
    assert!((n.pos - Vec2::new(50.2, 49.8)).length() < 1e-4);

    let mut n = node_at(Vec2::new(99.9, 50.0), Vec2::new(0.2, 0.1));
    step_node(&mut n, bounds);
    assert_eq!(n.vel, Vec2::new(-0.2, 0.1));
    assert_eq!(n.pos.x, 100.0);

    let mut n = node_at(Vec2::new(10.0, 0.05), Vec2::new(0.0, -0.1));
    step_node(&mut n, bounds);
    assert_eq!(n.vel, Vec2::new(0.0, 0.1));
    assert_eq!(n.pos.y, 0.0);
}

#[test]
fn node_touching_bound_exactly_does_not_flip() {
    let bounds = Vec2::new(100.0, 100.0);
    let mut n = node_at(Vec2::new(99.75, 50.0), Vec2::new(0.25, 0.0));
    step_node(&mut n, bounds);
    assert_eq!(n.pos.x, 100.0);
    assert_eq!(n.vel.x, 0.25);
}

#[test]
fn nodes_stay_inside_over_many_frames() {
    let mut rng = StdRng::seed_from_u64(21);
    let bounds = Vec2::new(320.0, 180.0);
    let mut nodes: Vec<_> = (0..40)
        .map(|i| BackgroundNode::spawn(i, NodeBias::Edge, bounds, &mut rng))
        .collect();
    for _ in 0..5_000 {
        for n in &mut nodes {
            let before = n.vel;
            let would = n.pos + n.vel;
            step_node(n, bounds);
            let crossed_x = would.x < 0.0 || would.x > bounds.x;
            let crossed_y = would.y < 0.0 || would.y > bounds.y;
            assert_eq!(n.vel.x == -before.x && before.x != 0.0, crossed_x && before.x != 0.0);
            assert_eq!(n.vel.y == -before.y && before.y != 0.0, crossed_y && before.y != 0.0);
            assert!(inside(n.pos, bounds));
        }
    }
}

#[test]
fn butterflies_stay_inside_and_move_smoothly() {
    let mut rng = StdRng::seed_from_u64(8);
    let bounds = Vec2::new(600.0, 400.0);
    let mut flock: Vec<_> = (0..6).map(|i| Butterfly::spawn(i, bounds, &mut rng)).collect();
    for t in 0..10_000u64 {
        for b in &mut flock {
            let before = b.pos;
            step_butterfly(b, t, bounds);
            assert!(inside(b.pos, bounds));
            // drift is bounded by 1.5 * speed per axis plus the edge nudge
            let max_step = 1.5 * BUTTERFLY_SPEED_RANGE.1 + BUTTERFLY_EDGE_NUDGE;
            assert!((b.pos - before).abs().max_element() <= max_step + 1e-4);
        }
    }
}

#[test]
fn butterfly_near_left_edge_is_pushed_right() {
    let mut rng = StdRng::seed_from_u64(2);
    let bounds = Vec2::new(1000.0, 1000.0);
    let mut b = Butterfly::spawn(0, bounds, &mut rng);
    b.pos = Vec2::new(10.0, 500.0);
    b.speed = 0.0;
    step_butterfly(&mut b, 0, bounds);
    assert!((b.pos.x - (10.0 + BUTTERFLY_EDGE_NUDGE)).abs() < 1e-4);
    assert_eq!(b.pos.y, 500.0);
}

#[test]
fn bees_stay_inside() {
    let mut rng = StdRng::seed_from_u64(13);
    let bounds = Vec2::new(500.0, 300.0);
    let mut bees: Vec<_> = (0..8).map(|i| Bee::spawn(i, bounds, &mut rng)).collect();
    for _ in 0..10_000 {
        for bee in &mut bees {
            step_bee(bee, bounds, &mut rng);
            assert!(inside(bee.pos, bounds));
            assert!(bee.heading.is_finite());
        }
    }
}

#[test]
fn bee_in_corner_turns_toward_center() {
    let mut rng = StdRng::seed_from_u64(4);
    let bounds = Vec2::new(1000.0, 1000.0);
    let mut bee = Bee::spawn(0, bounds, &mut rng);
    bee.pos = Vec2::new(5.0, 5.0);
    // heading straight into the corner
    bee.heading = std::f32::consts::PI * 1.25;
    let start = bee.pos;
    for _ in 0..400 {
        step_bee(&mut bee, bounds, &mut rng);
    }
    assert!(bee.pos.distance(bounds * 0.5) < start.distance(bounds * 0.5));
}
