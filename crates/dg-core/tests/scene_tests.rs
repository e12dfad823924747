// Scene construction and width-class populations.

use dg_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn desktop_1024x768_builds_documented_population() {
    let mut rng = StdRng::seed_from_u64(42);
    let scene = Scene::new(Viewport::new(1024.0, 768.0, 1.0), &mut rng);
    assert!(scene.initialized);
    assert_eq!(scene.t, 0);
    assert_eq!(scene.node_count(NodeBias::Edge), 12);
    assert_eq!(scene.node_count(NodeBias::Bottom), 6);
    assert_eq!(scene.nodes.len(), 18);
    assert_eq!(scene.butterflies.len(), 3);
    assert!(scene.bees.is_empty());
}

#[test]
fn narrow_viewport_uses_mobile_population() {
    let mut rng = StdRng::seed_from_u64(1);
    let vp = Viewport::new(390.0, 700.0, 3.0);
    assert_eq!(vp.width_class(), WidthClass::Mobile);
    let scene = Scene::new(vp, &mut rng);
    assert_eq!(scene.node_count(NodeBias::Edge), MOBILE_POPULATION.edge_nodes);
    assert_eq!(scene.node_count(NodeBias::Bottom), MOBILE_POPULATION.bottom_nodes);
    assert_eq!(scene.butterflies.len(), MOBILE_POPULATION.butterflies);
    assert!(scene.bees.is_empty());
}

#[test]
fn width_class_boundary_is_768() {
    assert_eq!(Viewport::new(767.9, 500.0, 1.0).width_class(), WidthClass::Mobile);
    assert_eq!(Viewport::new(768.0, 500.0, 1.0).width_class(), WidthClass::Desktop);
}

#[test]
fn all_entities_spawn_inside_bounds() {
    let mut rng = StdRng::seed_from_u64(7);
    let pop = Population {
        edge_nodes: 30,
        bottom_nodes: 30,
        butterflies: 20,
        bees: 20,
    };
    let scene = Scene::with_population(Viewport::new(800.0, 400.0, 2.0), pop, &mut rng);
    let inside = |p: glam::Vec2| p.x >= 0.0 && p.x <= 800.0 && p.y >= 0.0 && p.y <= 400.0;
    assert!(scene.nodes.iter().all(|n| inside(n.pos)));
    assert!(scene.butterflies.iter().all(|b| inside(b.pos)));
    assert!(scene.bees.iter().all(|b| inside(b.pos)));
    assert_eq!(scene.bees.len(), 20);
}

#[test]
fn attributes_fall_in_configured_ranges() {
    let mut rng = StdRng::seed_from_u64(99);
    let scene = Scene::new(Viewport::new(1280.0, 720.0, 1.0), &mut rng);
    for n in &scene.nodes {
        assert!(n.radius >= NODE_RADIUS_RANGE.0 && n.radius <= NODE_RADIUS_RANGE.1);
        assert!(n.opacity >= NODE_OPACITY_RANGE.0 && n.opacity <= NODE_OPACITY_RANGE.1);
        assert!(n.vel.x.abs() <= NODE_SPEED_MAX && n.vel.y.abs() <= NODE_SPEED_MAX);
    }
    for b in &scene.butterflies {
        assert!(b.size >= BUTTERFLY_SIZE_RANGE.0 && b.size <= BUTTERFLY_SIZE_RANGE.1);
        assert!(b.opacity >= BUTTERFLY_OPACITY_RANGE.0 && b.opacity <= BUTTERFLY_OPACITY_RANGE.1);
    }
}

#[test]
fn viewport_clamps_degenerate_measurements() {
    let vp = Viewport::new(0.0, -5.0, 0.0);
    assert_eq!(vp.width, 1.0);
    assert_eq!(vp.height, 1.0);
    assert_eq!(vp.dpr, 1.0);
    assert_eq!(Viewport::new(300.0, 150.0, 2.0).backing_size(), (600, 300));
}

#[test]
fn high_dpr_keeps_css_size_separate_from_backing_store() {
    let vp = Viewport::new(640.0, 360.0, 2.0);
    assert_eq!((vp.width, vp.height), (640.0, 360.0));
    assert_eq!(vp.backing_size(), (1280, 720));
}
