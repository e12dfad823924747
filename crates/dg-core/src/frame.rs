use rand::Rng;

use crate::render::{self, Painter};
use crate::scene::Scene;
use crate::update;

/// Run one frame: clear, then waves, network, node update, butterflies,
/// bees, vignette. The frame counter advances after drawing.
pub fn advance_frame<P, R>(scene: &mut Scene, painter: &mut P, rng: &mut R)
where
    P: Painter + ?Sized,
    R: Rng + ?Sized,
{
    let bounds = scene.viewport.bounds();
    let t = scene.t;

    painter.clear(scene.width(), scene.height());
    render::draw_waves(painter, scene);
    render::draw_network(painter, scene);

    for n in &mut scene.nodes {
        update::step_node(n, bounds);
    }
    for b in &mut scene.butterflies {
        update::step_butterfly(b, t, bounds);
        render::draw_butterfly(painter, b, t);
    }
    for bee in &mut scene.bees {
        update::step_bee(bee, bounds, rng);
        render::draw_bee(painter, bee, t);
    }

    render::draw_vignette(painter, &scene.viewport);
    scene.t = scene.t.wrapping_add(1);
}
