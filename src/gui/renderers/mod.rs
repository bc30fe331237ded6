use kiss3d::camera::Camera;
use kiss3d::renderer::{LineRenderer, Renderer};

use self::star_renderer::StarRenderer;
use super::scene::{OrbitRing, SphereInstance};

mod star_renderer;
mod utils;

pub use utils::path_iter_parametric;

/// Everything kiss3d doesn't draw on its own: the guide rings and the unlit
/// star. Planets are ordinary scene nodes.
pub struct CompoundRenderer {
    star_renderer: StarRenderer,
    line_renderer: LineRenderer,
}

impl CompoundRenderer {
    pub fn new() -> Self {
        CompoundRenderer {
            star_renderer: StarRenderer::new(),
            line_renderer: LineRenderer::new(),
        }
    }

    pub fn draw_ring(&mut self, ring: &OrbitRing) {
        utils::draw_path(
            &mut self.line_renderer,
            ring.points.iter().copied(),
            &ring.color,
        );
    }

    pub fn draw_star(&mut self, star: &SphereInstance) {
        self.star_renderer
            .add_star(star.transform, star.radius, star.color);
    }
}

impl Renderer for CompoundRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        self.star_renderer.render(pass, camera);
        self.line_renderer.render(pass, camera);
    }
}
