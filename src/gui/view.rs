use kiss3d::camera::Camera;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::scene::SceneNode;
use kiss3d::window::Window;

use super::camera::{FixedCamera, Viewport};
use super::renderers::CompoundRenderer;
use super::scene::SceneFrame;
use super::FrameSink;
use crate::model::{Planet, StarSystem};

pub struct View {
    planet_spheres: Vec<SceneNode>,
    camera: FixedCamera,
    renderer: CompoundRenderer,
}

impl View {
    pub fn new(system: &StarSystem, window: &mut Window) -> Self {
        let camera = FixedCamera::new(Viewport::new(window.width(), window.height()));

        let planet_spheres = system
            .planets()
            .iter()
            .map(|planet| Self::create_planet_object(window, planet))
            .collect();

        View {
            planet_spheres,
            camera,
            renderer: CompoundRenderer::new(),
        }
    }

    fn create_planet_object(window: &mut Window, planet: &Planet) -> SceneNode {
        // The default object material lights the node using its color
        let mut sphere = window.add_sphere(planet.radius as f32);
        let color = &planet.color;
        sphere.set_color(color.x, color.y, color.z);
        sphere
    }

    pub fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (Some(&mut self.camera), None, Some(&mut self.renderer), None)
    }
}

impl FrameSink for View {
    fn queue(&mut self, frame: &SceneFrame) {
        for ring in frame.rings.iter() {
            self.renderer.draw_ring(ring);
        }
        self.renderer.draw_star(&frame.star);

        for (sphere, instance) in self.planet_spheres.iter_mut().zip(frame.planets.iter()) {
            sphere.set_local_transformation(instance.transform);
        }
    }
}
