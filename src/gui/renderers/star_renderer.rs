use kiss3d::camera::Camera;
use kiss3d::context::Context;
use kiss3d::renderer::Renderer;
use kiss3d::resource::{
    AllocationType, BufferType, Effect, GPUVec, ShaderAttribute, ShaderUniform,
};
use nalgebra::{Isometry3, Matrix4, Point3};

use super::utils::sphere_triangles;
use crate::consts::{SPHERE_SLICES, SPHERE_STACKS};

struct StarData {
    // Includes the radius as a uniform scale
    model: Matrix4<f32>,
    color: Point3<f32>,
}

/// Draws solid spheres in a flat color. The scene's light is ignored, which is
/// what we want for something that's supposed to be the light source.
pub struct StarRenderer {
    // OpenGL stuff
    shader: Effect,
    pos: ShaderAttribute<Point3<f32>>,
    model: ShaderUniform<Matrix4<f32>>,
    view: ShaderUniform<Matrix4<f32>>,
    proj: ShaderUniform<Matrix4<f32>>,
    color: ShaderUniform<Point3<f32>>,
    mesh: GPUVec<Point3<f32>>,
    // Data storage
    stars: Vec<StarData>,
}

impl StarRenderer {
    pub fn new() -> Self {
        let mut shader = Effect::new_from_str(VERTEX_SRC, FRAGMENT_SRC);

        shader.use_program();

        StarRenderer {
            pos: shader
                .get_attrib::<Point3<f32>>("position")
                .expect("Failed to get shader attribute."),
            model: shader
                .get_uniform::<Matrix4<f32>>("model")
                .expect("Failed to get shader uniform."),
            view: shader
                .get_uniform::<Matrix4<f32>>("view")
                .expect("Failed to get shader uniform."),
            proj: shader
                .get_uniform::<Matrix4<f32>>("proj")
                .expect("Failed to get shader uniform."),
            color: shader
                .get_uniform::<Point3<f32>>("color")
                .expect("Failed to get shader uniform."),
            shader,
            mesh: GPUVec::new(
                sphere_triangles(SPHERE_SLICES, SPHERE_STACKS),
                BufferType::Array,
                AllocationType::StaticDraw,
            ),
            stars: vec![],
        }
    }

    pub fn add_star(&mut self, transform: Isometry3<f32>, radius: f32, color: Point3<f32>) {
        let star = StarData {
            model: transform.to_homogeneous() * Matrix4::new_scaling(radius),
            color,
        };
        self.stars.push(star);
    }
}

impl Renderer for StarRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        if self.stars.is_empty() {
            return;
        }

        self.shader.use_program();
        self.pos.enable();

        camera.upload(pass, &mut self.proj, &mut self.view);

        for star in self.stars.iter() {
            self.pos.bind_sub_buffer(&mut self.mesh, 0, 0);
            self.model.upload(&star.model);
            self.color.upload(&star.color);

            let ctxt = Context::get();
            ctxt.draw_arrays(Context::TRIANGLES, 0, self.mesh.len() as i32);
        }

        self.pos.disable();

        self.stars.clear();
    }
}

static VERTEX_SRC: &str = "#version 100
    attribute vec3 position;
    uniform   mat4 model;
    uniform   mat4 proj;
    uniform   mat4 view;
    void main() {
        gl_Position = proj * view * model * vec4(position, 1.0);
    }";

static FRAGMENT_SRC: &str = "#version 100
#ifdef GL_FRAGMENT_PRECISION_HIGH
   precision highp float;
#else
   precision mediump float;
#endif

    uniform vec3 color;
    void main() {
        gl_FragColor = vec4(color, 1.0);
    }";
