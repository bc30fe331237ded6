use kiss3d::camera::Camera;
use kiss3d::event::WindowEvent;
use kiss3d::resource::ShaderUniform;
use kiss3d::window::Canvas;
use nalgebra::{Isometry3, Matrix4, Perspective3, Point3, Vector3};

use crate::consts::{CAMERA_EYE, CAMERA_FOVY_DEGREES, CAMERA_ZFAR, CAMERA_ZNEAR};

/// Framebuffer size in pixels. kiss3d takes care of the GL viewport itself, we
/// only need the size to get the aspect ratio right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Viewport { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // A minimized window reports a zero-sized framebuffer, and Perspective3
    // panics on a zero aspect ratio, so both sides are clamped to one pixel.
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

// Unlike ArcBall, this camera never moves. It sits at a fixed eye point,
// looks at the star, and keeps +Y up. The only thing that changes over its
// lifetime is the aspect ratio, which follows the framebuffer.
pub struct FixedCamera {
    eye: Point3<f32>,
    target: Point3<f32>,
    up: Vector3<f32>,
    viewport: Viewport,
    fovy: f32,
    znear: f32,
    zfar: f32,
}

impl FixedCamera {
    pub fn new(viewport: Viewport) -> Self {
        let [x, y, z] = CAMERA_EYE;
        FixedCamera {
            eye: Point3::new(x, y, z),
            target: Point3::origin(),
            up: Vector3::y(),
            viewport,
            fovy: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // kiss3d reports the framebuffer size every frame
    pub fn resize(&mut self, width: u32, height: u32) {
        let viewport = Viewport::new(width, height);
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        log::debug!(
            "Viewport resized to {}x{}, aspect {:.3}",
            width,
            height,
            self.viewport.aspect()
        );
    }

    pub fn fovy(&self) -> f32 {
        self.fovy
    }

    pub fn projection(&self) -> Perspective3<f32> {
        Perspective3::new(self.viewport.aspect(), self.fovy, self.znear, self.zfar)
    }

    fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection().into_inner()
    }

    fn view_matrix(&self) -> Matrix4<f32> {
        self.view_transform().to_homogeneous()
    }
}

impl Camera for FixedCamera {
    fn handle_event(&mut self, _canvas: &Canvas, event: &WindowEvent) {
        if let WindowEvent::FramebufferSize(w, h) = *event {
            self.resize(w, h);
        }
    }

    fn eye(&self) -> Point3<f32> {
        self.eye
    }

    fn view_transform(&self) -> Isometry3<f32> {
        Isometry3::look_at_rh(&self.eye, &self.target, &self.up)
    }

    fn transformation(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    fn inverse_transformation(&self) -> Matrix4<f32> {
        self.view_transform().inverse().to_homogeneous() * self.projection().inverse()
    }

    fn clip_planes(&self) -> (f32, f32) {
        (self.znear, self.zfar)
    }

    fn update(&mut self, _canvas: &Canvas) {}

    fn upload(
        &self,
        _: usize,
        proj: &mut ShaderUniform<Matrix4<f32>>,
        view: &mut ShaderUniform<Matrix4<f32>>,
    ) {
        proj.upload(&self.projection_matrix());
        view.upload(&self.view_matrix());
    }
}
