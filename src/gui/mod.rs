use std::panic;

use kiss3d::camera::Camera;
use kiss3d::light::Light;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};

use self::controller::Controller;
use self::view::View;
use crate::consts::{DEFAULT_FRAMERATE, MAX_FRAMERATE, WINDOW_TITLE};
use crate::error::{Result, SimError};
use crate::model::StarSystem;

pub mod camera;
mod controller;
mod renderers;
pub mod scene;
mod view;

pub use scene::{PlanetSpin, SceneFrame};

#[derive(Debug, Clone, Copy)]
pub struct SimulationOptions {
    pub spin: PlanetSpin,
    pub max_frames: Option<u64>,
    pub framerate: u64,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        SimulationOptions {
            spin: PlanetSpin::default(),
            max_frames: None,
            framerate: DEFAULT_FRAMERATE,
        }
    }
}

/// Receives each composed frame so it gets drawn on the next render.
pub trait FrameSink {
    fn queue(&mut self, frame: &SceneFrame);
}

/// The tick-then-draw cycle, independent of the window. kiss3d renders once
/// before the first `step`, so the initial state is queued up front.
pub struct Driver<S> {
    system: StarSystem,
    spin: PlanetSpin,
    sink: S,
    controller: Controller,
}

impl<S: FrameSink> Driver<S> {
    pub fn new(system: StarSystem, options: &SimulationOptions, mut sink: S) -> Self {
        sink.queue(&SceneFrame::compose(&system, options.spin));
        Driver {
            system,
            spin: options.spin,
            sink,
            controller: Controller::new(options.max_frames),
        }
    }

    /// Returns false once the frame budget is spent; nothing is queued then.
    pub fn step(&mut self) -> bool {
        if self.controller.should_stop() {
            return false;
        }

        self.system.tick();
        log::trace!(
            "tick {}: system rotation {:.2} deg",
            self.system.ticks(),
            self.system.rotation_angle()
        );
        self.sink.queue(&SceneFrame::compose(&self.system, self.spin));
        self.controller.frame_finished();
        true
    }

    pub fn system(&self) -> &StarSystem {
        &self.system
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

pub struct Simulation {
    driver: Driver<View>,
}

impl Simulation {
    pub fn new(system: StarSystem, options: &SimulationOptions, window: &mut Window) -> Self {
        let view = View::new(&system, window);
        Self {
            driver: Driver::new(system, options, view),
        }
    }
}

impl State for Simulation {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        self.driver.sink_mut().cameras_and_effect_and_renderer()
    }

    fn step(&mut self, window: &mut Window) {
        if !self.driver.step() {
            log::info!(
                "Frame budget spent after {} ticks ({:.1} fps), closing",
                self.driver.system().ticks(),
                self.driver.controller.fps()
            );
            window.close();
        }
    }
}

/// Opens the window and blocks until it's closed (or the frame budget runs
/// out).
pub fn run(system: StarSystem, options: SimulationOptions) -> Result<()> {
    let mut window = open_window(WINDOW_TITLE)?;
    window.set_light(Light::StickToCamera);
    // kiss3d asserts on zero and stops limiting past 1000
    window.set_framerate_limit(Some(options.framerate.clamp(1, MAX_FRAMERATE)));
    log::info!(
        "Opened {}x{} window, animating {} planets ({:?} spin)",
        window.width(),
        window.height(),
        system.planets().len(),
        options.spin
    );

    let simulation = Simulation::new(system, &options, &mut window);
    window.render_loop(simulation);

    log::info!("Window closed");
    Ok(())
}

// kiss3d panics when it can't get a display or a GL context. Turn that into
// an error we can report, without the default panic message on top.
fn open_window(title: &str) -> Result<Window> {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let window = panic::catch_unwind(|| Window::new(title));
    panic::set_hook(default_hook);

    window.map_err(|payload| {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            String::from("unknown windowing failure")
        };
        SimError::WindowUnavailable(message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<SceneFrame>,
    }

    impl FrameSink for RecordingSink {
        fn queue(&mut self, frame: &SceneFrame) {
            self.frames.push(frame.clone());
        }
    }

    #[test]
    fn test_initial_state_is_queued_before_first_step() {
        let options = SimulationOptions::default();
        let driver = Driver::new(StarSystem::solar(), &options, RecordingSink::default());

        assert_eq!(driver.sink.frames.len(), 1);
        let first = &driver.sink.frames[0];
        assert_eq!(first, &SceneFrame::compose(&StarSystem::solar(), options.spin));
        assert_eq!(first.rings.len(), 8);
        assert_eq!(first.planets.len(), 8);
        assert_eq!(driver.system().ticks(), 0);
    }

    #[test]
    fn test_step_ticks_then_queues() {
        let options = SimulationOptions::default();
        let mut driver = Driver::new(StarSystem::solar(), &options, RecordingSink::default());

        assert!(driver.step());

        let mut expected = StarSystem::solar();
        expected.tick();
        assert_eq!(driver.system().ticks(), 1);
        assert_eq!(driver.sink.frames.len(), 2);
        assert_eq!(
            driver.sink.frames[1],
            SceneFrame::compose(&expected, options.spin)
        );
    }

    #[test]
    fn test_frame_budget_ends_stepping() {
        let options = SimulationOptions {
            max_frames: Some(2),
            ..SimulationOptions::default()
        };
        let mut driver = Driver::new(StarSystem::solar(), &options, RecordingSink::default());

        assert!(driver.step());
        assert!(driver.step());
        assert!(!driver.step());
        assert_eq!(driver.system().ticks(), 2);
        assert_eq!(driver.sink.frames.len(), 3);
    }
}
