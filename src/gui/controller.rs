use std::time::Instant;

/// Decides when the render loop is done. Closing the window always ends it;
/// an optional frame budget can end it earlier.
pub struct Controller {
    frames: u64,
    max_frames: Option<u64>,
    fps_counter: FpsCounter,
}

pub struct FpsCounter {
    instant: Instant,
    counter: usize,
    window_size_millis: usize,
    previous_fps: f64,
}

impl FpsCounter {
    pub fn new(window_size_millis: usize) -> Self {
        FpsCounter {
            instant: Instant::now(),
            counter: 0,
            previous_fps: 0.0,
            window_size_millis,
        }
    }

    pub fn reset(&mut self) {
        self.instant = Instant::now();
        self.counter = 0;
    }

    pub fn value(&self) -> f64 {
        self.previous_fps
    }

    /// Returns true whenever a new measurement window closes.
    pub fn increment(&mut self) -> bool {
        self.counter += 1;

        let elapsed = self.instant.elapsed();
        if elapsed.as_millis() > self.window_size_millis as u128 {
            self.previous_fps = (1000 * self.counter) as f64 / elapsed.as_millis() as f64;
            self.reset();
            return true;
        }
        false
    }
}

impl Controller {
    pub fn new(max_frames: Option<u64>) -> Self {
        Controller {
            frames: 0,
            max_frames,
            fps_counter: FpsCounter::new(1000),
        }
    }

    pub fn should_stop(&self) -> bool {
        match self.max_frames {
            Some(max) => self.frames >= max,
            None => false,
        }
    }

    pub fn frame_finished(&mut self) {
        self.frames += 1;
        if self.fps_counter.increment() {
            log::debug!(
                "{:.1} fps after {} frames",
                self.fps_counter.value(),
                self.frames
            );
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn fps(&self) -> f64 {
        self.fps_counter.value()
    }
}
