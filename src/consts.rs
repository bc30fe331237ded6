// Degrees per tick; fed to the system-wide rotation about +Y
pub const SYSTEM_ROTATION_SPEED: f64 = 0.05;

pub const STAR_RADIUS: f32 = 1.0;
pub const STAR_COLOR: [f32; 3] = [1.0, 0.8392, 0.6118];

pub const ORBIT_COLOR: [f32; 3] = [0.5, 0.5, 0.5];
pub const ORBIT_SEGMENTS: usize = 360;

// Matches glutSolidSphere(r, 50, 50)
pub const SPHERE_SLICES: usize = 50;
pub const SPHERE_STACKS: usize = 50;

pub const CAMERA_EYE: [f32; 3] = [10.0, 10.0, 10.0];
pub const CAMERA_FOVY_DEGREES: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 1.0;
pub const CAMERA_ZFAR: f32 = 50.0;

pub const WINDOW_TITLE: &str = "Planet Simulation";
pub const DEFAULT_FRAMERATE: u64 = 60;
// kiss3d sleeps for 1000 / fps whole milliseconds, so anything above this is uncapped
pub const MAX_FRAMERATE: u64 = 1000;
