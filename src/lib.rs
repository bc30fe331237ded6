pub mod consts;
pub mod error;
pub mod gui;
pub mod model;

pub use error::SimError;
pub use gui::{PlanetSpin, SceneFrame, SimulationOptions};
pub use model::StarSystem;
