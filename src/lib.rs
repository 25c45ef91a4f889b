pub mod aircraft;
pub mod config;
pub mod error;
pub mod feedback;
pub mod io;
pub mod physics;
pub mod render;
pub mod sim;
pub mod tutorial;

pub use error::{Error, Result};

// Flat re-exports for adapters that only need the render contract
pub mod prelude {
    pub use crate::aircraft::{presets, AircraftPreset, FlightParameters, Parameter};
    pub use crate::config::SimulatorConfig;
    pub use crate::feedback::{Advisory, Feedback};
    pub use crate::physics::Forces;
    pub use crate::render::{RenderAdapter, Snapshot};
    pub use crate::sim::{KinematicState, SimController};
}
