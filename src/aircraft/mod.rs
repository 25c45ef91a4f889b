pub mod params;
pub mod presets;

pub use params::{FlightParameters, Parameter, ParameterRange};
pub use presets::{AircraftPreset, PresetBuilder};
