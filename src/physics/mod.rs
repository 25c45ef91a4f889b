pub mod atmosphere;
pub mod forces;
pub mod metrics;

pub use atmosphere::air_density;
pub use forces::{compute_forces, dynamic_pressure, is_stalled, Forces};
pub use metrics::{flight_metrics, lift_to_drag, FlightMetrics};
