use serde::{Deserialize, Serialize};

use super::atmosphere::{air_density, density_ratio};
use super::forces::Forces;
use crate::aircraft::FlightParameters;
use crate::config::PhysicsConfig;

/// Derived performance figures shown next to the raw forces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightMetrics {
    /// `None` when drag is zero.
    pub lift_to_drag: Option<f64>,
    pub wing_loading_kg_m2: f64,
    /// kg/W. `None` when there is no thrust power.
    pub power_loading_kg_w: Option<f64>,
    pub air_density: f64,
    /// Fraction of sea-level density.
    pub density_ratio: f64,
    pub net_vertical_n: f64,
    pub net_horizontal_n: f64,
}

pub fn lift_to_drag(forces: &Forces) -> Option<f64> {
    (forces.drag_n != 0.0).then(|| forces.lift_n / forces.drag_n)
}

pub fn flight_metrics(params: &FlightParameters, forces: &Forces, cfg: &PhysicsConfig) -> FlightMetrics {
    // thrust power at the same wind-relative speed the forces use
    let thrust_power = forces.thrust_n * params.relative_airspeed_kmh() / 3.6;
    FlightMetrics {
        lift_to_drag: lift_to_drag(forces),
        wing_loading_kg_m2: params.mass_kg / params.wing_area_m2,
        power_loading_kg_w: (thrust_power > 0.0).then(|| params.mass_kg / thrust_power),
        air_density: air_density(params.altitude_m, cfg),
        density_ratio: density_ratio(params.altitude_m, cfg),
        net_vertical_n: forces.net_vertical(),
        net_horizontal_n: forces.net_horizontal(),
    }
}
