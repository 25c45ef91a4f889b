use serde::{Deserialize, Serialize};

use super::params::FlightParameters;
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Aircraft preset (external lookup, consumed as parameters only)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftPreset {
    pub id: String,
    pub name: String,
    pub mass_kg: f64,
    pub wing_area_m2: f64,
    pub lift_coefficient: Option<f64>,
    pub drag_coefficient: Option<f64>,
    pub max_thrust_n: Option<f64>, // None = use the global PhysicsConfig value
}

impl AircraftPreset {
    /// Overlay this airframe onto `params`, keeping the flight condition
    /// (airspeed, AoA, altitude, throttle, wind) untouched.
    pub fn apply_to(&self, params: &mut FlightParameters) {
        params.mass_kg = self.mass_kg;
        params.wing_area_m2 = self.wing_area_m2;
        if let Some(cl) = self.lift_coefficient {
            params.lift_coefficient = cl;
        }
        if let Some(cd) = self.drag_coefficient {
            params.drag_coefficient = cd;
        }
    }

    pub fn wing_loading(&self) -> f64 {
        self.mass_kg / self.wing_area_m2
    }
}

// ---------------------------------------------------------------------------
// Preset builder
// ---------------------------------------------------------------------------

pub struct PresetBuilder {
    id: String,
    name: String,
    mass_kg: f64,
    wing_area_m2: f64,
    lift_coefficient: Option<f64>,
    drag_coefficient: Option<f64>,
    max_thrust_n: Option<f64>,
}

impl PresetBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mass_kg: 1000.0,
            wing_area_m2: 16.0,
            lift_coefficient: None,
            drag_coefficient: None,
            max_thrust_n: None,
        }
    }

    pub fn mass(mut self, v: f64) -> Self { self.mass_kg = v; self }
    pub fn wing_area(mut self, v: f64) -> Self { self.wing_area_m2 = v; self }
    pub fn cl(mut self, v: f64) -> Self { self.lift_coefficient = Some(v); self }
    pub fn cd(mut self, v: f64) -> Self { self.drag_coefficient = Some(v); self }
    pub fn max_thrust(mut self, v: f64) -> Self { self.max_thrust_n = Some(v); self }

    pub fn build(self) -> AircraftPreset {
        AircraftPreset {
            id: self.id,
            name: self.name,
            mass_kg: self.mass_kg,
            wing_area_m2: self.wing_area_m2,
            lift_coefficient: self.lift_coefficient,
            drag_coefficient: self.drag_coefficient,
            max_thrust_n: self.max_thrust_n,
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in presets
// ---------------------------------------------------------------------------

pub const DEFAULT_PRESET: &str = "boeing-737";

pub fn boeing_737() -> AircraftPreset {
    PresetBuilder::new("boeing-737", "Boeing 737-800").mass(41_400.0).wing_area(125.0).build()
}

pub fn boeing_747() -> AircraftPreset {
    PresetBuilder::new("boeing-747", "Boeing 747-8").mass(200_000.0).wing_area(541.0).build()
}

pub fn airbus_a320() -> AircraftPreset {
    PresetBuilder::new("airbus-a320", "Airbus A320").mass(42_000.0).wing_area(122.0).build()
}

/// Light single; its own thrust ceiling keeps throttle meaningful.
pub fn cessna_172() -> AircraftPreset {
    PresetBuilder::new("cessna-172", "Cessna 172")
        .mass(1157.0)
        .wing_area(16.2)
        .max_thrust(3_500.0)
        .build()
}

pub fn all() -> Vec<AircraftPreset> {
    vec![boeing_737(), boeing_747(), airbus_a320(), cessna_172()]
}

pub fn lookup(id: &str) -> Result<AircraftPreset> {
    all()
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| Error::UnknownPreset(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_ids() {
        for p in all() {
            assert_eq!(lookup(&p.id).unwrap(), p);
        }
    }

    #[test]
    fn unknown_id_is_an_error() {
        let err = lookup("concorde").unwrap_err();
        assert!(matches!(err, Error::UnknownPreset(ref id) if id == "concorde"));
    }

    #[test]
    fn default_preset_matches_default_parameters() {
        let mut p = FlightParameters::default();
        let before = p;
        lookup(DEFAULT_PRESET).unwrap().apply_to(&mut p);
        assert_eq!(p, before);
    }

    #[test]
    fn apply_keeps_flight_condition() {
        let mut p = FlightParameters { airspeed_kmh: 180.0, angle_of_attack_deg: 9.5, ..Default::default() };
        cessna_172().apply_to(&mut p);
        assert_eq!(p.mass_kg, 1157.0);
        assert_eq!(p.wing_area_m2, 16.2);
        assert_eq!(p.airspeed_kmh, 180.0);
        assert_eq!(p.angle_of_attack_deg, 9.5);
        assert_eq!(p.lift_coefficient, 1.2);
    }

    #[test]
    fn coefficient_overrides_apply() {
        let preset = PresetBuilder::new("glider", "Glider").mass(400.0).wing_area(15.0).cl(1.4).cd(0.012).build();
        let mut p = FlightParameters::default();
        preset.apply_to(&mut p);
        assert_eq!(p.lift_coefficient, 1.4);
        assert_eq!(p.drag_coefficient, 0.012);
    }
}
