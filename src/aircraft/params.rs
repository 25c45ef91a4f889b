use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Flight parameters (the user-controlled input set)
// ---------------------------------------------------------------------------

/// Current parameter set. The physics core accepts whatever it is given;
/// keeping values inside [`ParameterRange`]s is the input adapter's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightParameters {
    pub airspeed_kmh: f64,        // indicated airspeed, > 0
    pub angle_of_attack_deg: f64, // signed
    pub altitude_m: f64,          // >= 0
    pub throttle_pct: f64,        // [0, 100]
    pub mass_kg: f64,             // > 0
    pub wing_area_m2: f64,        // > 0
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    #[serde(default)]
    pub wind_speed_kmh: f64,      // headwind component, adds to relative airspeed
}

impl FlightParameters {
    /// Airspeed relative to the surrounding air, km/h.
    pub fn relative_airspeed_kmh(&self) -> f64 {
        self.airspeed_kmh + self.wind_speed_kmh
    }

    pub fn get(&self, p: Parameter) -> f64 {
        match p {
            Parameter::Airspeed => self.airspeed_kmh,
            Parameter::AngleOfAttack => self.angle_of_attack_deg,
            Parameter::Altitude => self.altitude_m,
            Parameter::Throttle => self.throttle_pct,
            Parameter::WindSpeed => self.wind_speed_kmh,
        }
    }

    pub fn set(&mut self, p: Parameter, value: f64) {
        match p {
            Parameter::Airspeed => self.airspeed_kmh = value,
            Parameter::AngleOfAttack => self.angle_of_attack_deg = value,
            Parameter::Altitude => self.altitude_m = value,
            Parameter::Throttle => self.throttle_pct = value,
            Parameter::WindSpeed => self.wind_speed_kmh = value,
        }
    }
}

impl Default for FlightParameters {
    /// Boeing 737-800 in cruise climb.
    fn default() -> Self {
        Self {
            airspeed_kmh: 250.0,
            angle_of_attack_deg: 5.0,
            altitude_m: 3000.0,
            throttle_pct: 75.0,
            mass_kg: 41_400.0,
            wing_area_m2: 125.0,
            lift_coefficient: 1.2,
            drag_coefficient: 0.025,
            wind_speed_kmh: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Slider-style input surface
// ---------------------------------------------------------------------------

/// The parameters exposed as range-bounded controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Airspeed,
    AngleOfAttack,
    Altitude,
    Throttle,
    WindSpeed,
}

impl Parameter {
    pub const ALL: [Parameter; 5] = [
        Parameter::Airspeed,
        Parameter::AngleOfAttack,
        Parameter::Altitude,
        Parameter::Throttle,
        Parameter::WindSpeed,
    ];

    pub fn range(self) -> ParameterRange {
        match self {
            Parameter::Airspeed => ParameterRange::new(50.0, 500.0, 10.0),
            Parameter::AngleOfAttack => ParameterRange::new(-10.0, 25.0, 0.5),
            Parameter::Altitude => ParameterRange::new(0.0, 12_000.0, 100.0),
            Parameter::Throttle => ParameterRange::new(0.0, 100.0, 5.0),
            Parameter::WindSpeed => ParameterRange::new(-100.0, 100.0, 5.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Parameter::Airspeed => "Airspeed",
            Parameter::AngleOfAttack => "Angle of attack",
            Parameter::Altitude => "Altitude",
            Parameter::Throttle => "Throttle",
            Parameter::WindSpeed => "Headwind",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Parameter::Airspeed | Parameter::WindSpeed => "km/h",
            Parameter::AngleOfAttack => "deg",
            Parameter::Altitude => "m",
            Parameter::Throttle => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Clamp, then round to the nearest step above `min`.
    pub fn snap(&self, value: f64) -> f64 {
        let v = self.clamp(value);
        if self.step <= 0.0 {
            return v;
        }
        let steps = ((v - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lies_inside_ranges() {
        let p = FlightParameters::default();
        for param in Parameter::ALL {
            assert!(param.range().contains(p.get(param)), "{:?} out of range", param);
        }
    }

    #[test]
    fn snap_rounds_to_step() {
        let aoa = Parameter::AngleOfAttack.range();
        assert_eq!(aoa.snap(4.74), 4.5);
        assert_eq!(aoa.snap(4.76), 5.0);
        assert_eq!(aoa.snap(40.0), 25.0);

        let alt = Parameter::Altitude.range();
        assert_eq!(alt.snap(-20.0), 0.0);
        assert_eq!(alt.snap(3049.0), 3000.0);
    }

    #[test]
    fn set_and_get_agree() {
        let mut p = FlightParameters::default();
        for (i, param) in Parameter::ALL.into_iter().enumerate() {
            p.set(param, i as f64 + 1.5);
            assert_eq!(p.get(param), i as f64 + 1.5);
        }
    }

    #[test]
    fn headwind_adds_to_relative_airspeed() {
        let p = FlightParameters { wind_speed_kmh: 30.0, ..Default::default() };
        assert_eq!(p.relative_airspeed_kmh(), 280.0);
    }
}
