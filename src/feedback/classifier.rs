use serde::{Deserialize, Serialize};

use crate::aircraft::FlightParameters;
use crate::config::PhysicsConfig;
use crate::physics::{is_stalled, Forces};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

pub const LOW_AIRSPEED_KMH: f64 = 150.0;
pub const HIGH_AIRSPEED_KMH: f64 = 400.0;
/// Width of the stall-warning band below the critical angle.
pub const STALL_WARNING_MARGIN_DEG: f64 = 3.0;
pub const HIGH_ALTITUDE_M: f64 = 8000.0;
pub const THRUST_DRAG_TOLERANCE_N: f64 = 5000.0;
pub const LIFT_WEIGHT_TOLERANCE_N: f64 = 10_000.0;

// ---------------------------------------------------------------------------
// Advisory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Advisory {
    #[default]
    None,
    LowAirspeed,
    HighSpeedDrag,
    ApproachingStall,
    Stalled,
    NegativeAoA,
    HighAltitude,
    WellBalanced,
}

impl Advisory {
    pub fn message(self) -> &'static str {
        match self {
            Advisory::None => "",
            Advisory::LowAirspeed => "Low airspeed - insufficient lift for most aircraft.",
            Advisory::HighSpeedDrag => "High speed flight - drag increases significantly.",
            Advisory::ApproachingStall => "Approaching critical angle of attack. Stall warning!",
            Advisory::Stalled => "STALL - airflow has separated from the wing surface!",
            Advisory::NegativeAoA => "Negative angle of attack - aircraft will descend rapidly.",
            Advisory::HighAltitude => "High altitude - reduced air density affects performance.",
            Advisory::WellBalanced => "Forces are well balanced for steady flight.",
        }
    }

    /// True for the advisories a renderer should draw as a warning.
    pub fn is_warning(self) -> bool {
        matches!(self, Advisory::LowAirspeed | Advisory::ApproachingStall | Advisory::Stalled)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Feedback {
    pub advisory: Advisory,
    pub tips: Vec<&'static str>,
}

impl Feedback {
    fn hit(&mut self, advisory: Advisory, tips: &[&'static str]) {
        self.advisory = advisory;
        self.tips.extend_from_slice(tips);
    }
}

/// Classify the current flight condition.
///
/// Checks run in a fixed order and a later match replaces the advisory of an
/// earlier one, so `WellBalanced` wins over everything and `HighAltitude`
/// over the airspeed and AoA groups. Tips from every match are kept, in
/// check order. The stall band follows `cfg.critical_angle_deg`, so the
/// advisory always agrees with the stall flag.
pub fn classify(params: &FlightParameters, forces: &Forces, cfg: &PhysicsConfig) -> Feedback {
    let mut fb = Feedback::default();

    if params.airspeed_kmh < LOW_AIRSPEED_KMH {
        fb.hit(Advisory::LowAirspeed, &[
            "Increase speed or angle of attack to generate more lift",
            "Lift = 1/2 x air density x velocity^2 x wing area x lift coefficient",
        ]);
    } else if params.airspeed_kmh > HIGH_AIRSPEED_KMH {
        fb.hit(Advisory::HighSpeedDrag, &[
            "Drag grows with velocity squared - doubling speed quadruples drag",
            "Consider reducing throttle to maintain efficient flight",
        ]);
    }

    let aoa = params.angle_of_attack_deg;
    let stalled = is_stalled(aoa, cfg);
    if !stalled && aoa > cfg.critical_angle_deg - STALL_WARNING_MARGIN_DEG {
        fb.hit(Advisory::ApproachingStall, &[
            "Most aircraft stall between 15 and 18 degrees angle of attack",
            "Reduce angle of attack or increase airspeed to maintain safe flight",
        ]);
    } else if stalled {
        fb.hit(Advisory::Stalled, &[
            "Immediately reduce angle of attack and increase throttle",
            "In real flight, push the nose down to recover from a stall",
        ]);
    } else if aoa < 0.0 {
        fb.hit(Advisory::NegativeAoA, &[
            "Negative angles create downward lift - useful for aerobatic manoeuvres",
        ]);
    }

    if params.altitude_m > HIGH_ALTITUDE_M {
        fb.hit(Advisory::HighAltitude, &[
            "Air density at 10,000 m is roughly 30% of sea level density",
            "Higher speeds or larger angles are needed to maintain the same lift",
        ]);
    }

    if is_balanced(forces) {
        fb.hit(Advisory::WellBalanced, &[
            "This is ideal for cruise flight - minimal energy waste",
            "Small adjustments maintain altitude and speed efficiently",
        ]);
    }

    fb
}

/// Thrust within 5 kN of drag and lift within 10 kN of weight.
pub fn is_balanced(forces: &Forces) -> bool {
    forces.net_horizontal().abs() < THRUST_DRAG_TOLERANCE_N
        && forces.net_vertical().abs() < LIFT_WEIGHT_TOLERANCE_N
}
