use serde::{Deserialize, Serialize};

use super::atmosphere::air_density;
use crate::aircraft::FlightParameters;
use crate::config::{DragModel, PhysicsConfig};

const KMH_PER_MS: f64 = 3.6;

/// The four forces of flight, newtons. Under [`DragModel::AngleScaled`] drag
/// turns negative below roughly -11.5 degrees of AoA.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Forces {
    pub lift_n: f64,
    pub drag_n: f64,
    pub thrust_n: f64,
    pub weight_n: f64,
}

impl Forces {
    /// Lift minus weight. Positive climbs.
    pub fn net_vertical(&self) -> f64 {
        self.lift_n - self.weight_n
    }

    /// Thrust minus drag. Positive accelerates.
    pub fn net_horizontal(&self) -> f64 {
        self.thrust_n - self.drag_n
    }
}

/// True when the angle of attack exceeds the critical angle.
pub fn is_stalled(angle_of_attack_deg: f64, cfg: &PhysicsConfig) -> bool {
    angle_of_attack_deg > cfg.critical_angle_deg
}

/// `0.5 * rho * v^2` with v the wind-relative airspeed in m/s.
pub fn dynamic_pressure(params: &FlightParameters, cfg: &PhysicsConfig) -> f64 {
    let rho = air_density(params.altitude_m, cfg);
    let v = params.relative_airspeed_kmh() / KMH_PER_MS;
    0.5 * rho * v * v
}

/// Compute all four forces from the current parameters.
pub fn compute_forces(params: &FlightParameters, cfg: &PhysicsConfig) -> Forces {
    let q_dyn = dynamic_pressure(params, cfg);
    let qs = q_dyn * params.wing_area_m2;

    let mut lift = qs * params.lift_coefficient;
    if is_stalled(params.angle_of_attack_deg, cfg) {
        lift *= cfg.stall_lift_factor;
    }

    let drag_factor = match cfg.drag_model {
        DragModel::Flat => 1.0,
        DragModel::AngleScaled => 1.0 + 5.0 * params.angle_of_attack_deg.to_radians().sin(),
    };
    let drag = qs * params.drag_coefficient * drag_factor;

    Forces {
        lift_n: lift,
        drag_n: drag,
        thrust_n: params.throttle_pct / 100.0 * cfg.max_thrust_n,
        weight_n: params.mass_kg * cfg.gravity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cfg() -> PhysicsConfig {
        PhysicsConfig::default()
    }

    #[test]
    fn cruise_scenario() {
        let f = compute_forces(&FlightParameters::default(), &cfg());
        assert_eq!(f.weight_n, 406_134.0);
        assert_eq!(f.thrust_n, 90_000.0);
        assert_relative_eq!(f.lift_n, 310_003.927_330_9, max_relative = 1e-9);
        assert_relative_eq!(f.drag_n, 6_458.415_152_7, max_relative = 1e-9);
    }

    #[test]
    fn weight_ignores_everything_but_mass() {
        let base = FlightParameters::default();
        let varied = FlightParameters {
            airspeed_kmh: 480.0,
            angle_of_attack_deg: 22.0,
            altitude_m: 11_000.0,
            throttle_pct: 5.0,
            wing_area_m2: 500.0,
            ..base
        };
        let a = compute_forces(&base, &cfg());
        let b = compute_forces(&varied, &cfg());
        assert_eq!(a.weight_n, b.weight_n);
        assert_eq!(b.weight_n, base.mass_kg * 9.81);
    }

    #[test]
    fn lift_and_drag_scale_with_speed_squared() {
        let slow = FlightParameters { airspeed_kmh: 150.0, ..Default::default() };
        let fast = FlightParameters { airspeed_kmh: 300.0, ..slow };
        let a = compute_forces(&slow, &cfg());
        let b = compute_forces(&fast, &cfg());
        assert_relative_eq!(dynamic_pressure(&fast, &cfg()), 4.0 * dynamic_pressure(&slow, &cfg()), max_relative = 1e-12);
        assert_relative_eq!(b.lift_n, 4.0 * a.lift_n, max_relative = 1e-12);
        assert_relative_eq!(b.drag_n, 4.0 * a.drag_n, max_relative = 1e-12);
    }

    #[test]
    fn stall_flag_tracks_critical_angle() {
        let c = cfg();
        let mut aoa = -10.0;
        while aoa <= 25.0 {
            assert_eq!(is_stalled(aoa, &c), aoa > 15.0, "aoa {}", aoa);
            aoa += 0.5;
        }
        assert!(!is_stalled(15.0, &c));
        assert!(is_stalled(15.01, &c));
    }

    #[test]
    fn stalled_lift_is_penalised() {
        let pre = FlightParameters { angle_of_attack_deg: 14.0, ..Default::default() };
        let post = FlightParameters { angle_of_attack_deg: 16.0, ..pre };
        let a = compute_forces(&pre, &cfg());
        let b = compute_forces(&post, &cfg());
        assert!(is_stalled(post.angle_of_attack_deg, &cfg()));
        assert_relative_eq!(b.lift_n, 0.3 * a.lift_n, max_relative = 1e-12);
        // Flat drag model: drag does not see the stall
        assert_eq!(a.drag_n, b.drag_n);
    }

    #[test]
    fn angle_scaled_drag_grows_with_aoa() {
        let c = PhysicsConfig { drag_model: DragModel::AngleScaled, ..cfg() };
        let level = FlightParameters { angle_of_attack_deg: 0.0, ..Default::default() };
        let pitched = FlightParameters { angle_of_attack_deg: 10.0, ..level };
        let d0 = compute_forces(&level, &c).drag_n;
        let d10 = compute_forces(&pitched, &c).drag_n;
        assert_relative_eq!(d0, compute_forces(&level, &cfg()).drag_n, max_relative = 1e-12);
        assert_relative_eq!(d10 / d0, 1.0 + 5.0 * 10.0_f64.to_radians().sin(), max_relative = 1e-12);
    }

    #[test]
    fn headwind_raises_dynamic_pressure() {
        let calm = FlightParameters::default();
        let windy = FlightParameters { wind_speed_kmh: 50.0, ..calm };
        let same_speed = FlightParameters { airspeed_kmh: 300.0, ..calm };
        assert_relative_eq!(
            compute_forces(&windy, &cfg()).lift_n,
            compute_forces(&same_speed, &cfg()).lift_n,
            max_relative = 1e-12
        );
    }

    #[test]
    fn throttle_is_linear() {
        let c = cfg();
        for pct in [0.0, 25.0, 50.0, 100.0] {
            let p = FlightParameters { throttle_pct: pct, ..Default::default() };
            assert_eq!(compute_forces(&p, &c).thrust_n, pct / 100.0 * 120_000.0);
        }
    }

    #[test]
    fn net_forces() {
        let f = Forces { lift_n: 10.0, drag_n: 3.0, thrust_n: 5.0, weight_n: 12.0 };
        assert_eq!(f.net_vertical(), -2.0);
        assert_eq!(f.net_horizontal(), 2.0);
    }
}
