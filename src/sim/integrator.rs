use nalgebra::Vector2;

use super::state::KinematicState;
use crate::aircraft::FlightParameters;
use crate::config::IntegratorConfig;
use crate::physics::Forces;

// ---------------------------------------------------------------------------
// Explicit Euler step under the four forces
// ---------------------------------------------------------------------------

/// Screen-space acceleration (m/s^2). Lift above weight gives negative y.
pub fn acceleration(forces: &Forces, mass_kg: f64) -> Vector2<f64> {
    Vector2::new(
        forces.net_horizontal() / mass_kg,
        -forces.net_vertical() / mass_kg,
    )
}

/// Advance one logical step of `cfg.dt_s`.
///
/// Velocity is updated first and the new velocity moves the position, which
/// is then clamped to the visible bounds. Rotation is taken directly from the
/// AoA control rather than integrated.
pub fn euler_step(
    state: &KinematicState,
    forces: &Forces,
    params: &FlightParameters,
    cfg: &IntegratorConfig,
) -> KinematicState {
    let dt = cfg.dt_s;
    let vel = state.vel + acceleration(forces, params.mass_kg) * dt;
    let pos = cfg.bounds.clamp(state.pos + vel * dt * cfg.position_scale);

    KinematicState {
        time: state.time + dt,
        pos,
        vel,
        rotation: params.angle_of_attack_deg.to_radians(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn origin(cfg: &IntegratorConfig) -> KinematicState {
        KinematicState::at_origin(cfg.origin())
    }

    #[test]
    fn balanced_forces_hold_position() {
        let cfg = IntegratorConfig::default();
        let f = Forces { lift_n: 1000.0, drag_n: 200.0, thrust_n: 200.0, weight_n: 1000.0 };
        let p = FlightParameters { mass_kg: 100.0, ..Default::default() };
        let s = euler_step(&origin(&cfg), &f, &p, &cfg);
        assert_eq!(s.pos, cfg.origin());
        assert_eq!(s.vel, Vector2::zeros());
        assert_relative_eq!(s.time, 0.1);
    }

    #[test]
    fn excess_lift_moves_up_screen() {
        let cfg = IntegratorConfig::default();
        let f = Forces { lift_n: 1100.0, drag_n: 0.0, thrust_n: 0.0, weight_n: 1000.0 };
        let p = FlightParameters { mass_kg: 100.0, ..Default::default() };
        let s = euler_step(&origin(&cfg), &f, &p, &cfg);
        // a_y = -1 m/s^2, v_y = -0.1, dy = -0.1 * 0.1 * 100 = -1
        assert_relative_eq!(s.vel.y, -0.1, epsilon = 1e-12);
        assert_relative_eq!(s.pos.y, 299.0, epsilon = 1e-9);
        assert_eq!(s.pos.x, 400.0);
    }

    #[test]
    fn uses_updated_velocity_for_position() {
        let cfg = IntegratorConfig::default();
        let f = Forces { lift_n: 0.0, drag_n: 0.0, thrust_n: 50.0, weight_n: 0.0 };
        let p = FlightParameters { mass_kg: 10.0, ..Default::default() };
        let mut s = origin(&cfg);
        s.vel.x = 1.0;
        let next = euler_step(&s, &f, &p, &cfg);
        // v = 1 + 5 * 0.1 = 1.5 ; dx = 1.5 * 0.1 * 100 = 15
        assert_relative_eq!(next.vel.x, 1.5, epsilon = 1e-12);
        assert_relative_eq!(next.pos.x, 415.0, epsilon = 1e-9);
    }

    #[test]
    fn position_is_clamped_but_velocity_is_not() {
        let cfg = IntegratorConfig::default();
        let f = Forces { lift_n: 0.0, drag_n: 0.0, thrust_n: 0.0, weight_n: 1.0e6 };
        let p = FlightParameters { mass_kg: 1000.0, ..Default::default() };
        let mut s = origin(&cfg);
        for _ in 0..50 {
            s = euler_step(&s, &f, &p, &cfg);
        }
        assert_eq!(s.pos.y, 550.0);
        assert!(s.vel.y > 100.0, "velocity keeps growing: {}", s.vel.y);
    }

    #[test]
    fn rotation_tracks_aoa() {
        let cfg = IntegratorConfig::default();
        let p = FlightParameters { angle_of_attack_deg: 12.5, ..Default::default() };
        let s = euler_step(&origin(&cfg), &Forces::default(), &p, &cfg);
        assert_relative_eq!(s.rotation, 12.5_f64.to_radians());
    }
}
