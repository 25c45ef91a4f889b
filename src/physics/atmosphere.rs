use crate::config::PhysicsConfig;

// ---------------------------------------------------------------------------
// Exponential (isothermal) atmosphere
// ---------------------------------------------------------------------------

/// Air density at altitude: `rho0 * exp(-h / H)`.
///
/// A single-scale-height fit, good enough for the 0-12 km band the
/// visualizer exposes. Negative altitudes are not clamped.
pub fn air_density(altitude_m: f64, cfg: &PhysicsConfig) -> f64 {
    cfg.sea_level_density * (-altitude_m / cfg.scale_height_m).exp()
}

/// Density as a fraction of the sea-level value.
pub fn density_ratio(altitude_m: f64, cfg: &PhysicsConfig) -> f64 {
    air_density(altitude_m, cfg) / cfg.sea_level_density
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sea_level_density() {
        let cfg = PhysicsConfig::default();
        assert_eq!(air_density(0.0, &cfg), 1.225);
    }

    #[test]
    fn density_strictly_decreases() {
        let cfg = PhysicsConfig::default();
        let mut prev = air_density(0.0, &cfg);
        for h in (100..=12_000).step_by(100) {
            let rho = air_density(h as f64, &cfg);
            assert!(rho < prev, "density rose at {} m", h);
            assert!(rho > 0.0);
            prev = rho;
        }
    }

    #[test]
    fn one_scale_height_is_e_folding() {
        let cfg = PhysicsConfig::default();
        assert_relative_eq!(
            density_ratio(cfg.scale_height_m, &cfg),
            (-1.0_f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn ten_km_is_about_thirty_percent() {
        let cfg = PhysicsConfig::default();
        let r = density_ratio(10_000.0, &cfg);
        assert!(r > 0.29 && r < 0.32, "ratio at 10 km: {}", r);
    }
}
