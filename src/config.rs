use std::path::Path;
use std::time::Duration;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Physics constants
// ---------------------------------------------------------------------------

/// How drag responds to angle of attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragModel {
    /// `q * S * Cd`, independent of angle of attack.
    #[default]
    Flat,
    /// `q * S * Cd * (1 + 5 sin(alpha))`. A teaching approximation of
    /// induced-drag growth, not derived from wing theory.
    AngleScaled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub sea_level_density: f64,  // kg/m^3
    pub scale_height_m: f64,     // m, exponential atmosphere
    pub gravity: f64,            // m/s^2
    pub critical_angle_deg: f64, // stall onset
    pub stall_lift_factor: f64,  // lift multiplier once stalled
    pub max_thrust_n: f64,       // thrust at 100 % throttle
    pub drag_model: DragModel,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            sea_level_density: 1.225,
            scale_height_m: 8400.0,
            gravity: 9.81,
            critical_angle_deg: 15.0,
            stall_lift_factor: 0.3,
            max_thrust_n: 120_000.0,
            drag_model: DragModel::Flat,
        }
    }
}

// ---------------------------------------------------------------------------
// Integrator / presentation settings
// ---------------------------------------------------------------------------

/// Visible region in screen units. Positions are clamped into it after
/// every step; it has no physical meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Bounds {
    pub fn clamp(&self, p: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(
            p.x.clamp(self.min[0], self.max[0]),
            p.y.clamp(self.min[1], self.max[1]),
        )
    }

    pub fn contains(&self, p: Vector2<f64>) -> bool {
        (self.min[0]..=self.max[0]).contains(&p.x) && (self.min[1]..=self.max[1]).contains(&p.y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self { min: [50.0, 50.0], max: [750.0, 550.0] }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegratorConfig {
    pub dt_s: f64,                 // logical step per tick
    pub tick_period_ms: u64,       // wall-clock period between ticks
    pub position_scale: f64,       // screen units per metre
    pub origin: [f64; 2],          // reset position, screen units
    pub max_catch_up_ticks: u32,   // cap per pump after a stall in the host loop
    pub record_history: bool,
    pub max_history: Option<usize>, // keep only the latest N records
    pub bounds: Bounds,
}

impl IntegratorConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn origin(&self) -> Vector2<f64> {
        Vector2::new(self.origin[0], self.origin[1])
    }
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            dt_s: 0.1,
            tick_period_ms: 50,
            position_scale: 100.0,
            origin: [400.0, 300.0],
            max_catch_up_ticks: 10,
            record_history: false,
            max_history: None,
            bounds: Bounds::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub physics: PhysicsConfig,
    pub integrator: IntegratorConfig,
}

impl SimulatorConfig {
    /// Read a TOML file. Missing sections and keys fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded simulator config");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let p = &self.physics;
        let i = &self.integrator;

        let positive = [
            ("physics.sea_level_density", p.sea_level_density),
            ("physics.scale_height_m", p.scale_height_m),
            ("physics.gravity", p.gravity),
            ("physics.max_thrust_n", p.max_thrust_n),
            ("integrator.dt_s", i.dt_s),
            ("integrator.position_scale", i.position_scale),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidConfig(format!("{name} must be positive, got {value}")));
            }
        }
        if !(0.0..=1.0).contains(&p.stall_lift_factor) {
            return Err(Error::InvalidConfig(format!(
                "physics.stall_lift_factor must be within [0, 1], got {}",
                p.stall_lift_factor
            )));
        }
        if i.tick_period_ms == 0 {
            return Err(Error::InvalidConfig("integrator.tick_period_ms must be non-zero".into()));
        }
        if i.max_catch_up_ticks == 0 {
            return Err(Error::InvalidConfig("integrator.max_catch_up_ticks must be non-zero".into()));
        }
        if i.max_history == Some(0) {
            return Err(Error::InvalidConfig("integrator.max_history must be non-zero when set".into()));
        }
        let b = &i.bounds;
        if b.min[0] >= b.max[0] || b.min[1] >= b.max[1] {
            return Err(Error::InvalidConfig(format!(
                "integrator.bounds is empty or inverted: {:?}..{:?}",
                b.min, b.max
            )));
        }
        if !b.contains(i.origin()) {
            return Err(Error::InvalidConfig(format!(
                "integrator.origin {:?} lies outside the bounds",
                i.origin
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        SimulatorConfig::default().validate().unwrap();
    }

    #[test]
    fn empty_file_yields_defaults() {
        let c = SimulatorConfig::from_toml_str("").unwrap();
        assert_eq!(c.physics.scale_height_m, 8400.0);
        assert_eq!(c.integrator.tick_period_ms, 50);
        assert_eq!(c.physics.drag_model, DragModel::Flat);
    }

    #[test]
    fn partial_override() {
        let c = SimulatorConfig::from_toml_str(
            r#"
            [physics]
            scale_height_m = 10000.0
            drag_model = "angle_scaled"

            [integrator]
            record_history = true
            "#,
        )
        .unwrap();
        assert_eq!(c.physics.scale_height_m, 10_000.0);
        assert_eq!(c.physics.drag_model, DragModel::AngleScaled);
        assert_eq!(c.physics.max_thrust_n, 120_000.0);
        assert!(c.integrator.record_history);
        assert_eq!(c.integrator.dt_s, 0.1);
    }

    #[test]
    fn rejects_non_positive_dt() {
        let err = SimulatorConfig::from_toml_str("[integrator]\ndt_s = 0.0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = SimulatorConfig::from_toml_str(
            "[integrator.bounds]\nmin = [700.0, 50.0]\nmax = [100.0, 550.0]\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = SimulatorConfig::from_toml_str("[physics\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn round_trips_through_toml() {
        let c = SimulatorConfig::default();
        let text = toml::to_string(&c).unwrap();
        let back = SimulatorConfig::from_toml_str(&text).unwrap();
        assert_eq!(back.integrator.bounds, c.integrator.bounds);
        assert_eq!(back.physics.stall_lift_factor, c.physics.stall_lift_factor);
    }

    #[test]
    fn bounds_clamp_is_per_axis() {
        let b = Bounds::default();
        let p = b.clamp(Vector2::new(10.0, 900.0));
        assert_eq!(p, Vector2::new(50.0, 550.0));
    }

    #[test]
    fn missing_file_is_a_config_io_error() {
        let path = std::env::temp_dir().join("flight-viz-no-such-config.toml");
        let err = SimulatorConfig::load(&path).unwrap_err();
        match err {
            Error::ConfigIo { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected ConfigIo, got {other:?}"),
        }
    }

    #[test]
    fn history_cap_parses_and_rejects_zero() {
        let c = SimulatorConfig::from_toml_str("[integrator]\nmax_history = 400\n").unwrap();
        assert_eq!(c.integrator.max_history, Some(400));
        let err = SimulatorConfig::from_toml_str("[integrator]\nmax_history = 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
