use std::io::Write;

use serde::Serialize;

use crate::aircraft::FlightParameters;
use crate::error::Result;
use crate::feedback::{Feedback, ForceTrends, HorizontalTrend, VerticalTrend};
use crate::physics::{FlightMetrics, Forces};
use crate::sim::KinematicState;

// ---------------------------------------------------------------------------
// Render contract
// ---------------------------------------------------------------------------

/// Everything a renderer may read for one frame. Built by the controller;
/// renderers never compute physics themselves.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub parameters: FlightParameters,
    pub forces: Forces,
    pub state: KinematicState,
    pub stalled: bool,
    pub running: bool,
    pub feedback: Feedback,
    pub trends: ForceTrends,
    pub metrics: FlightMetrics,
}

pub trait RenderAdapter {
    fn render(&mut self, snapshot: &Snapshot) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Plain-text adapter
// ---------------------------------------------------------------------------

/// Writes a force/feedback report to any `Write` sink.
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn vertical_label(t: VerticalTrend) -> &'static str {
    match t {
        VerticalTrend::Climbing => "Climbing",
        VerticalTrend::Descending => "Descending",
        VerticalTrend::Level => "Level",
    }
}

fn horizontal_label(t: HorizontalTrend) -> &'static str {
    match t {
        HorizontalTrend::Accelerating => "Accelerating",
        HorizontalTrend::Decelerating => "Decelerating",
        HorizontalTrend::Steady => "Steady",
    }
}

/// `"48.00"` or `"inf"` for an undefined ratio.
pub fn format_ratio(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => "inf".to_string(),
    }
}

impl<W: Write> RenderAdapter for TextReport<W> {
    fn render(&mut self, s: &Snapshot) -> Result<()> {
        let p = &s.parameters;
        let f = &s.forces;
        let m = &s.metrics;
        let w = &mut self.out;

        writeln!(w, "  Flight Condition")?;
        writeln!(w, "  ──────────────────────────────────────────────────────────────────")?;
        writeln!(
            w,
            "  Airspeed:  {:>8.0} km/h    AoA:        {:>6.1} deg    Altitude: {:>6.0} m",
            p.airspeed_kmh, p.angle_of_attack_deg, p.altitude_m
        )?;
        writeln!(
            w,
            "  Throttle:  {:>8.0} %       Headwind:   {:>6.0} km/h   Mass:     {:>6.0} kg",
            p.throttle_pct, p.wind_speed_kmh, p.mass_kg
        )?;
        writeln!(w)?;

        writeln!(w, "  Forces")?;
        writeln!(w, "  ──────────────────────────────────────────────────────────────────")?;
        writeln!(w, "  Lift:      {:>12.0} N   {}", f.lift_n, vertical_label(s.trends.vertical))?;
        writeln!(w, "  Drag:      {:>12.0} N   Opposes motion", f.drag_n)?;
        writeln!(w, "  Thrust:    {:>12.0} N   {}", f.thrust_n, horizontal_label(s.trends.horizontal))?;
        writeln!(w, "  Weight:    {:>12.0} N   Always downward", f.weight_n)?;
        writeln!(
            w,
            "  Net:       vertical {:>+10.0} N   horizontal {:>+10.0} N",
            m.net_vertical_n, m.net_horizontal_n
        )?;
        writeln!(w)?;

        writeln!(w, "  Metrics")?;
        writeln!(w, "  ──────────────────────────────────────────────────────────────────")?;
        writeln!(
            w,
            "  L/D:       {:>8}       Wing loading:  {:>7.1} kg/m^2",
            format_ratio(m.lift_to_drag, 2),
            m.wing_loading_kg_m2
        )?;
        writeln!(
            w,
            "  Density:   {:>8.3} kg/m^3 Power loading: {:>7} kg/W",
            m.air_density,
            format_ratio(m.power_loading_kg_w, 3)
        )?;
        writeln!(w, "  Density ratio: {:>5.1} % of sea level", m.density_ratio * 100.0)?;
        writeln!(w)?;

        writeln!(w, "  Motion   (tick {}, {})", s.tick, if s.running { "running" } else { "stopped" })?;
        writeln!(w, "  ──────────────────────────────────────────────────────────────────")?;
        writeln!(
            w,
            "  Position:  ({:>6.1}, {:>6.1})   Velocity: ({:>+8.2}, {:>+8.2}) m/s   Pitch: {:>5.1} deg",
            s.state.pos.x,
            s.state.pos.y,
            s.state.vel.x,
            s.state.vel.y,
            s.state.rotation.to_degrees()
        )?;
        writeln!(w)?;

        if s.stalled {
            writeln!(w, "  !! STALL WARNING !!")?;
        }
        let msg = s.feedback.advisory.message();
        if !msg.is_empty() {
            writeln!(w, "  {}", msg)?;
        }
        for tip in &s.feedback.tips {
            writeln!(w, "    - {}", tip)?;
        }
        Ok(())
    }
}
