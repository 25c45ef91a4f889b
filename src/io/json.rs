use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::render::Snapshot;
use crate::sim::TickRecord;

/// Summary statistics over a recorded run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub ticks: u64,
    pub duration_s: f64,
    pub max_speed_ms: f64,
    pub max_climb_rate_ms: f64,
    pub max_sink_rate_ms: f64,
    pub final_pos: [f64; 2],
}

impl RunSummary {
    /// `None` for an empty history.
    pub fn from_history(history: &[TickRecord]) -> Option<Self> {
        let last = history.last()?;

        let max_speed_ms = history.iter().map(|r| r.state.speed()).fold(0.0_f64, f64::max);
        let max_climb_rate_ms = history.iter().map(|r| r.state.climb_rate()).fold(0.0_f64, f64::max);
        let max_sink_rate_ms = history.iter().map(|r| -r.state.climb_rate()).fold(0.0_f64, f64::max);

        Some(RunSummary {
            ticks: last.tick,
            duration_s: last.state.time,
            max_speed_ms,
            max_climb_rate_ms,
            max_sink_rate_ms,
            final_pos: [last.state.pos.x, last.state.pos.y],
        })
    }
}

#[derive(Serialize)]
struct Report<'a> {
    aircraft: Option<&'a str>,
    snapshot: &'a Snapshot,
    #[serde(skip_serializing_if = "Option::is_none")]
    run: Option<&'a RunSummary>,
}

/// Write the snapshot (and an optional run summary) as pretty JSON.
pub fn write_snapshot<W: Write>(
    writer: &mut W,
    aircraft: Option<&str>,
    snapshot: &Snapshot,
    run: Option<&RunSummary>,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &Report { aircraft, snapshot, run })?;
    writeln!(writer)?;
    Ok(())
}

pub fn write_snapshot_file(
    path: impl AsRef<Path>,
    aircraft: Option<&str>,
    snapshot: &Snapshot,
    run: Option<&RunSummary>,
) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_snapshot(&mut file, aircraft, snapshot, run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::{FlightParameters, Parameter};
    use crate::config::SimulatorConfig;
    use crate::sim::SimController;

    fn recorded(ticks: usize) -> SimController {
        let mut cfg = SimulatorConfig::default();
        cfg.integrator.record_history = true;
        let mut c = SimController::new(cfg, FlightParameters::default());
        c.start();
        for _ in 0..ticks {
            c.tick();
        }
        c
    }

    #[test]
    fn summary_of_empty_history() {
        assert!(RunSummary::from_history(&[]).is_none());
    }

    #[test]
    fn summary_tracks_sink() {
        let c = recorded(10);
        let s = RunSummary::from_history(c.history()).unwrap();
        assert_eq!(s.ticks, 10);
        assert!((s.duration_s - 1.0).abs() < 1e-9);
        assert!(s.max_sink_rate_ms > 0.0);
        assert_eq!(s.max_climb_rate_ms, 0.0);
    }

    #[test]
    fn json_output_is_valid() {
        let mut c = recorded(3);
        c.set(Parameter::AngleOfAttack, 20.0);
        let summary = RunSummary::from_history(c.history());

        let mut buf = Vec::new();
        write_snapshot(&mut buf, Some("boeing-737"), &c.snapshot(), summary.as_ref()).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(v["aircraft"], "boeing-737");
        assert_eq!(v["snapshot"]["stalled"], true);
        assert_eq!(v["snapshot"]["feedback"]["advisory"], "Stalled");
        assert_eq!(v["snapshot"]["forces"]["weight_n"], 406134.0);
        assert_eq!(v["run"]["ticks"], 3);
    }

    #[test]
    fn snapshot_without_run_omits_field() {
        let c = SimController::default();
        let mut buf = Vec::new();
        write_snapshot(&mut buf, None, &c.snapshot(), None).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(v.get("run").is_none());
        assert!(v["aircraft"].is_null());
    }
}
