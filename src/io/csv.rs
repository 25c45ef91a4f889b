use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::sim::TickRecord;

/// Write recorded ticks in CSV form.
///
/// Columns: tick, time, pos_x, pos_y, vel_x, vel_y, rotation_deg,
///          lift_n, drag_n, thrust_n, weight_n
pub fn write_history<W: Write>(writer: &mut W, history: &[TickRecord]) -> Result<()> {
    writeln!(
        writer,
        "tick,time,pos_x,pos_y,vel_x,vel_y,rotation_deg,\
         lift_n,drag_n,thrust_n,weight_n"
    )?;

    for r in history {
        let s = &r.state;
        let f = &r.forces;
        writeln!(
            writer,
            "{},{:.2},{:.3},{:.3},{:.4},{:.4},{:.2},\
             {:.1},{:.1},{:.1},{:.1}",
            r.tick,
            s.time,
            s.pos.x, s.pos.y,
            s.vel.x, s.vel.y,
            s.rotation.to_degrees(),
            f.lift_n, f.drag_n, f.thrust_n, f.weight_n,
        )?;
    }

    Ok(())
}

pub fn write_history_file(path: impl AsRef<Path>, history: &[TickRecord]) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_history(&mut file, history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulatorConfig;
    use crate::aircraft::FlightParameters;
    use crate::sim::SimController;

    #[test]
    fn csv_output_has_header_and_rows() {
        let mut cfg = SimulatorConfig::default();
        cfg.integrator.record_history = true;
        let mut c = SimController::new(cfg, FlightParameters::default());
        c.start();
        c.tick();
        c.tick();

        let mut buf = Vec::new();
        write_history(&mut buf, c.history()).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("tick,time,"));
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert!(lines[1].starts_with("1,0.10,"));
        assert!(lines[2].ends_with(",406134.0"));
        assert_eq!(lines[1].split(',').count(), 11);
    }
}
