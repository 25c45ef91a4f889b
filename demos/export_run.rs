use flight_viz::aircraft::{presets, FlightParameters};
use flight_viz::config::SimulatorConfig;
use flight_viz::io::csv;
use flight_viz::io::json::{self, RunSummary};
use flight_viz::sim::SimController;

fn main() {
    let mut config = SimulatorConfig::default();
    config.integrator.record_history = true;

    let preset = presets::cessna_172();
    let mut sim = SimController::new(config, FlightParameters::default());
    sim.apply_preset(&preset);
    sim.update(|p| {
        p.airspeed_kmh = 180.0;
        p.altitude_m = 1500.0;
        p.throttle_pct = 60.0;
    });

    println!("Flying {} for 10 s ...", preset.name);
    sim.start();
    for _ in 0..100 {
        sim.tick();
    }
    sim.pause();

    let summary = RunSummary::from_history(sim.history()).expect("run recorded no ticks");
    println!("Max speed: {:.1} m/s", summary.max_speed_ms);
    println!("Max climb: {:.1} m/s  max sink: {:.1} m/s", summary.max_climb_rate_ms, summary.max_sink_rate_ms);

    csv::write_history_file("cessna_run.csv", sim.history()).expect("Failed to write CSV");
    json::write_snapshot_file("cessna_run.json", sim.preset_id(), &sim.snapshot(), Some(&summary))
        .expect("Failed to write JSON");

    println!("Exported: cessna_run.csv, cessna_run.json");
}
