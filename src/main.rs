use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use flight_viz::aircraft::{presets, FlightParameters, Parameter};
use flight_viz::config::SimulatorConfig;
use flight_viz::io::{csv, json};
use flight_viz::render::{RenderAdapter, TextReport};
use flight_viz::sim::{EventKind, SimController};

/// Headless flight-physics report: compute the four forces for one flight
/// condition, run the motion model for a number of fixed ticks and print
/// the result.
#[derive(Parser, Debug)]
#[command(name = "flight-viz", version, about)]
struct Args {
    /// TOML file with [physics] / [integrator] overrides
    #[arg(short, long, env = "FLIGHT_VIZ_CONFIG")]
    config: Option<PathBuf>,

    /// Aircraft preset id
    #[arg(short, long, default_value = presets::DEFAULT_PRESET)]
    aircraft: String,

    /// Airspeed, km/h
    #[arg(long)]
    airspeed: Option<f64>,

    /// Angle of attack, degrees
    #[arg(long, allow_hyphen_values = true)]
    aoa: Option<f64>,

    /// Altitude, metres
    #[arg(long)]
    altitude: Option<f64>,

    /// Throttle, percent
    #[arg(long)]
    throttle: Option<f64>,

    /// Headwind component, km/h (negative for tailwind)
    #[arg(long, allow_hyphen_values = true)]
    wind: Option<f64>,

    /// Number of fixed integration ticks to run
    #[arg(short, long, default_value_t = 50)]
    ticks: u32,

    /// Write the tick history as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the final snapshot as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// List the built-in aircraft presets and exit
    #[arg(long)]
    list_presets: bool,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "flight-viz failed");
            ExitCode::FAILURE
        }
    }
}

/// Clamp a user-supplied value into the control's range, as a slider would.
fn clamp_input(param: Parameter, value: f64) -> f64 {
    let clamped = param.range().clamp(value);
    if clamped != value {
        tracing::warn!(parameter = param.label(), value, clamped, "input outside control range");
    }
    clamped
}

fn run(args: Args) -> flight_viz::Result<()> {
    if args.list_presets {
        for p in presets::all() {
            println!(
                "  {:<12} {:<18} {:>9.0} kg  {:>6.1} m^2  {:>6.1} kg/m^2",
                p.id, p.name, p.mass_kg, p.wing_area_m2, p.wing_loading()
            );
        }
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => SimulatorConfig::load(path)?,
        None => SimulatorConfig::default(),
    };
    if args.csv.is_some() {
        config.integrator.record_history = true;
    }
    let dt = config.integrator.dt_s;

    let preset = presets::lookup(&args.aircraft)?;
    let mut sim = SimController::new(config, FlightParameters::default());
    sim.apply_preset(&preset);

    let overrides = [
        (Parameter::Airspeed, args.airspeed),
        (Parameter::AngleOfAttack, args.aoa),
        (Parameter::Altitude, args.altitude),
        (Parameter::Throttle, args.throttle),
        (Parameter::WindSpeed, args.wind),
    ];
    for (param, value) in overrides {
        if let Some(v) = value {
            sim.set(param, clamp_input(param, v));
        }
    }

    // -----------------------------------------------------------------------
    // Report
    // -----------------------------------------------------------------------
    let stdout = std::io::stdout();
    let mut report = TextReport::new(stdout.lock());

    println!();
    println!("====================================================================");
    println!("  FOUR FORCES OF FLIGHT - {}", preset.name);
    println!("====================================================================");
    println!();
    report.render(&sim.snapshot())?;

    sim.start();
    for _ in 0..args.ticks {
        sim.tick();
    }
    sim.pause();

    println!();
    println!("  After {} ticks ({:.1} s of flight time)", sim.ticks(), sim.ticks() as f64 * dt);
    println!("  ──────────────────────────────────────────────────────────────────");
    let s = sim.state();
    println!(
        "  Position:  ({:>6.1}, {:>6.1})   climb rate {:>+8.2} m/s   speed {:>8.2} m/s",
        s.pos.x,
        s.pos.y,
        s.climb_rate(),
        s.speed()
    );
    for event in sim.events() {
        if let EventKind::BoundaryContact(edge) = &event.kind {
            println!("  tick {:>4}: reached the {:?} edge of the view", event.tick, edge);
        }
    }
    println!("====================================================================");
    println!();

    if let Some(path) = &args.csv {
        csv::write_history_file(path, sim.history())?;
        tracing::info!(path = %path.display(), rows = sim.history().len(), "wrote tick history");
    }
    if let Some(path) = &args.json {
        let summary = json::RunSummary::from_history(sim.history());
        json::write_snapshot_file(path, sim.preset_id(), &sim.snapshot(), summary.as_ref())?;
        tracing::info!(path = %path.display(), "wrote snapshot");
    }

    Ok(())
}
