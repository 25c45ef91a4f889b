use flight_viz::aircraft::{presets, FlightParameters};
use flight_viz::config::PhysicsConfig;
use flight_viz::physics::{compute_forces, is_stalled};

fn main() {
    let physics = PhysicsConfig::default();
    let mut params = FlightParameters::default();
    presets::boeing_737().apply_to(&mut params);

    println!("Angle-of-attack sweep at {:.0} km/h, {:.0} m", params.airspeed_kmh, params.altitude_m);
    println!("  {:>6}  {:>12}  {:>10}  {:>8}", "AoA", "Lift (N)", "L/W", "Stalled");

    for aoa in -10..=25 {
        params.angle_of_attack_deg = aoa as f64;
        let f = compute_forces(&params, &physics);
        println!(
            "  {:>5}°  {:>12.0}  {:>10.3}  {:>8}",
            aoa,
            f.lift_n,
            f.lift_n / f.weight_n,
            if is_stalled(params.angle_of_attack_deg, &physics) { "yes" } else { "" }
        );
    }
}
