use std::time::{Duration, Instant};

use super::event::{BoundaryDetector, EventDetector, EventKind, SimEvent, StallWatch};
use super::integrator::euler_step;
use super::state::{KinematicState, RunState, TickRecord};
use super::ticker::TickTimer;
use crate::aircraft::{AircraftPreset, FlightParameters, Parameter};
use crate::config::{PhysicsConfig, SimulatorConfig};
use crate::feedback::{self, Feedback, ForceTrends};
use crate::physics::{self, FlightMetrics, Forces};
use crate::render::Snapshot;

// ---------------------------------------------------------------------------
// Session controller
// ---------------------------------------------------------------------------

/// Owns one simulation session: the parameter set, the forces derived from
/// it, the kinematic state and the run state. Adapters hold it by reference
/// and never touch the pieces directly.
pub struct SimController {
    config: SimulatorConfig,
    physics: PhysicsConfig, // config.physics plus any preset thrust override
    preset: Option<String>,
    params: FlightParameters,
    forces: Forces,
    state: KinematicState,
    run: RunState,
    timer: Option<TickTimer>,
    ticks: u64,
    stall: StallWatch,
    boundary: BoundaryDetector,
    events: Vec<SimEvent>,
    history: Vec<TickRecord>,
}

impl SimController {
    pub fn new(config: SimulatorConfig, params: FlightParameters) -> Self {
        let physics = config.physics.clone();
        let forces = physics::compute_forces(&params, &physics);
        let stalled = physics::is_stalled(params.angle_of_attack_deg, &physics);
        Self {
            state: KinematicState::at_origin(config.integrator.origin()),
            boundary: BoundaryDetector::new(config.integrator.bounds),
            config,
            physics,
            preset: None,
            params,
            forces,
            run: RunState::Stopped,
            timer: None,
            ticks: 0,
            stall: StallWatch::new(stalled),
            events: Vec::new(),
            history: Vec::new(),
        }
    }

    // -- parameters ---------------------------------------------------------

    pub fn parameters(&self) -> &FlightParameters {
        &self.params
    }

    pub fn set_parameters(&mut self, params: FlightParameters) {
        self.params = params;
        self.recompute();
    }

    /// Edit the parameters in place; forces are recomputed afterwards.
    pub fn update(&mut self, edit: impl FnOnce(&mut FlightParameters)) {
        edit(&mut self.params);
        self.recompute();
    }

    pub fn set(&mut self, param: Parameter, value: f64) {
        self.update(|p| p.set(param, value));
    }

    pub fn apply_preset(&mut self, preset: &AircraftPreset) {
        tracing::info!(preset = %preset.id, mass_kg = preset.mass_kg, wing_area_m2 = preset.wing_area_m2, "applying aircraft preset");
        self.physics.max_thrust_n = preset.max_thrust_n.unwrap_or(self.config.physics.max_thrust_n);
        self.preset = Some(preset.id.clone());
        self.update(|p| preset.apply_to(p));
    }

    pub fn preset_id(&self) -> Option<&str> {
        self.preset.as_deref()
    }

    fn recompute(&mut self) {
        self.forces = physics::compute_forces(&self.params, &self.physics);
        let aoa = self.params.angle_of_attack_deg;
        let stalled = self.is_stalled();
        if let Some(kind) = self.stall.observe(stalled, aoa) {
            match kind {
                EventKind::StallEntered { .. } => tracing::warn!(aoa_deg = aoa, "stall: critical angle exceeded"),
                _ => tracing::info!(aoa_deg = aoa, "stall recovered"),
            }
            self.push_event(kind);
        }
    }

    // -- run state ----------------------------------------------------------

    pub fn start(&mut self) {
        if self.run == RunState::Running {
            return;
        }
        let cfg = &self.config.integrator;
        self.timer = Some(TickTimer::start(cfg.tick_period(), cfg.max_catch_up_ticks));
        self.run = RunState::Running;
        tracing::info!(tick = self.ticks, "simulation started");
        self.push_event(EventKind::Started);
    }

    pub fn pause(&mut self) {
        if self.run == RunState::Stopped {
            return;
        }
        self.timer = None;
        self.run = RunState::Stopped;
        tracing::info!(tick = self.ticks, "simulation paused");
        self.push_event(EventKind::Paused);
    }

    pub fn toggle(&mut self) {
        match self.run {
            RunState::Running => self.pause(),
            RunState::Stopped => self.start(),
        }
    }

    /// Stop and return the aircraft to the origin, whatever the prior state.
    pub fn reset(&mut self) {
        self.timer = None;
        self.run = RunState::Stopped;
        self.state = KinematicState::at_origin(self.config.integrator.origin());
        self.ticks = 0;
        self.history.clear();
        tracing::info!("simulation reset");
        self.push_event(EventKind::Reset);
    }

    pub fn is_running(&self) -> bool {
        self.run == RunState::Running
    }

    pub fn run_state(&self) -> RunState {
        self.run
    }

    /// True while a physics timer is held. Mirrors `is_running`.
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    // -- stepping -----------------------------------------------------------

    /// One logical integration step. Does nothing unless Running.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let prev = self.state;
        self.state = euler_step(&prev, &self.forces, &self.params, &self.config.integrator);
        self.ticks += 1;
        tracing::trace!(tick = self.ticks, x = self.state.pos.x, y = self.state.pos.y, "tick");

        for kind in self.boundary.check(&prev, &self.state) {
            tracing::debug!(?kind, "boundary contact");
            self.push_event(kind);
        }
        let cfg = &self.config.integrator;
        if cfg.record_history {
            self.history.push(TickRecord { tick: self.ticks, state: self.state, forces: self.forces });
            if let Some(cap) = cfg.max_history {
                let excess = self.history.len().saturating_sub(cap);
                self.history.drain(..excess);
            }
        }
        true
    }

    /// Run the ticks due after `elapsed` of wall-clock time. Returns how many ran.
    pub fn pump(&mut self, elapsed: Duration) -> u32 {
        let due = match self.timer.as_mut() {
            Some(timer) => timer.advance(elapsed),
            None => return 0,
        };
        self.run_ticks(due)
    }

    /// Like [`pump`](Self::pump) but measured from the timer's last poll.
    pub fn pump_at(&mut self, now: Instant) -> u32 {
        let due = match self.timer.as_mut() {
            Some(timer) => timer.poll(now),
            None => return 0,
        };
        self.run_ticks(due)
    }

    fn run_ticks(&mut self, due: u32) -> u32 {
        let mut ran = 0;
        for _ in 0..due {
            if self.tick() {
                ran += 1;
            }
        }
        ran
    }

    /// Wall-clock time until the next tick, if running.
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.timer.as_ref().map(TickTimer::until_next)
    }

    // -- derived views ------------------------------------------------------

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }

    pub fn forces(&self) -> &Forces {
        &self.forces
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_stalled(&self) -> bool {
        physics::is_stalled(self.params.angle_of_attack_deg, &self.physics)
    }

    pub fn feedback(&self) -> Feedback {
        feedback::classify(&self.params, &self.forces, &self.physics)
    }

    pub fn trends(&self) -> ForceTrends {
        feedback::trends(&self.forces)
    }

    pub fn metrics(&self) -> FlightMetrics {
        physics::flight_metrics(&self.params, &self.forces, &self.physics)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.ticks,
            parameters: self.params,
            forces: self.forces,
            state: self.state,
            stalled: self.is_stalled(),
            running: self.is_running(),
            feedback: self.feedback(),
            trends: self.trends(),
            metrics: self.metrics(),
        }
    }

    pub fn history(&self) -> &[TickRecord] {
        &self.history
    }

    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, kind: EventKind) {
        self.events.push(SimEvent { tick: self.ticks, kind });
    }
}

impl Default for SimController {
    fn default() -> Self {
        Self::new(SimulatorConfig::default(), FlightParameters::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
