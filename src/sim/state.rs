use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::physics::Forces;

// ---------------------------------------------------------------------------
// 2D kinematic state (screen space: +x right, +y down)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    pub time: f64,          // s of logical time since the last reset
    pub pos: Vector2<f64>,  // screen units
    pub vel: Vector2<f64>,  // m/s, same axes as pos
    pub rotation: f64,      // rad, mirrors the AoA control
}

impl KinematicState {
    /// At rest at `origin`, level.
    pub fn at_origin(origin: Vector2<f64>) -> Self {
        Self {
            time: 0.0,
            pos: origin,
            vel: Vector2::zeros(),
            rotation: 0.0,
        }
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    /// Vertical speed with up positive (m/s).
    pub fn climb_rate(&self) -> f64 {
        -self.vel.y
    }
}

// ---------------------------------------------------------------------------
// Run state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

// ---------------------------------------------------------------------------
// Recorded tick (history / export)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: u64,
    pub state: KinematicState,
    pub forces: Forces,
}
