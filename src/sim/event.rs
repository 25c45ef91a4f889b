use serde::{Deserialize, Serialize};

use super::state::KinematicState;
use crate::config::Bounds;

// ---------------------------------------------------------------------------
// Session events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    Started,
    Paused,
    Reset,
    StallEntered { angle_of_attack_deg: f64 },
    StallRecovered { angle_of_attack_deg: f64 },
    BoundaryContact(Edge),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimEvent {
    pub tick: u64,
    pub kind: EventKind,
}

/// Passive detector over consecutive kinematic states. One step may raise
/// several events.
pub trait EventDetector {
    fn check(&mut self, prev: &KinematicState, current: &KinematicState) -> Vec<EventKind>;
}

/// Reports each edge of the visible region the first step the aircraft is
/// pinned against it. Edges are tracked independently, so sliding along one
/// edge into a corner still reports the second. An edge re-arms once the
/// aircraft leaves it.
pub struct BoundaryDetector {
    bounds: Bounds,
}

impl BoundaryDetector {
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    fn touches(&self, s: &KinematicState, edge: Edge) -> bool {
        let b = &self.bounds;
        match edge {
            Edge::Top => s.pos.y <= b.min[1],
            Edge::Bottom => s.pos.y >= b.max[1],
            Edge::Left => s.pos.x <= b.min[0],
            Edge::Right => s.pos.x >= b.max[0],
        }
    }
}

impl EventDetector for BoundaryDetector {
    fn check(&mut self, prev: &KinematicState, current: &KinematicState) -> Vec<EventKind> {
        Edge::ALL
            .into_iter()
            .filter(|&edge| self.touches(current, edge) && !self.touches(prev, edge))
            .map(EventKind::BoundaryContact)
            .collect()
    }
}

/// Edge-triggered stall watcher over the AoA control.
#[derive(Debug, Default)]
pub struct StallWatch {
    stalled: bool,
}

impl StallWatch {
    pub fn new(stalled: bool) -> Self {
        Self { stalled }
    }

    pub fn observe(&mut self, stalled: bool, angle_of_attack_deg: f64) -> Option<EventKind> {
        let change = match (self.stalled, stalled) {
            (false, true) => Some(EventKind::StallEntered { angle_of_attack_deg }),
            (true, false) => Some(EventKind::StallRecovered { angle_of_attack_deg }),
            _ => None,
        };
        self.stalled = stalled;
        change
    }
}
