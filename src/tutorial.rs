//! Guided lesson steps. Each step watches one parameter and is complete the
//! first time its target band is reached. Advancing is left to the caller so
//! a UI can hold the completed step on screen for a moment first.

use crate::aircraft::{FlightParameters, Parameter};

pub type StepId = u32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TutorialStep {
    pub id: StepId,
    pub title: &'static str,
    pub target: Parameter,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Informational steps never complete on their own.
    pub informational: bool,
}

impl TutorialStep {
    pub fn is_satisfied(&self, params: &FlightParameters) -> bool {
        if self.informational {
            return false;
        }
        let v = params.get(self.target);
        match (self.min, self.max) {
            (Some(lo), Some(hi)) => v >= lo && v <= hi,
            (Some(lo), None) => v >= lo,
            (None, Some(hi)) => v <= hi,
            (None, None) => false,
        }
    }
}

pub static STEPS: [TutorialStep; 5] = [
    TutorialStep {
        id: 1,
        title: "Understanding Airspeed",
        target: Parameter::Airspeed,
        min: Some(250.0),
        max: None,
        informational: false,
    },
    TutorialStep {
        id: 2,
        title: "Angle of Attack Effects",
        target: Parameter::AngleOfAttack,
        min: Some(8.0),
        max: Some(12.0),
        informational: false,
    },
    TutorialStep {
        id: 3,
        title: "Stall Recognition",
        target: Parameter::AngleOfAttack,
        min: Some(16.0),
        max: None,
        informational: false,
    },
    TutorialStep {
        id: 4,
        title: "Altitude Effects",
        target: Parameter::Altitude,
        min: Some(8000.0),
        max: None,
        informational: false,
    },
    TutorialStep {
        id: 5,
        title: "Thrust vs Drag Balance",
        target: Parameter::Throttle,
        min: None,
        max: None,
        informational: true,
    },
];

#[derive(Debug, Clone, Default)]
pub struct TutorialProgress {
    active: bool,
    current: usize,
    completed: Vec<StepId>,
}

impl TutorialProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.active = true;
        self.current = 0;
        self.completed.clear();
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current(&self) -> Option<&TutorialStep> {
        self.active.then(|| &STEPS[self.current])
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Mark the current step complete if `params` satisfies it for the first
    /// time. Returns the id of a newly completed step.
    pub fn observe(&mut self, params: &FlightParameters) -> Option<StepId> {
        let step = *self.current()?;
        if self.is_complete(step.id) || !step.is_satisfied(params) {
            return None;
        }
        self.completed.push(step.id);
        tracing::debug!(step = step.id, title = step.title, "tutorial step completed");
        Some(step.id)
    }

    pub fn advance(&mut self) {
        if self.current + 1 < STEPS.len() {
            self.current += 1;
        }
    }

    pub fn back(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn is_complete(&self, id: StepId) -> bool {
        self.completed.contains(&id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Steps that can complete (all but the informational ones).
    pub fn gradable_count() -> usize {
        STEPS.iter().filter(|s| !s.informational).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_tracker_observes_nothing() {
        let mut t = TutorialProgress::new();
        assert_eq!(t.observe(&FlightParameters::default()), None);
        assert!(t.current().is_none());
    }

    #[test]
    fn walks_through_the_lesson() {
        let mut t = TutorialProgress::new();
        t.start();
        let mut p = FlightParameters { airspeed_kmh: 200.0, ..Default::default() };
        assert_eq!(t.observe(&p), None);
        p.airspeed_kmh = 260.0;
        assert_eq!(t.observe(&p), Some(1));
        // completes once only
        assert_eq!(t.observe(&p), None);

        t.advance();
        p.angle_of_attack_deg = 13.0;
        assert_eq!(t.observe(&p), None);
        p.angle_of_attack_deg = 10.0;
        assert_eq!(t.observe(&p), Some(2));

        t.advance();
        p.angle_of_attack_deg = 16.0;
        assert_eq!(t.observe(&p), Some(3));

        t.advance();
        p.altitude_m = 8000.0;
        assert_eq!(t.observe(&p), Some(4));

        t.advance();
        assert_eq!(t.current().unwrap().id, 5);
        assert_eq!(t.observe(&p), None);
        assert_eq!(t.completed_count(), TutorialProgress::gradable_count());

        t.advance();
        assert_eq!(t.current_index(), 4);
    }

    #[test]
    fn restart_clears_completions() {
        let mut t = TutorialProgress::new();
        t.start();
        t.observe(&FlightParameters::default());
        assert!(t.is_complete(1));
        t.advance();
        t.start();
        assert_eq!(t.current_index(), 0);
        assert_eq!(t.completed_count(), 0);
    }

    #[test]
    fn back_saturates() {
        let mut t = TutorialProgress::new();
        t.start();
        t.back();
        assert_eq!(t.current_index(), 0);
    }
}
