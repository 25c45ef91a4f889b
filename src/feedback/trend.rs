use serde::{Deserialize, Serialize};

use super::classifier::{LIFT_WEIGHT_TOLERANCE_N, THRUST_DRAG_TOLERANCE_N};
use crate::physics::Forces;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalTrend {
    Climbing,
    Descending,
    Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalTrend {
    Accelerating,
    Decelerating,
    Steady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceStatus {
    pub thrust_drag_balanced: bool,
    pub lift_weight_balanced: bool,
}

impl BalanceStatus {
    pub fn is_balanced(&self) -> bool {
        self.thrust_drag_balanced && self.lift_weight_balanced
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForceTrends {
    pub vertical: VerticalTrend,
    pub horizontal: HorizontalTrend,
    pub balance: BalanceStatus,
}

pub fn trends(forces: &Forces) -> ForceTrends {
    let v = forces.net_vertical();
    let h = forces.net_horizontal();

    let vertical = if v > 0.0 {
        VerticalTrend::Climbing
    } else if v < 0.0 {
        VerticalTrend::Descending
    } else {
        VerticalTrend::Level
    };
    let horizontal = if h > 0.0 {
        HorizontalTrend::Accelerating
    } else if h < 0.0 {
        HorizontalTrend::Decelerating
    } else {
        HorizontalTrend::Steady
    };

    ForceTrends {
        vertical,
        horizontal,
        balance: BalanceStatus {
            thrust_drag_balanced: h.abs() < THRUST_DRAG_TOLERANCE_N,
            lift_weight_balanced: v.abs() < LIFT_WEIGHT_TOLERANCE_N,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::classifier::is_balanced;

    #[test]
    fn signs_map_to_trends() {
        let f = Forces { lift_n: 2.0, drag_n: 3.0, thrust_n: 1.0, weight_n: 1.0 };
        let t = trends(&f);
        assert_eq!(t.vertical, VerticalTrend::Climbing);
        assert_eq!(t.horizontal, HorizontalTrend::Decelerating);

        let level = Forces { lift_n: 1.0, drag_n: 1.0, thrust_n: 1.0, weight_n: 1.0 };
        let t = trends(&level);
        assert_eq!(t.vertical, VerticalTrend::Level);
        assert_eq!(t.horizontal, HorizontalTrend::Steady);
    }

    #[test]
    fn balance_agrees_with_classifier() {
        for (lift, thrust) in [(405_000.0, 61_000.0), (420_000.0, 61_000.0), (400_000.0, 70_000.0)] {
            let f = Forces { lift_n: lift, drag_n: 60_000.0, thrust_n: thrust, weight_n: 400_000.0 };
            assert_eq!(trends(&f).balance.is_balanced(), is_balanced(&f));
        }
    }
}
