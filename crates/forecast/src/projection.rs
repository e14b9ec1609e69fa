//! Completion scenarios.
//!
//! Each scenario shifts the base points-per-sprint rate by a number of
//! compounding quarter steps. The step for every round is a quarter of the
//! rate as already adjusted, so the bands widen the further a scenario sits
//! from the centre.

use serde::{Deserialize, Serialize};
use sprintcast_core::Points;

/// Scenario adjustments, most optimistic first.
pub const ADJUSTMENTS: [i32; 7] = [3, 2, 1, 0, -1, -2, -3];

/// Which estimate the scenarios are projected from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionBasis {
    /// The same estimate as the headline figure, honouring the
    /// exclude-completed flag
    #[default]
    Remaining,
    /// The buffered estimate over every task, completed or not
    Full,
}

/// Rate to divide by: `rate`, or a quarter of `total_points` when `rate` is zero.
pub fn guarded_rate(rate: Points, total_points: Points) -> Points {
    if rate == 0 {
        total_points / 4
    } else {
        rate
    }
}

/// One completion scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// Scenario offset in `-3..=3`
    pub adjustment: i32,

    /// Points to deliver
    pub total_points: Points,

    /// Unadjusted points-per-sprint rate
    pub base_points_per_sprint: Points,

    /// Sprint length in weeks
    pub sprint_length_weeks: u32,
}

impl Projection {
    /// Create a scenario. A zero base rate is replaced by a quarter of the
    /// total.
    pub fn new(
        adjustment: i32,
        total_points: Points,
        base_points_per_sprint: Points,
        sprint_length_weeks: u32,
    ) -> Self {
        Self {
            adjustment,
            total_points,
            base_points_per_sprint: guarded_rate(base_points_per_sprint, total_points),
            sprint_length_weeks,
        }
    }

    /// Adjusted points-per-sprint rate for this scenario.
    pub fn points_per_sprint(&self) -> Points {
        let rounds = self.adjustment.unsigned_abs();
        let mut current = self.base_points_per_sprint;
        for _ in 0..rounds {
            let deviation = current / 4;
            current = if self.adjustment > 0 {
                current.saturating_add(deviation)
            } else {
                current - deviation
            };
        }
        current
    }

    /// Sprints needed to deliver the total at this scenario's rate.
    pub fn sprints(&self) -> u32 {
        let rate = guarded_rate(self.points_per_sprint(), self.total_points).max(1);
        self.total_points / rate
    }

    /// Weeks needed to deliver the total at this scenario's rate.
    pub fn weeks(&self) -> u32 {
        self.sprints().saturating_mul(self.sprint_length_weeks)
    }

    /// Display name such as `O+3`, `O0` or `O-2`.
    pub fn name(&self) -> String {
        if self.adjustment > 0 {
            format!("O+{}", self.adjustment)
        } else {
            format!("O{}", self.adjustment)
        }
    }
}

/// The seven scenarios for `total_points` at `base_points_per_sprint`, from
/// `O+3` down to `O-3`.
pub fn build_projections(
    total_points: Points,
    base_points_per_sprint: Points,
    sprint_length_weeks: u32,
) -> Vec<Projection> {
    ADJUSTMENTS
        .iter()
        .map(|adjustment| {
            Projection::new(*adjustment, total_points, base_points_per_sprint, sprint_length_weeks)
        })
        .collect()
}
