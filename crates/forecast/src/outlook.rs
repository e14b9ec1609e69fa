//! Per-epic forecast.

use serde::Serialize;
use sprintcast_core::{Epic, Points, ReferenceSprints, Settings};
use tracing::debug;

use crate::estimator::SizeEstimator;
use crate::projection::{build_projections, guarded_rate, Projection, ProjectionBasis};
use crate::velocity::average_velocity;

/// Forecast inputs for one epic. Overrides are resolved against the project
/// settings on every read.
#[derive(Debug, Clone, Copy)]
pub struct Forecast<'a> {
    epic: &'a Epic,
    settings: &'a Settings,
}

/// Result of a forecast evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outlook {
    /// Raw point estimate
    pub estimate: Points,

    /// Estimate plus the effective buffer
    pub estimate_with_buffer: Points,

    /// Average velocity of the effective reference sprints
    pub average_points: Points,

    /// Rate the scenarios were built from, before the zero guard
    pub points_per_sprint: Points,

    /// Estimate the scenarios were projected from
    pub basis: ProjectionBasis,

    /// The seven scenarios, `O+3` first
    pub projections: Vec<Projection>,
}

impl Outlook {
    /// Look up a scenario by its display name.
    pub fn projection(&self, name: &str) -> Option<&Projection> {
        self.projections.iter().find(|p| p.name() == name)
    }
}

impl<'a> Forecast<'a> {
    /// Create a forecast for `epic` under `settings`.
    pub fn new(epic: &'a Epic, settings: &'a Settings) -> Self {
        Self { epic, settings }
    }

    /// Sum of task points, optionally skipping completed tasks. No buffer.
    pub fn estimate(&self, exclude_completed: bool) -> Points {
        SizeEstimator::from_settings(self.settings).total(&self.epic.tasks, exclude_completed)
    }

    /// The epic's own buffer, else the project default.
    pub fn effective_buffer(&self) -> Points {
        self.epic
            .overrides
            .buffer_points
            .unwrap_or(self.settings.estimate_buffer_points)
    }

    /// Estimate plus the effective buffer.
    pub fn estimate_with_buffer(&self, exclude_completed: bool) -> Points {
        self.estimate(exclude_completed)
            .saturating_add(self.effective_buffer())
    }

    /// The epic's own reference sprints, else the project defaults.
    pub fn reference_sprints(&self) -> &'a ReferenceSprints {
        self.epic
            .overrides
            .reference_sprints
            .as_ref()
            .unwrap_or(&self.settings.reference_sprints)
    }

    /// Average velocity over the effective reference sprints.
    pub fn average_points(&self) -> Points {
        average_velocity(self.reference_sprints())
    }

    /// Manual rate if set, else the average velocity.
    pub fn effective_points_per_sprint(&self) -> Points {
        self.epic
            .overrides
            .points_per_sprint
            .unwrap_or_else(|| self.average_points())
    }

    /// Evaluate the forecast, projecting from the headline estimate.
    pub fn recompute(&self, exclude_completed: bool) -> Outlook {
        self.recompute_with(exclude_completed, ProjectionBasis::Remaining)
    }

    /// Evaluate the forecast, projecting from the estimate picked by `basis`.
    pub fn recompute_with(&self, exclude_completed: bool, basis: ProjectionBasis) -> Outlook {
        let estimate = self.estimate(exclude_completed);
        let estimate_with_buffer = estimate.saturating_add(self.effective_buffer());
        let average_points = self.average_points();
        let points_per_sprint = self.epic.overrides.points_per_sprint.unwrap_or(average_points);

        let projected_total = match basis {
            ProjectionBasis::Remaining => estimate_with_buffer,
            ProjectionBasis::Full => self.estimate_with_buffer(false),
        };

        debug!(
            epic = %self.epic.name,
            estimate,
            estimate_with_buffer,
            projected_total,
            points_per_sprint,
            rate = guarded_rate(points_per_sprint, projected_total),
            "recomputed forecast"
        );

        Outlook {
            estimate,
            estimate_with_buffer,
            average_points,
            points_per_sprint,
            basis,
            projections: build_projections(
                projected_total,
                points_per_sprint,
                self.settings.sprint_length_weeks,
            ),
        }
    }
}
