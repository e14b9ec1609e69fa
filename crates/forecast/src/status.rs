//! Project-wide schedule health.

use serde::{Deserialize, Serialize};
use sprintcast_core::{date_from_epoch_day, Epic, Points, Project, Settings, Task};
use tracing::warn;

use crate::error::ScheduleError;
use crate::estimator::SizeEstimator;
use crate::velocity::average_velocity;

/// Whole calendar weeks from `start` to `end` (epoch days).
pub fn weeks_between(start: i64, end: i64) -> Result<u32, ScheduleError> {
    if start > end {
        return Err(ScheduleError::Chronology { start, end });
    }
    let from = date_from_epoch_day(start).ok_or(ScheduleError::OutOfRange(start))?;
    let to = date_from_epoch_day(end).ok_or(ScheduleError::OutOfRange(end))?;
    let weeks = to.signed_duration_since(from).num_weeks();
    u32::try_from(weeks).map_err(|_| ScheduleError::OutOfRange(end))
}

/// How actual pace compares with the pace needed to finish on time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tracking {
    /// Completing points faster than needed
    Ahead,
    /// Completing points exactly as fast as needed
    OnTrack,
    /// Completing points slower than needed
    AtRisk,
    /// Every point is done
    Complete,
}

impl Tracking {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Tracking::Ahead => "Ahead",
            Tracking::OnTrack => "On Track",
            Tracking::AtRisk => "At Risk",
            Tracking::Complete => "Complete",
        }
    }
}

impl std::fmt::Display for Tracking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Snapshot of every status figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Weeks from start to end
    pub total_weeks: u32,
    /// Weeks from start to today
    pub weeks_elapsed: u32,
    /// Sprints from start to end
    pub total_sprints: u32,
    /// Sprints from start to today
    pub sprints_elapsed: u32,
    /// Points over every task
    pub total_points: Points,
    /// Points over completed tasks
    pub completed_points: Points,
    /// Points still to deliver
    pub remaining_points: Points,
    /// Completed share of the total, in whole percent
    pub percent_complete: u32,
    /// Realized velocity
    pub points_per_sprint: Points,
    /// Velocity needed to finish on time
    pub ideal_points_per_sprint: Points,
    /// Capacity at the reference velocity
    pub available_points: Points,
    /// Whether the plan exceeds capacity
    pub over_committed: bool,
    /// Tracking verdict
    pub tracking: Tracking,
}

/// Aggregated schedule health of a project.
#[derive(Debug, Clone, Copy)]
pub struct ProjectStatus<'a> {
    epics: &'a [Epic],
    settings: &'a Settings,
    start_date: i64,
    end_date: i64,
    today: i64,
}

impl<'a> ProjectStatus<'a> {
    /// Create a status over explicit inputs. Dates are epoch days, 0 = unset.
    pub fn new(epics: &'a [Epic], settings: &'a Settings, start_date: i64, end_date: i64, today: i64) -> Self {
        Self {
            epics,
            settings,
            start_date,
            end_date,
            today,
        }
    }

    /// Create a status for `project` as seen on `today`.
    pub fn for_project(project: &'a Project, today: i64) -> Self {
        Self::new(
            &project.epics,
            &project.settings,
            project.start_date,
            project.end_date,
            today,
        )
    }

    fn tasks(&self) -> impl Iterator<Item = &'a Task> {
        self.epics.iter().flat_map(|epic| epic.tasks.iter())
    }

    fn weeks_or_zero(&self, end: i64, what: &str) -> u32 {
        if self.start_date == 0 || self.end_date == 0 {
            return 0;
        }
        match weeks_between(self.start_date, end) {
            Ok(weeks) => weeks,
            Err(e) => {
                warn!(error = %e, "{} treated as zero", what);
                0
            }
        }
    }

    fn sprints_in(&self, weeks: u32) -> u32 {
        if weeks == 0 || self.settings.sprint_length_weeks == 0 {
            0
        } else {
            weeks / self.settings.sprint_length_weeks
        }
    }

    /// Weeks from start to end.
    pub fn total_weeks(&self) -> u32 {
        self.weeks_or_zero(self.end_date, "total weeks")
    }

    /// Weeks from start to today.
    pub fn weeks_elapsed(&self) -> u32 {
        self.weeks_or_zero(self.today, "weeks elapsed")
    }

    /// Sprints from start to end.
    pub fn total_sprints(&self) -> u32 {
        self.sprints_in(self.total_weeks())
    }

    /// Sprints from start to today.
    pub fn sprints_elapsed(&self) -> u32 {
        self.sprints_in(self.weeks_elapsed())
    }

    /// Unbuffered points over every task in every epic.
    pub fn total_points(&self) -> Points {
        SizeEstimator::from_settings(self.settings).total(self.tasks(), false)
    }

    /// Points over completed tasks.
    pub fn completed_points(&self) -> Points {
        SizeEstimator::from_settings(self.settings).completed(self.tasks())
    }

    /// Points still to deliver.
    pub fn remaining_points(&self) -> Points {
        self.total_points() - self.completed_points()
    }

    /// Completed share of the total, rounded down. Zero when there is nothing
    /// to deliver.
    pub fn percent_complete(&self) -> u32 {
        let total = u64::from(self.total_points());
        if total == 0 {
            return 0;
        }
        (u64::from(self.completed_points()) * 100 / total) as u32
    }

    /// Realized velocity: completed points per elapsed sprint.
    pub fn points_per_sprint(&self) -> Points {
        let completed = self.completed_points();
        let elapsed = self.sprints_elapsed();
        if completed == 0 || elapsed == 0 {
            0
        } else {
            completed / elapsed
        }
    }

    /// Velocity needed to deliver every point by the end date.
    pub fn ideal_points_per_sprint(&self) -> Points {
        let total = self.total_points();
        let sprints = self.total_sprints();
        if total == 0 || sprints == 0 {
            0
        } else {
            total / sprints
        }
    }

    /// Capacity over the whole schedule at the reference velocity.
    pub fn available_points(&self) -> Points {
        self.total_sprints()
            .saturating_mul(average_velocity(&self.settings.reference_sprints))
    }

    /// Whether more points are planned than the schedule can absorb.
    pub fn is_over_committed(&self) -> bool {
        self.total_points() > self.available_points()
    }

    /// Tracking verdict. Completion wins over any pace comparison.
    pub fn summary(&self) -> Tracking {
        if self.completed_points() == self.total_points() {
            return Tracking::Complete;
        }
        let actual = self.points_per_sprint();
        let ideal = self.ideal_points_per_sprint();
        if actual > ideal {
            Tracking::Ahead
        } else if actual == ideal {
            Tracking::OnTrack
        } else {
            Tracking::AtRisk
        }
    }

    /// Every figure in one snapshot.
    pub fn report(&self) -> StatusReport {
        StatusReport {
            total_weeks: self.total_weeks(),
            weeks_elapsed: self.weeks_elapsed(),
            total_sprints: self.total_sprints(),
            sprints_elapsed: self.sprints_elapsed(),
            total_points: self.total_points(),
            completed_points: self.completed_points(),
            remaining_points: self.remaining_points(),
            percent_complete: self.percent_complete(),
            points_per_sprint: self.points_per_sprint(),
            ideal_points_per_sprint: self.ideal_points_per_sprint(),
            available_points: self.available_points(),
            over_committed: self.is_over_committed(),
            tracking: self.summary(),
        }
    }
}
