//! Whole-project forecast.

use serde::Serialize;
use sprintcast_core::{EpicId, Project};
use tracing::debug;

use crate::outlook::{Forecast, Outlook};
use crate::projection::ProjectionBasis;
use crate::status::{ProjectStatus, StatusReport};

/// Outlook of a single epic, with its display number.
#[derive(Debug, Clone, Serialize)]
pub struct EpicForecast {
    /// Epic identifier
    pub epic_id: EpicId,

    /// Display number
    pub number: u32,

    /// Epic name
    pub name: String,

    /// Forecast result
    pub outlook: Outlook,
}

/// Every epic's outlook followed by the project status.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectForecast {
    /// Per-epic outlooks, in epic order
    pub epics: Vec<EpicForecast>,

    /// Project status
    pub status: StatusReport,
}

/// Forecast every epic of `project`, then aggregate the status as seen on
/// `today` (epoch day).
pub fn forecast_project(
    project: &Project,
    exclude_completed: bool,
    basis: ProjectionBasis,
    today: i64,
) -> ProjectForecast {
    let epics: Vec<EpicForecast> = project
        .numbered_epics()
        .map(|(number, epic)| EpicForecast {
            epic_id: epic.id,
            number,
            name: epic.name.clone(),
            outlook: Forecast::new(epic, &project.settings).recompute_with(exclude_completed, basis),
        })
        .collect();

    let status = ProjectStatus::for_project(project, today).report();
    debug!(
        project = %project.name,
        epics = epics.len(),
        tracking = %status.tracking,
        "forecast project"
    );

    ProjectForecast { epics, status }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprintcast_core::{Epic, ReferenceSprints, SizeCategory, Task};
    use crate::status::Tracking;

    fn project() -> Project {
        let mut project = Project::new("Apollo");
        project.start_date = 19_723;
        project.end_date = 19_723 + 70;
        project.settings.epic_start_number = 3;
        project.settings.reference_sprints = ReferenceSprints::from_points([8, 8, 8, 8]);
        project.epics = vec![
            Epic::new("Auth")
                .with_task(Task::new("Login", SizeCategory::M).completed())
                .with_task(Task::new("Signup", SizeCategory::L)),
            Epic::new("Billing").with_task(Task::new("Invoices", SizeCategory::Xl)),
        ];
        project
    }

    #[test]
    fn test_forecast_project() {
        let project = project();
        let forecast = forecast_project(&project, true, ProjectionBasis::Remaining, 19_723 + 28);

        assert_eq!(forecast.epics.len(), 2);
        assert_eq!(forecast.epics[0].number, 3);
        assert_eq!(forecast.epics[0].outlook.estimate, 8);
        assert_eq!(forecast.epics[1].number, 4);
        assert_eq!(forecast.epics[1].outlook.estimate, 13);

        assert_eq!(forecast.status.total_points, 26);
        assert_eq!(forecast.status.completed_points, 5);
        assert_eq!(forecast.status.tracking, Tracking::AtRisk);
    }

    #[test]
    fn test_forecast_matches_individual_forecasts() {
        let project = project();
        let forecast = forecast_project(&project, false, ProjectionBasis::Full, 19_723);

        for (epic, result) in project.epics.iter().zip(&forecast.epics) {
            let outlook = Forecast::new(epic, &project.settings).recompute_with(false, ProjectionBasis::Full);
            assert_eq!(result.outlook, outlook);
        }
    }
}
