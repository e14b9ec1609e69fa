//! Project model - settings, schedule window and epics.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use crate::epic::Epic;
use crate::id::ProjectId;
use crate::settings::Settings;
use crate::Time;

/// Days from 0001-01-01 to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Days since 1970-01-01 for `date`.
pub fn epoch_day(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
}

/// Calendar date for an epoch day, if it is representable.
pub fn date_from_epoch_day(day: i64) -> Option<NaiveDate> {
    let ce = i32::try_from(day.checked_add(UNIX_EPOCH_DAYS_FROM_CE)?).ok()?;
    NaiveDate::from_num_days_from_ce_opt(ce)
}

/// A project is the unit that gets planned, stored and reported on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier
    #[serde(default)]
    pub id: ProjectId,

    /// Project name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Start date as an epoch day (0 = unset)
    #[serde(default)]
    pub start_date: i64,

    /// End date as an epoch day (0 = unset)
    #[serde(default)]
    pub end_date: i64,

    /// Estimation settings
    #[serde(default)]
    pub settings: Settings,

    /// Epics, in display order
    #[serde(default)]
    pub epics: Vec<Epic>,

    /// When created
    #[serde(default = "chrono::Utc::now")]
    pub created_at: Time,
}

impl Project {
    /// Create a project with default settings and no schedule.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ProjectId::new(),
            name: name.into(),
            description: String::new(),
            start_date: 0,
            end_date: 0,
            settings: Settings::default(),
            epics: Vec::new(),
            created_at: chrono::Utc::now(),
        }
    }

    /// Set the schedule window from calendar dates.
    ///
    /// Epoch day 0 doubles as "unset", so a date of 1970-01-01 is
    /// indistinguishable from a missing date and the schedule reads as unset.
    pub fn with_schedule(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start.map(epoch_day).unwrap_or(0);
        self.end_date = end.map(epoch_day).unwrap_or(0);
        self
    }

    /// Epics paired with their display number, counting from
    /// `settings.epic_start_number`.
    pub fn numbered_epics(&self) -> impl Iterator<Item = (u32, &Epic)> {
        let first = self.settings.epic_start_number;
        self.epics
            .iter()
            .enumerate()
            .map(move |(i, epic)| (first.saturating_add(i as u32), epic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_day_conversion() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(epoch_day(epoch), 0);

        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(epoch_day(date), 19_783);
        assert_eq!(date_from_epoch_day(19_783), Some(date));
        assert_eq!(date_from_epoch_day(i64::MAX), None);
    }

    #[test]
    fn test_with_schedule_leaves_missing_dates_unset() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let project = Project::new("Apollo").with_schedule(Some(start), None);
        assert_eq!(project.start_date, epoch_day(start));
        assert_eq!(project.end_date, 0);
    }

    #[test]
    fn test_unix_epoch_date_reads_as_unset() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let project = Project::new("Apollo").with_schedule(Some(epoch), Some(epoch));
        assert_eq!(project.start_date, 0);
        assert_eq!(project.end_date, 0);

        let next = NaiveDate::from_ymd_opt(1970, 1, 2).unwrap();
        assert_eq!(Project::new("Apollo").with_schedule(Some(next), None).start_date, 1);
    }

    #[test]
    fn test_numbered_epics_start_from_setting() {
        let mut project = Project::new("Apollo");
        project.settings.epic_start_number = 7;
        project.epics.push(Epic::new("Auth"));
        project.epics.push(Epic::new("Billing"));

        let numbers: Vec<_> = project.numbered_epics().map(|(n, e)| (n, e.name.as_str())).collect();
        assert_eq!(numbers, vec![(7, "Auth"), (8, "Billing")]);
    }

    #[test]
    fn test_minimal_project_json() {
        let project: Project = serde_json::from_str(r#"{"name": "Apollo"}"#).unwrap();
        assert_eq!(project.start_date, 0);
        assert!(project.epics.is_empty());
        assert_eq!(project.settings.sprint_length_weeks, 2);
    }
}
