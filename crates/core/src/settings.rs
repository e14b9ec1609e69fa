//! Project-wide estimation settings.

use serde::{Deserialize, Serialize};

use crate::size::{SizeCategory, SizeMapping};
use crate::sprint::ReferenceSprints;
use crate::Points;

/// Errors raised by the settings-update operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Sprint length must be at least one week
    #[error("sprint length must be a positive number of weeks, got {0}")]
    InvalidSprintLength(u32),

    /// A size label could not be parsed
    #[error("unknown size category: {0}")]
    UnknownSize(String),
}

/// Estimation settings shared by every epic of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Points per size category
    pub sizes: SizeMapping,

    /// Sprint length in weeks
    pub sprint_length_weeks: u32,

    /// Buffer applied to epics that do not set their own
    pub estimate_buffer_points: Points,

    /// Number shown for the first epic (display only)
    pub epic_start_number: u32,

    /// Default velocity baseline
    pub reference_sprints: ReferenceSprints,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sizes: SizeMapping::default(),
            sprint_length_weeks: 2,
            estimate_buffer_points: 0,
            epic_start_number: 1,
            reference_sprints: ReferenceSprints::default(),
        }
    }
}

/// A partial change to [`Settings`]. Unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    /// New sprint length in weeks
    pub sprint_length_weeks: Option<u32>,

    /// New default buffer
    pub estimate_buffer_points: Option<Points>,

    /// New first epic number
    pub epic_start_number: Option<u32>,

    /// Size overrides as `(label, points)` pairs
    pub sizes: Vec<(String, Points)>,

    /// New default velocity baseline
    pub reference_sprints: Option<ReferenceSprints>,
}

impl Settings {
    /// Apply an update. Nothing is changed if any part of it is invalid.
    pub fn apply(&mut self, update: SettingsUpdate) -> Result<(), SettingsError> {
        if let Some(weeks) = update.sprint_length_weeks {
            if weeks == 0 {
                return Err(SettingsError::InvalidSprintLength(weeks));
            }
        }

        let sizes = update
            .sizes
            .into_iter()
            .map(|(label, points)| {
                label
                    .parse::<SizeCategory>()
                    .map(|size| (size, points))
                    .map_err(|_| SettingsError::UnknownSize(label))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(weeks) = update.sprint_length_weeks {
            self.sprint_length_weeks = weeks;
        }
        if let Some(buffer) = update.estimate_buffer_points {
            self.estimate_buffer_points = buffer;
        }
        if let Some(number) = update.epic_start_number {
            self.epic_start_number = number;
        }
        for (size, points) in sizes {
            self.sizes.set(size, points);
        }
        if let Some(sprints) = update.reference_sprints {
            self.reference_sprints = sprints;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.sprint_length_weeks, 2);
        assert_eq!(settings.estimate_buffer_points, 0);
        assert_eq!(settings.sizes.get(SizeCategory::L), 8);
        assert!(settings
            .reference_sprints
            .sprints()
            .iter()
            .all(|s| s.completed_points == 0));
    }

    #[test]
    fn test_apply_update() {
        let mut settings = Settings::default();
        settings
            .apply(SettingsUpdate {
                sprint_length_weeks: Some(3),
                estimate_buffer_points: Some(5),
                sizes: vec![("xl".to_string(), 20)],
                reference_sprints: Some(ReferenceSprints::from_points([4, 4, 4, 4])),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(settings.sprint_length_weeks, 3);
        assert_eq!(settings.estimate_buffer_points, 5);
        assert_eq!(settings.epic_start_number, 1);
        assert_eq!(settings.sizes.get(SizeCategory::Xl), 20);
        assert_eq!(settings.reference_sprints.sprints()[2].completed_points, 4);
    }

    #[test]
    fn test_zero_sprint_length_rejected() {
        let mut settings = Settings::default();
        let err = settings
            .apply(SettingsUpdate {
                sprint_length_weeks: Some(0),
                estimate_buffer_points: Some(9),
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(err, SettingsError::InvalidSprintLength(0));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_unknown_size_leaves_settings_untouched() {
        let mut settings = Settings::default();
        let err = settings
            .apply(SettingsUpdate {
                sprint_length_weeks: Some(4),
                sizes: vec![("M".to_string(), 6), ("XXL".to_string(), 40)],
                ..Default::default()
            })
            .unwrap_err();

        assert_eq!(err, SettingsError::UnknownSize("XXL".to_string()));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"sprint_length_weeks": 1}"#).unwrap();
        assert_eq!(settings.sprint_length_weeks, 1);
        assert_eq!(settings.sizes, SizeMapping::default());
    }
}
