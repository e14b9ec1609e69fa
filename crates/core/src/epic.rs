//! Epic model - an ordered group of tasks with forecast overrides.

use serde::{Deserialize, Serialize};
use crate::id::EpicId;
use crate::sprint::ReferenceSprints;
use crate::task::Task;
use crate::Points;

/// Per-epic forecast inputs. Unset fields fall back to the project settings
/// when read; they are never filled in with the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastOverrides {
    /// Own velocity baseline
    pub reference_sprints: Option<ReferenceSprints>,

    /// Own estimate buffer
    pub buffer_points: Option<Points>,

    /// Manual points-per-sprint rate
    pub points_per_sprint: Option<Points>,
}

/// An epic groups tasks that are forecast together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epic {
    /// Unique identifier
    #[serde(default)]
    pub id: EpicId,

    /// Epic name
    pub name: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Tasks, in planning order
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Forecast overrides
    #[serde(default)]
    pub overrides: ForecastOverrides,
}

impl Epic {
    /// Create an empty epic.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EpicId::new(),
            name: name.into(),
            description: String::new(),
            tasks: Vec::new(),
            overrides: ForecastOverrides::default(),
        }
    }

    /// Append a task.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Replace the forecast overrides.
    pub fn with_overrides(mut self, overrides: ForecastOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}
