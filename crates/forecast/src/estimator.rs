//! Size to points conversion.

use sprintcast_core::{Points, Settings, SizeCategory, SizeMapping, Task};

/// Converts task sizes to points using a project's size mapping.
#[derive(Debug, Clone, Copy)]
pub struct SizeEstimator<'a> {
    mapping: &'a SizeMapping,
}

impl<'a> SizeEstimator<'a> {
    /// Create an estimator over `mapping`.
    pub fn new(mapping: &'a SizeMapping) -> Self {
        Self { mapping }
    }

    /// Create an estimator over the settings' size mapping.
    pub fn from_settings(settings: &'a Settings) -> Self {
        Self::new(&settings.sizes)
    }

    /// Points for a single size. Unmapped sizes and `NONE` are worth zero.
    pub fn points_for(&self, size: SizeCategory) -> Points {
        self.mapping.get(size)
    }

    /// Sum of points over `tasks`, optionally skipping completed ones.
    pub fn total<'t>(&self, tasks: impl IntoIterator<Item = &'t Task>, exclude_completed: bool) -> Points {
        tasks
            .into_iter()
            .filter(|task| !(exclude_completed && task.complete))
            .map(|task| self.points_for(task.size))
            .fold(0, Points::saturating_add)
    }

    /// Sum of points over completed tasks only.
    pub fn completed<'t>(&self, tasks: impl IntoIterator<Item = &'t Task>) -> Points {
        tasks
            .into_iter()
            .filter(|task| task.complete)
            .map(|task| self.points_for(task.size))
            .fold(0, Points::saturating_add)
    }
}
