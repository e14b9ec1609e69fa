//! Task model - a sized unit of work inside an epic.

use serde::{Deserialize, Serialize};
use crate::id::TaskId;
use crate::size::SizeCategory;

/// A task is a single work item with a qualitative size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    #[serde(default)]
    pub id: TaskId,

    /// Task name
    pub name: String,

    /// Detailed description
    #[serde(default)]
    pub description: String,

    /// Acceptance criteria
    #[serde(default)]
    pub acceptance_criteria: String,

    /// Size estimate
    #[serde(default)]
    pub size: SizeCategory,

    /// Whether the task is done
    #[serde(default)]
    pub complete: bool,
}

impl Task {
    /// Create an incomplete task.
    pub fn new(name: impl Into<String>, size: SizeCategory) -> Self {
        Self {
            id: TaskId::new(),
            name: name.into(),
            description: String::new(),
            acceptance_criteria: String::new(),
            size,
            complete: false,
        }
    }

    /// Mark the task as done.
    pub fn completed(mut self) -> Self {
        self.complete = true;
        self
    }
}
