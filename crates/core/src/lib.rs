//! SprintCast core data models.
//!
//! This crate defines the project, epic, task and settings structures that
//! the forecasting engine reads from.

#![warn(missing_docs)]

// Core identities
mod id;

// Estimation inputs
mod size;
mod sprint;
mod settings;

// Planning hierarchy
mod task;
mod epic;
mod project;

// Re-exports
pub use id::*;

pub use size::{SizeCategory, SizeMapping};
pub use sprint::{Sprint, ReferenceSprints, REFERENCE_SPRINT_COUNT};
pub use settings::{Settings, SettingsUpdate, SettingsError};

pub use task::Task;
pub use epic::{Epic, ForecastOverrides};
pub use project::{Project, epoch_day, date_from_epoch_day};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;

/// Effort points, as produced by the size mapping.
pub type Points = u32;
