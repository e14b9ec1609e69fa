//! Estimation and forecasting engine.
//!
//! Turns sized tasks into points, projects seven completion scenarios per
//! epic from historical velocity, and derives the project's schedule health.

#![warn(missing_docs)]

pub mod error;
pub mod estimator;
pub mod velocity;
pub mod projection;
pub mod outlook;
pub mod status;
pub mod plan;

pub use error::ScheduleError;
pub use estimator::SizeEstimator;
pub use velocity::average_velocity;
pub use projection::{Projection, ProjectionBasis, build_projections, guarded_rate, ADJUSTMENTS};
pub use outlook::{Forecast, Outlook};
pub use status::{ProjectStatus, StatusReport, Tracking, weeks_between};
pub use plan::{ProjectForecast, EpicForecast, forecast_project};
