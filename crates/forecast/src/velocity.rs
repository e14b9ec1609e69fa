//! Velocity from historical sprints.

use sprintcast_core::{Points, ReferenceSprints, REFERENCE_SPRINT_COUNT};

/// Average points completed over the four reference sprints, rounded down.
///
/// Missing samples are expected to be zero-point sprints already; nothing is
/// inferred here.
pub fn average_velocity(sprints: &ReferenceSprints) -> Points {
    let sum: u64 = sprints
        .sprints()
        .iter()
        .map(|sprint| u64::from(sprint.completed_points))
        .sum();
    (sum / REFERENCE_SPRINT_COUNT as u64) as Points
}
