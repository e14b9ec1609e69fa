//! Historical sprint samples.

use serde::{Deserialize, Serialize};

use crate::Points;

/// Number of samples a velocity baseline is built from.
pub const REFERENCE_SPRINT_COUNT: usize = 4;

/// A single historical velocity sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprint {
    /// Sprint name
    pub name: String,

    /// Points completed during the sprint
    pub completed_points: Points,
}

impl Sprint {
    /// Create a sprint sample.
    pub fn new(name: impl Into<String>, completed_points: Points) -> Self {
        Self {
            name: name.into(),
            completed_points,
        }
    }

    fn placeholder(index: usize) -> Self {
        Self::new(format!("Sprint {}", index + 1), 0)
    }
}

/// Exactly four sprints used as a velocity baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceSprints([Sprint; REFERENCE_SPRINT_COUNT]);

impl ReferenceSprints {
    /// Wrap exactly four samples.
    pub fn new(sprints: [Sprint; REFERENCE_SPRINT_COUNT]) -> Self {
        Self(sprints)
    }

    /// Build from up to four samples, padding with zero-point sprints.
    ///
    /// Samples beyond the fourth are dropped.
    pub fn padded(sprints: impl IntoIterator<Item = Sprint>) -> Self {
        let mut given = sprints.into_iter();
        Self(std::array::from_fn(|i| {
            given.next().unwrap_or_else(|| Sprint::placeholder(i))
        }))
    }

    /// Shorthand for four anonymous samples with the given point totals.
    pub fn from_points(points: [Points; REFERENCE_SPRINT_COUNT]) -> Self {
        Self(std::array::from_fn(|i| Sprint::new(format!("Sprint {}", i + 1), points[i])))
    }

    /// The four samples, oldest first.
    pub fn sprints(&self) -> &[Sprint; REFERENCE_SPRINT_COUNT] {
        &self.0
    }
}

impl Default for ReferenceSprints {
    fn default() -> Self {
        Self(std::array::from_fn(Sprint::placeholder))
    }
}
