//! Size categories and their point mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Points;

/// Qualitative effort label attached to a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SizeCategory {
    /// Not sized yet
    #[default]
    None,
    /// Extra small
    Xs,
    /// Small
    S,
    /// Medium
    M,
    /// Large
    L,
    /// Extra large
    Xl,
}

impl SizeCategory {
    /// Every category, smallest first.
    pub const ALL: [SizeCategory; 6] = [
        SizeCategory::None,
        SizeCategory::Xs,
        SizeCategory::S,
        SizeCategory::M,
        SizeCategory::L,
        SizeCategory::Xl,
    ];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeCategory::None => "NONE",
            SizeCategory::Xs => "XS",
            SizeCategory::S => "S",
            SizeCategory::M => "M",
            SizeCategory::L => "L",
            SizeCategory::Xl => "XL",
        }
    }
}

impl std::fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SizeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NONE" | "" => Ok(SizeCategory::None),
            "XS" => Ok(SizeCategory::Xs),
            "S" => Ok(SizeCategory::S),
            "M" => Ok(SizeCategory::M),
            "L" => Ok(SizeCategory::L),
            "XL" => Ok(SizeCategory::Xl),
            other => Err(format!("unknown size category: {}", other)),
        }
    }
}

/// Point value configured for each size category.
///
/// Categories missing from the map are worth zero points, and `NONE` is
/// always worth zero regardless of what the map holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeMapping(BTreeMap<SizeCategory, Points>);

impl SizeMapping {
    /// An empty mapping: every category is worth zero.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Points configured for `size`.
    pub fn get(&self, size: SizeCategory) -> Points {
        if size == SizeCategory::None {
            return 0;
        }
        self.0.get(&size).copied().unwrap_or(0)
    }

    /// Set the point value for `size`.
    pub fn set(&mut self, size: SizeCategory, points: Points) {
        self.0.insert(size, points);
    }

    /// Iterate over every category with its effective point value.
    pub fn iter(&self) -> impl Iterator<Item = (SizeCategory, Points)> + '_ {
        SizeCategory::ALL.iter().map(move |size| (*size, self.get(*size)))
    }
}

impl Default for SizeMapping {
    fn default() -> Self {
        // Fibonacci-like
        Self(BTreeMap::from([
            (SizeCategory::None, 0),
            (SizeCategory::Xs, 1),
            (SizeCategory::S, 3),
            (SizeCategory::M, 5),
            (SizeCategory::L, 8),
            (SizeCategory::Xl, 13),
        ]))
    }
}
