//! Value types shared by the scorer, classifier and presenter.

use std::fmt;

/// Identifies one of the five scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequirementId {
    Length,
    Lowercase,
    Uppercase,
    Number,
    Symbol,
}

impl RequirementId {
    /// Stable key used by front ends to look up the matching indicator.
    pub fn as_str(self) -> &'static str {
        match self {
            RequirementId::Length => "length",
            RequirementId::Lowercase => "lowercase",
            RequirementId::Uppercase => "uppercase",
            RequirementId::Number => "number",
            RequirementId::Symbol => "symbol",
        }
    }
}

impl fmt::Display for RequirementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pass/fail outcome of a single requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementStatus {
    pub id: RequirementId,
    pub met: bool,
}

/// Aggregate score plus the per-requirement breakdown, in requirement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub total: u8,
    pub requirements: Vec<RequirementStatus>,
}

impl ScoreResult {
    /// Result for an empty password: nothing met, score 0.
    pub fn empty() -> Self {
        Self {
            total: 0,
            requirements: crate::sections::REQUIREMENTS
                .iter()
                .map(|req| RequirementStatus {
                    id: req.id,
                    met: false,
                })
                .collect(),
        }
    }

    /// Whether the given requirement passed.
    pub fn is_met(&self, id: RequirementId) -> bool {
        self.requirements
            .iter()
            .any(|status| status.id == id && status.met)
    }

    pub fn strength(&self) -> StrengthTier {
        classify(self.total)
    }
}

/// Score at or above which a password no longer gets a suggestion.
pub const STRONG_THRESHOLD: u8 = 80;

/// Categorical label derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a 0-100 score to its strength tier.
///
/// Boundaries: below 40 is weak, below 80 medium, below 100 strong.
/// Anything at or above 100 is very strong.
pub fn classify(total: u8) -> StrengthTier {
    match total {
        0..=39 => StrengthTier::Weak,
        40..=79 => StrengthTier::Medium,
        80..=99 => StrengthTier::Strong,
        _ => StrengthTier::VeryStrong,
    }
}
