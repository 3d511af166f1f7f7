//! Mapping from a raw ambiguity value to a human-facing verdict.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse ambiguity bucket for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbiguityLevel {
    Low,
    Medium,
    High,
}

impl AmbiguityLevel {
    /// One-line reading of what the bucket means.
    pub const fn interpretation(self) -> &'static str {
        match self {
            AmbiguityLevel::Low => "Clear word",
            AmbiguityLevel::Medium => "Moderately ambiguous",
            AmbiguityLevel::High => "Very ambiguous",
        }
    }

    /// Actionable advice for prompt authors.
    pub const fn recommendation(self) -> &'static str {
        match self {
            AmbiguityLevel::Low => "Good choice for prompting",
            AmbiguityLevel::Medium => "Consider a clearer alternative",
            AmbiguityLevel::High => "Use a more specific word in your prompts",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            AmbiguityLevel::Low => "\u{2705}",
            AmbiguityLevel::Medium => "\u{26a1}",
            AmbiguityLevel::High => "\u{1f6a8}",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            AmbiguityLevel::Low => "low",
            AmbiguityLevel::Medium => "medium",
            AmbiguityLevel::High => "high",
        }
    }
}

impl fmt::Display for AmbiguityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket an ambiguity value.
///
/// The comparisons are strictly greater-than, so a word sitting exactly on
/// a threshold falls into the lower bucket: ambiguity of exactly `0.7`
/// classifies as medium and exactly `0.4` as low.
pub fn classify_ambiguity(ambiguity: f32) -> AmbiguityLevel {
    if ambiguity > 0.7 {
        AmbiguityLevel::High
    } else if ambiguity > 0.4 {
        AmbiguityLevel::Medium
    } else {
        AmbiguityLevel::Low
    }
}
