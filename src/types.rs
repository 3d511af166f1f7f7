use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;

use crate::category::Category;
use crate::classify::{AmbiguityLevel, classify_ambiguity};

/// Clarity verdict for a single word.
///
/// `score` and `ambiguity` are complementary views of the same maximum
/// category similarity: `score = max_similarity * 100` and
/// `ambiguity = 1 - max_similarity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClarityResult {
    /// Clarity score in [0, 100]; higher means the word leans harder into
    /// one category.
    pub score: f32,
    /// Ambiguity in [0, 1]; higher means no category dominates.
    pub ambiguity: f32,
    /// One-line reading of the verdict.
    pub interpretation: String,
    /// Actionable advice for prompt authors.
    pub recommendation: String,
    /// Coarse bucket the ambiguity falls into.
    pub level: AmbiguityLevel,
    /// Visual marker matching `level`.
    pub emoji: String,
}

impl ClarityResult {
    /// Derive the full verdict from the maximum category similarity.
    pub fn from_max_similarity(max_similarity: f32) -> Self {
        let ambiguity = 1.0 - max_similarity;
        let level = classify_ambiguity(ambiguity);
        ClarityResult {
            score: max_similarity * 100.0,
            ambiguity,
            interpretation: level.interpretation().to_string(),
            recommendation: level.recommendation().to_string(),
            level,
            emoji: level.emoji().to_string(),
        }
    }
}

/// Full analysis of one word: per-category similarities plus the verdict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordAnalysis {
    /// The analyzed word, as scored (post-trim).
    pub word: String,
    /// Cosine similarity between the word and each category centroid.
    /// `BTreeMap` keeps the categories in declaration order.
    pub contexts: BTreeMap<Category, f32>,
    /// Clarity verdict derived from the best category similarity.
    pub clarity: ClarityResult,
}
