//! The classification engine: score, rank, band, hybrid-detect.

use crate::category::Category;
use crate::classifier::config::ClassifierConfig;
use crate::classifier::scorer::score_category;
use crate::corpus::KeywordCorpus;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Confidence band for a category score, derived from the score's ratio to
/// the top score of the same run. Only meaningful relative to sibling scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// One category's score within a classification run. Never mutated after the
/// run that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: f64,
    pub confidence: Confidence,
}

/// Result of classifying one idea text.
///
/// `scores` is sorted descending; `primary_category` is `scores[0].category`
/// unless the top score fell below the primary floor, in which case it
/// collapses to [`Category::Other`]. `secondary_category` is present only for
/// hybrids whose runner-up also clears the floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub primary_category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_category: Option<Category>,
    pub scores: Vec<CategoryScore>,
    pub is_hybrid: bool,
}

/// Invariant violations in a hand-built [`ClassificationResult`].
///
/// Results produced by [`classify`] always satisfy the invariants; consumers
/// accepting caller-supplied results should validate before trusting them.
#[derive(Error, Debug, PartialEq)]
pub enum ClassificationError {
    #[error("classification has no scores")]
    EmptyScores,

    #[error("scores are not sorted descending at index {index}")]
    UnsortedScores { index: usize },

    #[error("primary category {found} does not follow from the score set (expected {expected})")]
    PrimaryMismatch { expected: Category, found: Category },

    #[error("secondary category present but hybrid rules do not hold")]
    SpuriousSecondary,

    #[error("hybrid flag set but runner-up ratio is below the hybrid threshold")]
    SpuriousHybrid,
}

impl ClassificationResult {
    /// Top score of the run. Zero for an empty score set.
    pub fn max_score(&self) -> f64 {
        self.scores.first().map(|s| s.score).unwrap_or(0.0)
    }

    /// Runner-up score of the run. Zero if absent.
    pub fn second_score(&self) -> f64 {
        self.scores.get(1).map(|s| s.score).unwrap_or(0.0)
    }

    /// Check the structural invariants against the thresholds that are
    /// supposed to have produced this result.
    pub fn validate(&self, config: &ClassifierConfig) -> Result<(), ClassificationError> {
        if self.scores.is_empty() {
            return Err(ClassificationError::EmptyScores);
        }
        for (index, pair) in self.scores.windows(2).enumerate() {
            if pair[1].score > pair[0].score {
                return Err(ClassificationError::UnsortedScores { index: index + 1 });
            }
        }

        let max = self.max_score();
        let second = self.second_score();

        let expected_primary = if max >= config.primary_floor {
            self.scores[0].category
        } else {
            Category::Other
        };
        if self.primary_category != expected_primary {
            return Err(ClassificationError::PrimaryMismatch {
                expected: expected_primary,
                found: self.primary_category,
            });
        }

        if self.is_hybrid && !(max > 0.0 && second > 0.0 && second / max >= config.hybrid_ratio) {
            return Err(ClassificationError::SpuriousHybrid);
        }

        if self.secondary_category.is_some()
            && !(self.is_hybrid && second >= config.primary_floor)
        {
            return Err(ClassificationError::SpuriousSecondary);
        }

        Ok(())
    }
}

fn confidence_for(score: f64, max_score: f64, config: &ClassifierConfig) -> Confidence {
    let ratio = if max_score > 0.0 { score / max_score } else { 0.0 };
    if ratio >= config.high_confidence {
        Confidence::High
    } else if ratio >= config.medium_confidence {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

/// Classify an idea text against the scoring categories.
///
/// Pure: identical input yields identical output on every call. Empty or
/// keyword-free input produces all-zero scores, primary `other`, not hybrid.
pub fn classify(
    corpus: &KeywordCorpus,
    config: &ClassifierConfig,
    text: &str,
) -> ClassificationResult {
    let mut scores: Vec<CategoryScore> = Category::SCORING
        .iter()
        .map(|&category| CategoryScore {
            category,
            score: score_category(corpus, text, category),
            confidence: Confidence::Low,
        })
        .collect();

    // Stable sort: ties keep the scoring-set declaration order.
    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let max_score = scores[0].score;
    let second_score = scores.get(1).map(|s| s.score).unwrap_or(0.0);

    for entry in &mut scores {
        entry.confidence = confidence_for(entry.score, max_score, config);
    }

    let is_hybrid =
        max_score > 0.0 && second_score > 0.0 && second_score / max_score >= config.hybrid_ratio;

    let primary_category = if max_score >= config.primary_floor {
        scores[0].category
    } else {
        Category::Other
    };
    let secondary_category = if is_hybrid && scores[1].score >= config.primary_floor {
        Some(scores[1].category)
    } else {
        None
    };

    tracing::debug!(
        primary = %primary_category,
        max_score,
        is_hybrid,
        "classified idea text ({} chars)",
        text.len()
    );

    ClassificationResult {
        primary_category,
        secondary_category,
        scores,
        is_hybrid,
    }
}

/// [`classify`] with the default corpus and thresholds.
pub fn classify_idea(text: &str) -> ClassificationResult {
    classify(&KeywordCorpus::default(), &ClassifierConfig::default(), text)
}
