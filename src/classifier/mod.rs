//! Keyword-weight idea classification.
//!
//! One-shot pipeline: normalize the idea text, score every category in the
//! scoring set, rank, derive confidence bands relative to the top score, and
//! detect hybrids. No state survives between calls.

pub mod config;
pub mod engine;
pub mod scorer;

pub use config::{ClassifierConfig, ConfigError};
pub use engine::{
    classify, classify_idea, CategoryScore, ClassificationError, ClassificationResult, Confidence,
};
pub use scorer::score_category;
