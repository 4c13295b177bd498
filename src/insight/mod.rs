//! Rule-based inference over idea text and classification state.
//!
//! Three independent inferences (complexity tier, dominant risk, first cut)
//! plus builder-facing delivery insights, and the [`RealityCheck`] summary
//! panel that composes all of them.

pub mod builder;
pub mod complexity;
pub mod cuts;
pub mod risk;

pub use builder::{builder_insights, BuilderInsight};
pub use complexity::{complexity_level, ComplexityLevel};
pub use cuts::first_cut;
pub use risk::biggest_risk;

use crate::category::Category;
use crate::classifier::{classify, ClassificationResult, ClassifierConfig};
use crate::corpus::KeywordCorpus;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One-line summary of what the idea actually is.
///
/// "A {category label}", plus "with {secondary label} elements" for hybrids,
/// plus the target audience when the idea contains a "for ..." clause.
pub fn summarize_idea(idea: &str, classification: &ClassificationResult) -> String {
    let mut summary = format!("A {}", classification.primary_category.label().to_lowercase());

    if classification.is_hybrid {
        if let Some(secondary) = classification.secondary_category {
            summary.push_str(&format!(" with {} elements", secondary.label().to_lowercase()));
        }
    }

    if idea.to_lowercase().contains("for ") {
        // Audience clause: everything after "for" up to a comma or period.
        let re = Regex::new(r"(?i)for\s+([^,.]+)").expect("static pattern");
        if let Some(caps) = re.captures(idea) {
            summary.push_str(&format!(" for {}", caps[1].trim()));
        }
    }

    summary
}

/// Live-updating derived summary shown alongside user input: category,
/// complexity, dominant risk, and the first feature to cut.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealityCheck {
    pub what_youre_building: String,
    pub inferred_type: Category,
    pub is_hybrid: bool,
    pub complexity_level: ComplexityLevel,
    pub biggest_risk: String,
    pub first_thing_to_cut: String,
}

impl RealityCheck {
    /// Classify the idea and run every inference over the result.
    pub fn from_idea(corpus: &KeywordCorpus, config: &ClassifierConfig, idea: &str) -> Self {
        let classification = classify(corpus, config, idea);
        Self::from_classification(idea, &classification)
    }

    /// Build from an existing classification (avoids re-scoring).
    pub fn from_classification(idea: &str, classification: &ClassificationResult) -> Self {
        Self {
            what_youre_building: summarize_idea(idea, classification),
            inferred_type: classification.primary_category,
            is_hybrid: classification.is_hybrid,
            complexity_level: complexity_level(idea, classification),
            biggest_risk: biggest_risk(idea, classification),
            first_thing_to_cut: first_cut(idea, classification),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_idea;

    #[test]
    fn test_summarize_plain_idea() {
        let idea = "a marketplace connecting vintage sellers and buyers";
        let classification = classify_idea(idea);
        assert_eq!(summarize_idea(idea, &classification), "A marketplace");
    }

    #[test]
    fn test_summarize_extracts_audience_clause() {
        let idea = "a marketplace for dog walkers, with reviews";
        let classification = classify_idea(idea);
        assert_eq!(summarize_idea(idea, &classification), "A marketplace for dog walkers");
    }

    #[test]
    fn test_summarize_hybrid_mentions_secondary() {
        let idea = "a marketplace with a payment dashboard tool";
        let classification = classify_idea(idea);
        assert!(classification.is_hybrid);
        let summary = summarize_idea(idea, &classification);
        assert!(summary.starts_with("A productivity / saas with marketplace elements"));
    }

    #[test]
    fn test_reality_check_composes_all_inferences() {
        let idea = "a marketplace with payment and escrow for freelancers";
        let check = RealityCheck::from_idea(
            &KeywordCorpus::default(),
            &ClassifierConfig::default(),
            idea,
        );
        assert_eq!(check.inferred_type, Category::Marketplace);
        assert_eq!(check.complexity_level, ComplexityLevel::High);
        assert!(check.biggest_risk.starts_with("Cold start problem"));
        assert!(check.first_thing_to_cut.starts_with("Custom payment flow"));
        assert!(check.what_youre_building.starts_with("A marketplace for freelancers"));
    }
}
