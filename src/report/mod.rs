//! Final report synthesis.
//!
//! Takes everything a session produced (the idea, its classification, the
//! reality check, and the recorded answers) and folds the analyzer outputs
//! into one serializable report.

pub mod analyzers;

use crate::classifier::ClassificationResult;
use crate::insight::RealityCheck;
use analyzers::AnswerMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the synthesizer needs about one session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportContext {
    pub idea: String,
    pub classification: ClassificationResult,
    /// Question id -> chosen answer id.
    pub user_answers: AnswerMap,
    pub reality_check: RealityCheck,
}

impl ReportContext {
    pub fn new(
        idea: impl Into<String>,
        classification: ClassificationResult,
        user_answers: AnswerMap,
        reality_check: RealityCheck,
    ) -> Self {
        Self {
            idea: idea.into(),
            classification,
            user_answers,
            reality_check,
        }
    }
}

/// The synthesized verdict handed back to the founder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalReport {
    pub what_youre_actually_building: String,
    pub why_this_might_work: String,
    pub why_this_might_not: String,
    pub the_real_wedge: String,
    pub has_wedge: bool,
    pub mvp_scope: Vec<String>,
    pub top_risks: Vec<String>,
    pub next_decisions: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Runs every analyzer over the context and assembles the report.
pub fn generate_final_report(ctx: &ReportContext) -> FinalReport {
    let mut what_youre_actually_building = ctx.reality_check.what_youre_building.clone();
    if ctx.classification.is_hybrid {
        if let Some(secondary) = ctx.classification.secondary_category {
            what_youre_actually_building.push_str(&format!(
                " — a hybrid of {} and {}.",
                ctx.classification.primary_category.label(),
                secondary.label()
            ));
        }
    }

    let (the_real_wedge, has_wedge) =
        analyzers::wedge(&ctx.classification, &ctx.user_answers);

    debug!(
        category = %ctx.classification.primary_category,
        hybrid = ctx.classification.is_hybrid,
        has_wedge,
        answers = ctx.user_answers.len(),
        "synthesizing final report"
    );

    FinalReport {
        what_youre_actually_building,
        why_this_might_work: analyzers::strengths(&ctx.classification, &ctx.user_answers),
        why_this_might_not: analyzers::weaknesses(&ctx.classification, &ctx.user_answers),
        the_real_wedge,
        has_wedge,
        mvp_scope: analyzers::mvp_scope(&ctx.classification, &ctx.user_answers),
        top_risks: analyzers::top_risks(&ctx.classification, &ctx.user_answers),
        next_decisions: analyzers::next_decisions(&ctx.classification, &ctx.user_answers),
        generated_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_idea;
    use crate::insight::RealityCheck;

    fn context(idea: &str, pairs: &[(&str, &str)]) -> ReportContext {
        let classification = classify_idea(idea);
        let reality_check = RealityCheck::from_classification(idea, &classification);
        let answers = pairs
            .iter()
            .map(|(q, a)| (q.to_string(), a.to_string()))
            .collect();
        ReportContext::new(idea, classification, answers, reality_check)
    }

    #[test]
    fn test_report_shape_for_marketplace_idea() {
        let ctx = context(
            "A marketplace where vintage sellers list items and buyers browse listings",
            &[("uni-3", "core-action"), ("uni-4", "existing-audience")],
        );
        let report = generate_final_report(&ctx);

        assert!(report.what_youre_actually_building.starts_with("A marketplace"));
        assert!(report.why_this_might_work.contains("existing distribution"));
        assert!(report.has_wedge);
        assert!(report.the_real_wedge.starts_with("Your potential wedge:"));
        assert!(report.mvp_scope.len() <= 6);
        assert!(report.top_risks.len() <= 3);
        assert_eq!(report.next_decisions.len(), 3);
    }

    #[test]
    fn test_hybrid_suffix_on_building_line() {
        let ctx = context("a marketplace with a payment dashboard tool", &[]);
        assert!(ctx.classification.is_hybrid);
        let report = generate_final_report(&ctx);
        assert!(report
            .what_youre_actually_building
            .ends_with(&format!(
                " — a hybrid of {} and {}.",
                ctx.classification.primary_category.label(),
                ctx.classification.secondary_category.unwrap().label()
            )));
    }

    #[test]
    fn test_non_hybrid_has_no_suffix() {
        let ctx = context(
            "A marketplace where vintage sellers list items and buyers browse listings",
            &[],
        );
        assert!(!ctx.classification.is_hybrid);
        let report = generate_final_report(&ctx);
        assert_eq!(
            report.what_youre_actually_building,
            ctx.reality_check.what_youre_building
        );
    }

    #[test]
    fn test_report_serializes_round_trip() {
        let ctx = context("a subscription service for workout videos", &[]);
        let report = generate_final_report(&ctx);
        let json = serde_json::to_string(&report).unwrap();
        let back: FinalReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
