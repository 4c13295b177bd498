//! Idea classification and report synthesis for product onboarding.
//!
//! This library provides:
//! - A keyword-weight classifier that maps free-text product ideas onto a
//!   fixed category set, with confidence bands and hybrid detection
//! - Rule-based inference of complexity, dominant risk, and the first
//!   feature to cut, composed into a live reality check
//! - A question flow with recorded, editable answers
//! - A final report synthesizer that turns answers into strengths,
//!   weaknesses, a wedge verdict, MVP scope, risks, and next decisions
//!
//! # Usage
//!
//! ```
//! use ideagauge::classifier::classify_idea;
//! use ideagauge::insight::RealityCheck;
//!
//! let idea = "A marketplace where vintage sellers list items and buyers browse";
//! let classification = classify_idea(idea);
//! let check = RealityCheck::from_classification(idea, &classification);
//! assert_eq!(check.inferred_type.as_str(), "marketplace");
//! ```

pub mod answers;
pub mod category;
pub mod classifier;
pub mod corpus;
pub mod insight;
pub mod questions;
pub mod report;

pub use answers::{AnswerSheet, QuestionKind, UserResponse};
pub use category::Category;
pub use classifier::{
    classify, classify_idea, ClassificationResult, ClassifierConfig, Confidence,
};
pub use corpus::KeywordCorpus;
pub use insight::{ComplexityLevel, RealityCheck};
pub use questions::{build_question_flow, Question};
pub use report::{generate_final_report, FinalReport, ReportContext};
