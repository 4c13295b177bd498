//! Build-complexity inference from idea text and classification.

use crate::category::Category;
use crate::classifier::ClassificationResult;
use crate::corpus::normalize;
use serde::{Deserialize, Serialize};

/// Overall build-complexity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplexityLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Indicators worth +2 each. Matched by plain substring search on the
/// normalized text, not whole-word.
const HIGH_IMPACT: [&str; 14] = [
    "marketplace",
    "two-sided",
    "payment",
    "escrow",
    "live streaming",
    "real-time",
    "video call",
    "machine learning",
    "ai",
    "recommendation",
    "matching algorithm",
    "moderation",
    "verification",
    "identity",
];

/// Indicators worth +1 each.
const MEDIUM_IMPACT: [&str; 13] = [
    "subscription",
    "authentication",
    "user accounts",
    "notifications",
    "messaging",
    "upload",
    "search",
    "filter",
    "dashboard",
    "analytics",
    "integration",
    "api",
    "sync",
];

/// Infer the complexity tier for an idea.
///
/// Accumulates +2 per high-impact indicator and +1 per medium-impact
/// indicator present in the normalized text, adds a category bonus (+3 for
/// marketplace/live-streaming, +2 for social/ai-tool) and +2 for hybrids,
/// then maps the total: `< 3` Low, `3..=5` Medium, `>= 6` High.
pub fn complexity_level(idea: &str, classification: &ClassificationResult) -> ComplexityLevel {
    let text = normalize(idea);
    let mut score = 0u32;

    for keyword in HIGH_IMPACT {
        if text.contains(keyword) {
            score += 2;
        }
    }
    for keyword in MEDIUM_IMPACT {
        if text.contains(keyword) {
            score += 1;
        }
    }

    score += match classification.primary_category {
        Category::Marketplace | Category::LiveStreaming => 3,
        Category::Social | Category::AiTool => 2,
        _ => 0,
    };

    if classification.is_hybrid {
        score += 2;
    }

    if score >= 6 {
        ComplexityLevel::High
    } else if score >= 3 {
        ComplexityLevel::Medium
    } else {
        ComplexityLevel::Low
    }
}
