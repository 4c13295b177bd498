//! Dominant-risk inference.

use crate::category::Category;
use crate::classifier::ClassificationResult;

/// Risk sentence when two categories compete for the same idea.
const HYBRID_RISK: &str =
    "Scope creep — hybrid apps try to do too much and end up doing nothing well.";

/// The single biggest risk for an idea.
///
/// Hybrids always get the scope-creep warning; otherwise the risk comes from
/// a fixed per-category table. Total: every category has an entry.
pub fn biggest_risk(_idea: &str, classification: &ClassificationResult) -> String {
    if classification.is_hybrid {
        return HYBRID_RISK.to_string();
    }

    let risk = match classification.primary_category {
        Category::Marketplace => {
            "Cold start problem — you need supply before demand, but suppliers won't show up without buyers."
        }
        Category::Saas => {
            "Frequency of use — if people don't use it daily, they'll forget it exists and churn."
        }
        Category::Social => {
            "Content creation burden — if users have to create content, most won't. The app dies empty."
        }
        Category::SubscriptionContent => {
            "Retention after month one — excitement fades fast, and canceling is one click away."
        }
        Category::LiveStreaming => {
            "Cost at scale — streaming infrastructure gets expensive quickly, and margins disappear."
        }
        Category::AiTool => {
            "Accuracy expectations — users will blame you when the AI is wrong, even if you warned them."
        }
        Category::SubscriptionPaywall => {
            "Retention after month one — excitement fades fast, and canceling is one click away."
        }
        Category::WebStore => {
            "Trust and conversion — users are hesitant to buy from unknown brands on mobile."
        }
        Category::Creator => {
            "Creator acquisition — you need compelling creators first, but they won't join without an audience."
        }
        Category::Booking => {
            "Marketplace dynamics — you need service providers before customers, but providers won't list without demand."
        }
        Category::SocialFeed => {
            "Content creation burden — if users have to create content, most won't. The app dies empty."
        }
        Category::Messaging => {
            "Network effects — a messaging app is useless if your friends aren't on it."
        }
        Category::Productivity => {
            "Habit formation — users download it with good intentions but never build the habit."
        }
        Category::Game => {
            "Engagement cliff — most players drop off after day 1. Retention is brutal."
        }
        Category::MediaStreaming => {
            "Content costs — licensing or creating quality content is expensive and time-consuming."
        }
        Category::Other => {
            "Unclear value proposition — if you can't explain it in one sentence, users won't get it."
        }
    };

    risk.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_idea;

    #[test]
    fn test_hybrid_overrides_category_risk() {
        let idea = "a marketplace with a payment dashboard tool";
        let classification = classify_idea(idea);
        assert!(classification.is_hybrid);
        assert_eq!(biggest_risk(idea, &classification), HYBRID_RISK);
    }

    #[test]
    fn test_marketplace_gets_cold_start() {
        let idea = "a marketplace for vintage sellers and buyers";
        let classification = classify_idea(idea);
        assert!(!classification.is_hybrid);
        assert!(biggest_risk(idea, &classification).starts_with("Cold start problem"));
    }

    #[test]
    fn test_keyword_free_idea_falls_back_to_other() {
        let idea = "something else entirely";
        let classification = classify_idea(idea);
        assert!(biggest_risk(idea, &classification).starts_with("Unclear value proposition"));
    }

    #[test]
    fn test_every_category_has_an_entry() {
        for cat in Category::ALL {
            let mut classification = classify_idea("");
            classification.primary_category = cat;
            assert!(!biggest_risk("", &classification).is_empty());
        }
    }
}
