//! First-thing-to-cut inference.

use crate::category::Category;
use crate::classifier::ClassificationResult;
use crate::corpus::normalize;

/// Common feature-bloat signals in priority order. The first keyword found in
/// the idea text wins, regardless of where it occurs in the text.
const FEATURE_BLOAT: [(&str, &str); 8] = [
    ("chat", "Real-time chat — use email notifications instead for MVP."),
    ("messaging", "In-app messaging — link to existing channels (WhatsApp, email) instead."),
    ("recommendation", "Smart recommendations — start with simple sorting/filtering."),
    ("ai", "AI features — start with manual curation or simple rules."),
    ("notification", "Push notifications — email works fine for MVP."),
    ("analytics", "Analytics dashboard — use a third-party tool initially."),
    ("payment", "Custom payment flow — use Stripe checkout links."),
    ("search", "Advanced search — simple category browsing is enough to start."),
];

/// Suggest the first feature to cut from the MVP.
///
/// Scans the normalized text (plain substring) against the bloat list in
/// priority order; falls back to a per-category suggestion when no bloat
/// keyword is present.
pub fn first_cut(idea: &str, classification: &ClassificationResult) -> String {
    let text = normalize(idea);

    for (keyword, cut) in FEATURE_BLOAT {
        if text.contains(keyword) {
            return cut.to_string();
        }
    }

    let cut = match classification.primary_category {
        Category::Marketplace => {
            "Automated matching — do it manually first to learn what users actually need."
        }
        Category::Saas => "User roles and permissions — start with one user type and expand later.",
        Category::Social => "Social features like likes/comments — focus on core value first.",
        Category::SubscriptionContent => {
            "Multiple pricing tiers — start with one price and adjust based on data."
        }
        Category::LiveStreaming => "Recording and replays — just do live first and validate demand.",
        Category::AiTool => "Multiple AI models or options — pick one and make it work well.",
        Category::SubscriptionPaywall => {
            "Multiple pricing tiers — start with one price and adjust based on data."
        }
        Category::WebStore => "Advanced filters and search — simple catalog is enough to start.",
        Category::Creator => "Creator analytics dashboard — manual payouts work fine initially.",
        Category::Booking => "Complex availability rules — start with simple time slots.",
        Category::SocialFeed => {
            "Algorithm and personalization — chronological feed works great for MVP."
        }
        Category::Messaging => "Voice/video calls — text messaging is plenty for MVP.",
        Category::Productivity => "Team collaboration features — start single-player first.",
        Category::Game => "Multiplayer mode — single player is easier to nail first.",
        Category::MediaStreaming => "Offline downloads — streaming-only keeps it simple.",
        Category::Other => "Any feature you're not 100% sure users need — cut it ruthlessly.",
    };

    cut.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_idea;

    #[test]
    fn test_priority_order_wins_over_text_order() {
        // "ai" appears first in the text, but "chat" outranks it in the
        // priority list (and matches inside "chat with" via "chat").
        let idea = "I want AI chat with real-time messaging and smart recommendations";
        let classification = classify_idea(idea);
        assert!(first_cut(idea, &classification).starts_with("Real-time chat"));
    }

    #[test]
    fn test_substring_match() {
        // "searching" contains "search".
        let idea = "an app for searching lost pets";
        let classification = classify_idea(idea);
        assert!(first_cut(idea, &classification).starts_with("Advanced search"));
    }

    #[test]
    fn test_category_fallback_without_bloat_keywords() {
        let idea = "a marketplace for vintage furniture sellers";
        let classification = classify_idea(idea);
        assert!(first_cut(idea, &classification).starts_with("Automated matching"));
    }

    #[test]
    fn test_generic_fallback() {
        let idea = "a thing";
        let classification = classify_idea(idea);
        assert!(first_cut(idea, &classification).starts_with("Any feature"));
    }
}
