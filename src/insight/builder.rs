//! Builder-facing delivery insights (complexity, timeline, stack).

use crate::category::Category;
use crate::classifier::ClassificationResult;
use crate::insight::complexity::{complexity_level, ComplexityLevel};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Delivery guidance for whoever has to build the idea.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderInsight {
    pub technical_complexity: String,
    pub estimated_dev_time: String,
    pub key_risk: String,
    pub core_tech_stack: Vec<String>,
}

impl BuilderInsight {
    fn new(complexity: &str, dev_time: &str, risk: &str, stack: &[&str]) -> Self {
        Self {
            technical_complexity: complexity.to_string(),
            estimated_dev_time: dev_time.to_string(),
            key_risk: risk.to_string(),
            core_tech_stack: stack.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn base_insight(category: Category) -> BuilderInsight {
    match category {
        Category::Marketplace => BuilderInsight::new(
            "High (Payment logic, matching algorithms)",
            "3-4 months for MVP",
            "Liquidity: Supply must match demand geography/timing.",
            &["PostgreSQL (Relational data)", "Redis (Caching)", "Stripe Connect"],
        ),
        Category::Saas => BuilderInsight::new(
            "Medium (CRUD, Auth, State management)",
            "2-3 months for MVP",
            "Churn: Value must be delivered immediately.",
            &["PostgreSQL", "Next.js", "Vercel"],
        ),
        Category::Social => BuilderInsight::new(
            "High (Real-time, Graph data)",
            "3-4 months for MVP",
            "Empty State: Social apps are boring without content.",
            &["Supabase Realtime", "Graph/Relational hybrid", "CDN for media"],
        ),
        Category::SubscriptionContent | Category::SubscriptionPaywall => BuilderInsight::new(
            "Medium (CMS, Gating logic)",
            "1-2 months for MVP",
            "Content Treadmill: Producing enough value monthly.",
            &["Stripe Subscriptions", "CDN (Video/Audio)", "Next.js"],
        ),
        Category::LiveStreaming => BuilderInsight::new(
            "Very High (Latency, Bandwidth, Infrastructure)",
            "4-6 months for MVP",
            "Unit Economics: Streaming costs scale linearly.",
            &["WebRTC", "Mux/AWS IVS", "WebSocket server"],
        ),
        Category::AiTool => BuilderInsight::new(
            "High (LLM integration, Prompt engineering)",
            "1-3 months for MVP (depends on model)",
            "Hallucination & Cost: API bills can spike.",
            &["OpenAI/Anthropic API", "Vector Database (Pinecone/pgvector)", "Edge Functions"],
        ),
        Category::WebStore => BuilderInsight::new(
            "Medium (Catalog, Cart, Checkout)",
            "2-3 months for MVP",
            "Conversion: Mobile checkout has high drop-off.",
            &["Shopify API", "Stripe", "Next.js"],
        ),
        Category::Creator => BuilderInsight::new(
            "High (Payment splits, Content delivery)",
            "3-4 months for MVP",
            "Creator acquisition: Chicken-and-egg problem.",
            &["Stripe Connect", "CDN", "PostgreSQL"],
        ),
        Category::Booking => BuilderInsight::new(
            "Medium (Calendar, Availability, Notifications)",
            "2-3 months for MVP",
            "No-shows and cancellations hurt trust.",
            &["Calendar API", "PostgreSQL", "Email/SMS"],
        ),
        Category::SocialFeed => BuilderInsight::new(
            "High (Real-time, Content moderation)",
            "3-4 months for MVP",
            "Empty State: Social apps are boring without content.",
            &["Supabase Realtime", "CDN for media", "PostgreSQL"],
        ),
        Category::Messaging => BuilderInsight::new(
            "Very High (Real-time sync, E2E encryption)",
            "4-5 months for MVP",
            "Network effects: Useless without critical mass.",
            &["WebSocket", "Redis Pub/Sub", "E2E encryption"],
        ),
        Category::Productivity => BuilderInsight::new(
            "Low-Medium (Data models, Reminders)",
            "1-2 months for MVP",
            "Habit formation: Users download but don't stick.",
            &["PostgreSQL", "Push notifications", "Next.js"],
        ),
        Category::Game => BuilderInsight::new(
            "Medium-High (Game logic, Physics, Multiplayer)",
            "3-6 months for MVP",
            "Retention: Most drop off after day 1.",
            &["Game engine", "WebSocket (if multiplayer)", "Leaderboard DB"],
        ),
        Category::MediaStreaming => BuilderInsight::new(
            "High (CDN, DRM, Adaptive streaming)",
            "3-4 months for MVP",
            "Content costs: Licensing or creation is expensive.",
            &["CDN", "Video encoding", "DRM (if needed)"],
        ),
        Category::Other => BuilderInsight::new(
            "Variable",
            "2-3 months",
            "Market Fit: Problem might not be acute enough.",
            &["PostgreSQL", "Next.js", "Tailwind CSS"],
        ),
    }
}

/// Increment the first number in a dev-time estimate ("3-4 months" -> "4-4").
fn bump_first_number(estimate: &str) -> String {
    let re = Regex::new(r"\d+").expect("static pattern");
    match re.find(estimate) {
        Some(m) => {
            let bumped = m.as_str().parse::<u64>().map(|n| n + 1).unwrap_or(0);
            format!("{}{}{}", &estimate[..m.start()], bumped, &estimate[m.end()..])
        }
        None => estimate.to_string(),
    }
}

/// Delivery insights for an idea: the per-category base entry, adjusted for
/// hybrid scope and inferred complexity.
pub fn builder_insights(idea: &str, classification: &ClassificationResult) -> BuilderInsight {
    let complexity = complexity_level(idea, classification);
    let mut insight = base_insight(classification.primary_category);

    if classification.is_hybrid {
        insight.technical_complexity += " (Increased due to hybrid nature)";
        insight.estimated_dev_time = "4-5 months (Hybrid scope)".to_string();
        insight.key_risk = "Scope Creep: Trying to build two apps at once.".to_string();
    }

    if complexity == ComplexityLevel::High && !classification.is_hybrid {
        insight.estimated_dev_time = bump_first_number(&insight.estimated_dev_time);
    }

    insight
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_idea;

    #[test]
    fn test_bump_first_number() {
        assert_eq!(bump_first_number("3-4 months for MVP"), "4-4 months for MVP");
        assert_eq!(bump_first_number("Variable"), "Variable");
    }

    #[test]
    fn test_high_complexity_extends_estimate() {
        let idea = "a marketplace with payment and escrow for sellers";
        let classification = classify_idea(idea);
        assert!(!classification.is_hybrid);
        let insight = builder_insights(idea, &classification);
        assert_eq!(insight.estimated_dev_time, "4-4 months for MVP");
    }

    #[test]
    fn test_hybrid_overrides_estimate_and_risk() {
        let idea = "a marketplace with a payment dashboard tool";
        let classification = classify_idea(idea);
        assert!(classification.is_hybrid);
        let insight = builder_insights(idea, &classification);
        assert!(insight.technical_complexity.ends_with("(Increased due to hybrid nature)"));
        assert_eq!(insight.estimated_dev_time, "4-5 months (Hybrid scope)");
        assert!(insight.key_risk.starts_with("Scope Creep"));
    }

    #[test]
    fn test_fallback_category_stack() {
        let idea = "a thing";
        let classification = classify_idea(idea);
        let insight = builder_insights(idea, &classification);
        assert_eq!(insight.technical_complexity, "Variable");
        assert_eq!(insight.core_tech_stack.len(), 3);
    }
}
