//! Static keyword corpus backing the category scorer.
//!
//! Pure data: each category owns a list of weighted keyword groups. The
//! corpus is built once and passed explicitly into the scorer and classifier
//! so the engine carries no ambient global state.

use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A weighted set of trigger words/phrases contributing to one category.
///
/// Groups within a category are independent and additive. Keywords may be
/// multi-word phrases; those must appear contiguously in the idea text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub keywords: Vec<String>,
    pub weight: f64,
}

impl KeywordGroup {
    pub fn new(weight: f64, keywords: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            weight,
        }
    }
}

/// Read-only map from category to its keyword groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordCorpus {
    groups: BTreeMap<Category, Vec<KeywordGroup>>,
}

impl KeywordCorpus {
    /// Keyword groups for a category. Unknown categories score nothing.
    pub fn groups(&self, category: Category) -> &[KeywordGroup] {
        self.groups.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories that have at least one keyword group.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.groups.keys().copied()
    }
}

impl Default for KeywordCorpus {
    fn default() -> Self {
        let g = KeywordGroup::new;
        let mut groups = BTreeMap::new();

        groups.insert(
            Category::Marketplace,
            vec![
                g(3.0, &["marketplace", "buy and sell", "buyers", "sellers", "listing", "listings"]),
                g(2.0, &["two-sided", "platform", "connect", "matching", "match"]),
                g(2.0, &["commission", "fee", "transaction", "escrow", "payment"]),
                g(1.5, &["vendor", "merchant", "shop", "store", "inventory"]),
                g(3.0, &["airbnb", "uber", "etsy", "ebay", "fiverr", "upwork"]),
                g(1.5, &["booking", "reserve", "hire", "rent", "rental"]),
            ],
        );
        groups.insert(
            Category::Saas,
            vec![
                g(3.0, &["saas", "software", "tool", "dashboard", "admin"]),
                g(2.5, &["productivity", "workflow", "automation", "automate"]),
                g(2.0, &["team", "collaborate", "collaboration", "workspace"]),
                g(2.0, &["analytics", "reporting", "reports", "metrics", "tracking"]),
                g(2.5, &["crm", "erp", "project management", "task", "tasks"]),
                g(1.5, &["subscription", "monthly", "pricing tier", "enterprise"]),
                g(2.0, &["notion", "slack", "asana", "monday", "hubspot"]),
                g(1.0, &["manage", "organize", "schedule", "planning"]),
            ],
        );
        groups.insert(
            Category::Social,
            vec![
                g(3.0, &["social", "community", "network", "networking"]),
                g(2.5, &["friends", "followers", "following", "connections"]),
                g(2.0, &["feed", "timeline", "posts", "sharing", "share"]),
                g(1.5, &["profile", "profiles", "user profiles"]),
                g(2.0, &["like", "comment", "react", "engage", "engagement"]),
                g(1.5, &["message", "chat", "dm", "messaging"]),
                g(2.0, &["instagram", "twitter", "tiktok", "facebook", "discord"]),
                g(1.5, &["group", "groups", "forum", "discussion"]),
            ],
        );
        groups.insert(
            Category::SubscriptionContent,
            vec![
                g(2.5, &["subscription", "subscribe", "subscriber", "membership"]),
                g(2.0, &["content", "creator", "creators", "exclusive"]),
                g(2.5, &["course", "courses", "learning", "education", "tutorial"]),
                g(2.0, &["newsletter", "blog", "articles", "writing"]),
                g(2.0, &["paywall", "premium", "paid", "monetize"]),
                g(3.0, &["patreon", "substack", "onlyfans", "gumroad", "teachable"]),
                g(1.5, &["video", "videos", "series", "episodes"]),
                g(2.0, &["coaching", "mentorship", "consulting"]),
            ],
        );
        groups.insert(
            Category::LiveStreaming,
            vec![
                g(3.0, &["live", "streaming", "stream", "broadcast", "real-time", "realtime"]),
                g(2.5, &["video call", "video chat", "webinar", "conference"]),
                g(2.5, &["twitch", "youtube live", "zoom", "meets"]),
                g(2.0, &["viewers", "audience", "watch", "watching"]),
                g(1.5, &["chat", "live chat", "interaction", "interactive"]),
                g(2.0, &["event", "events", "virtual event", "concert"]),
                g(1.5, &["gaming", "esports", "sports"]),
            ],
        );
        groups.insert(
            Category::AiTool,
            vec![
                g(3.0, &["ai", "artificial intelligence", "machine learning", "ml"]),
                g(3.0, &["gpt", "chatgpt", "openai", "llm", "language model"]),
                g(2.0, &["generate", "generation", "generated", "generator"]),
                g(1.5, &["automate", "automation", "automated", "automatic"]),
                g(1.5, &["smart", "intelligent", "predict", "prediction"]),
                g(2.0, &["copilot", "assistant", "bot", "chatbot"]),
                g(1.5, &["analyze", "analysis", "insight", "insights"]),
                g(1.0, &["image", "images", "text", "voice", "speech"]),
            ],
        );
        groups.insert(
            Category::SubscriptionPaywall,
            vec![
                g(2.5, &["subscription", "subscribe", "subscriber", "membership"]),
                g(2.0, &["content", "creator", "creators", "exclusive"]),
                g(2.0, &["paywall", "premium", "paid", "monetize"]),
            ],
        );
        groups.insert(
            Category::WebStore,
            vec![
                g(3.0, &["store", "shop", "ecommerce", "e-commerce"]),
                g(2.0, &["products", "catalog", "inventory"]),
                g(2.0, &["shopify", "woocommerce"]),
            ],
        );
        groups.insert(
            Category::Creator,
            vec![
                g(3.0, &["creator", "creators", "content creator"]),
                g(2.0, &["patreon", "onlyfans", "subscription"]),
                g(1.5, &["fans", "supporters", "community"]),
            ],
        );
        groups.insert(
            Category::Booking,
            vec![
                g(3.0, &["booking", "reserve", "reservation", "appointment"]),
                g(2.0, &["schedule", "calendar", "availability"]),
                g(1.5, &["restaurant", "hotel", "service"]),
            ],
        );
        groups.insert(
            Category::SocialFeed,
            vec![
                g(3.0, &["feed", "timeline", "posts", "social"]),
                g(2.0, &["scroll", "like", "comment", "share"]),
                g(2.0, &["instagram", "twitter", "tiktok"]),
            ],
        );
        groups.insert(
            Category::Messaging,
            vec![
                g(3.0, &["message", "messaging", "chat", "dm"]),
                g(2.0, &["conversation", "talk", "communicate"]),
                g(2.0, &["whatsapp", "telegram", "signal"]),
            ],
        );
        groups.insert(
            Category::Productivity,
            vec![
                g(3.0, &["productivity", "organize", "manage"]),
                g(2.0, &["habit", "tracker", "goal", "progress"]),
                g(2.0, &["todo", "task", "checklist"]),
            ],
        );
        groups.insert(
            Category::Game,
            vec![
                g(3.0, &["game", "gaming", "play", "player"]),
                g(2.0, &["multiplayer", "competition", "leaderboard"]),
                g(1.5, &["casual", "arcade", "puzzle"]),
            ],
        );
        groups.insert(
            Category::MediaStreaming,
            vec![
                g(3.0, &["streaming", "watch", "listen", "media"]),
                g(2.0, &["video", "music", "podcast", "audio"]),
                g(2.0, &["netflix", "spotify", "youtube"]),
            ],
        );
        groups.insert(
            Category::Other,
            vec![
                g(1.0, &["utility", "simple", "basic", "minimal"]),
                g(1.5, &["health", "fitness", "wellness", "meditation"]),
                g(1.5, &["finance", "fintech", "banking", "investment"]),
            ],
        );

        Self { groups }
    }
}

/// Lowercase the input and replace every character outside `[a-z0-9]` and
/// whitespace with a space.
///
/// Total and idempotent; all matching downstream runs on normalized text.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}
