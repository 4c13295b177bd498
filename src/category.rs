//! Product category tags used throughout the engine.
//!
//! The classifier scores a fixed subset of these (see [`Category::SCORING`]);
//! the remaining tags are UI-level aliases that still carry lookup-table
//! entries for risk, cut, and builder-insight inference.

use serde::{Deserialize, Serialize};

/// A product-type tag.
///
/// Wire representation is the kebab-case tag (e.g. `subscription-content`),
/// which downstream consumers treat as a stable identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Marketplace,
    Saas,
    Social,
    SubscriptionContent,
    LiveStreaming,
    AiTool,
    Other,
    // Alias tags: never produced by the classifier, but accepted everywhere
    // a category-keyed lookup exists.
    SubscriptionPaywall,
    WebStore,
    Creator,
    Booking,
    SocialFeed,
    Messaging,
    Productivity,
    Game,
    MediaStreaming,
}

impl Category {
    /// Categories that participate in scoring, in tie-break order.
    ///
    /// The classifier's sort is stable, so when two categories tie the one
    /// declared earlier here wins.
    pub const SCORING: [Category; 7] = [
        Category::Marketplace,
        Category::Saas,
        Category::Social,
        Category::SubscriptionContent,
        Category::LiveStreaming,
        Category::AiTool,
        Category::Other,
    ];

    /// Every known tag, scoring set first.
    pub const ALL: [Category; 16] = [
        Category::Marketplace,
        Category::Saas,
        Category::Social,
        Category::SubscriptionContent,
        Category::LiveStreaming,
        Category::AiTool,
        Category::Other,
        Category::SubscriptionPaywall,
        Category::WebStore,
        Category::Creator,
        Category::Booking,
        Category::SocialFeed,
        Category::Messaging,
        Category::Productivity,
        Category::Game,
        Category::MediaStreaming,
    ];

    /// Stable kebab-case tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Marketplace => "marketplace",
            Category::Saas => "saas",
            Category::Social => "social",
            Category::SubscriptionContent => "subscription-content",
            Category::LiveStreaming => "live-streaming",
            Category::AiTool => "ai-tool",
            Category::Other => "other",
            Category::SubscriptionPaywall => "subscription-paywall",
            Category::WebStore => "web-store",
            Category::Creator => "creator",
            Category::Booking => "booking",
            Category::SocialFeed => "social-feed",
            Category::Messaging => "messaging",
            Category::Productivity => "productivity",
            Category::Game => "game",
            Category::MediaStreaming => "media-streaming",
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Marketplace => "Marketplace",
            Category::Saas => "Productivity / SaaS",
            Category::Social => "Social & Community",
            Category::SubscriptionContent => "Subscription Content",
            Category::LiveStreaming => "Live Streaming",
            Category::AiTool => "AI-Powered Tool",
            Category::Other => "General App",
            Category::SubscriptionPaywall => "Subscription Paywall",
            Category::WebStore => "Web Store",
            Category::Creator => "Creator Platform",
            Category::Booking => "Booking & Scheduling",
            Category::SocialFeed => "Social Feed",
            Category::Messaging => "Messaging",
            Category::Productivity => "Productivity",
            Category::Game => "Game",
            Category::MediaStreaming => "Media Streaming",
        }
    }

    /// Decorative icon shown next to the label. Presentation only.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Marketplace => "🛒",
            Category::Saas => "⚡",
            Category::Social => "💬",
            Category::SubscriptionContent => "📱",
            Category::LiveStreaming => "📺",
            Category::AiTool => "🤖",
            Category::Other => "📱",
            Category::SubscriptionPaywall => "📱",
            Category::WebStore => "🛒",
            Category::Creator => "🎨",
            Category::Booking => "📅",
            Category::SocialFeed => "💬",
            Category::Messaging => "💬",
            Category::Productivity => "⚡",
            Category::Game => "🎮",
            Category::MediaStreaming => "📺",
        }
    }

    /// Whether this tag belongs to the scoring set.
    pub fn is_scoring(&self) -> bool {
        Self::SCORING.contains(self)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
