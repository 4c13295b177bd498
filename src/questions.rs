//! Static question configuration for the onboarding flow.
//!
//! Two kinds of questions: "thinking" questions are open-ended and never
//! block progress; "decision" questions present tradeoff options with real
//! consequences. Questions are configuration, not user data: built once,
//! read-only afterwards.

use crate::category::Category;
use crate::classifier::ClassificationResult;
use serde::{Deserialize, Serialize};

/// Thematic tag used for display grouping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pillar {
    Positioning,
    Differentiation,
    Customer,
    Distribution,
    Retention,
    Infrastructure,
    Monetization,
    Scope,
    Launch,
    Risk,
}

impl Pillar {
    /// Display label for the pillar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Positioning => "Positioning Strategy",
            Self::Differentiation => "Core Differentiation",
            Self::Customer => "Target Customer",
            Self::Distribution => "Go-to-Market",
            Self::Retention => "Retention Loop",
            Self::Infrastructure => "Tech Stack & Infra",
            Self::Monetization => "Business Model",
            Self::Scope => "MVP Scope",
            Self::Launch => "Launch Strategy",
            Self::Risk => "Risk Analysis",
        }
    }
}

/// Which audience a question targets: one category or everyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionScope {
    #[serde(rename = "universal")]
    Universal,
    #[serde(untagged)]
    Category(Category),
}

/// Implementation difficulty of one decision option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OptionComplexity {
    Easy,
    Medium,
    Hard,
}

/// A short framing device shown before the options of a decision question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentalModel {
    pub title: String,
    pub content: String,
}

/// One side of a tradeoff decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionOption {
    pub id: String,
    pub title: String,
    pub why_users_care: String,
    pub business_impact: String,
    pub cost_detail: String,
    pub complexity: OptionComplexity,
    pub who_deals_with_pain: String,
    pub upsides: Vec<String>,
    pub tradeoffs: Vec<String>,
    #[serde(default)]
    pub recommended: bool,
}

/// An open-ended question that encourages free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThinkingQuestion {
    pub id: String,
    pub category: QuestionScope,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    pub pillar: Pillar,
}

/// A tradeoff question whose options carry real consequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionQuestion {
    pub id: String,
    pub category: QuestionScope,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mental_model: Option<MentalModel>,
    pub options: Vec<DecisionOption>,
    pub pillar: Pillar,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reality_check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub why_matters: Option<String>,
}

/// Either kind of question, tagged on the wire by `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Question {
    Thinking(ThinkingQuestion),
    Decision(DecisionQuestion),
}

impl Question {
    pub fn id(&self) -> &str {
        match self {
            Self::Thinking(q) => &q.id,
            Self::Decision(q) => &q.id,
        }
    }

    pub fn pillar(&self) -> Pillar {
        match self {
            Self::Thinking(q) => q.pillar,
            Self::Decision(q) => q.pillar,
        }
    }
}

fn streaming_backbone_question() -> Question {
    Question::Decision(DecisionQuestion {
        id: "dec-streaming-backbone".to_string(),
        category: QuestionScope::Category(Category::LiveStreaming),
        pillar: Pillar::Infrastructure,
        prompt: "Big Decision — Managed Streaming vs Self-Hosted Streaming".to_string(),
        subtext: Some(
            "Do you want to use a managed live-video service (like Mux), or run live streaming \
             yourself using open technologies (like WebRTC)?\n\nThis decision affects reliability, \
             time to launch, monthly costs, and whether you'll need specialized engineers later.\n\
             It's one of the hardest decisions to reverse once users depend on the app."
                .to_string(),
        ),
        mental_model: Some(MentalModel {
            title: "Before you answer, here's the mental model".to_string(),
            content: "Using a managed streaming service (like Mux) is like **renting a house**.\n\
                      • You pay monthly.\n• Most things \"just work.\"\n• When plumbing breaks, \
                      it's not your job to fix the pipes.\n\nRunning live streaming yourself is \
                      like **building your own house**.\n• You might save money long-term.\n\
                      • But you're responsible for wiring, plumbing, inspections, and repairs.\n\
                      • If something breaks at 2am, it's your problem.\n\nNeither option is \
                      \"better.\" They optimize for different kinds of pain: money vs responsibility."
                .to_string(),
        }),
        options: vec![
            DecisionOption {
                id: "managed-streaming".to_string(),
                title: "Option A: Managed streaming (e.g. Mux)".to_string(),
                why_users_care: "Streams are more reliable across devices and networks. Fewer \
                                 freezes, fewer failed streams during important moments."
                    .to_string(),
                business_impact: "You can launch faster and focus on creators, content, and \
                                  growth instead of debugging live video issues."
                    .to_string(),
                cost_detail: "You pay based on how much video people watch.\n\n**Example for \
                              ~10,000 monthly viewers:**\n• ~10 minutes watched per viewer per \
                              day\n• ≈ 3 million minutes watched per month\n\n**Typical monthly \
                              range:**\n$500–$2,000+ / month, depending on:\n• video quality \
                              (720p vs 1080p)\n• peak concurrent viewers\n• recording & storage\n\
                              \n(These are rough estimates, not quotes. Costs scale with usage.)"
                    .to_string(),
                complexity: OptionComplexity::Easy,
                who_deals_with_pain: "Mostly money. Much less day-to-day technical stress."
                    .to_string(),
                upsides: vec![
                    "Fastest path to a stable product".to_string(),
                    "Fewer catastrophic live failures".to_string(),
                    "No deep streaming expertise required early".to_string(),
                ],
                tradeoffs: vec![
                    "Monthly costs grow as usage grows".to_string(),
                    "Less low-level control".to_string(),
                ],
                recommended: true,
            },
            DecisionOption {
                id: "self-hosted-streaming".to_string(),
                title: "Option B: Self-hosted streaming (WebRTC / open-source)".to_string(),
                why_users_care: "Potentially lower cost per minute at scale if everything runs \
                                 smoothly."
                    .to_string(),
                business_impact: "Lower third-party fees, but significantly more responsibility \
                                  and operational complexity."
                    .to_string(),
                cost_detail: "**There are two real costs: infrastructure and people.**\n\n\
                              **Infrastructure (for ~10,000 users):**\n• Servers for video \
                              routing\n• Heavy bandwidth usage\n• Monitoring, backups, redundancy\n\
                              **Typical range:** $300–$1,200 / month in cloud + bandwidth\n\n\
                              **People / time cost (often underestimated):**\n• Initial setup: \
                              weeks to months\n• Ongoing tuning and firefighting\n• At scale, \
                              most teams need 1 experienced real-time/video engineer\n**Rough \
                              equivalent cost:** $8k–$15k/month"
                    .to_string(),
                complexity: OptionComplexity::Hard,
                who_deals_with_pain: "You at first.\nLater: specialized streaming engineers, not \
                                      just general developers."
                    .to_string(),
                upsides: vec![
                    "Lower per-minute costs if you reach scale".to_string(),
                    "Full control over streaming behavior".to_string(),
                ],
                tradeoffs: vec![
                    "Slower to launch".to_string(),
                    "More fragile under real-world conditions".to_string(),
                    "Debugging live failures is time-consuming and stressful".to_string(),
                ],
                recommended: false,
            },
        ],
        reality_check: Some(
            "Most teams that start self-hosted eventually:\n• hire streaming expertise, or\n\
             • move to a managed service after stability issues\n\nSwitching later usually means \
             reworking large parts of the system, not flipping a switch."
                .to_string(),
        ),
        why_matters: Some(
            "This single decision often determines:\n• whether you ship in weeks or months\n\
             • whether costs show up as invoices or burnout\n• whether you can run the product \
             without a full engineering team"
                .to_string(),
        ),
    })
}

fn switching_question() -> Question {
    Question::Thinking(ThinkingQuestion {
        id: "think-switching".to_string(),
        category: QuestionScope::Universal,
        pillar: Pillar::Positioning,
        prompt: "The Switching Question".to_string(),
        subtext: Some(
            "Assume a competitor already exists and works fine. Why would someone switch to your \
             app?\n\n\"Better UI\" is not enough.\nIf switching requires effort, there must be a \
             clear, painful reason.\n\nWhat I'm actually testing:\n• Do you have a real wedge?\n\
             • Or is this just a nicer version of something that already exists?"
                .to_string(),
        ),
        suggestions: vec![
            "\"I'm 10× better at one specific thing, not everything.\"".to_string(),
            "\"I'm cheaper because I cut features on purpose.\"".to_string(),
            "\"I'm built for one niche competitors ignore.\"".to_string(),
            "\"I already have distribution (audience, community, school, org).\"".to_string(),
            "\"I enable something competitors literally can't do.\"".to_string(),
            "\"I don't have a good answer yet.\"".to_string(),
        ],
    })
}

/// The question sequence for a session.
///
/// The flow is currently a fixed two-question script; the classification and
/// cap are accepted for interface stability but do not influence the output.
pub fn build_question_flow(
    _classification: &ClassificationResult,
    _max_questions: usize,
) -> Vec<Question> {
    vec![streaming_backbone_question(), switching_question()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_idea;

    #[test]
    fn test_flow_is_fixed_regardless_of_classification() {
        let marketplace = classify_idea("a marketplace for sellers");
        let empty = classify_idea("");

        let a = build_question_flow(&marketplace, 10);
        let b = build_question_flow(&empty, 1);

        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 2);
        assert_eq!(a[0].id(), "dec-streaming-backbone");
        assert_eq!(a[1].id(), "think-switching");
        assert_eq!(b[0].id(), a[0].id());
    }

    #[test]
    fn test_decision_question_shape() {
        let flow = build_question_flow(&classify_idea(""), 10);
        let Question::Decision(q) = &flow[0] else {
            panic!("first question should be a decision");
        };
        assert_eq!(q.pillar, Pillar::Infrastructure);
        assert_eq!(q.options.len(), 2);
        assert!(q.options[0].recommended);
        assert!(!q.options[1].recommended);
        assert_eq!(q.options[0].complexity, OptionComplexity::Easy);
        assert_eq!(q.options[1].complexity, OptionComplexity::Hard);
        assert!(q.mental_model.is_some());
    }

    #[test]
    fn test_question_serde_tagging() {
        let flow = build_question_flow(&classify_idea(""), 10);
        let json = serde_json::to_value(&flow[1]).unwrap();
        assert_eq!(json["type"], "thinking");
        assert_eq!(json["category"], "universal");
        assert_eq!(json["pillar"], "positioning");

        let json = serde_json::to_value(&flow[0]).unwrap();
        assert_eq!(json["type"], "decision");
        assert_eq!(json["category"], "live-streaming");

        let back: Question = serde_json::from_value(json).unwrap();
        assert_eq!(back.id(), "dec-streaming-backbone");
    }

    #[test]
    fn test_pillar_labels() {
        assert_eq!(Pillar::Positioning.label(), "Positioning Strategy");
        assert_eq!(Pillar::Infrastructure.label(), "Tech Stack & Infra");
        assert_eq!(Pillar::Risk.label(), "Risk Analysis");
    }
}
