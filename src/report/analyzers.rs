//! Rule tables behind the final report.
//!
//! Each analyzer is a pure function of `(category, hybrid flag, answers)`.
//! The rules are data: a rule fires when the session's answer to a question
//! is one of the listed ids and the rule's scope matches the primary
//! category. Unknown answer ids never fire anything; absence of signal falls
//! through to a fixed generic message.

use crate::category::Category;
use crate::classifier::ClassificationResult;
use std::collections::BTreeMap;

pub type AnswerMap = BTreeMap<String, String>;

/// One `(scope, question, accepted answers) -> message` rule.
struct AnswerRule {
    /// `None` applies to every category.
    scope: Option<Category>,
    question: &'static str,
    answers: &'static [&'static str],
    message: &'static str,
}

impl AnswerRule {
    fn fires(&self, category: Category, answers: &AnswerMap) -> bool {
        if let Some(scope) = self.scope {
            if scope != category {
                return false;
            }
        }
        answers
            .get(self.question)
            .is_some_and(|a| self.answers.contains(&a.as_str()))
    }
}

const STRENGTH_RULES: &[AnswerRule] = &[
    AnswerRule {
        scope: None,
        question: "uni-4",
        answers: &["existing-audience"],
        message: "You have existing distribution — that's rare and valuable.",
    },
    AnswerRule {
        scope: None,
        question: "uni-3",
        answers: &["core-action"],
        message: "You've identified a clear core action — good sign you understand the value prop.",
    },
    AnswerRule {
        scope: Some(Category::Marketplace),
        question: "mp-1",
        answers: &["existing-sellers", "manual-recruit"],
        message: "You have a plan for supply — most marketplace founders don't.",
    },
    AnswerRule {
        scope: Some(Category::Marketplace),
        question: "mp-2",
        answers: &["niche-buyers"],
        message: "Niche focus can work if the niche is real and reachable.",
    },
    AnswerRule {
        scope: Some(Category::Saas),
        question: "saas-1",
        answers: &["daily-multiple", "daily"],
        message: "Daily usage frequency is a strong retention signal.",
    },
    AnswerRule {
        scope: Some(Category::Saas),
        question: "saas-4",
        answers: &["critical"],
        message: "Mission-critical tools have pricing power.",
    },
    AnswerRule {
        scope: Some(Category::Social),
        question: "social-2",
        answers: &["network-effect"],
        message: "Network effects are real — if you can get past the cold start.",
    },
    AnswerRule {
        scope: Some(Category::Social),
        question: "social-3",
        answers: &["invite-only"],
        message: "Invite-only can create quality and urgency.",
    },
    AnswerRule {
        scope: Some(Category::SubscriptionContent),
        question: "sub-3",
        answers: &["existing-audience"],
        message: "Existing audience means you can validate demand before building.",
    },
    AnswerRule {
        scope: Some(Category::SubscriptionContent),
        question: "sub-4",
        answers: &["reference"],
        message: "Reference content retains better than consumable content.",
    },
    AnswerRule {
        scope: Some(Category::AiTool),
        question: "ai-4",
        answers: &["workflow", "custom-model"],
        message: "Workflow integration or custom data creates a real moat.",
    },
    AnswerRule {
        scope: Some(Category::AiTool),
        question: "ai-1",
        answers: &["low-stakes"],
        message: "Low-stakes AI usage means you can ship imperfect and iterate.",
    },
];

const NO_STRENGTH: &str = "No clear standout advantages yet. That doesn't mean it won't work — \
                           just means you need to find your edge through execution.";

const WEAKNESS_RULES: &[AnswerRule] = &[
    AnswerRule {
        scope: None,
        question: "uni-4",
        answers: &["social-hope", "no-plan"],
        message: "No distribution strategy. This kills more startups than bad products.",
    },
    AnswerRule {
        scope: None,
        question: "uni-3",
        answers: &["everything"],
        message: "Scope creep warning — shipping everything means shipping nothing.",
    },
    AnswerRule {
        scope: Some(Category::Marketplace),
        question: "mp-1",
        answers: &["no-plan"],
        message: "No supply strategy is a fatal flaw for marketplaces.",
    },
    AnswerRule {
        scope: Some(Category::Marketplace),
        question: "mp-3",
        answers: &["no-plan"],
        message: "Ignoring dispute resolution will burn you fast.",
    },
    AnswerRule {
        scope: Some(Category::Saas),
        question: "saas-1",
        answers: &["sporadic"],
        message: "Sporadic usage = high churn. Users forget apps they don't use regularly.",
    },
    AnswerRule {
        scope: Some(Category::Saas),
        question: "saas-3",
        answers: &["overall-better"],
        message: "\"Better overall\" rarely wins. Switching costs are real.",
    },
    AnswerRule {
        scope: Some(Category::Social),
        question: "social-2",
        answers: &["hoping"],
        message: "Hope is not a retention strategy. You need a concrete answer.",
    },
    AnswerRule {
        scope: Some(Category::Social),
        question: "social-3",
        answers: &["no-plan"],
        message: "No moderation plan will kill your community fast.",
    },
    AnswerRule {
        scope: Some(Category::SubscriptionContent),
        question: "sub-2",
        answers: &["hoping"],
        message: "High churn is the #1 killer of subscription content.",
    },
    AnswerRule {
        scope: Some(Category::SubscriptionContent),
        question: "sub-3",
        answers: &["unsure"],
        message: "No discovery strategy means no subscribers.",
    },
    AnswerRule {
        scope: Some(Category::AiTool),
        question: "ai-1",
        answers: &["high-stakes", "no-plan"],
        message: "High-stakes AI needs guardrails you probably don't have.",
    },
    AnswerRule {
        scope: Some(Category::AiTool),
        question: "ai-4",
        answers: &["no-moat"],
        message: "If ChatGPT works, you're competing with a free product.",
    },
];

const NO_WEAKNESS: &str = "You've thought through the obvious pitfalls. The real challenges will \
                           be execution and things you can't predict.";

const WEDGE_RULES: &[AnswerRule] = &[
    AnswerRule {
        scope: None,
        question: "uni-4",
        answers: &["existing-audience"],
        message: "existing audience/distribution",
    },
    AnswerRule {
        scope: Some(Category::Marketplace),
        question: "mp-1",
        answers: &["existing-sellers"],
        message: "pre-existing supply relationships",
    },
    AnswerRule {
        scope: Some(Category::Marketplace),
        question: "mp-2",
        answers: &["niche-buyers"],
        message: "access to a specific buyer segment",
    },
    AnswerRule {
        scope: Some(Category::Saas),
        question: "saas-3",
        answers: &["pain-point"],
        message: "solving a specific, acute pain point",
    },
    AnswerRule {
        scope: Some(Category::Saas),
        question: "saas-4",
        answers: &["critical"],
        message: "mission-critical workflow integration",
    },
    AnswerRule {
        scope: Some(Category::AiTool),
        question: "ai-4",
        answers: &["custom-model"],
        message: "proprietary training data",
    },
    AnswerRule {
        scope: Some(Category::AiTool),
        question: "ai-4",
        answers: &["workflow"],
        message: "deep workflow integration",
    },
    AnswerRule {
        scope: Some(Category::SubscriptionContent),
        question: "sub-3",
        answers: &["existing-audience"],
        message: "built-in audience",
    },
];

const NO_WEDGE: &str = "No clear wedge identified yet. \"Better UX\" isn't a wedge. \"I'll work \
                        harder\" isn't a wedge. You need an unfair advantage — distribution, \
                        data, relationships, or timing.";

fn fired_messages(
    rules: &[AnswerRule],
    category: Category,
    answers: &AnswerMap,
) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|r| r.fires(category, answers))
        .map(|r| r.message)
        .collect()
}

/// Up to two positive signals joined into one statement.
pub fn strengths(classification: &ClassificationResult, answers: &AnswerMap) -> String {
    let fired = fired_messages(STRENGTH_RULES, classification.primary_category, answers);
    if fired.is_empty() {
        NO_STRENGTH.to_string()
    } else {
        fired[..fired.len().min(2)].join(" ")
    }
}

/// Up to two concerns joined into one statement.
pub fn weaknesses(classification: &ClassificationResult, answers: &AnswerMap) -> String {
    let fired = fired_messages(WEAKNESS_RULES, classification.primary_category, answers);
    if fired.is_empty() {
        NO_WEAKNESS.to_string()
    } else {
        fired[..fired.len().min(2)].join(" ")
    }
}

/// The claimed unfair advantage, if the answers support one.
pub fn wedge(classification: &ClassificationResult, answers: &AnswerMap) -> (String, bool) {
    let signals = fired_messages(WEDGE_RULES, classification.primary_category, answers);
    if signals.is_empty() {
        (NO_WEDGE.to_string(), false)
    } else {
        (
            format!("Your potential wedge: {}. Lean into this hard.", signals.join(" + ")),
            true,
        )
    }
}

fn category_mvp_items(category: Category) -> &'static [&'static str] {
    match category {
        Category::Marketplace => &[
            "Manual matching (no algorithm)",
            "Stripe payment link (not custom checkout)",
            "Email-based dispute handling",
        ],
        Category::Saas => &[
            "Single user type (no teams/roles)",
            "Core functionality only (no integrations)",
            "Basic auth (email/password)",
        ],
        Category::Social => &[
            "Invite-only launch (quality control)",
            "Manual moderation",
            "Core content type only",
        ],
        Category::SubscriptionContent => &[
            "One pricing tier",
            "Gumroad/Stripe billing (not custom)",
            "Email for community (not in-app)",
        ],
        Category::LiveStreaming => &[
            "Live only (no recording/replay)",
            "Single streaming provider",
            "Chat via Discord/external",
        ],
        Category::AiTool => &[
            "One AI capability, done well",
            "Clear error states and limitations",
            "Human fallback for edge cases",
        ],
        _ => &[
            "Minimum viable feature set",
            "Off-the-shelf components where possible",
        ],
    }
}

/// The MVP checklist: universal items, per-category items, then a cut item
/// when the founder chose speed. Capped at six entries.
pub fn mvp_scope(classification: &ClassificationResult, answers: &AnswerMap) -> Vec<String> {
    let mut items = vec!["Core user flow (one path, no branching)".to_string()];

    if answers.get("uni-3").is_some_and(|a| a == "core-action") {
        items.push("Single primary action, perfected".to_string());
    }

    for item in category_mvp_items(classification.primary_category) {
        items.push(item.to_string());
    }

    if answers.get("uni-2").is_some_and(|a| a == "speed") {
        items.push("Cut anything not essential to first 10 users".to_string());
    }

    items.truncate(6);
    items
}

/// The three biggest risks, universal signals first.
pub fn top_risks(classification: &ClassificationResult, answers: &AnswerMap) -> Vec<String> {
    let mut risks: Vec<String> = Vec::new();
    let answered = |q: &str, ids: &[&str]| answers.get(q).is_some_and(|a| ids.contains(&a.as_str()));

    if answered("uni-4", &["no-plan", "social-hope"]) {
        risks.push("No distribution — you can build it, but will anyone find it?".to_string());
    }
    if answered("uni-3", &["everything", "unsure"]) {
        risks.push(
            "Unclear scope — you'll spend 3 months building what should take 3 weeks.".to_string(),
        );
    }
    if classification.is_hybrid {
        risks.push("Hybrid model complexity — trying to be two things at once.".to_string());
    }

    match classification.primary_category {
        Category::Marketplace => {
            risks.push("Cold start death spiral — no supply, no demand, no supply.".to_string());
            if answered("mp-4", &["no-plan"]) {
                risks.push("Disintermediation — users routing around you.".to_string());
            }
        }
        Category::Saas => {
            if answered("saas-1", &["weekly", "sporadic"]) {
                risks.push("Low usage frequency — they'll forget you exist.".to_string());
            }
            risks.push("Feature creep from user requests — stay focused.".to_string());
        }
        Category::Social => {
            risks.push("Empty room problem — no one talks in an empty room.".to_string());
            risks.push("Moderation burden grows faster than you expect.".to_string());
        }
        Category::SubscriptionContent => {
            risks.push("Month 2 churn — the excitement cliff is real.".to_string());
            risks.push("Content creation burnout if you're the creator.".to_string());
        }
        Category::LiveStreaming => {
            risks.push("Infrastructure costs at scale — budget carefully.".to_string());
            risks.push("Technical complexity around real-time systems.".to_string());
        }
        Category::AiTool => {
            risks.push("User trust erosion when AI makes mistakes.".to_string());
            risks.push("API cost unpredictability at scale.".to_string());
        }
        _ => {
            risks.push("Unclear market fit — what problem does this solve?".to_string());
        }
    }

    risks.truncate(3);
    risks
}

/// Fixed closing item appended to every decision list, dropped only when
/// three higher-priority items already fill the cap.
pub const LAUNCH_DEADLINE: &str = "Set a hard launch deadline — 4 weeks max for MVP.";

/// What to decide next, capped at three entries. The cap is applied after the
/// whole ordered list is assembled so earlier-pushed items always win.
pub fn next_decisions(classification: &ClassificationResult, answers: &AnswerMap) -> Vec<String> {
    let mut decisions: Vec<String> = Vec::new();

    let no_distribution = answers
        .get("uni-4")
        .is_some_and(|a| a == "no-plan" || a == "social-hope");
    if no_distribution {
        decisions.push("Find 10 potential users and validate demand before building.".to_string());
    } else {
        decisions.push("Talk to 5 potential users this week — validate assumptions.".to_string());
    }

    let category_pair: [&str; 2] = match classification.primary_category {
        Category::Marketplace => [
            "Pick supply or demand side to start with — you can't do both.",
            "Define your take rate and how you'll handle payments.",
        ],
        Category::Saas => [
            "Define the single metric that proves value to users.",
            "Decide: freemium, free trial, or paid-only?",
        ],
        Category::Social => [
            "Plan your first 50 users — who are they specifically?",
            "Write your moderation policy before launch.",
        ],
        Category::SubscriptionContent => [
            "Validate price point with actual pre-sales or waitlist.",
            "Plan content cadence you can sustain for 6 months.",
        ],
        Category::LiveStreaming => [
            "Get cost estimates from at least 2 streaming providers.",
            "Decide on MVP: live-only or replays essential?",
        ],
        Category::AiTool => [
            "Define acceptable error rate and how you'll communicate limitations.",
            "Estimate API costs at 100, 1000, and 10000 users.",
        ],
        _ => [
            "Write a one-sentence pitch and test it on 10 strangers.",
            "List everything you think you need, then cut 50%.",
        ],
    };
    decisions.extend(category_pair.iter().map(|s| s.to_string()));

    decisions.push(LAUNCH_DEADLINE.to_string());

    decisions.truncate(3);
    decisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_idea;

    fn answers(pairs: &[(&str, &str)]) -> AnswerMap {
        pairs
            .iter()
            .map(|(q, a)| (q.to_string(), a.to_string()))
            .collect()
    }

    #[test]
    fn test_strengths_caps_at_two_signals() {
        let classification = classify_idea("a marketplace for sellers and buyers");
        let answers = answers(&[
            ("uni-4", "existing-audience"),
            ("uni-3", "core-action"),
            ("mp-1", "existing-sellers"),
        ]);
        let text = strengths(&classification, &answers);
        assert!(text.starts_with("You have existing distribution"));
        assert!(text.contains("clear core action"));
        assert!(!text.contains("plan for supply"));
    }

    #[test]
    fn test_strengths_fallback() {
        let classification = classify_idea("a marketplace for sellers");
        let text = strengths(&classification, &answers(&[("uni-4", "something-unknown")]));
        assert!(text.starts_with("No clear standout advantages yet."));
    }

    #[test]
    fn test_category_rules_require_matching_category() {
        // saas answers must not fire for a marketplace idea.
        let classification = classify_idea("a marketplace for sellers and buyers");
        let answers = answers(&[("saas-1", "daily")]);
        assert!(strengths(&classification, &answers).starts_with("No clear standout"));
    }

    #[test]
    fn test_weaknesses() {
        let classification = classify_idea("a marketplace for sellers and buyers");
        let answers = answers(&[("uni-4", "no-plan"), ("mp-1", "no-plan"), ("mp-3", "no-plan")]);
        let text = weaknesses(&classification, &answers);
        assert!(text.starts_with("No distribution strategy."));
        assert!(text.contains("No supply strategy is a fatal flaw"));
        // Third match trimmed by the two-signal cap.
        assert!(!text.contains("dispute resolution"));
    }

    #[test]
    fn test_wedge_joins_signals() {
        let classification = classify_idea("a marketplace for sellers and buyers");
        let answers = answers(&[("uni-4", "existing-audience"), ("mp-1", "existing-sellers")]);
        let (text, has_wedge) = wedge(&classification, &answers);
        assert!(has_wedge);
        assert_eq!(
            text,
            "Your potential wedge: existing audience/distribution + pre-existing supply \
             relationships. Lean into this hard."
        );
    }

    #[test]
    fn test_no_wedge_message() {
        let classification = classify_idea("a marketplace for sellers");
        let (text, has_wedge) = wedge(&classification, &AnswerMap::new());
        assert!(!has_wedge);
        assert!(text.starts_with("No clear wedge identified yet."));
    }

    #[test]
    fn test_mvp_scope_cap_and_order() {
        let classification = classify_idea("a marketplace for sellers and buyers");
        let answers = answers(&[("uni-3", "core-action"), ("uni-2", "speed")]);
        let items = mvp_scope(&classification, &answers);
        assert_eq!(items.len(), 6);
        assert_eq!(items[0], "Core user flow (one path, no branching)");
        assert_eq!(items[1], "Single primary action, perfected");
        assert_eq!(items[2], "Manual matching (no algorithm)");
        // The speed item is sixth; nothing was dropped here.
        assert_eq!(items[5], "Cut anything not essential to first 10 users");
    }

    #[test]
    fn test_mvp_scope_without_signals() {
        let classification = classify_idea("a thing");
        let items = mvp_scope(&classification, &AnswerMap::new());
        assert_eq!(
            items,
            vec![
                "Core user flow (one path, no branching)",
                "Minimum viable feature set",
                "Off-the-shelf components where possible",
            ]
        );
    }

    #[test]
    fn test_top_risks_universal_signals_outrank_category() {
        let classification = classify_idea("a marketplace for sellers and buyers");
        let answers = answers(&[("uni-4", "no-plan"), ("uni-3", "unsure"), ("mp-4", "no-plan")]);
        let risks = top_risks(&classification, &answers);
        assert_eq!(risks.len(), 3);
        assert!(risks[0].starts_with("No distribution"));
        assert!(risks[1].starts_with("Unclear scope"));
        assert!(risks[2].starts_with("Cold start death spiral"));
    }

    #[test]
    fn test_top_risks_hybrid_entry() {
        let classification = classify_idea("a marketplace with a payment dashboard tool");
        assert!(classification.is_hybrid);
        let risks = top_risks(&classification, &AnswerMap::new());
        assert!(risks[0].starts_with("Hybrid model complexity"));
    }

    #[test]
    fn test_next_decisions_deadline_dropped_when_full() {
        // One validation item plus a category pair always fills the cap, so
        // the deadline item is trimmed.
        let classification = classify_idea("a marketplace for sellers and buyers");
        let decisions = next_decisions(&classification, &AnswerMap::new());
        assert_eq!(decisions.len(), 3);
        assert!(decisions[0].starts_with("Talk to 5 potential users"));
        assert!(decisions[1].starts_with("Pick supply or demand side"));
        assert!(!decisions.contains(&LAUNCH_DEADLINE.to_string()));
    }

    #[test]
    fn test_next_decisions_validation_item_depends_on_distribution_answer() {
        let classification = classify_idea("a thing");
        let with_plan = next_decisions(&classification, &AnswerMap::new());
        assert!(with_plan[0].starts_with("Talk to 5 potential users"));

        let without = next_decisions(&classification, &answers(&[("uni-4", "social-hope")]));
        assert!(without[0].starts_with("Find 10 potential users"));
    }
}
