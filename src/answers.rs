//! User responses collected by the question flow.
//!
//! The surrounding UI records one [`UserResponse`] per answered question, in
//! order. Responses are append-only except for the explicit edit action,
//! which replaces the payload fields of an existing entry in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which kind of question a response answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Thinking,
    Decision,
}

/// One answered question.
///
/// For decision questions `response` is the chosen option id; for thinking
/// questions it is the free text. `response_text` is always human-readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub question_id: String,
    pub kind: QuestionKind,
    pub response: String,
    pub response_text: String,
    pub timestamp: DateTime<Utc>,
}

/// Ordered collection of responses for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSheet {
    responses: Vec<UserResponse>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a response.
    pub fn record(&mut self, response: UserResponse) {
        self.responses.push(response);
    }

    /// Convenience: record a decision answer stamped now.
    pub fn record_decision(
        &mut self,
        question_id: impl Into<String>,
        option_id: impl Into<String>,
        option_title: impl Into<String>,
    ) {
        self.record(UserResponse {
            question_id: question_id.into(),
            kind: QuestionKind::Decision,
            response: option_id.into(),
            response_text: option_title.into(),
            timestamp: Utc::now(),
        });
    }

    /// Replace the payload of the first response to `question_id`.
    ///
    /// Position and timestamp are preserved. Returns false when no response
    /// to that question exists.
    pub fn edit(
        &mut self,
        question_id: &str,
        response: impl Into<String>,
        response_text: impl Into<String>,
    ) -> bool {
        match self.responses.iter_mut().find(|r| r.question_id == question_id) {
            Some(entry) => {
                entry.response = response.into();
                entry.response_text = response_text.into();
                true
            }
            None => false,
        }
    }

    /// Responses in the order they were recorded.
    pub fn responses(&self) -> &[UserResponse] {
        &self.responses
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// The question-id → answer-id map consumed by the report synthesizer.
    ///
    /// Later responses to the same question win, matching the edit semantics.
    pub fn answer_map(&self) -> BTreeMap<String, String> {
        self.responses
            .iter()
            .map(|r| (r.question_id.clone(), r.response.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(question_id: &str, answer: &str) -> UserResponse {
        UserResponse {
            question_id: question_id.to_string(),
            kind: QuestionKind::Decision,
            response: answer.to_string(),
            response_text: answer.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_record_preserves_order() {
        let mut sheet = AnswerSheet::new();
        sheet.record(response("uni-4", "existing-audience"));
        sheet.record(response("uni-3", "core-action"));
        let ids: Vec<&str> = sheet.responses().iter().map(|r| r.question_id.as_str()).collect();
        assert_eq!(ids, ["uni-4", "uni-3"]);
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut sheet = AnswerSheet::new();
        sheet.record(response("uni-4", "no-plan"));
        sheet.record(response("uni-3", "core-action"));

        assert!(sheet.edit("uni-4", "existing-audience", "I have an audience"));
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.responses()[0].question_id, "uni-4");
        assert_eq!(sheet.responses()[0].response, "existing-audience");
        assert_eq!(sheet.responses()[0].response_text, "I have an audience");
    }

    #[test]
    fn test_edit_unknown_question_is_noop() {
        let mut sheet = AnswerSheet::new();
        assert!(!sheet.edit("mp-1", "existing-sellers", "Existing sellers"));
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_answer_map() {
        let mut sheet = AnswerSheet::new();
        sheet.record(response("uni-4", "existing-audience"));
        sheet.record_decision("dec-streaming-backbone", "managed-streaming", "Option A");

        let map = sheet.answer_map();
        assert_eq!(map.get("uni-4").unwrap(), "existing-audience");
        assert_eq!(map.get("dec-streaming-backbone").unwrap(), "managed-streaming");
    }
}
