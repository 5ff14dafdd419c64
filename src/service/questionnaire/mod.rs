pub mod builtin;

use std::{ops::Deref, sync::Arc};

use serde::Serialize;
use tracing::warn;

use crate::{
    base::types::{AnswerSet, AnswerValue, Res},
    triage::category::SymptomCategory,
};

// Types.

/// One selectable answer to a question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerOption {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub value: AnswerValue,
}

/// A single question with its enumerated options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    /// Unique across all categories; prefixed by the category id.
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
}

impl Question {
    /// Finds the option matching user input, either by option id or by rendered value.
    pub fn resolve(&self, input: &str) -> Option<&AnswerOption> {
        let input = input.trim();

        self.options
            .iter()
            .find(|option| option.id == input)
            .or_else(|| self.options.iter().find(|option| option.value.to_string() == input))
    }

    /// True when `value` is one of this question's option values.
    pub fn accepts(&self, value: &AnswerValue) -> bool {
        self.options.iter().any(|option| &option.value == value)
    }
}

// Traits.

/// Generic questionnaire provider trait that providers must implement.
///
/// Providers supply the ordered questions for each symptom category. The
/// provided methods validate raw input against those questions, so answers
/// reaching the evaluator only carry legal values.
pub trait GenericQuestionnaire: Send + Sync + 'static {
    /// The categories offered to the user, in display order.
    fn symptoms(&self) -> &[SymptomCategory];

    /// The ordered questions for a category; empty for unknown categories.
    fn questions_for(&self, category: &str) -> &[Question];

    /// Resolves raw input for one question into a legal answer value.
    fn parse_answer(&self, category: &str, question_id: &str, input: &str) -> Res<AnswerValue> {
        let question = self
            .questions_for(category)
            .iter()
            .find(|question| question.id == question_id)
            .ok_or_else(|| anyhow::anyhow!("Unknown question `{question_id}` for category `{category}`."))?;

        let option = question.resolve(input).ok_or_else(|| {
            let choices = question.options.iter().map(|option| option.id).collect::<Vec<_>>().join(", ");
            anyhow::anyhow!("Invalid answer `{input}` for `{question_id}`; expected one of: {choices}.")
        })?;

        Ok(option.value.clone())
    }

    /// Keeps only answers to known questions whose values are legal options.
    fn validate(&self, category: &str, answers: &AnswerSet) -> AnswerSet {
        let questions = self.questions_for(category);

        answers
            .iter()
            .filter(|(id, value)| {
                let legal = questions.iter().any(|question| question.id == *id && question.accepts(value));

                if !legal {
                    warn!("Dropping answer `{}` = `{}` for category `{}`.", id, value, category);
                }

                legal
            })
            .map(|(id, value)| (id.to_string(), value.clone()))
            .collect()
    }
}

// Structs.

/// Questionnaire client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct QuestionnaireClient {
    inner: Arc<dyn GenericQuestionnaire>,
}

impl Deref for QuestionnaireClient {
    type Target = dyn GenericQuestionnaire;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl QuestionnaireClient {
    pub fn new(inner: Arc<dyn GenericQuestionnaire>) -> Self {
        Self { inner }
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_questions() {
        let questionnaire = QuestionnaireClient::builtin();

        assert_eq!(questionnaire.symptoms(), SymptomCategory::ALL.as_slice());

        for category in questionnaire.symptoms() {
            let questions = questionnaire.questions_for(category.id());

            assert!(!questions.is_empty(), "{category} has no questions");

            for question in questions {
                assert!(question.id.starts_with(category.id()), "{} is not prefixed by {}", question.id, category);
                assert!(question.options.len() >= 2, "{} needs at least two options", question.id);
            }
        }
    }

    #[test]
    fn test_unknown_category_has_no_questions() {
        assert!(QuestionnaireClient::builtin().questions_for("__bogus__").is_empty());
    }

    #[test]
    fn test_parse_answer_by_option_id_and_value() {
        let questionnaire = QuestionnaireClient::builtin();

        let by_id = questionnaire.parse_answer("chest-pain", "chest-pain-breathing", "yes").unwrap();
        let by_value = questionnaire.parse_answer("chest-pain", "chest-pain-breathing", "true").unwrap();

        assert_eq!(by_id, AnswerValue::Flag(true));
        assert_eq!(by_value, AnswerValue::Flag(true));

        let text = questionnaire.parse_answer("fever", "fever-temp", " high ").unwrap();
        assert_eq!(text, AnswerValue::text("high"));
    }

    #[test]
    fn test_parse_answer_rejects_unknown_input() {
        let questionnaire = QuestionnaireClient::builtin();

        let err = questionnaire.parse_answer("fever", "fever-temp", "scorching").unwrap_err();
        assert!(err.to_string().contains("expected one of"));

        assert!(questionnaire.parse_answer("fever", "cough-type", "dry").is_err());
    }

    #[test]
    fn test_validate_drops_unknown_keys_and_values() {
        let questionnaire = QuestionnaireClient::builtin();

        let mut answers = AnswerSet::new();
        answers.insert("rash-spreading", true);
        answers.insert("rash-other-symptoms", "sneezing");
        answers.insert("rash-itching", true);
        answers.insert("fever-temp", "high");

        let validated = questionnaire.validate("rash", &answers);

        assert_eq!(validated.len(), 1);
        assert!(validated.is_set("rash-spreading"));
    }
}
