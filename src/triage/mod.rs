//! The triage evaluator.
//!
//! Evaluation is a two-stage OR reduction over static rule tables: if any
//! urgent rule matches the answers the outcome is `urgent`; otherwise if any
//! caution rule matches it is `caution`; otherwise it is `safe`. The text of
//! the result is then looked up by category and tier, and non-safe results
//! get a supportive message drawn at random.
//!
//! Nothing here performs I/O or fails. Unknown categories match no rules and
//! resolve to the default templates.

pub mod category;
pub mod outcomes;
pub mod rules;
pub mod support;

use rand::Rng;

use crate::base::types::{AnswerSet, Severity, TriageResult};

use self::{category::SymptomCategory, rules::Rule};

/// The tier an answer set escalates to, and the rule that put it there.
#[derive(Debug, Clone, Copy)]
pub struct Classification {
    pub category: Option<SymptomCategory>,
    pub severity: Severity,
    /// `None` when the outcome is `Safe`.
    pub rule: Option<&'static Rule>,
}

/// Classifies the answers without building any text.
pub fn classify(category: &str, answers: &AnswerSet) -> Classification {
    let category = SymptomCategory::from_id(category);

    let matched = category.and_then(|category| {
        rules::first_match(rules::urgent_rules(category), answers).or_else(|| rules::first_match(rules::caution_rules(category), answers))
    });

    Classification {
        category,
        severity: matched.map_or(Severity::Safe, |rule| rule.severity),
        rule: matched,
    }
}

/// Evaluates the answers for a category, drawing the supportive message from the thread-local RNG.
///
/// The supportive message is the only non-deterministic part of the result.
pub fn evaluate(category: &str, answers: &AnswerSet) -> TriageResult {
    evaluate_with_rng(category, answers, &mut rand::thread_rng())
}

/// Evaluates the answers for a category using the given RNG for the supportive message.
pub fn evaluate_with_rng<R>(category: &str, answers: &AnswerSet, rng: &mut R) -> TriageResult
where
    R: Rng + ?Sized,
{
    render(&classify(category, answers), answers, rng)
}

/// Builds the result for an existing classification.
///
/// `answers` must be the set the classification was made from; a few
/// explanations branch on individual answers.
pub fn render<R>(classification: &Classification, answers: &AnswerSet, rng: &mut R) -> TriageResult
where
    R: Rng + ?Sized,
{
    let outcome = outcomes::outcome_for(classification.category, classification.severity, answers);

    let supportive_message = match classification.severity {
        Severity::Safe => None,
        Severity::Caution | Severity::Urgent => Some(support::supportive_message(classification.category, rng).to_string()),
    };

    outcome.into_result(supportive_message)
}

// Tests.

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::base::messages::{MENTAL_HEALTH_MESSAGES, PHYSICAL_HEALTH_MESSAGES};

    fn answers<const N: usize>(pairs: [(&'static str, crate::base::types::AnswerValue); N]) -> AnswerSet {
        pairs.into_iter().collect()
    }

    fn text(value: &'static str) -> crate::base::types::AnswerValue {
        value.into()
    }

    fn flag(value: bool) -> crate::base::types::AnswerValue {
        value.into()
    }

    #[test]
    fn test_chest_pain_with_breathing_difficulty_is_urgent() {
        let result = evaluate(
            "chest-pain",
            &answers([
                ("chest-pain-breathing", flag(true)),
                ("chest-pain-radiation", flag(false)),
                ("chest-pain-type", text("mild")),
                ("chest-pain-duration", text("minutes")),
            ]),
        );

        assert_eq!(result.severity, Severity::Urgent);
        assert_eq!(result.title, "Please seek urgent medical care");
        assert_eq!(result.suspected_condition.as_deref(), Some("Possible heart-related condition"));
    }

    #[test]
    fn test_mild_short_fever_is_safe() {
        let result = evaluate(
            "fever",
            &answers([("fever-temp", text("low")), ("fever-duration", text("short")), ("fever-other-symptoms", text("none"))]),
        );

        assert_eq!(result.severity, Severity::Safe);
        assert_eq!(result.title, "You're probably okay");
        assert_eq!(result.suspected_condition, None);
        assert_eq!(result.supportive_message, None);
    }

    #[test]
    fn test_self_harm_thoughts_are_urgent() {
        let result = evaluate("mental-health", &answers([("mental-health-thoughts", text("yes"))]));

        assert_eq!(result.severity, Severity::Urgent);
        assert_eq!(result.suspected_condition.as_deref(), Some("Possible severe depression or crisis"));

        let message = result.supportive_message.unwrap();
        assert!(!message.is_empty());
        assert!(MENTAL_HEALTH_MESSAGES.contains(&message.as_str()));
    }

    #[test]
    fn test_frequent_anxiety_is_caution() {
        let result = evaluate("mental-health", &answers([("mental-health-anxiety", text("often"))]));

        assert_eq!(result.severity, Severity::Caution);
        assert_eq!(result.suspected_condition.as_deref(), Some("Possible anxiety or mild depression"));
    }

    #[test]
    fn test_prolonged_very_low_mood_is_urgent() {
        let result = evaluate(
            "mental-health",
            &answers([("mental-health-mood", text("very-low")), ("mental-health-duration", text("months"))]),
        );

        assert_eq!(result.severity, Severity::Urgent);

        let result = evaluate(
            "mental-health",
            &answers([("mental-health-mood", text("very-low")), ("mental-health-duration", text("days"))]),
        );

        assert_eq!(result.severity, Severity::Caution);
    }

    #[test]
    fn test_lower_right_stomach_pain_is_caution_with_appendicitis_text() {
        let result = evaluate(
            "stomach-pain",
            &answers([
                ("stomach-pain-location", text("right")),
                ("stomach-pain-severity", text("mild")),
                ("stomach-pain-other-symptoms", text("none")),
            ]),
        );

        assert_eq!(result.severity, Severity::Caution);
        assert!(result.explanation.contains("appendicitis"));
        assert!(PHYSICAL_HEALTH_MESSAGES.contains(&result.supportive_message.unwrap().as_str()));
    }

    #[test]
    fn test_facial_swelling_rash_is_urgent_regardless_of_other_fields() {
        let result = evaluate("rash", &answers([("rash-other-symptoms", text("swelling"))]));
        assert_eq!(result.severity, Severity::Urgent);

        let result = evaluate(
            "rash",
            &answers([
                ("rash-appearance", text("red")),
                ("rash-itching", text("none")),
                ("rash-spreading", flag(false)),
                ("rash-other-symptoms", text("swelling")),
            ]),
        );
        assert_eq!(result.severity, Severity::Urgent);
    }

    #[test]
    fn test_unknown_category_falls_back_to_default_safe() {
        let result = evaluate("__bogus__", &AnswerSet::new());

        assert_eq!(result, outcomes::DEFAULT_SAFE.into_result(None));
    }

    #[test]
    fn test_unknown_category_ignores_known_answers() {
        let result = evaluate("__bogus__", &answers([("chest-pain-breathing", flag(true))]));

        assert_eq!(result.severity, Severity::Safe);
    }

    #[test]
    fn test_pressure_pain_short_circuits_the_caution_tier() {
        let classification = classify("chest-pain", &answers([("chest-pain-type", text("pressure")), ("chest-pain-duration", text("days"))]));

        assert_eq!(classification.severity, Severity::Urgent);
        assert_eq!(classification.rule.map(|r| r.id), Some("chest-pain.pressure"));

        let classification = classify("chest-pain", &answers([("chest-pain-type", text("sharp"))]));

        assert_eq!(classification.severity, Severity::Caution);
        assert_eq!(classification.rule.map(|r| r.id), Some("chest-pain.sharp"));
    }

    #[test]
    fn test_repeated_evaluation_is_deterministic_apart_from_message() {
        let answers = answers([("headache-severity", text("severe")), ("headache-duration", text("hours"))]);

        let first = evaluate("headache", &answers);

        for _ in 0..10 {
            let next = evaluate("headache", &answers);

            assert_eq!(next.severity, first.severity);
            assert_eq!(next.title, first.title);
            assert_eq!(next.emoji, first.emoji);
            assert_eq!(next.description, first.description);
            assert_eq!(next.explanation, first.explanation);
            assert_eq!(next.suspected_condition, first.suspected_condition);
            assert!(next.supportive_message.is_some());
        }
    }

    #[test]
    fn test_seeded_rng_makes_results_identical() {
        let answers = answers([("cough-breathing", text("severe"))]);

        let first = evaluate_with_rng("cough", &answers, &mut StdRng::seed_from_u64(9));
        let second = evaluate_with_rng("cough", &answers, &mut StdRng::seed_from_u64(9));

        assert_eq!(first, second);
    }

    #[test]
    fn test_head_injury_without_symptom_answer_is_urgent() {
        let result = evaluate("injury", &answers([("injury-type", text("head"))]));

        assert_eq!(result.severity, Severity::Urgent);
        assert!(result.explanation.contains("Head injuries"), "{}", result.explanation);

        let result = evaluate("injury", &answers([("injury-type", text("head")), ("injury-other-symptoms", text("none"))]));

        assert_eq!(result.severity, Severity::Safe);
    }

    #[test]
    fn test_render_matches_evaluate() {
        let answers = answers([("chest-pain-type", text("sharp")), ("chest-pain-duration", text("days"))]);
        let classification = classify("chest-pain", &answers);

        assert_eq!(classification.rule.map(|rule| rule.id), Some("chest-pain.sharp"));

        let rendered = render(&classification, &answers, &mut StdRng::seed_from_u64(5));
        let evaluated = evaluate_with_rng("chest-pain", &answers, &mut StdRng::seed_from_u64(5));

        assert_eq!(rendered, evaluated);
    }

    #[test]
    fn test_supportive_message_present_iff_not_safe() {
        let cases = [
            ("fever", answers([("fever-temp", text("low"))])),
            ("fever", answers([("fever-temp", text("medium"))])),
            ("fever", answers([("fever-temp", text("high"))])),
            ("injury", answers([("injury-type", text("cut"))])),
            ("injury", answers([("injury-type", text("burn"))])),
            ("injury", answers([("injury-severity", text("severe"))])),
        ];

        for (category, answers) in cases {
            let result = evaluate(category, &answers);
            assert_eq!(result.supportive_message.is_some(), result.severity != Severity::Safe, "{category}: {answers:?}");
        }
    }

    #[test]
    fn test_adding_an_urgent_answer_always_escalates_to_urgent() {
        let safe_answers = [
            ("chest-pain", answers([("chest-pain-type", text("mild")), ("chest-pain-duration", text("minutes"))])),
            ("headache", answers([("headache-severity", text("mild")), ("headache-injury", flag(true))])),
            ("fever", answers([("fever-temp", text("low")), ("fever-duration", text("short"))])),
            ("injury", answers([("injury-type", text("cut")), ("injury-other-symptoms", text("none"))])),
            ("rash", answers([("rash-appearance", text("red")), ("rash-spreading", flag(false))])),
            ("mental-health", answers([("mental-health-mood", text("good")), ("mental-health-anxiety", text("rarely"))])),
        ];

        let urgent_answer = |category: &str| -> (&'static str, crate::base::types::AnswerValue) {
            match category {
                "chest-pain" => ("chest-pain-radiation", flag(true)),
                "headache" => ("headache-other-symptoms", text("nausea")),
                "fever" => ("fever-other-symptoms", text("severe")),
                "injury" => ("injury-severity", text("severe")),
                "rash" => ("rash-other-symptoms", text("breathing")),
                _ => ("mental-health-thoughts", text("yes")),
            }
        };

        for (category, mut answers) in safe_answers {
            assert_eq!(classify(category, &answers).severity, Severity::Safe, "{category} baseline");

            let (question, value) = urgent_answer(category);
            answers.insert(question, value);

            assert_eq!(classify(category, &answers).severity, Severity::Urgent, "{category} escalated");
        }
    }
}
