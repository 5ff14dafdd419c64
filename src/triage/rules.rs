//! Static escalation rules, two ordered tiers per symptom category.
//!
//! Every predicate is total over an [`AnswerSet`]: an unanswered question
//! compares unequal to any expected value. Equality checks on a missing key
//! fail and inequality checks on it hold.

use crate::base::types::{AnswerSet, Severity};

use super::category::SymptomCategory;

/// A named predicate that escalates one category to one tier.
#[derive(Debug)]
pub struct Rule {
    /// Stable identifier, used in logs.
    pub id: &'static str,
    pub category: SymptomCategory,
    /// Never `Severity::Safe`.
    pub severity: Severity,
    predicate: fn(&AnswerSet) -> bool,
}

impl Rule {
    pub fn matches(&self, answers: &AnswerSet) -> bool {
        (self.predicate)(answers)
    }
}

const fn urgent(id: &'static str, category: SymptomCategory, predicate: fn(&AnswerSet) -> bool) -> Rule {
    Rule {
        id,
        category,
        severity: Severity::Urgent,
        predicate,
    }
}

const fn caution(id: &'static str, category: SymptomCategory, predicate: fn(&AnswerSet) -> bool) -> Rule {
    Rule {
        id,
        category,
        severity: Severity::Caution,
        predicate,
    }
}

use SymptomCategory::*;

// Urgent tier.

static CHEST_PAIN_URGENT: &[Rule] = &[
    urgent("chest-pain.breathing-difficulty", ChestPain, |a| a.is_set("chest-pain-breathing")),
    urgent("chest-pain.radiating", ChestPain, |a| a.is_set("chest-pain-radiation")),
    urgent("chest-pain.pressure", ChestPain, |a| a.is("chest-pain-type", "pressure")),
];

static HEADACHE_URGENT: &[Rule] = &[
    urgent("headache.severe-with-stiff-neck", Headache, |a| {
        a.is("headache-severity", "severe") && a.is("headache-other-symptoms", "neck")
    }),
    urgent("headache.injury-with-nausea", Headache, |a| {
        a.is_set("headache-injury") && a.is("headache-other-symptoms", "nausea")
    }),
];

static FEVER_URGENT: &[Rule] = &[
    urgent("fever.high", Fever, |a| a.is("fever-temp", "high")),
    urgent("fever.severe-symptoms", Fever, |a| a.is("fever-other-symptoms", "severe")),
    urgent("fever.medium-and-long", Fever, |a| a.is("fever-temp", "medium") && a.is("fever-duration", "long")),
];

static INJURY_URGENT: &[Rule] = &[
    urgent("injury.head-with-symptoms", Injury, |a| {
        a.is("injury-type", "head") && !a.is("injury-other-symptoms", "none")
    }),
    urgent("injury.severe", Injury, |a| a.is("injury-severity", "severe")),
    urgent("injury.suspected-break", Injury, |a| a.is("injury-type", "suspected-break")),
];

static RASH_URGENT: &[Rule] = &[
    urgent("rash.breathing-difficulty", Rash, |a| a.is("rash-other-symptoms", "breathing")),
    urgent("rash.facial-swelling", Rash, |a| a.is("rash-other-symptoms", "swelling")),
];

static MENTAL_HEALTH_URGENT: &[Rule] = &[
    urgent("mental-health.self-harm-thoughts", MentalHealth, |a| a.is("mental-health-thoughts", "yes")),
    urgent("mental-health.prolonged-very-low-mood", MentalHealth, |a| {
        a.is("mental-health-mood", "very-low") && (a.is("mental-health-duration", "weeks") || a.is("mental-health-duration", "months"))
    }),
];

// Caution tier.

static CHEST_PAIN_CAUTION: &[Rule] = &[
    caution("chest-pain.sharp", ChestPain, |a| a.is("chest-pain-type", "sharp")),
    caution("chest-pain.lasting-days", ChestPain, |a| a.is("chest-pain-duration", "days")),
];

static HEADACHE_CAUTION: &[Rule] = &[
    caution("headache.severe", Headache, |a| a.is("headache-severity", "severe")),
    caution("headache.lasting-week", Headache, |a| a.is("headache-duration", "week")),
    caution("headache.vision-changes", Headache, |a| a.is("headache-other-symptoms", "vision")),
];

static FEVER_CAUTION: &[Rule] = &[
    caution("fever.medium", Fever, |a| a.is("fever-temp", "medium")),
    caution("fever.long", Fever, |a| a.is("fever-duration", "long")),
    caution("fever.rash", Fever, |a| a.is("fever-other-symptoms", "rash")),
];

static SORE_THROAT_CAUTION: &[Rule] = &[
    caution("sore-throat.severe", SoreThroat, |a| a.is("sore-throat-severity", "severe")),
    caution("sore-throat.long-with-spots", SoreThroat, |a| {
        a.is("sore-throat-duration", "long") && a.is("sore-throat-other-symptoms", "spots")
    }),
];

static COUGH_CAUTION: &[Rule] = &[
    caution("cough.breathing-difficulty", Cough, |a| a.is("cough-breathing", "severe")),
    caution("cough.long-and-productive", Cough, |a| a.is("cough-duration", "long") && a.is("cough-type", "productive")),
];

static STOMACH_PAIN_CAUTION: &[Rule] = &[
    caution("stomach-pain.severe", StomachPain, |a| a.is("stomach-pain-severity", "severe")),
    caution("stomach-pain.lower-right", StomachPain, |a| a.is("stomach-pain-location", "right")),
    caution("stomach-pain.fever", StomachPain, |a| a.is("stomach-pain-other-symptoms", "fever")),
];

static RASH_CAUTION: &[Rule] = &[
    caution("rash.spreading", Rash, |a| a.is_set("rash-spreading")),
    caution("rash.fever", Rash, |a| a.is("rash-other-symptoms", "fever")),
];

static INJURY_CAUTION: &[Rule] = &[
    caution("injury.moderate", Injury, |a| a.is("injury-severity", "moderate")),
    caution("injury.burn", Injury, |a| a.is("injury-type", "burn")),
    caution("injury.numbness", Injury, |a| a.is("injury-other-symptoms", "numbness")),
];

static MENTAL_HEALTH_CAUTION: &[Rule] = &[
    caution("mental-health.frequent-anxiety", MentalHealth, |a| a.is("mental-health-anxiety", "often")),
    caution("mental-health.sleep-disruption", MentalHealth, |a| a.is("mental-health-sleep", "significant")),
    caution("mental-health.low-mood", MentalHealth, |a| {
        a.is("mental-health-mood", "low") || a.is("mental-health-mood", "very-low")
    }),
];

// Lookups.

/// Rules that force `Urgent` when any of them matches.
pub fn urgent_rules(category: SymptomCategory) -> &'static [Rule] {
    match category {
        ChestPain => CHEST_PAIN_URGENT,
        Headache => HEADACHE_URGENT,
        Fever => FEVER_URGENT,
        Injury => INJURY_URGENT,
        Rash => RASH_URGENT,
        MentalHealth => MENTAL_HEALTH_URGENT,
        Cough | SoreThroat | StomachPain => &[],
    }
}

/// Rules checked only when no urgent rule matched.
pub fn caution_rules(category: SymptomCategory) -> &'static [Rule] {
    match category {
        ChestPain => CHEST_PAIN_CAUTION,
        Headache => HEADACHE_CAUTION,
        Fever => FEVER_CAUTION,
        SoreThroat => SORE_THROAT_CAUTION,
        Cough => COUGH_CAUTION,
        StomachPain => STOMACH_PAIN_CAUTION,
        Rash => RASH_CAUTION,
        Injury => INJURY_CAUTION,
        MentalHealth => MENTAL_HEALTH_CAUTION,
    }
}

/// The rule set for one tier; `Safe` has none.
pub fn rules_for(category: SymptomCategory, severity: Severity) -> &'static [Rule] {
    match severity {
        Severity::Urgent => urgent_rules(category),
        Severity::Caution => caution_rules(category),
        Severity::Safe => &[],
    }
}

/// First rule in table order that matches.
pub fn first_match(rules: &'static [Rule], answers: &AnswerSet) -> Option<&'static Rule> {
    rules.iter().find(|rule| rule.matches(answers))
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_consistent() {
        for category in SymptomCategory::ALL {
            for severity in [Severity::Urgent, Severity::Caution] {
                for rule in rules_for(category, severity) {
                    assert_eq!(rule.category, category, "rule `{}` is filed under the wrong category", rule.id);
                    assert_eq!(rule.severity, severity, "rule `{}` is filed under the wrong tier", rule.id);
                    assert!(rule.id.starts_with(category.id()), "rule `{}` should be prefixed by its category", rule.id);
                }
            }

            assert!(rules_for(category, Severity::Safe).is_empty());
            assert!(!caution_rules(category).is_empty(), "every category escalates to caution somehow");
        }
    }

    #[test]
    fn test_empty_answers_match_nothing() {
        let answers = AnswerSet::new();

        for category in SymptomCategory::ALL {
            assert!(first_match(urgent_rules(category), &answers).is_none());
            assert!(first_match(caution_rules(category), &answers).is_none());
        }
    }

    #[test]
    fn test_first_match_follows_table_order() {
        let mut answers = AnswerSet::new();
        answers.insert("chest-pain-radiation", true);
        answers.insert("chest-pain-type", "pressure");

        let rule = first_match(urgent_rules(ChestPain), &answers).unwrap();

        assert_eq!(rule.id, "chest-pain.radiating");
    }

    #[test]
    fn test_head_injury_is_urgent_unless_symptoms_are_none() {
        let mut answers = AnswerSet::new();
        answers.insert("injury-type", "head");

        // Unanswered counts as "not none".
        assert_eq!(first_match(urgent_rules(Injury), &answers).unwrap().id, "injury.head-with-symptoms");

        answers.insert("injury-other-symptoms", "none");
        assert!(first_match(urgent_rules(Injury), &answers).is_none());

        answers.insert("injury-other-symptoms", "dizziness");
        assert_eq!(first_match(urgent_rules(Injury), &answers).unwrap().id, "injury.head-with-symptoms");
    }

    #[test]
    fn test_flag_rules_ignore_text_lookalikes() {
        let mut answers = AnswerSet::new();
        answers.insert("rash-spreading", "true");

        assert!(first_match(caution_rules(Rash), &answers).is_none());
    }
}
