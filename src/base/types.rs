use std::{borrow::Cow, collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// Triage severity tier.
///
/// Ordered so that `Urgent > Caution > Safe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Monitor at home.
    #[serde(alias = "success")]
    Safe,
    /// Seek care soon.
    #[serde(alias = "warning")]
    Caution,
    /// Seek immediate care.
    #[serde(alias = "danger")]
    Urgent,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Safe => "safe",
            Severity::Caution => "caution",
            Severity::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single answer to a questionnaire question.
///
/// Comparison is strict: the text `"true"` never equals the flag `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Number(f64),
    Text(Cow<'static, str>),
}

impl AnswerValue {
    /// Builds a text value from a static string; usable in `static` option tables.
    pub const fn text(value: &'static str) -> Self {
        AnswerValue::Text(Cow::Borrowed(value))
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Flag(flag) => write!(f, "{flag}"),
            AnswerValue::Number(number) => write!(f, "{number}"),
            AnswerValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Flag(value)
    }
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        AnswerValue::Number(value)
    }
}

impl From<&'static str> for AnswerValue {
    fn from(value: &'static str) -> Self {
        AnswerValue::text(value)
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(Cow::Owned(value))
    }
}

/// Answers collected for one symptom category, keyed by question id.
///
/// Every accessor is total: a missing key, or a value of the wrong kind,
/// reads as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(HashMap<String, AnswerValue>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.0.insert(question_id.into(), value.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.0.get(question_id)
    }

    pub fn text(&self, question_id: &str) -> Option<&str> {
        match self.get(question_id) {
            Some(AnswerValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn flag(&self, question_id: &str) -> Option<bool> {
        match self.get(question_id) {
            Some(AnswerValue::Flag(flag)) => Some(*flag),
            _ => None,
        }
    }

    pub fn number(&self, question_id: &str) -> Option<f64> {
        match self.get(question_id) {
            Some(AnswerValue::Number(number)) => Some(*number),
            _ => None,
        }
    }

    /// True when the question was answered with exactly this text value.
    pub fn is(&self, question_id: &str, expected: &str) -> bool {
        self.text(question_id) == Some(expected)
    }

    /// True when the question was answered with the flag `true`.
    pub fn is_set(&self, question_id: &str) -> bool {
        self.flag(question_id) == Some(true)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(id, value)| (id.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<AnswerValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// The classification handed back to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageResult {
    pub severity: Severity,
    /// Short actionable headline.
    pub title: String,
    pub emoji: String,
    /// One-line summary.
    pub description: String,
    /// Rationale paragraph.
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspected_condition: Option<String>,
    /// Present iff `severity` is not `Safe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supportive_message: Option<String>,
}

// Tests.
