//! Library root for `symptom-triage`.
//!
//! Symptom-triage is a rule-based evaluator that maps a symptom category and a
//! set of questionnaire answers to one of three severity tiers:
//! - `safe`: monitor at home
//! - `caution`: seek care soon
//! - `urgent`: seek immediate care
//!
//! Each result carries a headline, an explanation, an optional suspected
//! condition, and (for non-safe tiers) a supportive message. The evaluator
//! itself is pure; the questionnaire provider and history sink around it are
//! built on extensible traits so that each can be swapped out or mocked.

pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;
pub mod triage;

pub use base::types::{AnswerSet, AnswerValue, Severity, TriageResult};
pub use triage::{category::SymptomCategory, evaluate, evaluate_with_rng};
