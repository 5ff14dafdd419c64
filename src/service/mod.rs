//! Collaborator services used around the evaluator.
//!
//! This module contains implementations for the services symptom-triage talks to:
//! - Questionnaire providers (e.g., the built-in question bank)
//! - History sinks (e.g., in-memory, JSON-lines file)
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod history;
pub mod questionnaire;
