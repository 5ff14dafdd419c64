//! User-facing flows built on top of the evaluator.
//!
//! This module provides:
//! - The question-by-question triage session
//! - Fire-and-forget recording of finished results to history

pub mod record;
pub mod session;
