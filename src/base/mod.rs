//! Core components, types, and utilities for symptom-triage.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Supportive message pools attached to non-safe outcomes.
//! - Common types and result handling.

pub mod config;
pub mod messages;
pub mod types;
