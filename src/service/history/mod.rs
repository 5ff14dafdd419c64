pub mod file;
pub mod memory;
pub mod trends;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::base::types::{Res, Severity, TriageResult, Void};

pub use trends::{SymptomTrend, TrendStatus, analyze_trends};

// Types.

/// A completed triage, as stored by a history sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    /// The category id as supplied by the caller; may be unknown.
    pub category: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspected_condition: Option<String>,
}

impl HistoryEntry {
    /// Builds an entry for a finished result, stamped now.
    pub fn from_result(category: impl Into<String>, result: &TriageResult) -> Self {
        Self {
            timestamp: Utc::now(),
            category: category.into(),
            severity: result.severity,
            suspected_condition: result.suspected_condition.clone(),
        }
    }
}

// Traits.

/// Generic history sink trait that sinks must implement.
///
/// Sinks accept finished results for storage and later trend analysis.
/// Callers treat every failure here as non-fatal: the result has already been
/// returned to the user by the time a sink sees it.
#[async_trait]
pub trait GenericHistorySink: Send + Sync + 'static {
    /// Appends an entry.
    async fn record(&self, entry: &HistoryEntry) -> Void;

    /// Returns every stored entry, oldest first.
    async fn entries(&self) -> Res<Vec<HistoryEntry>>;

    /// Removes every stored entry.
    async fn clear(&self) -> Void;
}

// Structs.

/// History client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct HistoryClient {
    inner: Arc<dyn GenericHistorySink>,
}

impl Deref for HistoryClient {
    type Target = dyn GenericHistorySink;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl HistoryClient {
    pub fn new(inner: Arc<dyn GenericHistorySink>) -> Self {
        Self { inner }
    }
}
