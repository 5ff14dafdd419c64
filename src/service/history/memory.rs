//! In-process history sink.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::base::types::{Res, Void};

use super::{GenericHistorySink, HistoryClient, HistoryEntry};

// Extra methods on `HistoryClient` applied by the memory implementation.

impl HistoryClient {
    pub fn memory() -> Self {
        Self {
            inner: Arc::new(MemoryHistorySink::default()),
        }
    }
}

// Specific implementations.

/// History sink that keeps entries for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryHistorySink {
    entries: Mutex<Vec<HistoryEntry>>,
}

#[async_trait]
impl GenericHistorySink for MemoryHistorySink {
    #[instrument(name = "MemoryHistorySink::record", skip_all)]
    async fn record(&self, entry: &HistoryEntry) -> Void {
        let mut entries = self.entries.lock().await;
        entries.push(entry.clone());

        debug!("Recorded entry #{} for `{}`.", entries.len(), entry.category);

        Ok(())
    }

    async fn entries(&self) -> Res<Vec<HistoryEntry>> {
        Ok(self.entries.lock().await.clone())
    }

    async fn clear(&self) -> Void {
        self.entries.lock().await.clear();

        Ok(())
    }
}

// Tests.
