//! This module hands finished results to the history sink.

use tokio::task::JoinHandle;
use tracing::{Instrument, error, info, instrument};

use crate::{
    base::types::{TriageResult, Void},
    service::history::{HistoryClient, HistoryEntry},
};

/// Records a finished result without blocking the caller.
///
/// The entry is built from the already-final result, then written on a
/// spawned task. Sink failures are logged there and never reach the caller;
/// the returned handle only exists so short-lived processes can wait for the
/// write before exiting.
#[instrument(skip_all)]
pub fn handle_triage_record(category: &str, result: &TriageResult, history: HistoryClient) -> JoinHandle<()> {
    let entry = HistoryEntry::from_result(category, result);

    tokio::spawn(async move {
        // Process the entry.
        let result = handle_triage_record_internal(entry, &history).in_current_span().await;

        // Log any errors.
        if let Err(err) = &result {
            error!("Error while recording triage history: {}", err);
        }
    })
}

/// Internal function to write the entry.
#[instrument(skip_all)]
async fn handle_triage_record_internal(entry: HistoryEntry, history: &HistoryClient) -> Void {
    history.record(&entry).await?;

    info!("Recorded `{}` outcome for `{}`.", entry.severity, entry.category);

    Ok(())
}
