//! JSON-lines history sink, one entry per line.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};
use tracing::{debug, info, instrument, warn};

use crate::base::types::{Res, Void};

use super::{GenericHistorySink, HistoryClient, HistoryEntry};

// Extra methods on `HistoryClient` applied by the file implementation.

impl HistoryClient {
    /// Creates a history client appending to the file at `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(FileHistorySink::new(path)),
        }
    }
}

// Specific implementations.

/// History sink backed by an append-only JSON-lines file.
#[derive(Debug)]
pub struct FileHistorySink {
    path: PathBuf,
    /// Serializes writers within this process.
    lock: Mutex<()>,
}

impl FileHistorySink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl GenericHistorySink for FileHistorySink {
    #[instrument(name = "FileHistorySink::record", skip_all)]
    async fn record(&self, entry: &HistoryEntry) -> Void {
        let _guard = self.lock.lock().await;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        let mut file = fs::OpenOptions::new().create(true).append(true).open(&self.path).await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        debug!("Appended entry for `{}` to `{}`.", entry.category, self.path.display());

        Ok(())
    }

    #[instrument(name = "FileHistorySink::entries", skip_all)]
    async fn entries(&self) -> Res<Vec<HistoryEntry>> {
        let _guard = self.lock.lock().await;

        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut entries = Vec::new();

        for (index, line) in contents.lines().enumerate().filter(|(_, line)| !line.trim().is_empty()) {
            match serde_json::from_str::<HistoryEntry>(line) {
                Ok(entry) => entries.push(entry),
                Err(err) => warn!("Skipping malformed history line {} in `{}`: {}", index + 1, self.path.display(), err),
            }
        }

        Ok(entries)
    }

    async fn clear(&self) -> Void {
        let _guard = self.lock.lock().await;

        match fs::remove_file(&self.path).await {
            Ok(()) => info!("Cleared history at `{}`.", self.path.display()),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }

        Ok(())
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::base::types::Severity;

    fn entry(category: &str, severity: Severity, condition: Option<&str>) -> HistoryEntry {
        HistoryEntry {
            timestamp: Utc::now(),
            category: category.to_string(),
            severity,
            suspected_condition: condition.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let history = HistoryClient::file(dir.path().join("history.jsonl"));

        assert!(history.entries().await.unwrap().is_empty());
        history.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_entries_survive_a_new_client() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.jsonl");

        let first = entry("chest-pain", Severity::Urgent, Some("Possible heart-related condition"));
        let second = entry("fever", Severity::Safe, None);

        let history = HistoryClient::file(&path);
        history.record(&first).await.unwrap();
        history.record(&second).await.unwrap();

        let reopened = HistoryClient::file(&path);
        let entries = reopened.entries().await.unwrap();

        assert_eq!(entries, vec![first, second]);
    }

    #[tokio::test]
    async fn test_malformed_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.jsonl");

        let good = entry("rash", Severity::Caution, None);
        let contents = format!("{}\nnot json\n\n{}\n", serde_json::to_string(&good).unwrap(), serde_json::to_string(&good).unwrap());
        std::fs::write(&path, contents).unwrap();

        let entries = HistoryClient::file(&path).entries().await.unwrap();

        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn test_clear_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.jsonl");

        let history = HistoryClient::file(&path);
        history.record(&entry("cough", Severity::Safe, None)).await.unwrap();
        history.clear().await.unwrap();

        assert!(!path.exists());
        assert!(history.entries().await.unwrap().is_empty());
    }

    #[test]
    fn test_entry_line_format() {
        let line = serde_json::to_value(entry("injury", Severity::Caution, None)).unwrap();

        assert_eq!(line["category"], "injury");
        assert_eq!(line["severity"], "caution");
        assert!(line.get("suspectedCondition").is_none());
        assert!(line["timestamp"].is_string());
    }
}
