//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default for whether finished results are recorded to history.
fn default_history_enabled() -> bool {
    true
}

/// Default number of most recent outcomes considered by trend analysis.
fn default_trend_window() -> usize {
    3
}

/// Configuration for the symptom-triage application.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Whether finished results are handed to the history sink (`HISTORY_ENABLED`).
    #[serde(default = "default_history_enabled")]
    pub history_enabled: bool,
    /// JSON-lines history file (`HISTORY_PATH`).
    /// When unset, history only lives for the duration of the process.
    #[serde(default)]
    pub history_path: Option<String>,
    /// Seed for the supportive message pick (`SUPPORTIVE_MESSAGE_SEED`).
    /// When set, the same answers always produce the same message.
    #[serde(default)]
    pub supportive_message_seed: Option<u64>,
    /// Number of most recent outcomes per category considered by trend analysis (`TREND_WINDOW`).
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("SYMPTOM_TRIAGE"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        if result.trend_window < 2 || result.trend_window > 10 {
            return Err(anyhow::anyhow!("Trend window must be between 2 and 10."));
        }

        if result.history_path.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(anyhow::anyhow!("History path must not be empty when set."));
        }

        Ok(result)
    }
}

// Tests.
