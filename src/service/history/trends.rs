//! Trend analysis over stored history.

use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::base::types::Severity;

use super::HistoryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendStatus {
    /// Newest outcome is safe after a non-safe one.
    Improving,
    /// Newest outcome is urgent after a less severe one.
    Worsening,
    /// Every considered outcome is the same.
    Persistent,
    Fluctuating,
}

impl TrendStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendStatus::Improving => "improving",
            TrendStatus::Worsening => "worsening",
            TrendStatus::Persistent => "persistent",
            TrendStatus::Fluctuating => "fluctuating",
        }
    }
}

impl fmt::Display for TrendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomTrend {
    pub category: String,
    /// Total entries for the category.
    pub frequency: usize,
    /// Most recent severities, newest first.
    pub recent: Vec<Severity>,
    pub status: TrendStatus,
}

/// Groups entries by category and classifies each group seen at least twice.
///
/// Only the `window` most recent outcomes of a group are considered. Returns
/// nothing when fewer than two entries exist overall.
pub fn analyze_trends(entries: &[HistoryEntry], window: usize) -> Vec<SymptomTrend> {
    if entries.len() < 2 {
        return Vec::new();
    }

    let mut groups: BTreeMap<&str, Vec<&HistoryEntry>> = BTreeMap::new();

    for entry in entries {
        groups.entry(entry.category.as_str()).or_default().push(entry);
    }

    groups
        .into_iter()
        .filter(|(_, group)| group.len() >= 2)
        .map(|(category, mut group)| {
            // Newest first; entries sharing a timestamp keep reverse insertion order.
            group.reverse();
            group.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

            let recent = group.iter().take(window.max(2)).map(|entry| entry.severity).collect::<Vec<_>>();

            SymptomTrend {
                category: category.to_string(),
                frequency: group.len(),
                status: status_of(&recent),
                recent,
            }
        })
        .collect()
}

fn status_of(recent: &[Severity]) -> TrendStatus {
    match recent {
        [Severity::Safe, Severity::Caution | Severity::Urgent, ..] => TrendStatus::Improving,
        [Severity::Urgent, Severity::Caution | Severity::Safe, ..] => TrendStatus::Worsening,
        [first, rest @ ..] if rest.iter().all(|s| s == first) => TrendStatus::Persistent,
        _ => TrendStatus::Fluctuating,
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    /// Builds entries one hour apart, oldest first.
    fn history(items: &[(&str, Severity)]) -> Vec<HistoryEntry> {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();

        items
            .iter()
            .enumerate()
            .map(|(i, (category, severity))| HistoryEntry {
                timestamp: start + Duration::hours(i as i64),
                category: category.to_string(),
                severity: *severity,
                suspected_condition: None,
            })
            .collect()
    }

    #[test]
    fn test_needs_two_entries() {
        assert!(analyze_trends(&history(&[("fever", Severity::Safe)]), 3).is_empty());
    }

    #[test]
    fn test_single_occurrences_are_skipped() {
        let trends = analyze_trends(&history(&[("fever", Severity::Safe), ("cough", Severity::Safe)]), 3);

        assert!(trends.is_empty());
    }

    #[test]
    fn test_improving() {
        let trends = analyze_trends(&history(&[("fever", Severity::Urgent), ("fever", Severity::Caution), ("fever", Severity::Safe)]), 3);

        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].status, TrendStatus::Improving);
        assert_eq!(trends[0].recent, vec![Severity::Safe, Severity::Caution, Severity::Urgent]);
    }

    #[test]
    fn test_worsening() {
        let trends = analyze_trends(&history(&[("rash", Severity::Safe), ("rash", Severity::Urgent)]), 3);

        assert_eq!(trends[0].status, TrendStatus::Worsening);
    }

    #[test]
    fn test_persistent_and_fluctuating() {
        let entries = history(&[
            ("cough", Severity::Caution),
            ("headache", Severity::Caution),
            ("cough", Severity::Caution),
            ("headache", Severity::Safe),
            ("headache", Severity::Caution),
        ]);

        let trends = analyze_trends(&entries, 3);

        assert_eq!(trends.len(), 2);
        assert_eq!(trends[0].category, "cough");
        assert_eq!(trends[0].status, TrendStatus::Persistent);
        assert_eq!(trends[1].category, "headache");
        assert_eq!(trends[1].frequency, 3);
        assert_eq!(trends[1].status, TrendStatus::Fluctuating);
    }

    #[test]
    fn test_status_display_matches_serde() {
        for status in [TrendStatus::Improving, TrendStatus::Worsening, TrendStatus::Persistent, TrendStatus::Fluctuating] {
            assert_eq!(serde_json::to_value(status).unwrap(), serde_json::json!(status.to_string()));
        }

        assert_eq!(format!("{:<12}|", TrendStatus::Improving), "improving   |");
    }

    #[test]
    fn test_window_limits_considered_outcomes() {
        let entries = history(&[
            ("injury", Severity::Safe),
            ("injury", Severity::Caution),
            ("injury", Severity::Caution),
            ("injury", Severity::Caution),
        ]);

        let narrow = analyze_trends(&entries, 3);
        let wide = analyze_trends(&entries, 4);

        assert_eq!(narrow[0].status, TrendStatus::Persistent);
        assert_eq!(wide[0].status, TrendStatus::Fluctuating);
        assert_eq!(wide[0].frequency, 4);
    }
}
