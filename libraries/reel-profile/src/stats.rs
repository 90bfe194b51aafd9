//! Watch statistics derived from journal entries.

use chrono::{Datelike, NaiveDate};
use reel_core::types::JournalEntry;
use std::collections::BTreeMap;

/// Aggregated count of watches in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyStat {
    /// Month label, e.g. `"Mar 2024"`
    pub month: String,
    /// Watches logged in that month
    pub count: u64,
}

/// Derived statistics for a user's journal.
///
/// Recomputed from scratch whenever the journal changes; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchStats {
    /// Total logged watches
    pub total: u64,
    /// Mean rating across rated entries, if any were rated
    pub average_rating: Option<f32>,
    /// One entry per distinct month observed, in chronological order.
    /// Months with no watches are not invented.
    pub monthly: Vec<MonthlyStat>,
}

impl WatchStats {
    /// Stats for an empty journal.
    pub fn empty() -> Self {
        Self {
            total: 0,
            average_rating: None,
            monthly: Vec::new(),
        }
    }
}

/// Group journal entries by calendar month of the watch timestamp.
///
/// Emits one [`MonthlyStat`] per distinct month observed, chronologically;
/// the counts always sum to the number of entries.
pub fn calculate_stats(entries: &[JournalEntry]) -> WatchStats {
    if entries.is_empty() {
        return WatchStats::empty();
    }

    let mut buckets: BTreeMap<(i32, u32), u64> = BTreeMap::new();
    let mut rating_sum = 0.0f32;
    let mut rated = 0u32;

    for entry in entries {
        let key = (entry.watched_at.year(), entry.watched_at.month());
        *buckets.entry(key).or_default() += 1;

        if let Some(rating) = entry.rating {
            rating_sum += rating;
            rated += 1;
        }
    }

    let monthly = buckets
        .into_iter()
        .map(|((year, month), count)| MonthlyStat {
            month: month_label(year, month),
            count,
        })
        .collect();

    WatchStats {
        total: entries.len() as u64,
        average_rating: (rated > 0).then(|| rating_sum / rated as f32),
        monthly,
    }
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| format!("{month:02}/{year}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::types::{EntryId, MovieId};

    fn entry(when: &str, rating: Option<f32>) -> JournalEntry {
        let date = NaiveDate::parse_from_str(when, "%Y-%m-%d").unwrap();
        JournalEntry {
            id: EntryId::generate(),
            movie_id: MovieId::new("m-1"),
            watched_at: date.and_hms_opt(20, 0, 0).unwrap().and_utc(),
            rating,
        }
    }

    #[test]
    fn counts_sum_to_entry_count() {
        let entries = vec![
            entry("2024-01-05", None),
            entry("2024-01-20", None),
            entry("2024-03-02", None),
            entry("2024-03-15", None),
            entry("2024-03-28", None),
        ];

        let stats = calculate_stats(&entries);
        let sum: u64 = stats.monthly.iter().map(|m| m.count).sum();
        assert_eq!(sum, entries.len() as u64);
        assert_eq!(stats.total, 5);
    }

    #[test]
    fn one_stat_per_distinct_month_no_gap_filling() {
        let entries = vec![
            entry("2024-01-05", None),
            entry("2024-03-02", None),
            entry("2024-03-15", None),
        ];

        let stats = calculate_stats(&entries);
        // February has no entries and is not invented.
        assert_eq!(stats.monthly.len(), 2);
        assert_eq!(stats.monthly[0].month, "Jan 2024");
        assert_eq!(stats.monthly[0].count, 1);
        assert_eq!(stats.monthly[1].month, "Mar 2024");
        assert_eq!(stats.monthly[1].count, 2);
    }

    #[test]
    fn chronological_across_year_boundaries() {
        let entries = vec![
            entry("2024-01-01", None),
            entry("2023-12-31", None),
            entry("2023-06-15", None),
        ];

        let stats = calculate_stats(&entries);
        let labels: Vec<&str> = stats.monthly.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(labels, vec!["Jun 2023", "Dec 2023", "Jan 2024"]);
    }

    #[test]
    fn average_rating_ignores_unrated_entries() {
        let entries = vec![
            entry("2024-01-05", Some(8.0)),
            entry("2024-01-06", Some(6.0)),
            entry("2024-01-07", None),
        ];

        let stats = calculate_stats(&entries);
        assert_eq!(stats.average_rating, Some(7.0));
    }

    #[test]
    fn empty_journal_yields_empty_stats() {
        let stats = calculate_stats(&[]);
        assert_eq!(stats, WatchStats::empty());
        assert!(stats.average_rating.is_none());
    }
}
