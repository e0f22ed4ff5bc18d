use std::collections::BTreeMap;

use chrono::Local;

/// Format for timestamp keys. Lexicographic order of this format equals
/// chronological order, which keeps the map sorted by time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How many of the newest entries the analyzer averages over.
pub const RECENCY_WINDOW: usize = 3;

/// In-memory mood journal for a single run. Entries are keyed by a
/// one-second-resolution timestamp, so two scores logged within the same
/// second overwrite each other. That aliasing is accepted behavior.
#[derive(Debug, Default)]
pub struct MoodJournal {
    entries: BTreeMap<String, u8>,
}

impl MoodJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current wall-clock time as a journal key.
    pub fn current_timestamp() -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }

    /// Validate a raw score. Scores outside 1-10 are rejected before they
    /// ever reach the journal.
    pub fn validate_score(score: i64) -> Option<u8> {
        if (1..=10).contains(&score) {
            Some(score as u8)
        } else {
            None
        }
    }

    /// Record a score under the given timestamp, overwriting any entry
    /// already logged in that second.
    pub fn log(&mut self, timestamp: String, score: u8) {
        self.entries.insert(timestamp, score);
    }

    /// Record a score under the current wall-clock time and return the
    /// timestamp it was stored at.
    pub fn log_now(&mut self, score: u8) -> String {
        let timestamp = Self::current_timestamp();
        self.log(timestamp.clone(), score);
        timestamp
    }

    pub fn get(&self, timestamp: &str) -> Option<u8> {
        self.entries.get(timestamp).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Arithmetic mean of the newest up-to-three entries, or `None` when
    /// nothing has been logged yet. With one or two entries the average is
    /// taken over what exists. Only recency matters, not insertion order.
    pub fn recent_average(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }

        let recent: Vec<u8> = self
            .entries
            .values()
            .rev()
            .take(RECENCY_WINDOW)
            .copied()
            .collect();

        let sum: f64 = recent.iter().map(|&s| s as f64).sum();
        Some(sum / recent.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_and_read_back() {
        let mut journal = MoodJournal::new();
        for score in 1..=10u8 {
            let ts = format!("2024-01-01 10:00:{:02}", score);
            journal.log(ts.clone(), score);
            assert_eq!(journal.get(&ts), Some(score));
        }
        assert_eq!(journal.len(), 10);
    }

    #[test]
    fn test_validate_score_range() {
        assert_eq!(MoodJournal::validate_score(1), Some(1));
        assert_eq!(MoodJournal::validate_score(10), Some(10));
        assert_eq!(MoodJournal::validate_score(0), None);
        assert_eq!(MoodJournal::validate_score(11), None);
        assert_eq!(MoodJournal::validate_score(-3), None);
    }

    #[test]
    fn test_same_second_overwrites() {
        let mut journal = MoodJournal::new();
        journal.log("2024-01-01 10:00:00".to_string(), 2);
        journal.log("2024-01-01 10:00:00".to_string(), 9);
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.get("2024-01-01 10:00:00"), Some(9));
    }

    #[test]
    fn test_average_empty() {
        let journal = MoodJournal::new();
        assert!(journal.is_empty());
        assert_eq!(journal.recent_average(), None);
    }

    #[test]
    fn test_average_single_entry() {
        let mut journal = MoodJournal::new();
        journal.log("2024-01-01 10:00:00".to_string(), 5);
        assert_eq!(journal.recent_average(), Some(5.0));
    }

    #[test]
    fn test_average_two_entries() {
        let mut journal = MoodJournal::new();
        journal.log("2024-01-01 10:00:00".to_string(), 4);
        journal.log("2024-01-01 10:00:01".to_string(), 7);
        assert_eq!(journal.recent_average(), Some(5.5));
    }

    #[test]
    fn test_average_newest_three() {
        let mut journal = MoodJournal::new();
        journal.log("2024-01-01 10:00:00".to_string(), 8);
        journal.log("2024-01-01 10:00:01".to_string(), 6);
        journal.log("2024-01-01 10:00:02".to_string(), 4);
        assert_eq!(journal.recent_average(), Some(6.0));
    }

    #[test]
    fn test_average_ignores_older_entries() {
        let mut journal = MoodJournal::new();
        journal.log("2024-01-01 09:00:00".to_string(), 1);
        journal.log("2024-01-01 09:30:00".to_string(), 1);
        journal.log("2024-01-01 10:00:00".to_string(), 8);
        journal.log("2024-01-01 10:00:01".to_string(), 6);
        journal.log("2024-01-01 10:00:02".to_string(), 4);
        assert_eq!(journal.recent_average(), Some(6.0));
    }

    #[test]
    fn test_average_independent_of_insertion_order() {
        let mut journal = MoodJournal::new();
        // Older timestamp inserted last still loses to recency.
        journal.log("2024-01-01 10:00:02".to_string(), 4);
        journal.log("2024-01-01 10:00:00".to_string(), 8);
        journal.log("2024-01-01 10:00:01".to_string(), 6);
        assert_eq!(journal.recent_average(), Some(6.0));
    }

    #[test]
    fn test_current_timestamp_format() {
        let ts = MoodJournal::current_timestamp();
        // "YYYY-MM-DD HH:MM:SS"
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }
}
