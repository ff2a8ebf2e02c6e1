//! # Chat History Store
//!
//! File: cli/src/tutor/history.rs
//! Author: PyChat Maintainers
//!
//! ## Overview
//!
//! An append-only, in-memory log of chat exchanges. `HistoryStore` is a cheap
//! handle (`Arc<Mutex<..>>`) that is created once at startup and cloned into
//! the request handlers. Every append and every read takes the same lock, so
//! concurrent `/chat` calls cannot lose entries and `/history` never sees a
//! half-written log. The log is unbounded and lives only as long as the
//! process.
//!
use chrono::Local;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

/// Timestamp layout used for chat entries, e.g. `2024-05-01 13:37:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One classified message and the response it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatEntry {
    pub timestamp: String,
    pub message: String,
    pub response: String,
}

impl ChatEntry {
    /// Builds an entry stamped with the current local time.
    pub fn now(message: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            message: message.into(),
            response: response.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Arc<Mutex<Vec<ChatEntry>>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry at the end of the log and returns the new length,
    /// read under the same lock as the push.
    pub fn append(&self, entry: ChatEntry) -> usize {
        let mut entries = self.lock();
        entries.push(entry);
        entries.len()
    }

    /// # Recent Entries (`recent`)
    ///
    /// Returns the last `limit` entries in insertion order. A `limit` larger
    /// than the log returns everything; zero or negative returns nothing.
    pub fn recent(&self, limit: i64) -> Vec<ChatEntry> {
        if limit <= 0 {
            return Vec::new();
        }
        let entries = self.lock();
        let take = usize::try_from(limit).unwrap_or(usize::MAX).min(entries.len());
        entries[entries.len() - take..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave a Vec half-pushed, so the
    // data behind a poisoned lock is still sound.
    fn lock(&self) -> MutexGuard<'_, Vec<ChatEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn store_with(n: usize) -> HistoryStore {
        let store = HistoryStore::new();
        for i in 1..=n {
            store.append(ChatEntry::now(format!("message {i}"), format!("response {i}")));
        }
        store
    }

    fn messages(entries: &[ChatEntry]) -> Vec<String> {
        entries.iter().map(|e| e.message.clone()).collect()
    }

    #[test]
    fn recent_returns_last_entries_in_order() {
        let store = store_with(12);
        let recent = store.recent(5);
        assert_eq!(
            messages(&recent),
            ["message 8", "message 9", "message 10", "message 11", "message 12"]
        );
    }

    #[test]
    fn recent_with_large_limit_returns_everything() {
        let store = store_with(3);
        assert_eq!(store.recent(10).len(), 3);
        assert_eq!(store.recent(i64::MAX).len(), 3);
    }

    #[test]
    fn recent_with_zero_or_negative_limit_is_empty() {
        let store = store_with(4);
        assert!(store.recent(0).is_empty());
        assert!(store.recent(-2).is_empty());
    }

    #[test]
    fn appends_never_reorder_or_drop() {
        let store = HistoryStore::new();
        assert!(store.is_empty());
        let mut previous = Vec::new();
        for i in 0..20 {
            store.append(ChatEntry::now(format!("m{i}"), "r"));
            let all = store.recent(i64::MAX);
            assert_eq!(all.len(), previous.len() + 1);
            assert_eq!(&all[..previous.len()], &previous[..]);
            previous = all;
        }
        assert_eq!(store.len(), 20);
    }

    #[test]
    fn append_returns_new_length() {
        let store = store_with(2);
        assert_eq!(store.append(ChatEntry::now("third", "r")), 3);
        assert_eq!(store.append(ChatEntry::now("fourth", "r")), 4);
    }

    #[test]
    fn clones_share_the_same_log() {
        let store = HistoryStore::new();
        let handle = store.clone();
        handle.append(ChatEntry::now("hi", "hello"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn concurrent_appends_are_not_lost() {
        let store = HistoryStore::new();
        let workers: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store.append(ChatEntry::now(format!("{t}-{i}"), "r"));
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().expect("worker thread panicked");
        }
        assert_eq!(store.len(), 400);
    }

    #[test]
    fn timestamp_uses_expected_format() {
        let entry = ChatEntry::now("a", "b");
        assert!(NaiveDateTime::parse_from_str(&entry.timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(entry.timestamp.len(), 19);
    }
}
