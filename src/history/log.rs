//! History Log Module
//!
//! Most-recent-first log of past calculations, persisted as a JSON array
//! through a [`KeyValueStore`].

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::history::{KeyValueStore, StorageError, HISTORY_KEY, MAX_HISTORY_ENTRIES};

/// One past calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Operation label, e.g. "Addition (+)"
    pub operation: String,
    /// Display form, e.g. "2 + 3"
    pub expression: String,
    /// Computed value, `None` when it was not finite
    pub result: Option<f64>,
    /// Local wall-clock time, `HH:MM:SS`
    pub timestamp: String,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current local time.
    pub fn now(operation: impl Into<String>, expression: impl Into<String>, result: f64) -> Self {
        Self {
            operation: operation.into(),
            expression: expression.into(),
            result: result.is_finite().then_some(result),
            timestamp: Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

/// History log bound to a storage backend.
#[derive(Debug)]
pub struct History<S: KeyValueStore> {
    store: S,
    entries: Vec<HistoryEntry>,
}

impl<S: KeyValueStore> History<S> {
    /// Loads the saved history; a missing or unreadable record starts empty.
    pub fn load(store: S) -> Self {
        let entries = match store.get(HISTORY_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!(error = %err, "Discarding corrupt history record");
                Vec::new()
            }),
            None => Vec::new(),
        };

        Self { store, entries }
    }

    /// Prepends `entry`, drops the oldest beyond the cap, and saves.
    pub fn record(&mut self, entry: HistoryEntry) -> Result<(), StorageError> {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
        self.save()
    }

    /// Removes every entry and saves.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        self.save()
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries kept.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the log, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn save(&mut self) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.entries)?;
        self.store.set(HISTORY_KEY, raw)
    }
}
