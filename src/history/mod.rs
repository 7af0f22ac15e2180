//! History Module
//!
//! Client-side calculation history behind a pluggable key-value store.

mod log;
mod storage;

pub use log::{History, HistoryEntry};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

// == Public Constants ==
/// Storage key the history array is saved under
pub const HISTORY_KEY: &str = "calculatorHistory";

/// Maximum number of entries kept
pub const MAX_HISTORY_ENTRIES: usize = 50;
