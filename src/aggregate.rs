//! Level statistics and level-filtered views over a [`LogStore`]
//!
//! # Level matching
//!
//! Selection is case-insensitive on the *request* side only: the caller passes the
//! requested level through [`normalize_level`] before calling [`filter_by_level`].
//! Stored levels keep their original case, so a record logged as `Error` is never
//! selected by a request for `error` (normalized to `ERROR`). Sources that always
//! emit upper-case levels are unaffected.

use tracing::debug;

use crate::models::{LevelCounts, LogRecord};
use crate::store::LogStore;

/// Count records per exact level string, in first-seen order
pub fn count_by_level(store: &LogStore) -> LevelCounts {
    let mut counts = LevelCounts::new();
    for record in store {
        counts.increment(&record.level);
    }

    debug!(records = store.len(), levels = counts.len(), "counted log levels");
    counts
}

/// Uppercase a requested level before filtering
pub fn normalize_level(level: &str) -> String {
    level.to_uppercase()
}

/// Records whose level is byte-for-byte equal to `level`, in file order
///
/// Pass a level that went through [`normalize_level`].
pub fn filter_by_level<'a>(store: &'a LogStore, level: &str) -> Vec<&'a LogRecord> {
    let matches: Vec<_> = store.iter().filter(|record| record.level == level).collect();

    debug!(requested = level, matches = matches.len(), "filtered log records");
    matches
}
