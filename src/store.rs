//! In-memory store of parsed log records
//!
//! The store only holds lines that parsed. It does not remember how many lines were
//! rejected or why; those lines were already reported during ingestion.

use std::slice;

use crate::models::LogRecord;

/// Parsed records in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogStore {
    records: Vec<LogRecord>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: LogRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn iter(&self) -> slice::Iter<'_, LogRecord> {
        self.records.iter()
    }
}

impl FromIterator<LogRecord> for LogStore {
    fn from_iter<T: IntoIterator<Item = LogRecord>>(iter: T) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a LogStore {
    type Item = &'a LogRecord;
    type IntoIter = slice::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
