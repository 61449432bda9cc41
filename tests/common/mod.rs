//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Lines used by the mixed-content scenario: two INFO, one ERROR, one malformed
pub const MIXED_LOG: &str = "\
2024-01-01 10:00:00 INFO Service started
2024-01-01 10:01:00 ERROR Disk full
malformed line
2024-01-01 10:02:00 INFO Heartbeat
";

/// Builder for log files inside a temporary directory
pub struct LogFileBuilder {
    temp_dir: TempDir,
    lines: Vec<String>,
    trailing_newline: bool,
}

impl LogFileBuilder {
    /// Create a new builder for an empty log file
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, lines: Vec::new(), trailing_newline: true }
    }

    /// Add a well-formed record line
    pub fn record(self, entry: RecordLineBuilder) -> Self {
        self.line(&entry.to_line())
    }

    /// Add a raw line verbatim
    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Add several raw lines from a block of text
    pub fn content(mut self, content: &str) -> Self {
        self.lines.extend(content.lines().map(str::to_string));
        self
    }

    /// Omit the final newline
    pub fn without_trailing_newline(mut self) -> Self {
        self.trailing_newline = false;
        self
    }

    /// Write the file and return its handle (keeps the temp dir alive)
    pub fn build(self) -> LogFile {
        let path = self.temp_dir.path().join("app.log");
        let mut content = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            content.push('\n');
        }
        fs::write(&path, content).expect("Failed to write log file");

        LogFile { _temp_dir: self.temp_dir, path }
    }
}

impl Default for LogFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A written log file; the directory is removed on drop
pub struct LogFile {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl LogFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Builder for a single well-formed log line
pub struct RecordLineBuilder {
    date: String,
    time: String,
    level: String,
    message: String,
}

impl RecordLineBuilder {
    /// Create a new line with default values
    pub fn new() -> Self {
        Self {
            date: "2024-01-01".to_string(),
            time: "10:00:00".to_string(),
            level: "INFO".to_string(),
            message: "Test entry".to_string(),
        }
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn time(mut self, time: &str) -> Self {
        self.time = time.to_string();
        self
    }

    pub fn level(mut self, level: &str) -> Self {
        self.level = level.to_string();
        self
    }

    pub fn message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    /// Render as a log line without newline
    pub fn to_line(&self) -> String {
        if self.message.is_empty() {
            format!("{} {} {}", self.date, self.time, self.level)
        } else {
            format!("{} {} {} {}", self.date, self.time, self.level, self.message)
        }
    }
}

impl Default for RecordLineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
