use serde::Serialize;

/// One successfully parsed log line
///
/// Fields are kept exactly as they appear in the source. In particular `level` is
/// never case-normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub date: String,
    pub time: String,
    pub level: String,
    pub message: String,
}

impl LogRecord {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        level: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self { date: date.into(), time: time.into(), level: level.into(), message: message.into() }
    }
}
