use crate::error::ParseError;
use crate::models::LogRecord;

/// Parse one raw log line of the form `<date> <time> <level> [message...]`
///
/// Fields are separated by runs of whitespace. Everything after the level is
/// rejoined with single spaces into the message, which may be empty.
///
/// # Examples
///
/// ```
/// use log_level_analyzer::parsers::parse_log_line;
///
/// let record = parse_log_line("2024-01-01 10:01:00 ERROR   Disk  full").unwrap();
/// assert_eq!(record.level, "ERROR");
/// assert_eq!(record.message, "Disk full");
///
/// assert!(parse_log_line("malformed line").is_err());
/// ```
pub fn parse_log_line(line: &str) -> Result<LogRecord, ParseError> {
    let mut fields = line.split_whitespace();

    let (Some(date), Some(time), Some(level)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(ParseError::TooFewFields { found: line.split_whitespace().count() });
    };

    let message = fields.collect::<Vec<_>>().join(" ");

    Ok(LogRecord::new(date, time, level, message))
}
