//! A single formatted log line.

use crate::level::LogLevel;
use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[derive(Debug, Clone)]
pub(crate) struct LogRecord {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<String>,
    pub message: String,
}

impl LogRecord {
    /// Stamps the record with the local wall-clock time.
    pub fn now(level: LogLevel, component: Option<&str>, message: &str) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            level,
            component: component.map(str::to_string),
            message: message.to_string(),
        }
    }

    /// `[timestamp] LEVEL [component]: message`, without a trailing newline.
    pub fn line(&self) -> String {
        match self.component {
            Some(ref component) => format!(
                "[{}] {} [{}]: {}",
                self.timestamp,
                self.level.as_str(),
                component,
                self.message
            ),
            None => format!(
                "[{}] {}: {}",
                self.timestamp,
                self.level.as_str(),
                self.message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_with_component() {
        let record = LogRecord::now(LogLevel::Warn, Some("Screen"), "row index out of range");
        let line = record.line();

        assert!(line.contains("WARN [Screen]: row index out of range"));
        assert!(!line.ends_with('\n'));
    }

    #[test]
    fn test_line_without_component() {
        let record = LogRecord::now(LogLevel::Info, None, "started");
        assert!(record.line().ends_with("INFO: started"));
    }

    #[test]
    fn test_timestamp_shape() {
        let record = LogRecord::now(LogLevel::Debug, None, "x");
        // YYYY-MM-DD HH:MM:SS.mmm
        assert_eq!(record.timestamp.len(), 23);
        assert_eq!(&record.timestamp[4..5], "-");
        assert_eq!(&record.timestamp[19..20], ".");
    }
}
