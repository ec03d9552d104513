//! Error types for the logging library.

use std::fmt;
use std::io;

/// Result alias used across the logging library.
pub type Result<T> = std::result::Result<T, LoggingError>;

/// Errors raised while setting up or parsing logging configuration.
#[derive(Debug)]
pub enum LoggingError {
    /// The log file could not be opened.
    Io(io::Error),
    /// A level name that is not one of debug, info, warn or error.
    InvalidLevel(String),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::Io(err) => write!(f, "log file error: {}", err),
            LoggingError::InvalidLevel(name) => write!(f, "unknown log level '{}'", name),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggingError::Io(err) => Some(err),
            LoggingError::InvalidLevel(_) => None,
        }
    }
}

impl From<io::Error> for LoggingError {
    fn from(err: io::Error) -> Self {
        LoggingError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::ErrorKind;

    #[test]
    fn test_invalid_level_display() {
        let err = LoggingError::InvalidLevel("verbose".to_string());
        assert_eq!(err.to_string(), "unknown log level 'verbose'");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err: LoggingError = io::Error::new(ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, LoggingError::Io(_)));
        assert!(err.source().is_some());
    }
}
