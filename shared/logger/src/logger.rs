//! The [`Logger`] handle.

use crate::error::Result;
use crate::level::LogLevel;
use crate::record::LogRecord;
use crate::writer::spawn_file_writer;
use std::path::Path;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

/// Lines captured by an in-memory logger.
#[derive(Clone, Default)]
pub struct LogBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    /// Snapshot of everything logged so far.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// True if any captured line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

#[derive(Clone)]
enum Target {
    File(Sender<LogRecord>),
    Memory(LogBuffer),
}

/// Cloneable, non-blocking logger.
///
/// Clones and loggers derived with [`Logger::for_component`] share one
/// writer, so records from every component land in the same file in the
/// order they were emitted.
///
/// ```
/// use logging::{LogLevel, Logger};
///
/// let (logger, buffer) = Logger::in_memory(LogLevel::Info);
/// let screen = logger.for_component("Screen");
/// screen.info("[CREATE_ROOM] ready");
/// screen.debug("filtered out");
///
/// assert!(buffer.contains("[Screen]: [CREATE_ROOM] ready"));
/// assert_eq!(buffer.lines().len(), 1);
/// ```
#[derive(Clone)]
pub struct Logger {
    target: Target,
    level: LogLevel,
    component: Option<String>,
    console_output: bool,
}

impl Logger {
    /// Logs to `log_path`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened or the writer thread cannot start.
    pub fn new(log_path: &Path, level: LogLevel) -> Result<Self> {
        Ok(Self {
            target: Target::File(spawn_file_writer(log_path)?),
            level,
            component: None,
            console_output: false,
        })
    }

    /// Same as [`Logger::new`] with a component tag and optional echo to stdout.
    pub fn with_component(
        log_path: &Path,
        level: LogLevel,
        component: &str,
        console_output: bool,
    ) -> Result<Self> {
        let mut logger = Self::new(log_path, level)?;
        logger.component = Some(component.to_string());
        logger.console_output = console_output;
        Ok(logger)
    }

    /// Logger that keeps every line in memory. Nothing touches the disk.
    pub fn in_memory(level: LogLevel) -> (Self, LogBuffer) {
        let buffer = LogBuffer::default();
        let logger = Self {
            target: Target::Memory(buffer.clone()),
            level,
            component: None,
            console_output: false,
        };
        (logger, buffer)
    }

    /// A logger for another component that shares this one's writer and level.
    pub fn for_component(&self, component: &str) -> Self {
        Self {
            component: Some(component.to_string()),
            ..self.clone()
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }

        let record = LogRecord::now(level, self.component.as_deref(), message);
        if self.console_output {
            println!("{}", record.line());
        }

        match &self.target {
            // A closed channel means the writer thread died; nothing left to do.
            Target::File(sender) => {
                let _ = sender.send(record);
            }
            Target::Memory(buffer) => buffer.push(record.line()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    fn wait_for_write() {
        thread::sleep(Duration::from_millis(100));
    }

    #[test]
    fn test_file_logger_writes_component_lines() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("app.log");

        let logger = Logger::with_component(&log_path, LogLevel::Debug, "App", false).unwrap();
        logger.info("window opened");
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("INFO [App]: window opened"));
    }

    #[test]
    fn test_level_filtering() {
        let (logger, buffer) = Logger::in_memory(LogLevel::Warn);
        logger.debug("debug line");
        logger.info("info line");
        logger.warn("warn line");
        logger.error("error line");

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("WARN: warn line"));
        assert!(lines[1].contains("ERROR: error line"));
    }

    #[test]
    fn test_for_component_shares_the_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("shared.log");

        let root = Logger::new(&log_path, LogLevel::Info).unwrap();
        let screen = root.for_component("Screen");
        let model = root.for_component("ViewModel");
        root.info("root line");
        screen.info("screen line");
        model.info("model line");
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("INFO: root line"));
        assert!(content.contains("[Screen]: screen line"));
        assert!(content.contains("[ViewModel]: model line"));
    }

    #[test]
    fn test_clone_across_threads() {
        let (logger, buffer) = Logger::in_memory(LogLevel::Info);
        let worker = logger.clone();

        thread::spawn(move || worker.info("from worker"))
            .join()
            .unwrap();
        logger.info("from main");

        assert!(buffer.contains("from worker"));
        assert!(buffer.contains("from main"));
    }

    #[test]
    fn test_derived_logger_keeps_level() {
        let (logger, buffer) = Logger::in_memory(LogLevel::Error);
        let derived = logger.for_component("Overlay");

        assert_eq!(derived.level(), LogLevel::Error);
        derived.warn("dropped");
        assert!(buffer.lines().is_empty());
    }
}
