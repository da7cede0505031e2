//! Logger utility for application-wide logging
//!
//! This module provides a file-backed logger that works alongside the
//! standard log crate: commands write explicit summaries through it, and it
//! can be installed as the global `log` sink.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use log::{LevelFilter, Log, Metadata, Record};

/// File logger
///
/// Clones share the same file handle, so one instance can be installed as
/// the global `log` sink while commands keep writing through another.
#[derive(Clone)]
pub struct Logger {
    /// File handle for log output
    file: Arc<Mutex<Option<File>>>,
    /// Most verbose level accepted when used as the global logger
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file, truncated if it exists
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let file = File::create(log_file.as_ref())?;
        Ok(Logger {
            file: Arc::new(Mutex::new(Some(file))),
            level: LevelFilter::Info,
        })
    }

    /// Logger that discards everything
    pub fn disabled() -> Self {
        Logger {
            file: Arc::new(Mutex::new(None)),
            level: LevelFilter::Off,
        }
    }

    /// Set the most verbose level accepted by the `log` integration
    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Logs a titled block of `name: value` lines
    ///
    /// # Arguments
    ///
    /// * `title` - Heading of the block
    /// * `entries` - Pairs written one per line, indented
    pub fn log_summary(&self, title: &str, entries: &[(&str, String)]) -> io::Result<()> {
        self.log(&format!("{}:", title))?;
        for (name, value) in entries {
            self.log(&format!("  {}: {}", name, value))?;
        }
        Ok(())
    }

    /// Install a clone of this logger as the global `log` sink
    pub fn init_global_logger(&self) {
        // Only called once at startup
        if log::set_boxed_logger(Box::new(self.clone())).is_err() {
            eprintln!("Warning: Global logger was already initialized");
            return;
        }

        log::set_max_level(self.level);
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Console copy goes to stderr, stdout carries command output
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_log_summary_written_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary.log");
        let logger = Logger::new(&path).unwrap();
        logger.log_summary("Check", &[("zones", "3".to_string())]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Check:\n  zones: 3\n");
    }

    #[test]
    fn test_clones_share_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shared.log");
        let logger = Logger::new(&path).unwrap();
        let clone = logger.clone();
        logger.log("first").unwrap();
        clone.log("second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_disabled_logger_accepts_messages() {
        let logger = Logger::disabled();
        assert!(logger.log("nothing").is_ok());
        assert!(!logger.enabled(&Metadata::builder().level(log::Level::Error).build()));
    }
}
