//! Logging utilities for the application

/// Log levels for controlling verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Normal execution, no verbose flag
    Normal = 0,
    /// Info level, one verbose flag (-v)
    Info = 1,
    /// Debug level, two verbose flags (-v -v)
    Debug = 2,
}

/// Logger for application messages.
///
/// Per-file lines and the summary print at the normal level; the info and
/// debug levels carry configuration detail behind `-v` / `-v -v`.
pub struct Logger {
    verbosity: u8,
}

impl Logger {
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    /// Log a message if the current verbosity is at least `level`
    pub fn log(&self, msg: &str, level: LogLevel) {
        if self.verbosity >= level as u8 {
            match level {
                LogLevel::Normal => println!("{}", msg),
                LogLevel::Info => println!("info: {}", msg),
                LogLevel::Debug => println!("dbg: {}", msg),
            }
        }
    }

    /// Log at normal level (always displayed)
    pub fn normal(&self, msg: &str) {
        self.log(msg, LogLevel::Normal);
    }

    /// Log at info level (verbose >= 1)
    pub fn info(&self, msg: &str) {
        self.log(msg, LogLevel::Info);
    }

    /// Log at debug level (verbose >= 2)
    pub fn debug(&self, msg: &str) {
        self.log(msg, LogLevel::Debug);
    }
}
