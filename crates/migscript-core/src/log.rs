//! Level-prefixed progress messages on stderr.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

impl Level {
    fn prefix(self) -> &'static str {
        match self {
            Level::Error => "[ERROR]",
            Level::Warn => "[WARN] ",
            Level::Info => "[INFO] ",
            Level::Debug => "[DEBUG]",
        }
    }
}

/// Stderr logger with a maximum level. Messages above it are dropped.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    max: Level,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self {
            max: if verbose { Level::Debug } else { Level::Warn },
        }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.max
    }

    /// Render a message the way it appears on stderr.
    pub fn format(level: Level, args: fmt::Arguments<'_>) -> String {
        format!("{} {}", level.prefix(), args)
    }

    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.enabled(level) {
            eprintln!("{}", Self::format(level, args));
        }
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }
}
