//! Structured logging for the SAME/EAS codec.
//!
//! Internal conditions such as a lost DLL lock or a discarded over-length
//! message buffer are not errors (see `errors` module) but are worth
//! recording. This collector is hand-rolled rather than built on `tracing`
//! so the core stays dependency-light and usable from a plain `Vec`-backed
//! test harness with no subscriber wiring.

use std::fmt;

/// Log level for filtering messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level to record.
    pub level: LogLevel,

    /// Enable logging from the DLL / timing-recovery subsystem.
    pub enable_timing: bool,

    /// Enable logging from the correlator / preamble-sync subsystem.
    pub enable_correlator: bool,

    /// Enable logging from the layer-2 framing state machine.
    pub enable_framing: bool,

    /// Maximum number of log entries retained (oldest evicted first).
    pub max_entries: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            enable_timing: true,
            enable_correlator: true,
            enable_framing: true,
            max_entries: 1000,
        }
    }
}

impl LogConfig {
    /// Verbose logging for debugging a decode session.
    pub fn verbose() -> Self {
        Self {
            level: LogLevel::Debug,
            max_entries: 5000,
            ..Self::default()
        }
    }

    /// Quiet logging for production use.
    pub fn quiet() -> Self {
        Self {
            level: LogLevel::Warn,
            enable_timing: false,
            enable_correlator: false,
            enable_framing: false,
            max_entries: 100,
        }
    }

    /// Disable all logging.
    pub fn disabled() -> Self {
        Self {
            level: LogLevel::Error,
            enable_timing: false,
            enable_correlator: false,
            enable_framing: false,
            max_entries: 0,
        }
    }
}

/// A single log entry.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub subsystem: &'static str,
    pub message: String,
}

/// Collector that buffers structured log entries produced by a decoder run.
#[derive(Debug, Clone)]
pub struct LogCollector {
    config: LogConfig,
    entries: Vec<LogEntry>,
}

impl LogCollector {
    pub fn new(config: LogConfig) -> Self {
        let capacity = config.max_entries.min(1000);
        Self {
            config,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Log a message at the specified level, subject to level and subsystem
    /// filters.
    pub fn log(&mut self, level: LogLevel, subsystem: &'static str, message: impl fmt::Display) {
        if level < self.config.level {
            return;
        }

        let enabled = match subsystem {
            "DLL" | "INTEGRATOR" => self.config.enable_timing,
            "CORRELATOR" | "SYNC" => self.config.enable_correlator,
            "FRAMING" | "DESCRIPTOR" => self.config.enable_framing,
            _ => true,
        };
        if !enabled {
            return;
        }

        let entry = LogEntry {
            level,
            subsystem,
            message: message.to_string(),
        };

        if self.config.max_entries > 0 {
            if self.entries.len() >= self.config.max_entries {
                self.entries.remove(0);
            }
            self.entries.push(entry);
        }

        #[cfg(any(test, debug_assertions))]
        {
            eprintln!("[{}] {}: {}", level, subsystem, message);
        }
    }

    pub fn trace(&mut self, subsystem: &'static str, message: impl fmt::Display) {
        self.log(LogLevel::Trace, subsystem, message);
    }

    pub fn debug(&mut self, subsystem: &'static str, message: impl fmt::Display) {
        self.log(LogLevel::Debug, subsystem, message);
    }

    pub fn info(&mut self, subsystem: &'static str, message: impl fmt::Display) {
        self.log(LogLevel::Info, subsystem, message);
    }

    pub fn warn(&mut self, subsystem: &'static str, message: impl fmt::Display) {
        self.log(LogLevel::Warn, subsystem, message);
    }

    pub fn error(&mut self, subsystem: &'static str, message: impl fmt::Display) {
        self.log(LogLevel::Error, subsystem, message);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn entries_at_level(&self, level: LogLevel) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.level >= level).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for LogCollector {
    fn default() -> Self {
        Self::new(LogConfig::default())
    }
}

impl fmt::Display for LogCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "[{}] {}: {}", entry.level, entry.subsystem, entry.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_level() {
        let mut log = LogCollector::new(LogConfig {
            level: LogLevel::Info,
            ..Default::default()
        });
        log.trace("DLL", "trace");
        log.debug("DLL", "debug");
        log.info("DLL", "info");
        log.warn("DLL", "warn");
        assert_eq!(log.entries().len(), 2);
    }

    #[test]
    fn filters_by_subsystem() {
        let mut log = LogCollector::new(LogConfig {
            level: LogLevel::Debug,
            enable_timing: false,
            ..Default::default()
        });
        log.info("DLL", "timing message");
        log.info("CORRELATOR", "correlator message");
        assert_eq!(log.entries().len(), 1);
        assert_eq!(log.entries()[0].subsystem, "CORRELATOR");
    }

    #[test]
    fn respects_max_entries() {
        let mut log = LogCollector::new(LogConfig {
            level: LogLevel::Debug,
            max_entries: 2,
            ..Default::default()
        });
        log.info("FRAMING", "one");
        log.info("FRAMING", "two");
        log.info("FRAMING", "three");
        assert_eq!(log.entries().len(), 2);
        assert!(log.entries()[0].message.contains("two"));
    }
}
