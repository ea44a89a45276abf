//! Logging layer for Nova Render
//!
//! This module provides a small logging system with:
//! - Customizable sink via the Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - A minimum-severity filter on the global sink
//! - Colored console output by default (Warn/Error on stderr)
//! - File and line information for ERROR logs

use chrono::{DateTime, Local};
use colored::*;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;

/// Logger trait for custom logging sinks
///
/// Implement this trait to redirect log output (capture in tests, write to
/// a file, etc.) and install it with [`set_logger`].
pub trait Logger: Send + Sync {
    /// Process a single log entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "nova::opengl::Shader")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose debug information (typically disabled in release)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (critical issues with file:line details)
    Error,
}

/// Default logger implementation using colored console output
///
/// Trace/Debug/Info go to stdout; Warn/Error go to stderr, matching where
/// driver diagnostics are expected to land when a demo is run from a
/// terminal.
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        // Format timestamp as YYYY-MM-DD HH:MM:SS.mmm
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        let line = if let (Some(file), Some(line)) = (entry.file, entry.line) {
            format!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity_str, source, entry.message, file, line
            )
        } else {
            format!(
                "[{}] [{}] [{}] {}",
                timestamp, severity_str, source, entry.message
            )
        };

        if entry.severity >= LogSeverity::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

// ===== GLOBAL SINK =====

/// Global sink state: the installed logger plus the severity floor
struct LoggerSlot {
    logger: Box<dyn Logger>,
    min_severity: LogSeverity,
}

/// Global logger slot (initialized lazily with DefaultLogger)
static LOGGER: OnceLock<RwLock<LoggerSlot>> = OnceLock::new();

fn slot() -> &'static RwLock<LoggerSlot> {
    LOGGER.get_or_init(|| {
        RwLock::new(LoggerSlot {
            logger: Box::new(DefaultLogger),
            min_severity: LogSeverity::Trace,
        })
    })
}

/// Install a custom logger, replacing the current one
pub fn set_logger(logger: Box<dyn Logger>) {
    if let Ok(mut slot) = slot().write() {
        slot.logger = logger;
    }
}

/// Set the minimum severity; entries below it are dropped before dispatch
pub fn set_min_severity(severity: LogSeverity) {
    if let Ok(mut slot) = slot().write() {
        slot.min_severity = severity;
    }
}

/// Dispatch a log message to the installed logger
///
/// Prefer the `nova_trace!` .. `nova_error!` macros over calling this
/// directly; they capture the format arguments (and file/line for errors).
pub fn emit(severity: LogSeverity, source: &str, message: String) {
    emit_entry(severity, source, message, None, None);
}

/// Dispatch a log message with file:line details (used by `nova_error!`)
pub fn emit_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    emit_entry(severity, source, message, Some(file), Some(line));
}

fn emit_entry(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: Option<&'static str>,
    line: Option<u32>,
) {
    if let Ok(slot) = slot().read() {
        if severity < slot.min_severity {
            return;
        }
        let entry = LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file,
            line,
        };
        slot.logger.log(&entry);
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, typically disabled)
///
/// # Example
///
/// ```no_run
/// # use nova_render::nova_trace;
/// nova_trace!("nova::Camera", "recomputed basis");
/// ```
#[macro_export]
macro_rules! nova_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::emit(
            $crate::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message (development information)
///
/// # Example
///
/// ```no_run
/// # use nova_render::nova_debug;
/// nova_debug!("nova::opengl::Shader", "cached {} uniform locations", 12);
/// ```
#[macro_export]
macro_rules! nova_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::emit(
            $crate::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message (important events)
///
/// # Example
///
/// ```no_run
/// # use nova_render::nova_info;
/// nova_info!("nova::opengl::GlWindow", "context created");
/// ```
#[macro_export]
macro_rules! nova_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::emit(
            $crate::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (potential issues)
///
/// # Example
///
/// ```no_run
/// # use nova_render::nova_warn;
/// nova_warn!("nova::opengl::Shader", "cannot open {}", "res/vert.glsl");
/// ```
#[macro_export]
macro_rules! nova_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::emit(
            $crate::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```no_run
/// # use nova_render::nova_error;
/// nova_error!("nova::opengl::Shader", "compilation failed: {}", "info log");
/// ```
#[macro_export]
macro_rules! nova_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::emit_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
