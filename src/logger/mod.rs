//! Structured logging for the filter engine
//!
//! A small, ergonomic logging API with:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-subsystem tags with debug/verbose gating
//! - Colored console output
//!
//! ## Usage
//!
//! ```rust
//! use filterflow::logger::{self, LogTag};
//!
//! logger::info(LogTag::Engine, "initialized");
//! logger::debug(LogTag::Toggle, "group=g1 filter=b matched=true");
//! ```
//!
//! Embedding applications can raise or lower verbosity at runtime:
//!
//! ```rust
//! use filterflow::logger::{self, LogLevel};
//!
//! logger::update_logger_config(|config| {
//!     config.min_level = LogLevel::Debug;
//!     config.debug_tags.insert("engine".to_string());
//! });
//! ```

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{
    get_logger_config, set_logger_config, update_logger_config, LoggerConfig,
};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Log at ERROR level (always shown, critical issues)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (important issues, shown by default)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level (detailed diagnostics, gated per tag)
///
/// Only shown when the tag's debug key is present in
/// `LoggerConfig::debug_tags` or the minimum level admits Debug.
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (trace detail, gated per tag)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
