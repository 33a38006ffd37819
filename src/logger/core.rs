/// Core logging implementation with automatic filtering
///
/// Central logic that decides whether a message should be displayed based on
/// level and tag, then delegates to the format module for output.
use super::config::{get_logger_config, is_debug_enabled_for_tag, is_verbose_enabled_for_tag};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Check against minimum log level threshold
/// 3. Debug level requires debug mode for that tag
/// 4. Verbose level requires the global threshold OR verbose mode for that tag
/// 5. If enabled_tags is non-empty, the tag must be in the set
pub fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    let config = get_logger_config();

    if level == LogLevel::Error {
        return true;
    }

    if level > config.min_level {
        // Debug/verbose can still be force-enabled per tag
        match level {
            LogLevel::Debug => {
                if !is_debug_enabled_for_tag(tag) {
                    return false;
                }
            }
            LogLevel::Verbose => {
                if !is_verbose_enabled_for_tag(tag) {
                    return false;
                }
            }
            _ => return false,
        }
    }

    if !config.enabled_tags.is_empty() && !config.enabled_tags.contains(tag.to_debug_key()) {
        return false;
    }

    true
}

/// Internal logging function with automatic filtering
pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }

    super::format::format_and_log(tag, level.as_str(), message);
}
