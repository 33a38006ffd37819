/// Runtime logger configuration
///
/// Held in a process-wide lock so the embedding application can adjust
/// verbosity without restarting. All lookups clone out of the lock; the
/// critical sections are tiny.
use std::collections::HashSet;
use std::sync::RwLock;

use once_cell::sync::Lazy;

use super::levels::LogLevel;
use super::tags::LogTag;

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum level threshold (errors always pass)
    pub min_level: LogLevel,
    /// Tags with debug logging enabled (keys from `LogTag::to_debug_key`)
    pub debug_tags: HashSet<String>,
    /// Tags with verbose logging enabled
    pub verbose_tags: HashSet<String>,
    /// When non-empty, only these tags log at all (errors excepted)
    pub enabled_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
            enabled_tags: HashSet::new(),
        }
    }
}

pub fn get_logger_config() -> LoggerConfig {
    LOGGER_CONFIG
        .read()
        .map(|config| config.clone())
        .unwrap_or_default()
}

pub fn set_logger_config(config: LoggerConfig) {
    if let Ok(mut guard) = LOGGER_CONFIG.write() {
        *guard = config;
    }
}

pub fn update_logger_config<F>(apply: F)
where
    F: FnOnce(&mut LoggerConfig),
{
    if let Ok(mut guard) = LOGGER_CONFIG.write() {
        apply(&mut guard);
    }
}

pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    get_logger_config()
        .debug_tags
        .contains(tag.to_debug_key())
}

pub fn is_verbose_enabled_for_tag(tag: &LogTag) -> bool {
    get_logger_config()
        .verbose_tags
        .contains(tag.to_debug_key())
}
