use serde::{Deserialize, Serialize};

/// Quiet window for collapsing emission bursts.
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Broadcast channel capacity; a slow subscriber past this lags, it does not
/// block the engine.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Engine tuning knobs. All fields have working defaults, so callers can do
/// `EngineConfig::default()` or deserialize a partial config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Debounce window in milliseconds; 0 publishes every emission as-is.
    pub debounce_ms: u64,

    /// Capacity of the multicast event channel.
    pub channel_capacity: usize,

    /// When true, unknown group/filter id pairs are logged as
    /// `InvalidReference` at warning level. The mutation stays a no-op either
    /// way.
    pub strict_validation: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            strict_validation: false,
        }
    }
}
