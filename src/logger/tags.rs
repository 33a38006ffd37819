/// Subsystem tags for log routing and per-tag debug gating.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    Engine,
    Merge,
    Toggle,
    Apply,
    Search,
    Stream,
}

impl LogTag {
    /// Display name used in the console prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            LogTag::Engine => "ENGINE",
            LogTag::Merge => "MERGE",
            LogTag::Toggle => "TOGGLE",
            LogTag::Apply => "APPLY",
            LogTag::Search => "SEARCH",
            LogTag::Stream => "STREAM",
        }
    }

    /// Key used in `LoggerConfig::debug_tags` / `verbose_tags`
    pub fn to_debug_key(&self) -> &'static str {
        match self {
            LogTag::Engine => "engine",
            LogTag::Merge => "merge",
            LogTag::Toggle => "toggle",
            LogTag::Apply => "apply",
            LogTag::Search => "search",
            LogTag::Stream => "stream",
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
