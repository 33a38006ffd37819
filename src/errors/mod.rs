use thiserror::Error;

/// Engine-level failures.
///
/// The engine itself is total over its documented inputs; these only surface
/// through strict-validation logging and the handle API, never through the
/// event stream. An empty result set is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterEngineError {
    #[error("unknown filter reference: group={group_id} filter={filter_id}")]
    InvalidReference {
        group_id: String,
        filter_id: String,
    },

    #[error("engine worker is no longer running")]
    ChannelClosed,

    #[error("engine has not been initialized")]
    NotInitialized,
}
