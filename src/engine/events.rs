use chrono::{DateTime, Utc};

use crate::filterable::FilterableList;
use crate::filters::Filters;

/// Result states observed on the engine's event stream.
#[derive(Debug, Clone)]
pub enum FilterEvent<P, A> {
    /// Preview of an uncommitted edit. Emitted by every selection or
    /// sort-order edit (carrying the snapshot) and by revert (carrying the
    /// applied configuration). Never reflects a list recomputation.
    Update { filters: Filters<P, A> },

    /// The apply pipeline produced no rows. A first-class outcome, not an
    /// error.
    Empty {
        filters: Filters<P, A>,
        has_more_than_default: bool,
    },

    /// The apply pipeline result: filtered, searched and sorted.
    Apply {
        list: FilterableList<P, A>,
        filters: Filters<P, A>,
        has_more_than_default: bool,
        updated_at: DateTime<Utc>,
    },
}

impl<P, A> FilterEvent<P, A> {
    pub fn kind(&self) -> &'static str {
        match self {
            FilterEvent::Update { .. } => "update",
            FilterEvent::Empty { .. } => "empty",
            FilterEvent::Apply { .. } => "apply",
        }
    }

    /// The configuration this event was emitted against.
    pub fn filters(&self) -> &Filters<P, A> {
        match self {
            FilterEvent::Update { filters } => filters,
            FilterEvent::Empty { filters, .. } => filters,
            FilterEvent::Apply { filters, .. } => filters,
        }
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, FilterEvent::Update { .. })
    }
}
