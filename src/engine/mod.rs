//! The stateful orchestrator.
//!
//! [`FilterEngine`] holds three filter configurations — initial (the reset
//! target), applied (the last committed state) and snapshot (an in-progress,
//! uncommitted edit) — plus the cached source list. Edits made in a detached
//! surface (a bottom sheet, say) accumulate in the snapshot and only become
//! visible in list results after an explicit commit, so cancelling the surface
//! can never corrupt the displayed state.
//!
//! Every mutator is fire-and-forget: it enqueues a command for the single
//! worker task and returns immediately. Results are observed exclusively
//! through the subscribable event stream, which debounces bursts and replays
//! the latest emission to late subscribers.

mod events;
mod pipeline;
mod stream;
mod worker;

pub use events::FilterEvent;
pub use stream::EventSubscription;
pub use worker::EngineStats;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use crate::config::EngineConfig;
use crate::errors::FilterEngineError;
use crate::filterable::{FilterableAttributes, FilterableList};
use crate::filters::{Filters, SortOrder};
use crate::logger::{self, LogTag};

use worker::Command;

/// Handle to a running filter engine.
///
/// Cheap to clone; all clones feed the same worker and observe the same
/// stream. Dropping the last handle shuts the worker down and closes the
/// stream.
pub struct FilterEngine<P, A> {
    cmd_tx: mpsc::UnboundedSender<Command<P, A>>,
    hub: Arc<stream::EmissionHub<P, A>>,
}

impl<P, A> FilterEngine<P, A>
where
    P: Clone + Send + Sync + 'static,
    A: FilterableAttributes,
{
    /// Spawn the worker and debounce tasks. Must be called from within a
    /// tokio runtime.
    pub fn new(config: EngineConfig) -> Self {
        let hub = Arc::new(stream::EmissionHub::new(config.channel_capacity));
        let (emit_tx, emit_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();

        tokio::spawn(stream::run_debounce(
            emit_rx,
            Arc::clone(&hub),
            Duration::from_millis(config.debounce_ms),
        ));
        tokio::spawn(worker::run_worker(
            cmd_rx,
            worker::EngineState::new(&config, emit_tx),
        ));

        Self { cmd_tx, hub }
    }

    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Subscribe to result states. The most recent emission (if any) is
    /// delivered first.
    pub fn subscribe(&self) -> EventSubscription<P, A> {
        self.hub.subscribe()
    }

    /// Supply the filter catalog and source collection. Selections already
    /// applied survive via the merge; the list is sorted eagerly by the
    /// active sort order.
    pub fn initialize(&self, filters: Filters<P, A>, list: FilterableList<P, A>) {
        self.send(Command::Initialize { filters, list });
    }

    /// Refresh catalog and data without merging selections.
    pub fn update_lists(&self, filters: Filters<P, A>, list: FilterableList<P, A>) {
        self.send(Command::UpdateLists { filters, list });
    }

    /// Toggle one filter item; emits a preview of the new snapshot.
    pub fn update_filter(&self, group_id: impl Into<String>, filter_id: impl Into<String>) {
        self.send(Command::UpdateFilter {
            group_id: group_id.into(),
            filter_id: filter_id.into(),
        });
    }

    /// Change the sort order on the live configuration; emits a preview.
    pub fn update_sort_order(&self, sort_order: SortOrder) {
        self.send(Command::UpdateSortOrder(sort_order));
    }

    /// Commit any pending snapshot, run the apply pipeline and emit the
    /// resulting list state.
    pub fn apply_filters(&self) {
        self.send(Command::ApplyFilters);
    }

    /// Store the search query and re-run the pipeline against the applied
    /// configuration. Does not commit pending edits.
    pub fn apply_search(&self, query: impl Into<String>) {
        self.send(Command::ApplySearch(query.into()));
    }

    /// Drop back to the initial configuration and re-emit.
    pub fn reset_filters(&self) {
        self.send(Command::ResetFilters);
    }

    /// Discard the snapshot without committing; emits the applied
    /// configuration so a dismissed editor can restore the pre-edit view.
    pub fn revert_filters(&self) {
        self.send(Command::RevertFilters);
    }

    /// Debug snapshot of the engine internals.
    pub async fn stats(&self) -> Result<EngineStats, FilterEngineError> {
        let (tx, rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Stats(tx))
            .map_err(|_| FilterEngineError::ChannelClosed)?;
        rx.await.map_err(|_| FilterEngineError::ChannelClosed)
    }

    fn send(&self, command: Command<P, A>) {
        if self.cmd_tx.send(command).is_err() {
            logger::warning(LogTag::Engine, "mutator dropped, worker is gone");
        }
    }
}

impl<P, A> Clone for FilterEngine<P, A> {
    fn clone(&self) -> Self {
        Self {
            cmd_tx: self.cmd_tx.clone(),
            hub: Arc::clone(&self.hub),
        }
    }
}
