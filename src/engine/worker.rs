//! Single-owner worker: the only place engine state is read or written.
//!
//! Mutators arrive as commands on an unbounded channel with exactly one
//! consumer, which gives every mutation mutual exclusion and caller-invocation
//! order for free. No mutator ever observes a half-applied peer.

use chrono::Utc;
use serde::Serialize;
use tokio::sync::{mpsc, oneshot};

use crate::config::EngineConfig;
use crate::errors::FilterEngineError;
use crate::filterable::{FilterableAttributes, FilterableList};
use crate::filters::{self, Filters, SortOrder};
use crate::logger::{self, LogTag};

use super::events::FilterEvent;
use super::pipeline;

pub(crate) enum Command<P, A> {
    Initialize {
        filters: Filters<P, A>,
        list: FilterableList<P, A>,
    },
    UpdateLists {
        filters: Filters<P, A>,
        list: FilterableList<P, A>,
    },
    UpdateFilter {
        group_id: String,
        filter_id: String,
    },
    UpdateSortOrder(SortOrder),
    ApplyFilters,
    ApplySearch(String),
    ResetFilters,
    RevertFilters,
    Stats(oneshot::Sender<EngineStats>),
}

/// Debug snapshot of the engine's internals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    pub initialized: bool,
    pub group_count: usize,
    pub selected_count: usize,
    pub has_snapshot: bool,
    pub has_more_than_default: bool,
    pub search_query: String,
    pub source_len: usize,
}

pub(crate) struct EngineState<P, A> {
    /// Reset target; set by `initialize`, refreshed by `update_lists`.
    initial_filters: Filters<P, A>,
    /// Last committed configuration; only `apply_filters` overwrites it.
    applied_filters: Filters<P, A>,
    /// In-progress edit; `Filters::empty()` means no pending edit.
    snapshot_filters: Filters<P, A>,
    /// Source collection, sorted eagerly at load time.
    initial_list: FilterableList<P, A>,
    search_query: String,
    has_more_than_default: bool,
    initialized: bool,
    strict_validation: bool,
    emit_tx: mpsc::UnboundedSender<FilterEvent<P, A>>,
}

pub(crate) async fn run_worker<P, A>(
    mut rx: mpsc::UnboundedReceiver<Command<P, A>>,
    mut state: EngineState<P, A>,
) where
    P: Clone + Send + 'static,
    A: FilterableAttributes,
{
    while let Some(command) = rx.recv().await {
        state.handle(command);
    }
    logger::debug(LogTag::Engine, "command channel closed, worker exiting");
}

impl<P, A> EngineState<P, A>
where
    P: Clone + Send + 'static,
    A: FilterableAttributes,
{
    pub(crate) fn new(
        config: &EngineConfig,
        emit_tx: mpsc::UnboundedSender<FilterEvent<P, A>>,
    ) -> Self {
        Self {
            initial_filters: Filters::empty(),
            applied_filters: Filters::empty(),
            snapshot_filters: Filters::empty(),
            initial_list: FilterableList::empty(),
            search_query: String::new(),
            has_more_than_default: false,
            initialized: false,
            strict_validation: config.strict_validation,
            emit_tx,
        }
    }

    fn handle(&mut self, command: Command<P, A>) {
        match command {
            Command::Initialize { filters, list } => self.initialize(filters, list),
            Command::UpdateLists { filters, list } => self.update_lists(filters, list),
            Command::UpdateFilter {
                group_id,
                filter_id,
            } => self.update_filter(group_id, filter_id),
            Command::UpdateSortOrder(sort_order) => self.update_sort_order(sort_order),
            Command::ApplyFilters => self.apply_filters(),
            Command::ApplySearch(query) => self.apply_search(query),
            Command::ResetFilters => self.reset_filters(),
            Command::RevertFilters => self.revert_filters(),
            Command::Stats(reply) => {
                let _ = reply.send(self.stats());
            }
        }
    }

    /// The configuration an edit operates on: the snapshot while one exists,
    /// the applied configuration otherwise.
    fn live_filters(&self) -> &Filters<P, A> {
        if self.snapshot_filters.is_empty() {
            &self.applied_filters
        } else {
            &self.snapshot_filters
        }
    }

    /// Mutators stay a no-op-shaped pass before `initialize`; strict mode
    /// makes the misuse visible in the log.
    fn warn_if_uninitialized(&self) {
        if !self.initialized && self.strict_validation {
            logger::warning(
                LogTag::Engine,
                &FilterEngineError::NotInitialized.to_string(),
            );
        }
    }

    fn initialize(&mut self, incoming: Filters<P, A>, list: FilterableList<P, A>) {
        self.initialized = true;
        self.initial_filters = incoming.clone();
        self.applied_filters = filters::merge(incoming, &self.applied_filters);
        self.initial_list = list.sorted_by(self.applied_filters.sort_order);

        logger::info(
            LogTag::Engine,
            &format!(
                "initialized groups={} preserved_selections={} items={}",
                self.applied_filters.groups.len(),
                self.applied_filters.selected_count(),
                self.initial_list.len()
            ),
        );
    }

    /// Refresh the source data and catalog without the merge; used when only
    /// the underlying data changed, not the filter catalog.
    fn update_lists(&mut self, incoming: Filters<P, A>, list: FilterableList<P, A>) {
        let sort_order = if self.applied_filters.is_empty() {
            incoming.sort_order
        } else {
            self.applied_filters.sort_order
        };
        self.initialized = true;
        self.initial_filters = incoming;
        self.initial_list = list.sorted_by(sort_order);

        logger::debug(
            LogTag::Engine,
            &format!("lists refreshed items={}", self.initial_list.len()),
        );
    }

    fn update_filter(&mut self, group_id: String, filter_id: String) {
        self.warn_if_uninitialized();
        let (next, matched) = filters::toggle(self.live_filters(), &group_id, &filter_id);
        if !matched && self.strict_validation {
            let err = FilterEngineError::InvalidReference {
                group_id: group_id.clone(),
                filter_id: filter_id.clone(),
            };
            logger::warning(LogTag::Toggle, &err.to_string());
        }
        logger::debug(
            LogTag::Toggle,
            &format!("group={} filter={} matched={}", group_id, filter_id, matched),
        );

        self.snapshot_filters = next;
        self.emit_preview();
    }

    fn update_sort_order(&mut self, sort_order: SortOrder) {
        self.warn_if_uninitialized();
        self.snapshot_filters = self.live_filters().with_sort_order(sort_order);
        logger::debug(
            LogTag::Engine,
            &format!("sort order edit direction={}", sort_order.direction.as_str()),
        );
        self.emit_preview();
    }

    fn apply_filters(&mut self) {
        self.warn_if_uninitialized();
        if !self.snapshot_filters.is_empty() {
            self.applied_filters =
                std::mem::replace(&mut self.snapshot_filters, Filters::empty());
            self.has_more_than_default = true;
            logger::debug(
                LogTag::Apply,
                &format!(
                    "snapshot committed selected={}",
                    self.applied_filters.selected_count()
                ),
            );
        }
        self.emit_applied();
    }

    /// A search never commits a pending snapshot; it only adds a text
    /// predicate on top of the applied configuration.
    fn apply_search(&mut self, query: String) {
        self.warn_if_uninitialized();
        logger::debug(LogTag::Search, &format!("query_len={}", query.len()));
        self.search_query = query;
        self.emit_applied();
    }

    fn reset_filters(&mut self) {
        self.warn_if_uninitialized();
        self.applied_filters = self.initial_filters.clone();
        self.snapshot_filters = Filters::empty();
        self.has_more_than_default = false;
        logger::info(LogTag::Engine, "filters reset to initial configuration");
        self.emit_applied();
    }

    /// Discard the snapshot without committing; re-emits the applied
    /// configuration so a dismissed editing surface can restore itself.
    fn revert_filters(&mut self) {
        self.warn_if_uninitialized();
        self.snapshot_filters = Filters::empty();
        self.emit(FilterEvent::Update {
            filters: self.applied_filters.clone(),
        });
    }

    fn emit_preview(&self) {
        self.emit(FilterEvent::Update {
            filters: self.snapshot_filters.clone(),
        });
    }

    fn emit_applied(&self) {
        let result =
            pipeline::run_pipeline(&self.applied_filters, &self.initial_list, &self.search_query);

        logger::debug(
            LogTag::Apply,
            &format!(
                "pipeline rows={} of {} query_len={}",
                result.len(),
                self.initial_list.len(),
                self.search_query.len()
            ),
        );

        if result.is_empty() {
            self.emit(FilterEvent::Empty {
                filters: self.applied_filters.clone(),
                has_more_than_default: self.has_more_than_default,
            });
        } else {
            self.emit(FilterEvent::Apply {
                list: result,
                filters: self.applied_filters.clone(),
                has_more_than_default: self.has_more_than_default,
                updated_at: Utc::now(),
            });
        }
    }

    fn emit(&self, event: FilterEvent<P, A>) {
        // The debounce loop outlives the worker; a send error just means the
        // engine is shutting down.
        let _ = self.emit_tx.send(event);
    }

    fn stats(&self) -> EngineStats {
        EngineStats {
            initialized: self.initialized,
            group_count: self.applied_filters.groups.len(),
            selected_count: self.applied_filters.selected_count(),
            has_snapshot: !self.snapshot_filters.is_empty(),
            has_more_than_default: self.has_more_than_default,
            search_query: self.search_query.clone(),
            source_len: self.initial_list.len(),
        }
    }
}
