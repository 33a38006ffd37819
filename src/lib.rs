//! filterflow — snapshot/commit/revert filter, sort and search engine.
//!
//! A reusable state machine for list-driven UIs: multiple filter groups
//! (single- or multiple-selection), a sort order and a free-text search, with
//! "edit in a detached surface, then commit or cancel" semantics that can
//! never corrupt the last-applied state. Mutators are fire-and-forget and
//! fully serialized; results arrive on a debounced, multicast, replay-1
//! event stream.
//!
//! ```no_run
//! use std::sync::Arc;
//! use filterflow::config::EngineConfig;
//! use filterflow::engine::FilterEngine;
//! use filterflow::filterable::{
//!     ActionScope, FilterableAction, FilterableAttributes, FilterableItem, FilterableList,
//! };
//! use filterflow::filters::{FilterGroup, FilterItem, Filters, SortOrder};
//!
//! #[derive(Clone)]
//! struct DocAttrs { title: String }
//!
//! impl FilterableAttributes for DocAttrs {
//!     fn sort_key(&self) -> String { self.title.clone() }
//!     fn search_key(&self) -> String { self.title.clone() }
//! }
//!
//! struct ByKind(String);
//!
//! impl FilterableAction<u64, DocAttrs> for ByKind {
//!     fn narrow(
//!         &self,
//!         list: &FilterableList<u64, DocAttrs>,
//!         _sort_order: SortOrder,
//!         _scope: ActionScope<'_, u64, DocAttrs>,
//!     ) -> FilterableList<u64, DocAttrs> {
//!         list.clone() // real callers narrow here
//!     }
//! }
//!
//! # async fn demo() {
//! let engine: FilterEngine<u64, DocAttrs> = FilterEngine::new(EngineConfig::default());
//! let mut events = engine.subscribe();
//!
//! let catalog = Filters::new(
//!     vec![FilterGroup::SingleSelection {
//!         id: "kind".into(),
//!         name: "Kind".into(),
//!         items: vec![FilterItem::new("all", "All", true, Arc::new(ByKind("all".into())))
//!             .with_default(true)],
//!         has_default_fallback: true,
//!     }],
//!     SortOrder::default(),
//! );
//! engine.initialize(catalog, FilterableList::empty());
//! engine.apply_filters();
//!
//! while let Some(event) = events.recv().await {
//!     println!("{}", event.kind());
//! }
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod errors;
pub mod filterable;
pub mod filters;
pub mod logger;

#[cfg(test)]
pub(crate) mod testkit;

pub use config::EngineConfig;
pub use engine::{EngineStats, EventSubscription, FilterEngine, FilterEvent};
pub use errors::FilterEngineError;
pub use filterable::{
    ActionScope, FilterableAction, FilterableAttributes, FilterableItem, FilterableList,
};
pub use filters::{FilterGroup, FilterItem, Filters, SortDirection, SortOrder};
