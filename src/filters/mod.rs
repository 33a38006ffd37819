//! Filter configuration value types and the pure algebra over them.
//!
//! Everything in this module is side-effect free: `merge` and `toggle` take a
//! configuration and return a new one, the engine decides what to do with it.

mod merge;
mod toggle;
mod types;

pub use merge::merge;
pub use toggle::toggle;
pub use types::{FilterGroup, FilterItem, Filters, SortDirection, SortOrder};
