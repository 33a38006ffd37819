use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::filterable::FilterableAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "desc" => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }
}

/// Active sort order for the source collection.
///
/// `is_default` marks the order the engine falls back to on reset; it plays no
/// part in comparisons beyond being carried along with the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub direction: SortDirection,
    pub is_default: bool,
}

impl SortOrder {
    pub fn ascending() -> Self {
        Self {
            direction: SortDirection::Ascending,
            is_default: false,
        }
    }

    pub fn descending() -> Self {
        Self {
            direction: SortDirection::Descending,
            is_default: false,
        }
    }

    pub fn with_default(mut self, flag: bool) -> Self {
        self.is_default = flag;
        self
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            direction: SortDirection::Ascending,
            is_default: true,
        }
    }
}

/// One selectable option inside a filter group.
///
/// The `action` is the caller-supplied strategy invoked by the apply pipeline;
/// it is identity-opaque and ignored by equality comparisons.
pub struct FilterItem<P, A> {
    pub id: String,
    pub name: String,
    pub selected: bool,
    pub is_default: bool,
    pub action: Arc<dyn FilterableAction<P, A>>,
}

impl<P, A> FilterItem<P, A> {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        selected: bool,
        action: Arc<dyn FilterableAction<P, A>>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            selected,
            is_default: false,
            action,
        }
    }

    pub fn with_default(mut self, flag: bool) -> Self {
        self.is_default = flag;
        self
    }

    pub fn with_selected(&self, selected: bool) -> Self {
        let mut item = self.clone();
        item.selected = selected;
        item
    }
}

impl<P, A> Clone for FilterItem<P, A> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            selected: self.selected,
            is_default: self.is_default,
            action: Arc::clone(&self.action),
        }
    }
}

impl<P, A> fmt::Debug for FilterItem<P, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterItem")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("selected", &self.selected)
            .field("is_default", &self.is_default)
            .finish_non_exhaustive()
    }
}

impl<P, A> PartialEq for FilterItem<P, A> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.selected == other.selected
            && self.is_default == other.is_default
    }
}

/// A named set of mutually related options with a selection discipline.
///
/// `SingleSelection` admits at most one selected item once a toggle resolves;
/// `MultipleSelection` admits any number, including zero. The two divergent
/// toggle semantics of single-selection groups (plain exclusive toggle vs
/// default-item fallback) are one configurable policy via
/// `has_default_fallback`.
pub enum FilterGroup<P, A> {
    SingleSelection {
        id: String,
        name: String,
        items: Vec<FilterItem<P, A>>,
        has_default_fallback: bool,
    },
    MultipleSelection {
        id: String,
        name: String,
        items: Vec<FilterItem<P, A>>,
        group_action: Arc<dyn FilterableAction<P, A>>,
    },
}

impl<P, A> FilterGroup<P, A> {
    pub fn id(&self) -> &str {
        match self {
            FilterGroup::SingleSelection { id, .. } => id,
            FilterGroup::MultipleSelection { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            FilterGroup::SingleSelection { name, .. } => name,
            FilterGroup::MultipleSelection { name, .. } => name,
        }
    }

    pub fn items(&self) -> &[FilterItem<P, A>] {
        match self {
            FilterGroup::SingleSelection { items, .. } => items,
            FilterGroup::MultipleSelection { items, .. } => items,
        }
    }

    pub fn item(&self, filter_id: &str) -> Option<&FilterItem<P, A>> {
        self.items().iter().find(|item| item.id == filter_id)
    }

    pub fn selected_items(&self) -> Vec<&FilterItem<P, A>> {
        self.items().iter().filter(|item| item.selected).collect()
    }

    pub fn has_selection(&self) -> bool {
        self.items().iter().any(|item| item.selected)
    }

    pub fn default_item(&self) -> Option<&FilterItem<P, A>> {
        self.items().iter().find(|item| item.is_default)
    }

    /// Rebuild the group with a new item vector, keeping the variant shell.
    pub(crate) fn with_items(&self, items: Vec<FilterItem<P, A>>) -> Self {
        match self {
            FilterGroup::SingleSelection {
                id,
                name,
                has_default_fallback,
                ..
            } => FilterGroup::SingleSelection {
                id: id.clone(),
                name: name.clone(),
                items,
                has_default_fallback: *has_default_fallback,
            },
            FilterGroup::MultipleSelection {
                id,
                name,
                group_action,
                ..
            } => FilterGroup::MultipleSelection {
                id: id.clone(),
                name: name.clone(),
                items,
                group_action: Arc::clone(group_action),
            },
        }
    }

    pub(crate) fn map_items<F>(&self, f: F) -> Self
    where
        F: Fn(&FilterItem<P, A>) -> FilterItem<P, A>,
    {
        self.with_items(self.items().iter().map(f).collect())
    }
}

impl<P, A> Clone for FilterGroup<P, A> {
    fn clone(&self) -> Self {
        self.with_items(self.items().to_vec())
    }
}

impl<P, A> fmt::Debug for FilterGroup<P, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self {
            FilterGroup::SingleSelection { .. } => "SingleSelection",
            FilterGroup::MultipleSelection { .. } => "MultipleSelection",
        };
        f.debug_struct(variant)
            .field("id", &self.id())
            .field("name", &self.name())
            .field("items", &self.items())
            .finish_non_exhaustive()
    }
}

impl<P, A> PartialEq for FilterGroup<P, A> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                FilterGroup::SingleSelection {
                    id: a_id,
                    name: a_name,
                    items: a_items,
                    has_default_fallback: a_flag,
                },
                FilterGroup::SingleSelection {
                    id: b_id,
                    name: b_name,
                    items: b_items,
                    has_default_fallback: b_flag,
                },
            ) => a_id == b_id && a_name == b_name && a_items == b_items && a_flag == b_flag,
            (
                FilterGroup::MultipleSelection {
                    id: a_id,
                    name: a_name,
                    items: a_items,
                    ..
                },
                FilterGroup::MultipleSelection {
                    id: b_id,
                    name: b_name,
                    items: b_items,
                    ..
                },
            ) => a_id == b_id && a_name == b_name && a_items == b_items,
            _ => false,
        }
    }
}

/// The unit of "current filter configuration": an ordered set of groups plus
/// the active sort order. Value semantics throughout; every mutation in the
/// engine produces a new `Filters`, never an in-place edit.
///
/// `Filters::empty()` doubles as the "no pending snapshot" sentinel.
pub struct Filters<P, A> {
    pub groups: Vec<FilterGroup<P, A>>,
    pub sort_order: SortOrder,
}

impl<P, A> Filters<P, A> {
    pub fn new(groups: Vec<FilterGroup<P, A>>, sort_order: SortOrder) -> Self {
        Self { groups, sort_order }
    }

    pub fn empty() -> Self {
        Self {
            groups: Vec::new(),
            sort_order: SortOrder::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group(&self, group_id: &str) -> Option<&FilterGroup<P, A>> {
        self.groups.iter().find(|group| group.id() == group_id)
    }

    pub fn with_sort_order(&self, sort_order: SortOrder) -> Self {
        Self {
            groups: self.groups.clone(),
            sort_order,
        }
    }

    pub fn with_groups(&self, groups: Vec<FilterGroup<P, A>>) -> Self {
        Self {
            groups,
            sort_order: self.sort_order,
        }
    }

    /// (group_id, filter_id) pairs of every selected item, in group order.
    pub fn selected_ids(&self) -> Vec<(String, String)> {
        self.groups
            .iter()
            .flat_map(|group| {
                group
                    .selected_items()
                    .into_iter()
                    .map(|item| (group.id().to_string(), item.id.clone()))
            })
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.groups
            .iter()
            .map(|group| group.selected_items().len())
            .sum()
    }
}

impl<P, A> Clone for Filters<P, A> {
    fn clone(&self) -> Self {
        Self {
            groups: self.groups.clone(),
            sort_order: self.sort_order,
        }
    }
}

impl<P, A> fmt::Debug for Filters<P, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filters")
            .field("groups", &self.groups)
            .field("sort_order", &self.sort_order)
            .finish()
    }
}

impl<P, A> PartialEq for Filters<P, A> {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups && self.sort_order == other.sort_order
    }
}
