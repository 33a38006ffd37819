//! Shared fixtures for unit and integration tests.

use std::sync::Arc;

use crate::filterable::{
    ActionScope, FilterableAction, FilterableAttributes, FilterableItem, FilterableList,
};
use crate::filters::{FilterGroup, FilterItem, Filters};

#[derive(Debug, Clone, PartialEq)]
pub struct Attrs {
    pub name: String,
}

impl FilterableAttributes for Attrs {
    fn sort_key(&self) -> String {
        self.name.clone()
    }

    fn search_key(&self) -> String {
        self.name.clone()
    }
}

pub type TestList = FilterableList<u32, Attrs>;
pub type TestFilters = Filters<u32, Attrs>;
pub type TestGroup = FilterGroup<u32, Attrs>;
pub type TestItem = FilterItem<u32, Attrs>;

pub fn list(names: &[&str]) -> TestList {
    FilterableList::new(
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                FilterableItem::new(
                    i as u32,
                    Attrs {
                        name: name.to_string(),
                    },
                )
            })
            .collect(),
    )
}

pub fn names(list: &TestList) -> Vec<String> {
    list.items
        .iter()
        .map(|item| item.attributes.name.clone())
        .collect()
}

/// Keeps list entries whose search key contains the fragment, case-folded.
pub struct KeepContaining(pub String);

impl FilterableAction<u32, Attrs> for KeepContaining {
    fn narrow(
        &self,
        list: &TestList,
        _sort_order: crate::filters::SortOrder,
        _scope: ActionScope<'_, u32, Attrs>,
    ) -> TestList {
        let fragment = self.0.to_lowercase();
        FilterableList::new(
            list.items
                .iter()
                .filter(|item| item.attributes.search_key().to_lowercase().contains(&fragment))
                .cloned()
                .collect(),
        )
    }
}

/// Group action: keeps list entries matching any of the group's selected item
/// names (union semantics, the usual checkbox-group behavior).
pub struct KeepSelectedNames;

impl FilterableAction<u32, Attrs> for KeepSelectedNames {
    fn narrow(
        &self,
        list: &TestList,
        _sort_order: crate::filters::SortOrder,
        scope: ActionScope<'_, u32, Attrs>,
    ) -> TestList {
        let fragments: Vec<String> = match scope {
            ActionScope::Group(group) => group
                .selected_items()
                .into_iter()
                .map(|item| item.name.to_lowercase())
                .collect(),
            ActionScope::Filter(item) => vec![item.name.to_lowercase()],
        };
        FilterableList::new(
            list.items
                .iter()
                .filter(|entry| {
                    let key = entry.attributes.search_key().to_lowercase();
                    fragments.iter().any(|fragment| key.contains(fragment))
                })
                .cloned()
                .collect(),
        )
    }
}

/// A filter item whose action keeps entries containing the item's own id.
pub fn item(id: &str, selected: bool) -> TestItem {
    FilterItem::new(id, id, selected, Arc::new(KeepContaining(id.to_string())))
}

pub fn default_item(id: &str, selected: bool) -> TestItem {
    item(id, selected).with_default(true)
}

pub fn single_group(id: &str, items: Vec<TestItem>, has_default_fallback: bool) -> TestGroup {
    FilterGroup::SingleSelection {
        id: id.to_string(),
        name: id.to_string(),
        items,
        has_default_fallback,
    }
}

pub fn multi_group(id: &str, items: Vec<TestItem>) -> TestGroup {
    FilterGroup::MultipleSelection {
        id: id.to_string(),
        name: id.to_string(),
        items,
        group_action: Arc::new(KeepSelectedNames),
    }
}
