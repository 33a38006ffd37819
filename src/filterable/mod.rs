//! Source collection wrapper and the strategy seam towards the caller.
//!
//! The engine never inspects payloads directly: sorting and searching go
//! through [`FilterableAttributes`], narrowing goes through caller-supplied
//! [`FilterableAction`] strategies attached to filter items and groups.

use crate::filters::{FilterGroup, FilterItem, SortDirection, SortOrder};

/// Attribute accessors the engine can sort and search on.
pub trait FilterableAttributes: Clone + Send + Sync + 'static {
    /// Key used for ordering; compared case-folded.
    fn sort_key(&self) -> String;

    /// Target of the case-insensitive substring search.
    fn search_key(&self) -> String;
}

/// A caller-owned payload paired with the attributes the engine operates on.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterableItem<P, A> {
    pub payload: P,
    pub attributes: A,
}

impl<P, A> FilterableItem<P, A> {
    pub fn new(payload: P, attributes: A) -> Self {
        Self {
            payload,
            attributes,
        }
    }
}

/// The unfiltered, unsorted source collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterableList<P, A> {
    pub items: Vec<FilterableItem<P, A>>,
}

impl<P, A> FilterableList<P, A> {
    pub fn new(items: Vec<FilterableItem<P, A>>) -> Self {
        Self { items }
    }

    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<P, A> Default for FilterableList<P, A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P: Clone, A: FilterableAttributes> FilterableList<P, A> {
    /// New list ordered by the case-folded sort key.
    pub fn sorted_by(&self, sort_order: SortOrder) -> Self {
        let mut items = self.items.clone();
        items.sort_by(|a, b| {
            let lhs = a.attributes.sort_key().to_lowercase();
            let rhs = b.attributes.sort_key().to_lowercase();
            match sort_order.direction {
                SortDirection::Ascending => lhs.cmp(&rhs),
                SortDirection::Descending => rhs.cmp(&lhs),
            }
        });
        Self { items }
    }

    /// Case-insensitive substring match against the search key. A blank query
    /// matches everything.
    pub fn search(&self, query: &str) -> Self {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.clone();
        }
        Self {
            items: self
                .items
                .iter()
                .filter(|item| item.attributes.search_key().to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        }
    }
}

/// Identifies which filter item or group an action is being applied for.
pub enum ActionScope<'a, P, A> {
    Filter(&'a FilterItem<P, A>),
    Group(&'a FilterGroup<P, A>),
}

/// Caller-supplied strategy that narrows a list given the active filter or
/// group and the current sort order. Pure: no I/O, no side effects.
pub trait FilterableAction<P, A>: Send + Sync {
    fn narrow(
        &self,
        list: &FilterableList<P, A>,
        sort_order: SortOrder,
        scope: ActionScope<'_, P, A>,
    ) -> FilterableList<P, A>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Attrs(String);

    impl FilterableAttributes for Attrs {
        fn sort_key(&self) -> String {
            self.0.clone()
        }

        fn search_key(&self) -> String {
            self.0.clone()
        }
    }

    fn list(names: &[&str]) -> FilterableList<u32, Attrs> {
        FilterableList::new(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| FilterableItem::new(i as u32, Attrs(name.to_string())))
                .collect(),
        )
    }

    #[test]
    fn sorted_by_is_case_folded() {
        let sorted = list(&["banana", "Apple", "cherry"]).sorted_by(SortOrder::ascending());
        let names: Vec<String> = sorted
            .items
            .iter()
            .map(|item| item.attributes.0.clone())
            .collect();
        assert_eq!(names, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn sorted_by_descending_reverses() {
        let sorted = list(&["banana", "Apple", "cherry"]).sorted_by(SortOrder::descending());
        let names: Vec<String> = sorted
            .items
            .iter()
            .map(|item| item.attributes.0.clone())
            .collect();
        assert_eq!(names, vec!["cherry", "banana", "Apple"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let result = list(&["John Doe", "Jane Roe"]).search("DOE");
        assert_eq!(result.len(), 1);
        assert_eq!(result.items[0].attributes.0, "John Doe");
    }

    #[test]
    fn blank_search_matches_everything() {
        let source = list(&["John Doe", "Jane Roe"]);
        assert_eq!(source.search("   ").len(), 2);
        assert_eq!(source.search("").len(), 2);
    }
}
