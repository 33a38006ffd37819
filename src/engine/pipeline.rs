use crate::filterable::{ActionScope, FilterableAttributes, FilterableList};
use crate::filters::{FilterGroup, Filters, SortOrder};

/// Full apply pipeline: group chain, then search, then sort.
pub(crate) fn run_pipeline<P: Clone, A: FilterableAttributes>(
    filters: &Filters<P, A>,
    source: &FilterableList<P, A>,
    query: &str,
) -> FilterableList<P, A> {
    run_chain(filters, source)
        .search(query)
        .sorted_by(filters.sort_order)
}

/// Fold the source list through every group's application rule, in group
/// order.
pub(crate) fn run_chain<P: Clone, A: FilterableAttributes>(
    filters: &Filters<P, A>,
    source: &FilterableList<P, A>,
) -> FilterableList<P, A> {
    filters.groups.iter().fold(source.clone(), |list, group| {
        apply_group(group, list, filters.sort_order)
    })
}

fn apply_group<P: Clone, A: FilterableAttributes>(
    group: &FilterGroup<P, A>,
    list: FilterableList<P, A>,
    sort_order: SortOrder,
) -> FilterableList<P, A> {
    match group {
        FilterGroup::MultipleSelection { group_action, .. } => {
            if !group.has_selection() {
                // Zero checked boxes read as "nothing qualifies", not "no
                // restriction". Single-selection groups below have the
                // opposite convention. Intentional, do not align them.
                FilterableList::empty()
            } else {
                group_action.narrow(&list, sort_order, ActionScope::Group(group))
            }
        }
        FilterGroup::SingleSelection { items, .. } => items
            .iter()
            .filter(|item| item.selected)
            .fold(list, |acc, item| {
                item.action.narrow(&acc, sort_order, ActionScope::Filter(item))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{item, list, multi_group, names, single_group};

    fn source() -> crate::testkit::TestList {
        list(&["a x", "b x", "a y", "c"])
    }

    #[test]
    fn chain_intersects_group_results() {
        let filters = Filters::new(
            vec![
                single_group("g1", vec![item("a", true), item("b", false)], false),
                multi_group("g2", vec![item("x", true), item("y", false)]),
            ],
            SortOrder::default(),
        );

        let result = run_chain(&filters, &source());
        assert_eq!(names(&result), vec!["a x"]);
    }

    #[test]
    fn multiple_selection_with_nothing_selected_empties_everything() {
        let filters = Filters::new(
            vec![
                single_group("g1", vec![item("a", true)], false),
                multi_group("g2", vec![item("x", false), item("y", false)]),
            ],
            SortOrder::default(),
        );

        assert!(run_chain(&filters, &source()).is_empty());
    }

    #[test]
    fn single_selection_with_nothing_selected_passes_through() {
        let filters = Filters::new(
            vec![
                single_group("g1", vec![item("a", false), item("b", false)], false),
                multi_group("g2", vec![item("x", true)]),
            ],
            SortOrder::default(),
        );

        let result = run_chain(&filters, &source());
        assert_eq!(names(&result), vec!["a x", "b x"]);
    }

    #[test]
    fn multiple_selected_items_in_a_single_group_fold_in_item_order() {
        // both "a" and "x"-flavored actions narrow successively
        let filters = Filters::new(
            vec![single_group(
                "g1",
                vec![item("a", true), item("x", true)],
                false,
            )],
            SortOrder::default(),
        );

        let result = run_chain(&filters, &source());
        assert_eq!(names(&result), vec!["a x"]);
    }

    #[test]
    fn pipeline_searches_and_sorts() {
        let filters = Filters::new(
            vec![multi_group("g2", vec![item("x", true), item("y", true)])],
            SortOrder::descending(),
        );

        let result = run_pipeline(&filters, &source(), "a");
        assert_eq!(names(&result), vec!["a y", "a x"]);
    }

    #[test]
    fn empty_groups_mean_no_restriction() {
        let filters = Filters::empty();
        let result = run_pipeline(&filters, &source(), "");
        assert_eq!(result.len(), 4);
    }
}
