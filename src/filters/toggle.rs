use super::types::{FilterGroup, Filters};

/// Toggle one filter item, producing a new configuration.
///
/// - MultipleSelection: the targeted item's `selected` flag is inverted, all
///   siblings and other groups untouched.
/// - SingleSelection, plain: the targeted item becomes the only selected item
///   in its group.
/// - SingleSelection with default fallback: see [`toggle_with_default`]. The
///   group is guaranteed exactly one selected item afterwards.
///
/// Returns the new configuration and whether the (group_id, filter_id) pair
/// actually resolved to an item. An unresolved pair leaves every group as a
/// plain copy, which preserves the engine's silent no-op contract.
pub fn toggle<P, A>(
    filters: &Filters<P, A>,
    group_id: &str,
    filter_id: &str,
) -> (Filters<P, A>, bool) {
    let mut matched = false;

    let groups = filters
        .groups
        .iter()
        .map(|group| {
            if group.id() != group_id || group.item(filter_id).is_none() {
                return group.clone();
            }
            matched = true;

            match group {
                FilterGroup::MultipleSelection { .. } => group.map_items(|item| {
                    if item.id == filter_id {
                        item.with_selected(!item.selected)
                    } else {
                        item.clone()
                    }
                }),
                FilterGroup::SingleSelection {
                    has_default_fallback,
                    ..
                } => {
                    let default_id = group.default_item().map(|item| item.id.clone());
                    match (*has_default_fallback, default_id) {
                        (true, Some(default_id)) => {
                            toggle_with_default(group, filter_id, &default_id)
                        }
                        // no default item to fall back on, plain exclusive toggle
                        _ => group.map_items(|item| item.with_selected(item.id == filter_id)),
                    }
                }
            }
        })
        .collect();

    (filters.with_groups(groups), matched)
}

/// Default-filter fallback policy for single-selection groups modelling an
/// "Any/All" option. With `D` the default item:
///
/// 1. clicking `D` selects exactly `D`;
/// 2. otherwise the clicked item is inverted and every sibling deselected;
/// 3. an empty result forces `D` selected (selection must never be empty);
/// 4. a selected non-`D` item forces `D` deselected.
fn toggle_with_default<P, A>(
    group: &FilterGroup<P, A>,
    filter_id: &str,
    default_id: &str,
) -> FilterGroup<P, A> {
    if filter_id == default_id {
        return group.map_items(|item| item.with_selected(item.id == default_id));
    }

    let mut toggled = group.map_items(|item| {
        if item.id == filter_id {
            item.with_selected(!item.selected)
        } else {
            item.with_selected(false)
        }
    });

    if !toggled.has_selection() {
        toggled = toggled.map_items(|item| item.with_selected(item.id == default_id));
    } else if toggled
        .items()
        .iter()
        .any(|item| item.selected && item.id != default_id)
    {
        toggled = toggled.map_items(|item| {
            if item.id == default_id {
                item.with_selected(false)
            } else {
                item.clone()
            }
        });
    }

    toggled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::SortOrder;
    use crate::testkit::{default_item, item, multi_group, single_group, TestFilters};

    fn single(selected: &[&str], fallback: bool) -> TestFilters {
        let mut items = vec![default_item("any", selected.contains(&"any"))];
        for id in ["a", "b"] {
            items.push(item(id, selected.contains(&id)));
        }
        Filters::new(
            vec![single_group("g", items, fallback)],
            SortOrder::default(),
        )
    }

    fn selected_in(filters: &TestFilters, group_id: &str) -> Vec<String> {
        filters
            .group(group_id)
            .unwrap()
            .selected_items()
            .into_iter()
            .map(|item| item.id.clone())
            .collect()
    }

    #[test]
    fn multiple_selection_inverts_target_only() {
        let filters = Filters::new(
            vec![multi_group("m", vec![item("x", true), item("y", false)])],
            SortOrder::default(),
        );

        let (toggled, matched) = toggle(&filters, "m", "y");
        assert!(matched);
        assert_eq!(selected_in(&toggled, "m"), vec!["x", "y"]);

        let (toggled, _) = toggle(&toggled, "m", "x");
        assert_eq!(selected_in(&toggled, "m"), vec!["y"]);
    }

    #[test]
    fn single_selection_is_exclusive() {
        let filters = single(&["a"], false);
        let (toggled, matched) = toggle(&filters, "g", "b");
        assert!(matched);
        assert_eq!(selected_in(&toggled, "g"), vec!["b"]);
    }

    #[test]
    fn single_selection_retoggle_keeps_item() {
        // plain rule: clicking the already selected item keeps it selected
        let filters = single(&["a"], false);
        let (toggled, _) = toggle(&filters, "g", "a");
        assert_eq!(selected_in(&toggled, "g"), vec!["a"]);
    }

    #[test]
    fn clicking_default_selects_only_default() {
        let filters = single(&["a"], true);
        let (toggled, _) = toggle(&filters, "g", "any");
        assert_eq!(selected_in(&toggled, "g"), vec!["any"]);
    }

    #[test]
    fn clicking_specific_deselects_default() {
        let filters = single(&["any"], true);
        let (toggled, _) = toggle(&filters, "g", "a");
        assert_eq!(selected_in(&toggled, "g"), vec!["a"]);
    }

    #[test]
    fn deselecting_last_item_falls_back_to_default() {
        let filters = single(&["a"], true);
        let (toggled, _) = toggle(&filters, "g", "a");
        assert_eq!(selected_in(&toggled, "g"), vec!["any"]);
    }

    #[test]
    fn fallback_group_never_empties_under_any_sequence() {
        let mut filters = single(&["any"], true);
        for id in ["a", "b", "a", "any", "b", "b", "a", "a"] {
            let (next, _) = toggle(&filters, "g", id);
            filters = next;
            let selected = selected_in(&filters, "g");
            assert_eq!(selected.len(), 1, "after toggling {id}: {selected:?}");
        }
    }

    #[test]
    fn unknown_ids_are_a_no_op_copy() {
        let filters = single(&["a"], true);

        let (toggled, matched) = toggle(&filters, "nope", "a");
        assert!(!matched);
        assert_eq!(toggled, filters);

        let (toggled, matched) = toggle(&filters, "g", "nope");
        assert!(!matched);
        assert_eq!(toggled, filters);
    }

    #[test]
    fn other_groups_are_untouched() {
        let filters = Filters::new(
            vec![
                single_group("g", vec![item("a", true), item("b", false)], false),
                multi_group("m", vec![item("x", true)]),
            ],
            SortOrder::default(),
        );

        let (toggled, _) = toggle(&filters, "g", "b");
        assert_eq!(selected_in(&toggled, "m"), vec!["x"]);
    }
}
