use super::types::Filters;

/// Merge an incoming filter catalog with the previously applied configuration.
///
/// Group by group (matched by id): a matched group takes the incoming group's
/// items but copies `selected` from the matching existing item (matched by
/// item id). Items with no prior match keep the incoming default; groups with
/// no prior match pass through as-is. The incoming sort order wins.
///
/// This is what keeps user choices alive when the filter catalog itself is
/// reloaded (e.g. changed server-side) while the user has selections applied.
pub fn merge<P, A>(incoming: Filters<P, A>, existing: &Filters<P, A>) -> Filters<P, A> {
    if existing.is_empty() {
        return incoming;
    }

    let groups = incoming
        .groups
        .iter()
        .map(|group| match existing.group(group.id()) {
            Some(prev) => group.map_items(|item| match prev.item(&item.id) {
                Some(prev_item) => item.with_selected(prev_item.selected),
                None => item.clone(),
            }),
            None => group.clone(),
        })
        .collect();

    Filters::new(groups, incoming.sort_order)
}
