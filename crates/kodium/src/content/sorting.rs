use std::cmp::Ordering;

use crate::content::Item;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Sorts items by their publication date.
///
/// The sort is stable, so items published on the same date keep the order
/// they were given in.
pub fn sort_items_by_date<S>(items: &mut [&Item<S>], order: SortOrder) {
    items.sort_by(|a, b| match order {
        SortOrder::Ascending => a.date.cmp(&b.date),
        SortOrder::Descending => b.date.cmp(&a.date),
    });
}

/// Sorts items newest to oldest, breaking ties by path so the result does not
/// depend on the order the items were found in.
pub fn sort_items_for_section<S>(items: &mut [Item<S>]) {
    items.sort_unstable_by(|a, b| match b.date.cmp(&a.date) {
        Ordering::Equal => a.path.cmp(&b.path),
        ord => ord,
    });
}
