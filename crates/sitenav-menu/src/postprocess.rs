//! Positional markers on the top-level item list.

use sitenav_config::ItemMarker;

use crate::item::{FIRST_CHILD, LAST_CHILD, RenderItem};

/// Tag top-level items with their position.
///
/// `FirstLast` marks the first and last items (a single item gets both);
/// `Number` marks every item with `item-N`, counting from 1. Nested items
/// are left alone.
pub fn apply_item_markers(items: &mut [RenderItem], markers: &[ItemMarker]) {
    if markers.contains(&ItemMarker::FirstLast) {
        if let Some(first) = items.first_mut() {
            first.add_marker(FIRST_CHILD);
        }
        if let Some(last) = items.last_mut() {
            last.add_marker(LAST_CHILD);
        }
    }

    if markers.contains(&ItemMarker::Number) {
        for (n, item) in items.iter_mut().enumerate() {
            item.add_marker(&format!("item-{}", n + 1));
        }
    }
}
