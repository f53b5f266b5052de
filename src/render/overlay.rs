//! The overlay container: the one `<g>` under the map root that all
//! generated content is mounted in.
//!
//! Removing it is enough to reset rendering, so a re-render never leaks or
//! duplicates earlier output.

use tracing::debug;

use crate::svg::Element;

/// Returns the overlay container, creating an empty one as the last child of
/// `map_root` if it does not exist.
pub fn ensure_overlay<'a>(map_root: &'a mut Element, overlay_id: &str) -> &'a mut Element {
    map_root.child_by_id_or_insert_with(overlay_id, || {
        debug!(overlay_id, "creating overlay container");
        Element::new("g").with_attr("id", overlay_id)
    })
}

/// Removes the overlay container and everything drawn in it. Does nothing
/// if there is no overlay.
pub fn clear_overlay(map_root: &mut Element, overlay_id: &str) {
    let removed = map_root.remove_children_by_id(overlay_id);
    if removed > 0 {
        debug!(overlay_id, "cleared overlay container");
    }
}

/// The overlay container, if one exists.
pub fn overlay<'a>(map_root: &'a Element, overlay_id: &str) -> Option<&'a Element> {
    map_root.child_by_id(overlay_id)
}
