//! Rendered menu tree.

use serde::Serialize;

/// Marker for the item whose path equals the request path.
pub const SELECTED: &str = "selected";
/// Marker for the selected item and its ancestors.
pub const SELECTED_PATH: &str = "selected-path";
pub const FIRST_CHILD: &str = "first-child";
pub const LAST_CHILD: &str = "last-child";

/// One menu entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderItem {
    /// Display text.
    pub label: String,
    /// Link target.
    pub href: String,
    /// Dotted sitemap path of the source node.
    pub path: String,
    /// Class tokens, in the order they were added.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<String>,
    /// DOM identifier (e.g. `nav-gallery`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dom_id: Option<String>,
    /// Expanded submenu.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderItem>,
}

impl RenderItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            path: path.into(),
            markers: Vec::new(),
            dom_id: None,
            children: Vec::new(),
        }
    }

    /// Add a class token unless already present.
    pub fn add_marker(&mut self, marker: &str) {
        add_marker(&mut self.markers, marker);
    }

    #[must_use]
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }
}

/// Rendered menu: the outer list and its items.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Menu {
    /// Class on the outer list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    pub items: Vec<RenderItem>,
}

impl Menu {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Append `marker` to a class token list, keeping tokens unique.
pub fn add_marker(markers: &mut Vec<String>, marker: &str) {
    if !markers.iter().any(|m| m == marker) {
        markers.push(marker.to_owned());
    }
}
