//! Menu traversal over the sitemap.
//!
//! Walks the sitemap from the start node and decides, per node, whether it
//! is rendered, how it is highlighted and whether its submenu is expanded.
//!
//! Depth comparisons in this module count path segments including the root
//! (`root` is 1, `root.about` is 2), so a node's column in the URL is
//! `segments - 1`.

use sitenav_config::ItemIdMode;
use sitenav_sitemap::{Group, Sitemap, SitemapNode};

use crate::item::{RenderItem, SELECTED, SELECTED_PATH};
use crate::request::RequestPath;
use crate::url::UrlFactory;

/// Menu settings with every depth resolved for the current request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedSettings {
    /// Only top-level nodes of this group are rendered.
    pub group: Option<Group>,
    /// Nodes deeper than this are not expanded.
    pub max_depth: Option<usize>,
    /// Number of URL segments followed to find the start node.
    pub start_depth: usize,
    /// Render the start node as the first item.
    pub show_root: bool,
    /// Expand every submenu.
    pub open_all: bool,
    /// Number of leading URL segments a rendered node must agree with.
    pub open_all_below: usize,
    /// Path used instead of the request path to decide expansion.
    pub force_url: Option<String>,
    pub item_id: ItemIdMode,
}

/// Builds the item tree for one request.
pub struct MenuBuilder<'a> {
    settings: &'a ResolvedSettings,
    url_factory: &'a dyn UrlFactory,
    /// Raw URL segments (start node descent and branch pruning).
    url_path: &'a [String],
    /// Root name followed by non-empty request segments (highlighting).
    request_path: Vec<&'a str>,
    /// Root name followed by non-empty force URL segments (expansion).
    force_path: Vec<&'a str>,
}

impl<'a> MenuBuilder<'a> {
    pub fn new(
        settings: &'a ResolvedSettings,
        url_factory: &'a dyn UrlFactory,
        sitemap: &'a Sitemap,
        request: &'a RequestPath,
    ) -> Self {
        let root = sitemap.root().name();
        let request_path: Vec<&str> = std::iter::once(root).chain(request.segments()).collect();
        let force_path = match settings.force_url.as_deref() {
            Some(force_url) => std::iter::once(root)
                .chain(force_url.split('/').filter(|s| !s.is_empty()))
                .collect(),
            None => request_path.clone(),
        };

        Self {
            settings,
            url_factory,
            url_path: request.raw_segments(),
            request_path,
            force_path,
        }
    }

    /// Build the top-level items.
    ///
    /// Returns an empty list when the URL does not reach the start depth or
    /// names a segment the sitemap does not have.
    pub fn build(&self, sitemap: &'a Sitemap) -> Vec<RenderItem> {
        let Some(start) = self.start_node(sitemap.root()) else {
            tracing::debug!(
                start_depth = self.settings.start_depth,
                url = ?self.url_path,
                "No start node for request, menu is empty"
            );
            return Vec::new();
        };

        let mut items = Vec::new();
        if self.settings.show_root {
            items.push(self.root_item(start));
        }
        items.extend(self.child_items(start, true));
        items
    }

    /// Follow the first `start_depth` URL segments down from the root.
    fn start_node(&self, root: &'a SitemapNode) -> Option<&'a SitemapNode> {
        let depth = self.settings.start_depth;
        if self.url_path.len() < depth {
            return None;
        }
        self.url_path[..depth]
            .iter()
            .try_fold(root, |node, segment| node.find_child_by_name(segment))
    }

    /// The start node rendered as a sibling of its own children.
    fn root_item(&self, node: &SitemapNode) -> RenderItem {
        let mut item = self.item_for(node);
        if self.request_path.iter().copied().eq(node.segments()) {
            item.add_marker(SELECTED);
            item.add_marker(SELECTED_PATH);
        }
        item
    }

    fn child_items(&self, node: &SitemapNode, top_level: bool) -> Vec<RenderItem> {
        node.children()
            .iter()
            .filter(|child| !top_level || self.in_group(child))
            .filter_map(|child| self.child_item(child))
            .collect()
    }

    fn child_item(&self, node: &SitemapNode) -> Option<RenderItem> {
        let node_path: Vec<&str> = node.segments().collect();

        if !self.settings.open_all && self.leaves_url_branch(&node_path) {
            return None;
        }

        let mut item = self.item_for(node);

        if self.request_path == node_path {
            item.add_marker(SELECTED);
        }
        if is_prefix(&node_path, &self.request_path) {
            item.add_marker(SELECTED_PATH);
        }

        let within_max_depth = self
            .settings
            .max_depth
            .is_none_or(|max| node_path.len() <= max);
        let on_open_branch = self.settings.open_all || is_prefix(&node_path, &self.force_path);
        if within_max_depth && node.has_children() && on_open_branch {
            item.children = self.child_items(node, false);
        }

        Some(item)
    }

    /// Whether the node fails to match one of the first `open_all_below`
    /// URL segments. A node too shallow to reach a column does not match it.
    fn leaves_url_branch(&self, node_path: &[&str]) -> bool {
        self.url_path
            .iter()
            .take(self.settings.open_all_below)
            .enumerate()
            .any(|(column, segment)| node_path.get(column + 1) != Some(&segment.as_str()))
    }

    fn in_group(&self, node: &SitemapNode) -> bool {
        self.settings
            .group
            .is_none_or(|group| node.group() == Some(group))
    }

    fn item_for(&self, node: &SitemapNode) -> RenderItem {
        let mut item = RenderItem::new(node.label(), self.url_factory.url_for(node), node.path());
        if self.settings.item_id == ItemIdMode::Name {
            let name = node.item_id().unwrap_or_else(|| node.name());
            item.dom_id = Some(format!("nav-{name}"));
        }
        item
    }
}

/// Whether `node_path` is a prefix of (or equal to) `path`.
fn is_prefix(node_path: &[&str], path: &[&str]) -> bool {
    path.len() >= node_path.len() && path[..node_path.len()] == *node_path
}
