//! Sitemap tree nodes.
//!
//! A [`SitemapNode`] is identified within its tree by a dotted path of
//! segment names starting at the root (e.g. `root.about.team`). The last
//! segment is the node's name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Navigation group a node belongs to (e.g. 1 for primary, 2 for secondary).
pub type Group = i64;

/// Opaque node identifier.
///
/// Sitemap files may use integers or strings; both are kept as text.
/// Uniqueness within a tree is the author's responsibility.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawNodeId", into = "String")]
pub struct NodeId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNodeId {
    Number(i64),
    Text(String),
}

impl From<RawNodeId> for NodeId {
    fn from(raw: RawNodeId) -> Self {
        match raw {
            RawNodeId::Number(n) => Self(n.to_string()),
            RawNodeId::Text(s) => Self(s),
        }
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl NodeId {
    /// Identifier as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A node in the sitemap tree.
///
/// Children are kept in insertion order, which is also their rendering order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SitemapNode {
    id: NodeId,
    path: String,
    label: String,
    group: Option<Group>,
    item_id: Option<String>,
    children: Vec<SitemapNode>,
}

impl SitemapNode {
    /// Create a leaf node.
    ///
    /// # Arguments
    ///
    /// * `path` - Dotted path from the root (e.g. "root.gallery")
    /// * `label` - Display text
    /// * `id` - Node identifier
    pub fn new(path: impl Into<String>, label: impl Into<String>, id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            label: label.into(),
            group: None,
            item_id: None,
            children: Vec::new(),
        }
    }

    /// Set the navigation group.
    #[must_use]
    pub fn with_group(mut self, group: Option<Group>) -> Self {
        self.group = group;
        self
    }

    /// Set the DOM identifier override.
    #[must_use]
    pub fn with_item_id(mut self, item_id: Option<String>) -> Self {
        self.item_id = item_id;
        self
    }

    #[must_use]
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Full dotted path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn group(&self) -> Option<Group> {
        self.group
    }

    /// DOM identifier override from the sitemap `itemId` option.
    #[must_use]
    pub fn item_id(&self) -> Option<&str> {
        self.item_id.as_deref()
    }

    #[must_use]
    pub fn children(&self) -> &[SitemapNode] {
        &self.children
    }

    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Last segment of the path.
    #[must_use]
    pub fn name(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }

    /// Path segments from the root down to this node.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('.')
    }

    /// Distance from the root (the root itself is at depth 0).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.matches('.').count()
    }

    /// Replace the last path segment.
    ///
    /// Descendant paths are not rewritten, so only rename nodes that have
    /// no children yet.
    pub fn rename(&mut self, new_name: &str) {
        self.path = match self.path.rsplit_once('.') {
            Some((parent, _)) => format!("{parent}.{new_name}"),
            None => new_name.to_owned(),
        };
    }

    /// Append a child. Duplicate names are allowed; name lookups return the first.
    pub fn add_child(&mut self, child: SitemapNode) {
        self.children.push(child);
    }

    /// Depth-first search of the whole subtree (excluding `self`) by id.
    #[must_use]
    pub fn find_descendant_by_id(&self, id: &NodeId) -> Option<&SitemapNode> {
        for child in &self.children {
            if &child.id == id {
                return Some(child);
            }
            if let Some(found) = child.find_descendant_by_id(id) {
                return Some(found);
            }
        }
        None
    }

    /// Find an immediate child by name.
    #[must_use]
    pub fn find_child_by_name(&self, name: &str) -> Option<&SitemapNode> {
        self.children.iter().find(|child| child.name() == name)
    }

    /// Find a node by dotted path (`root.about.team`) or absolute URL path
    /// (`/about/team`).
    ///
    /// The first segment of a dotted path names `self` and is not compared.
    /// A single-segment path (including `/`) resolves to `self`.
    #[must_use]
    pub fn find_descendant_by_path(&self, path: &str) -> Option<&SitemapNode> {
        let segments = lookup_segments(path);
        segments
            .iter()
            .skip(1)
            .try_fold(self, |node, segment| node.find_child_by_name(segment))
    }

    /// Mutable counterpart of [`find_descendant_by_path`](Self::find_descendant_by_path),
    /// used while the tree is being assembled.
    pub(crate) fn find_descendant_by_path_mut(&mut self, path: &str) -> Option<&mut SitemapNode> {
        let segments = lookup_segments(path);
        let mut node = self;
        for segment in segments.iter().skip(1) {
            let idx = node
                .children
                .iter()
                .position(|child| child.name() == *segment)?;
            node = &mut node.children[idx];
        }
        Some(node)
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(SitemapNode::node_count)
            .sum::<usize>()
    }

    /// Whether any node in this subtree belongs to `group`.
    #[must_use]
    pub fn contains_group(&self, group: Group) -> bool {
        self.group == Some(group) || self.children.iter().any(|c| c.contains_group(group))
    }
}

/// Split a lookup path into segments.
///
/// Absolute URL paths get an implicit leading root segment.
fn lookup_segments(path: &str) -> Vec<&str> {
    if let Some(url_path) = path.strip_prefix('/') {
        std::iter::once("root")
            .chain(url_path.split('/').filter(|s| !s.is_empty()))
            .collect()
    } else {
        path.split('.').collect()
    }
}
