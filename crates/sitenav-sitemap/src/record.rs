//! Flat sitemap records as authored in sitemap files.

use serde::Deserialize;

use crate::node::{Group, NodeId};

/// Optional per-node settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeOptions {
    /// Navigation group.
    pub group: Option<Group>,
    /// DOM identifier override (replaces the node name in `nav-<name>`).
    #[serde(alias = "itemId")]
    pub item_id: Option<String>,
}

/// One sitemap entry: `[path, label, id, options]`.
///
/// In YAML:
///
/// ```yaml
/// - [root, Home, 1, {}]
/// - [root.about, About, 2, {group: 1}]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String, NodeId, NodeOptions)")]
pub struct NodeRecord {
    /// Dotted path from the root.
    pub path: String,
    /// Display text.
    pub label: String,
    /// Node identifier.
    pub id: NodeId,
    /// Optional settings.
    pub options: NodeOptions,
}

impl NodeRecord {
    /// Create a record without options.
    pub fn new(path: impl Into<String>, label: impl Into<String>, id: impl Into<NodeId>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            id: id.into(),
            options: NodeOptions::default(),
        }
    }

    /// Set the navigation group.
    #[must_use]
    pub fn with_group(mut self, group: Group) -> Self {
        self.options.group = Some(group);
        self
    }

    /// Dotted path of the parent, `None` for a single-segment path.
    #[must_use]
    pub fn parent_path(&self) -> Option<&str> {
        self.path.rsplit_once('.').map(|(parent, _)| parent)
    }
}

impl From<(String, String, NodeId, NodeOptions)> for NodeRecord {
    fn from((path, label, id, options): (String, String, NodeId, NodeOptions)) -> Self {
        Self {
            path,
            label,
            id,
            options,
        }
    }
}
