//! Frozen sitemap and its builder.
//!
//! # Architecture
//!
//! The tree is assembled once at startup by [`SitemapBuilder`] from an
//! ordered list of [`NodeRecord`]s and then frozen into a [`Sitemap`].
//! A `Sitemap` only hands out shared references, so it can be wrapped in
//! an `Arc` and read from any number of request handlers without locking.

use std::path::Path;

use crate::node::{Group, NodeId, SitemapNode};
use crate::record::NodeRecord;

/// Error type for sitemap construction.
#[derive(Debug, thiserror::Error)]
pub enum SitemapError {
    /// No records supplied.
    #[error("Sitemap has no records")]
    Empty,
    /// Root record path must be a single segment.
    #[error("Root record path must be a single segment, got '{0}'")]
    InvalidRootPath(String),
    /// A record's parent has not been defined by an earlier record.
    #[error(
        "Parent '{parent}' of '{path}' not found (records must list every parent before its children)"
    )]
    MissingParent {
        /// Path of the offending record.
        path: String,
        /// Parent path that could not be resolved.
        parent: String,
    },
    /// I/O error reading a sitemap file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error.
    #[error("Invalid sitemap YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Read-only sitemap tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sitemap {
    root: SitemapNode,
}

impl Sitemap {
    /// Freeze a hand-assembled tree.
    #[must_use]
    pub fn new(root: SitemapNode) -> Self {
        Self { root }
    }

    /// Build from ordered records. See [`SitemapBuilder`].
    ///
    /// # Errors
    ///
    /// Returns an error if the records are empty, out of order, or the root
    /// path has more than one segment.
    pub fn from_records(records: impl IntoIterator<Item = NodeRecord>) -> Result<Self, SitemapError> {
        let mut records = records.into_iter();
        let root = records.next().ok_or(SitemapError::Empty)?;
        let mut builder = SitemapBuilder::new(root)?;
        for record in records {
            builder.add(record)?;
        }
        Ok(builder.build())
    }

    /// Parse a YAML list of `[path, label, id, options]` records.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the records are invalid.
    pub fn from_yaml(content: &str) -> Result<Self, SitemapError> {
        let records: Vec<NodeRecord> = serde_yaml::from_str(content)?;
        Self::from_records(records)
    }

    /// Load a YAML sitemap file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn load(path: &Path) -> Result<Self, SitemapError> {
        let content = std::fs::read_to_string(path)?;
        let sitemap = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            nodes = sitemap.node_count(),
            "Loaded sitemap"
        );
        Ok(sitemap)
    }

    #[must_use]
    pub fn root(&self) -> &SitemapNode {
        &self.root
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Find a node by id, including the root.
    #[must_use]
    pub fn find_by_id(&self, id: &NodeId) -> Option<&SitemapNode> {
        if self.root.id() == id {
            return Some(&self.root);
        }
        self.root.find_descendant_by_id(id)
    }

    /// Find a node by dotted or absolute URL path.
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<&SitemapNode> {
        self.root.find_descendant_by_path(path)
    }

    /// Whether any node belongs to `group`.
    #[must_use]
    pub fn contains_group(&self, group: Group) -> bool {
        self.root.contains_group(group)
    }

    /// Nodes shown by a flat navigation for `current_path`.
    ///
    /// Returns the root followed by, for each node along `current_path`,
    /// its children in `group`. Descent stops at the end of the path or at
    /// the first segment with no matching node.
    ///
    /// # Arguments
    ///
    /// * `current_path` - Segments starting with the root name (e.g. `["root", "about"]`)
    /// * `group` - Group to include (`None` matches ungrouped nodes)
    #[must_use]
    pub fn visible_items(&self, current_path: &[&str], group: Option<Group>) -> Vec<&SitemapNode> {
        let mut items = vec![&self.root];
        let mut node = Some(&self.root);

        while let Some(current) = node {
            items.extend(current.children().iter().filter(|c| c.group() == group));

            let depth = current.depth() + 1;
            node = current_path
                .get(depth)
                .and_then(|segment| current.find_child_by_name(segment));
        }

        items
    }
}

/// Builder for [`Sitemap`] from ordered records.
///
/// Records must be supplied parents-first: each record's parent path (all
/// but its last segment) has to resolve to a node added earlier.
pub struct SitemapBuilder {
    root: SitemapNode,
}

impl SitemapBuilder {
    /// Start a tree from its root record.
    ///
    /// # Errors
    ///
    /// Returns `SitemapError::InvalidRootPath` if the root path is dotted or empty.
    pub fn new(root: NodeRecord) -> Result<Self, SitemapError> {
        if root.path.is_empty() || root.parent_path().is_some() {
            return Err(SitemapError::InvalidRootPath(root.path));
        }
        Ok(Self {
            root: node_from_record(root),
        })
    }

    /// Attach a record under its parent.
    ///
    /// # Errors
    ///
    /// Returns `SitemapError::MissingParent` if the parent path is not in the
    /// tree yet.
    pub fn add(&mut self, record: NodeRecord) -> Result<(), SitemapError> {
        let root_name = self.root.name().to_owned();
        let parent_path = record.parent_path().unwrap_or_default().to_owned();

        let within_root = parent_path == root_name
            || parent_path
                .strip_prefix(root_name.as_str())
                .is_some_and(|rest| rest.starts_with('.'));
        let parent = if within_root {
            self.root.find_descendant_by_path_mut(&parent_path)
        } else {
            None
        };

        let Some(parent) = parent else {
            return Err(SitemapError::MissingParent {
                path: record.path,
                parent: parent_path,
            });
        };
        parent.add_child(node_from_record(record));
        Ok(())
    }

    /// Freeze the tree.
    #[must_use]
    pub fn build(self) -> Sitemap {
        tracing::debug!(nodes = self.root.node_count(), "Sitemap built");
        Sitemap::new(self.root)
    }
}

fn node_from_record(record: NodeRecord) -> SitemapNode {
    SitemapNode::new(record.path, record.label, record.id)
        .with_group(record.options.group)
        .with_item_id(record.options.item_id)
}
