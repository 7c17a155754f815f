//! Resolution of symbolic depths against a request.
//!
//! Depths count path segments below the sitemap root: the root is at depth
//! 0, `/about` is at depth 1.

use sitenav_config::{DepthAnchor, DepthSpec};
use sitenav_sitemap::{Group, Sitemap};

use crate::request::RequestPath;

/// Error type for depth resolution.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DepthError {
    /// The resolved depth is below the root.
    #[error("Depth '{spec}' resolves to {depth}, which is above the sitemap root")]
    NegativeDepth { spec: String, depth: i64 },
    /// Group anchor names a group no sitemap node belongs to.
    #[error("Depth anchor refers to group {0}, which no sitemap node belongs to")]
    UnknownGroup(Group),
    /// The start depth is anchored on itself.
    #[error("Start depth '{0}' cannot be relative to itself")]
    SelfReferentialStartDepth(String),
}

/// Resolves [`DepthSpec`]s to absolute depths for one request.
pub struct DepthResolver<'a> {
    sitemap: &'a Sitemap,
    request: &'a RequestPath,
    start_depth: DepthSpec,
}

impl<'a> DepthResolver<'a> {
    /// # Arguments
    ///
    /// * `start_depth` - The menu's start depth, target of `startdepth+N` anchors
    pub fn new(sitemap: &'a Sitemap, request: &'a RequestPath, start_depth: DepthSpec) -> Self {
        Self {
            sitemap,
            request,
            start_depth,
        }
    }

    /// Resolve the menu's start depth.
    ///
    /// # Errors
    ///
    /// Returns an error if the start depth is anchored on itself, names an
    /// unknown group, or resolves below zero.
    pub fn start_depth(&self) -> Result<usize, DepthError> {
        let depth = self.resolve_signed(&self.start_depth, true)?;
        non_negative(&self.start_depth, depth)
    }

    /// Resolve any depth spec.
    ///
    /// # Errors
    ///
    /// Returns an error if `spec` names an unknown group, the start depth
    /// it refers to is invalid, or the result is negative.
    pub fn resolve(&self, spec: &DepthSpec) -> Result<usize, DepthError> {
        let depth = self.resolve_signed(spec, false)?;
        non_negative(spec, depth)
    }

    fn resolve_signed(&self, spec: &DepthSpec, resolving_start: bool) -> Result<i64, DepthError> {
        let (anchor, offset) = match *spec {
            DepthSpec::Absolute(depth) => return Ok(depth),
            DepthSpec::Relative { anchor, offset } => (anchor, offset),
        };

        let base = match anchor {
            DepthAnchor::Here => to_i64(self.request.depth()),
            DepthAnchor::StartDepth => {
                if resolving_start {
                    return Err(DepthError::SelfReferentialStartDepth(
                        self.start_depth.to_string(),
                    ));
                }
                self.resolve_signed(&self.start_depth, true)?
            }
            DepthAnchor::Group(group) => to_i64(self.group_depth(group)?),
        };

        Ok(base.saturating_add(offset))
    }

    /// Depth of the deepest request-path node reachable through nodes of `group`.
    fn group_depth(&self, group: Group) -> Result<usize, DepthError> {
        if !self.sitemap.contains_group(group) {
            return Err(DepthError::UnknownGroup(group));
        }

        let mut node = self.sitemap.root();
        let mut depth = 0;
        for segment in self.request.segments() {
            match node.find_child_by_name(segment) {
                Some(child) if child.group() == Some(group) => {
                    node = child;
                    depth += 1;
                }
                _ => break,
            }
        }
        Ok(depth)
    }
}

fn non_negative(spec: &DepthSpec, depth: i64) -> Result<usize, DepthError> {
    usize::try_from(depth).map_err(|_| DepthError::NegativeDepth {
        spec: spec.to_string(),
        depth,
    })
}

fn to_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
