//! Static sitemap tree for site navigation.
//!
//! This crate provides:
//! - [`SitemapNode`]: Tree entity with id, dotted path, label and group
//! - [`SitemapBuilder`]: Builds a tree from ordered `[path, label, id, options]` records
//! - [`Sitemap`]: The frozen, shareable tree
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use sitenav_sitemap::Sitemap;
//!
//! let sitemap = Sitemap::from_yaml(
//!     "
//! - [root, Home, 1, {}]
//! - [root.about, About, 2, {group: 1}]
//! - [root.about.team, Team, 3, {group: 2}]
//! ",
//! )?;
//!
//! let team = sitemap.find_by_path("/about/team").unwrap();
//! assert_eq!(team.label(), "Team");
//! # Ok(())
//! # }
//! ```

mod node;
mod record;
mod sitemap;

pub use node::{Group, NodeId, SitemapNode};
pub use record::{NodeOptions, NodeRecord};
pub use sitemap::{Sitemap, SitemapBuilder, SitemapError};
