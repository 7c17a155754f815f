//! Navigation menu rendering from a static sitemap.
//!
//! This crate provides:
//! - [`Navigation`]: A configured menu that renders per request
//! - [`DepthResolver`]: Symbolic depth resolution (`here+1`, `startdepth+2`, `1+0`)
//! - [`MenuBuilder`]: The sitemap traversal producing a [`RenderItem`] tree
//! - [`apply_item_markers`]: Positional `first-child`/`last-child`/`item-N` markers
//! - [`Menu::to_html`]: Nested list serialization
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use sitenav_config::{ItemMarker, MenuSettings};
//! use sitenav_menu::{Navigation, RequestPath};
//! use sitenav_sitemap::Sitemap;
//!
//! let sitemap = Sitemap::from_yaml("
//! - [root, Home, 1, {}]
//! - [root.about, About, 2, {}]
//! - [root.about.team, Team, 3, {}]
//! ")?;
//!
//! let nav = Navigation::new(MenuSettings {
//!     item_markers: vec![ItemMarker::Number],
//!     ..MenuSettings::default()
//! });
//! let menu = nav.build(&sitemap, &RequestPath::parse("/about/team"))?;
//!
//! assert_eq!(menu.items[0].markers, ["selected-path", "item-1"]);
//! assert_eq!(menu.items[0].children[0].label, "Team");
//! # Ok(())
//! # }
//! ```

mod depth;
mod html;
mod item;
mod navigation;
mod postprocess;
mod request;
mod traversal;
mod url;

pub use depth::{DepthError, DepthResolver};
pub use html::escape_html;
pub use item::{
    FIRST_CHILD, LAST_CHILD, Menu, RenderItem, SELECTED, SELECTED_PATH, add_marker,
};
pub use navigation::{MenuError, Navigation};
pub use postprocess::apply_item_markers;
pub use request::RequestPath;
pub use traversal::{MenuBuilder, ResolvedSettings};
pub use url::{BaseUrl, UrlFactory};
