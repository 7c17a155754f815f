//! Per-menu rendering entry point.

use sitenav_config::{ConfigError, DepthAnchor, DepthSpec, MenuOptions, MenuSettings};
use sitenav_sitemap::Sitemap;

use crate::depth::{DepthError, DepthResolver};
use crate::item::Menu;
use crate::postprocess::apply_item_markers;
use crate::request::RequestPath;
use crate::traversal::{MenuBuilder, ResolvedSettings};
use crate::url::{BaseUrl, UrlFactory};

/// Error type for menu rendering.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// Malformed menu options.
    #[error("{0}")]
    Config(#[from] ConfigError),
    /// Depth cannot be resolved for the request.
    #[error("{0}")]
    Depth(#[from] DepthError),
}

/// A configured menu, reusable across requests and threads.
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use sitenav_config::MenuSettings;
/// use sitenav_menu::{Navigation, RequestPath};
/// use sitenav_sitemap::Sitemap;
///
/// let sitemap = Sitemap::from_yaml("
/// - [root, Home, 1, {}]
/// - [root.gallery, Gallery, 2, {}]
/// ")?;
/// let nav = Navigation::new(MenuSettings {
///     show_root: true,
///     ..MenuSettings::default()
/// });
///
/// let html = nav.render_html(&sitemap, &RequestPath::parse("/gallery"))?;
/// assert!(html.contains(r#"class="selected selected-path""#));
/// # Ok(())
/// # }
/// ```
pub struct Navigation {
    settings: MenuSettings,
    url_factory: Box<dyn UrlFactory>,
}

impl Navigation {
    /// Create a menu with the default URL factory on `settings.url_base`.
    #[must_use]
    pub fn new(settings: MenuSettings) -> Self {
        let url_factory = Box::new(BaseUrl::new(settings.url_base.clone()));
        Self {
            settings,
            url_factory,
        }
    }

    /// Create a menu from raw options.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::Config` if the options are malformed.
    pub fn from_options(options: &MenuOptions, name: &str) -> Result<Self, MenuError> {
        Ok(Self::new(options.resolve(name)?))
    }

    /// Replace the URL factory.
    #[must_use]
    pub fn with_url_factory(mut self, url_factory: impl UrlFactory + 'static) -> Self {
        self.url_factory = Box::new(url_factory);
        self
    }

    #[must_use]
    pub fn settings(&self) -> &MenuSettings {
        &self.settings
    }

    /// Check request-independent settings against the sitemap.
    ///
    /// # Errors
    ///
    /// Returns `DepthError::UnknownGroup` if a depth is anchored on a group
    /// no node belongs to.
    pub fn validate(&self, sitemap: &Sitemap) -> Result<(), MenuError> {
        let specs = std::iter::once(&self.settings.start_depth).chain(&self.settings.max_depth);
        for spec in specs {
            if let DepthSpec::Relative {
                anchor: DepthAnchor::Group(group),
                ..
            } = *spec
                && !sitemap.contains_group(group)
            {
                return Err(DepthError::UnknownGroup(group).into());
            }
        }

        if let Some(group) = self.settings.group
            && !sitemap.contains_group(group)
        {
            tracing::warn!(group, "Menu filters on a group with no sitemap nodes");
        }
        Ok(())
    }

    /// Resolve depths for one request.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::Depth` if a depth cannot be resolved.
    pub fn resolve(
        &self,
        sitemap: &Sitemap,
        request: &RequestPath,
    ) -> Result<ResolvedSettings, MenuError> {
        let resolver = DepthResolver::new(sitemap, request, self.settings.start_depth);
        let start_depth = resolver.start_depth()?;
        let max_depth = self
            .settings
            .max_depth
            .as_ref()
            .map(|spec| resolver.resolve(spec))
            .transpose()?;

        tracing::debug!(start_depth, ?max_depth, "Resolved menu depths");

        Ok(ResolvedSettings {
            group: self.settings.group,
            max_depth,
            start_depth,
            show_root: self.settings.show_root,
            open_all: self.settings.open_all,
            open_all_below: self.settings.open_all_below,
            force_url: self.settings.force_url.clone(),
            item_id: self.settings.item_id,
        })
    }

    /// Build the menu for a request.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::Depth` if a depth cannot be resolved. A request
    /// path the sitemap does not cover is not an error; it yields an empty
    /// or partial menu.
    pub fn build(&self, sitemap: &Sitemap, request: &RequestPath) -> Result<Menu, MenuError> {
        let resolved = self.resolve(sitemap, request)?;
        let builder = MenuBuilder::new(&resolved, self.url_factory.as_ref(), sitemap, request);

        let mut items = builder.build(sitemap);
        apply_item_markers(&mut items, &self.settings.item_markers);

        Ok(Menu {
            css_class: self.settings.css_class.clone(),
            items,
        })
    }

    /// Build the menu and serialize it as HTML.
    ///
    /// # Errors
    ///
    /// See [`build`](Self::build).
    pub fn render_html(&self, sitemap: &Sitemap, request: &RequestPath) -> Result<String, MenuError> {
        Ok(self.build(sitemap, request)?.to_html())
    }
}
