//! CLI error types.

use sitenav_config::ConfigError;
use sitenav_menu::MenuError;
use sitenav_sitemap::SitemapError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Sitemap(#[from] SitemapError),

    #[error("Menu '{name}': {source}")]
    Menu {
        name: String,
        #[source]
        source: MenuError,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}

impl CliError {
    pub(crate) fn menu(name: &str) -> impl FnOnce(MenuError) -> Self + '_ {
        move |source| Self::Menu {
            name: name.to_owned(),
            source,
        }
    }
}
