//! `sitenav render` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use sitenav_config::{CliSettings, Config};
use sitenav_menu::{Menu, Navigation, RequestPath};
use sitenav_sitemap::Sitemap;

use crate::error::CliError;
use crate::output::Output;

/// Output format for a rendered menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Nested `<ul>` markup.
    #[default]
    Html,
    /// Item tree as JSON.
    Json,
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Request URL path to render the menu for (e.g. `/about/team`).
    #[arg(short, long)]
    url: String,

    /// Name of the menu in `[menus.<name>]`.
    #[arg(short, long)]
    menu: String,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,

    /// Treat this path as the open branch instead of the request URL.
    #[arg(long)]
    force_url: Option<String>,

    /// Base URL for generated links (overrides config).
    #[arg(short = 'b', long, env = "SITENAV_URL_BASE")]
    url_base: Option<String>,

    /// Sitemap file (overrides config).
    #[arg(short, long)]
    sitemap: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover sitenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            sitemap: self.sitemap,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let mut settings = config.menu(&self.menu)?;
        if let Some(force_url) = self.force_url {
            settings.force_url = Some(force_url);
        }
        if let Some(url_base) = self.url_base {
            settings.url_base = url_base;
        }

        let sitemap = Sitemap::load(&config.sitemap_path)?;
        let nav = Navigation::new(settings);
        nav.validate(&sitemap).map_err(CliError::menu(&self.menu))?;

        let request = RequestPath::parse(&self.url);
        let menu = nav
            .build(&sitemap, &request)
            .map_err(CliError::menu(&self.menu))?;

        tracing::info!(
            menu = %self.menu,
            url = %self.url,
            items = menu.items.len(),
            "Rendered menu"
        );

        if menu.is_empty() {
            output.warning(&format!(
                "Menu '{}' has no items for {}",
                self.menu, self.url
            ));
        }
        output.emit(&format_menu(&menu, self.format)?)?;
        Ok(())
    }
}

fn format_menu(menu: &Menu, format: Format) -> Result<String, CliError> {
    match format {
        Format::Html => Ok(menu.to_html()),
        Format::Json => Ok(serde_json::to_string_pretty(menu)?),
    }
}
