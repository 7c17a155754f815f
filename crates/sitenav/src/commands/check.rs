//! `sitenav check` command implementation.

use std::path::PathBuf;

use clap::Args;
use sitenav_config::{CliSettings, Config};
use sitenav_menu::Navigation;
use sitenav_sitemap::Sitemap;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
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

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            sitemap: self.sitemap,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }

        let sitemap = Sitemap::load(&config.sitemap_path)?;
        tracing::info!(menus = config.menus.len(), "Checking menus");
        output.info(&format!(
            "Sitemap: {} ({} nodes)",
            config.sitemap_path.display(),
            sitemap.node_count()
        ));

        let results = check_menus(&config, &sitemap);
        if results.is_empty() {
            output.warning("No menus configured");
            return Ok(());
        }

        output.highlight("Menus:");
        let mut failed = 0;
        for (name, result) in &results {
            match result {
                Ok(()) => output.info(&format!("  {name}: ok")),
                Err(err) => {
                    failed += 1;
                    output.error(&format!("  {err}"));
                }
            }
        }

        if failed > 0 {
            return Err(CliError::Validation(format!(
                "{failed} of {} menus are invalid",
                results.len()
            )));
        }
        output.success(&format!("All {} menus are valid", results.len()));
        Ok(())
    }
}

/// Validate every configured menu against the sitemap.
fn check_menus(config: &Config, sitemap: &Sitemap) -> Vec<(String, Result<(), CliError>)> {
    config
        .menu_names()
        .map(|name| {
            let result = config
                .menu(name)
                .map_err(CliError::from)
                .and_then(|settings| {
                    Navigation::new(settings)
                        .validate(sitemap)
                        .map_err(CliError::menu(name))
                });
            tracing::debug!(menu = name, valid = result.is_ok(), "Checked menu");
            (name.to_owned(), result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_project(menus: &str) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("sitemap.yaml"),
            "
- [root, Home, 1, {}]
- [root.about, About, 2, {group: 1}]
",
        )
        .unwrap();
        let config_path = dir.path().join("sitenav.toml");
        fs::write(&config_path, menus).unwrap();
        let config = Config::load(Some(&config_path), None).unwrap();
        (dir, config)
    }

    #[test]
    fn test_check_menus_reports_each_menu() {
        let (_dir, config) = write_project(
            r#"
[menus.primary]
startdepth = "1+0"

[menus.footer]
maxdepth = "7+1"
"#,
        );
        let sitemap = Sitemap::load(&config.sitemap_path).unwrap();

        let results = check_menus(&config, &sitemap);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "footer");
        assert!(matches!(&results[0].1, Err(CliError::Menu { name, .. }) if name == "footer"));
        assert_eq!(results[1].0, "primary");
        assert!(results[1].1.is_ok());
    }

    #[test]
    fn test_check_menus_empty_config() {
        let (_dir, config) = write_project("");
        let sitemap = Sitemap::load(&config.sitemap_path).unwrap();

        assert!(check_menus(&config, &sitemap).is_empty());
    }
}
