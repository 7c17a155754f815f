//! Configuration management for sitenav.
//!
//! Parses `sitenav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ```toml
//! sitemap = "sitemap.yaml"
//!
//! [menus.primary]
//! group = 1
//! show_root = "yes"
//! item_markers = ["firstlast", "number"]
//!
//! [menus.secondary]
//! group = 2
//! start_depth = "1+0"
//! ```
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `sitemap`
//! - `menus.<name>.url_base`

mod depth;
mod expand;
mod menu;
mod value;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use depth::{DepthAnchor, DepthParseError, DepthSpec};
pub use menu::{ItemIdMode, ItemMarker, MenuOptions, MenuSettings};
pub use value::{ConfigValue, parse_boolean, parse_integer};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override sitemap file.
    pub sitemap: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sitenav.toml";

/// Sitemap filename used when the config does not name one.
const DEFAULT_SITEMAP: &str = "sitemap.yaml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sitemap path as written in TOML.
    sitemap: Option<String>,
    /// Menus by name.
    pub menus: BTreeMap<String, MenuOptions>,

    /// Resolved sitemap path (set after loading).
    #[serde(skip)]
    pub sitemap_path: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Value is not boolean-like.
    #[error("Unrecognised boolean-like value '{value}' for {field}")]
    InvalidBoolean {
        /// Config field path (e.g., "`menus.primary.show_root`").
        field: String,
        value: String,
    },
    /// Value is not an integer.
    #[error("Expected a non-negative integer for {field}, got '{value}'")]
    InvalidInteger { field: String, value: String },
    /// Depth specification cannot be parsed.
    #[error("Invalid depth '{value}' for {field}: {reason}")]
    InvalidDepth {
        field: String,
        value: String,
        reason: String,
    },
    /// Requested menu is not configured.
    #[error("Menu '{0}' is not defined in configuration")]
    UnknownMenu(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`sitemap`").
        field: String,
        /// Error message (e.g., "${`SITE_BASE`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sitenav.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or any menu has malformed options.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Validated settings for a named menu.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownMenu` if the menu is not configured, or a
    /// value error if its options are malformed.
    pub fn menu(&self, name: &str) -> Result<MenuSettings, ConfigError> {
        self.menus
            .get(name)
            .ok_or_else(|| ConfigError::UnknownMenu(name.to_owned()))?
            .resolve(name)
    }

    /// Configured menu names in sorted order.
    pub fn menu_names(&self) -> impl Iterator<Item = &str> {
        self.menus.keys().map(String::as_str)
    }

    /// Validate every configured menu.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns the first menu error found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, options) in &self.menus {
            options.resolve(name)?;
        }
        Ok(())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(sitemap) = &settings.sitemap {
            self.sitemap_path.clone_from(sitemap);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(current)
    }

    fn discover_config_from(mut current: PathBuf) -> Option<PathBuf> {
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            sitemap: None,
            menus: BTreeMap::new(),
            sitemap_path: base.join(DEFAULT_SITEMAP),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref sitemap) = self.sitemap {
            self.sitemap = Some(expand::expand_env(sitemap, "sitemap")?);
        }

        for (name, options) in &mut self.menus {
            if let Some(ref url_base) = options.url_base {
                let field = format!("menus.{name}.url_base");
                options.url_base = Some(expand::expand_env(url_base, &field)?);
            }
        }

        Ok(())
    }

    /// Resolve the sitemap path relative to the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.sitemap_path = config_dir.join(self.sitemap.as_deref().unwrap_or(DEFAULT_SITEMAP));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));

        assert_eq!(config.sitemap_path, PathBuf::from("/test/sitemap.yaml"));
        assert!(config.menus.is_empty());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();

        assert!(config.menus.is_empty());
    }

    #[test]
    fn test_parse_menus() {
        let toml = r#"
sitemap = "site/map.yaml"

[menus.primary]
group = 1
show_root = true

[menus.secondary]
group = 2
start_depth = "1+0"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        let names: Vec<_> = config.menu_names().collect();
        assert_eq!(names, vec!["primary", "secondary"]);

        let primary = config.menu("primary").unwrap();
        assert_eq!(primary.group, Some(1));
        assert!(primary.show_root);

        let secondary = config.menu("secondary").unwrap();
        assert_eq!(
            secondary.start_depth,
            DepthSpec::Relative {
                anchor: DepthAnchor::Group(1),
                offset: 0
            }
        );
    }

    #[test]
    fn test_unknown_menu() {
        let config = Config::default_with_base(Path::new("/test"));

        let err = config.menu("footer").unwrap_err();

        assert!(matches!(err, ConfigError::UnknownMenu(ref name) if name == "footer"));
    }

    #[test]
    fn test_resolve_paths() {
        let mut config: Config = toml::from_str("sitemap = \"nav/sitemap.yaml\"").unwrap();

        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.sitemap_path,
            PathBuf::from("/project/nav/sitemap.yaml")
        );
    }

    #[test]
    fn test_resolve_paths_default_sitemap() {
        let mut config: Config = toml::from_str("").unwrap();

        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.sitemap_path, PathBuf::from("/project/sitemap.yaml"));
    }

    #[test]
    fn test_validate_reports_bad_menu() {
        let config: Config = toml::from_str("[menus.main]\nshow_root = \"perhaps\"").unwrap();

        let err = config.validate().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidBoolean { .. }));
    }

    #[test]
    fn test_validate_rejects_negative_start_depth() {
        let config: Config = toml::from_str("[menus.side]
startdepth = -1").unwrap();

        let err = config.validate().unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidDepth { ref field, .. } if field == "menus.side.start_depth"
        ));
    }

    #[test]
    fn test_apply_cli_settings_sitemap() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            sitemap: Some(PathBuf::from("/custom/sitemap.yaml")),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.sitemap_path, PathBuf::from("/custom/sitemap.yaml"));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.sitemap_path, PathBuf::from("/test/sitemap.yaml"));
    }

    #[test]
    fn test_expand_env_vars_url_base() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("TEST_SITENAV_BASE", "https://example.com/");
        }

        let toml = r#"
[menus.main]
url_base = "${TEST_SITENAV_BASE}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(
            config.menu("main").unwrap().url_base,
            "https://example.com/"
        );

        unsafe {
            std::env::remove_var("TEST_SITENAV_BASE");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_SITENAV_SITEMAP");
        }

        let mut config: Config = toml::from_str("sitemap = \"${MISSING_SITENAV_SITEMAP}\"").unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("sitemap"));
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let err = Config::load(Some(Path::new("/nonexistent/sitenav.toml")), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_resolves_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "sitemap = \"map.yaml\"\n\n[menus.main]\nopen_all = \"yes\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.sitemap_path, dir.path().join("map.yaml"));
        assert_eq!(config.config_path, Some(path));
        assert!(config.menu("main").unwrap().open_all);
    }

    #[test]
    fn test_load_from_file_invalid_menu_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[menus.main]\nmax_depth = \"nowhere+1\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidDepth { .. }));
    }

    #[test]
    fn test_discover_config_walks_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        let found = Config::discover_config_from(nested).unwrap();

        assert_eq!(found, dir.path().join(CONFIG_FILENAME));
    }
}
