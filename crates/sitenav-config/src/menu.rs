//! Per-menu options.
//!
//! [`MenuOptions`] is the raw `[menus.<name>]` table; [`MenuSettings`] is
//! the typed, request-independent result of validating it. Depth specs stay
//! symbolic until a request arrives.

use serde::Deserialize;

use crate::ConfigError;
use crate::depth::DepthSpec;
use crate::value::{ConfigValue, parse_boolean, parse_integer};

/// Positional markers added to top-level menu items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemMarker {
    /// `first-child` on the first item, `last-child` on the last.
    FirstLast,
    /// `item-N` on every item (1-based).
    Number,
}

/// How menu items get a DOM `id`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemIdMode {
    /// `nav-<name>` from the node name.
    #[default]
    Name,
    /// No `id` attribute.
    #[serde(rename = "none")]
    Disabled,
}

/// Raw menu options as written in `sitenav.toml`.
///
/// Aliases accept the short option names (`type`, `maxdepth`, ...).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MenuOptions {
    /// Only render top-level nodes of this group.
    #[serde(alias = "type")]
    pub group: Option<ConfigValue>,
    /// Deepest level that may be expanded.
    #[serde(alias = "maxdepth")]
    pub max_depth: Option<ConfigValue>,
    /// Level the menu starts from.
    #[serde(alias = "startdepth")]
    pub start_depth: Option<ConfigValue>,
    /// Render the start node itself as the first item.
    #[serde(alias = "showroot")]
    pub show_root: Option<ConfigValue>,
    /// Expand every submenu.
    #[serde(alias = "openall")]
    pub open_all: Option<ConfigValue>,
    /// Number of URL segments the rendered branch must follow.
    #[serde(alias = "openallbelow")]
    pub open_all_below: Option<ConfigValue>,
    /// Expand as if the request were for this path.
    pub force_url: Option<String>,
    /// Class on the outer list.
    pub css_class: Option<String>,
    #[serde(alias = "item_class")]
    pub item_markers: Vec<ItemMarker>,
    pub item_id: ItemIdMode,
    /// Base URL for item links.
    pub url_base: Option<String>,
}

/// Validated menu settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuSettings {
    pub group: Option<i64>,
    pub max_depth: Option<DepthSpec>,
    pub start_depth: DepthSpec,
    pub show_root: bool,
    pub open_all: bool,
    pub open_all_below: usize,
    pub force_url: Option<String>,
    pub css_class: Option<String>,
    pub item_markers: Vec<ItemMarker>,
    pub item_id: ItemIdMode,
    pub url_base: String,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            group: None,
            max_depth: None,
            start_depth: DepthSpec::default(),
            show_root: false,
            open_all: false,
            open_all_below: 0,
            force_url: None,
            css_class: None,
            item_markers: Vec::new(),
            item_id: ItemIdMode::default(),
            url_base: "/".to_owned(),
        }
    }
}

impl MenuOptions {
    /// Validate and convert into [`MenuSettings`].
    ///
    /// # Arguments
    ///
    /// * `menu` - Menu name, used in error messages (`menus.<menu>.<field>`)
    ///
    /// # Errors
    ///
    /// Returns an error for malformed boolean, integer or depth values, for a
    /// negative absolute depth, and for a start depth anchored on itself.
    pub fn resolve(&self, menu: &str) -> Result<MenuSettings, ConfigError> {
        let field = |name: &str| format!("menus.{menu}.{name}");
        let boolean = |value: &Option<ConfigValue>, name: &str| {
            value
                .as_ref()
                .map_or(Ok(false), |v| parse_boolean(v, &field(name)))
        };

        let group = self
            .group
            .as_ref()
            .map(|v| parse_integer(v, &field("group")))
            .transpose()?;

        let start_depth = self
            .start_depth
            .as_ref()
            .map(|v| DepthSpec::from_value(v, &field("start_depth")))
            .transpose()?
            .map(|spec| non_negative(spec, &field("start_depth")))
            .transpose()?
            .unwrap_or_default();
        if start_depth.is_relative_to_start_depth() {
            return Err(ConfigError::InvalidDepth {
                field: field("start_depth"),
                value: start_depth.to_string(),
                reason: "start depth cannot be relative to itself".to_owned(),
            });
        }

        let max_depth = self
            .max_depth
            .as_ref()
            .map(|v| DepthSpec::from_value(v, &field("max_depth")))
            .transpose()?
            .map(|spec| non_negative(spec, &field("max_depth")))
            .transpose()?;

        let open_all_below = match &self.open_all_below {
            Some(value) => {
                let below = parse_integer(value, &field("open_all_below"))?;
                usize::try_from(below).map_err(|_| ConfigError::InvalidInteger {
                    field: field("open_all_below"),
                    value: value.to_string(),
                })?
            }
            None => 0,
        };

        Ok(MenuSettings {
            group,
            max_depth,
            start_depth,
            show_root: boolean(&self.show_root, "show_root")?,
            open_all: boolean(&self.open_all, "open_all")?,
            open_all_below,
            force_url: self.force_url.clone(),
            css_class: self.css_class.clone(),
            item_markers: self.item_markers.clone(),
            item_id: self.item_id,
            url_base: self.url_base.clone().unwrap_or_else(|| "/".to_owned()),
        })
    }
}

/// Absolute depths are known before any request, so reject them here.
fn non_negative(spec: DepthSpec, field: &str) -> Result<DepthSpec, ConfigError> {
    match spec {
        DepthSpec::Absolute(depth) if depth < 0 => Err(ConfigError::InvalidDepth {
            field: field.to_owned(),
            value: spec.to_string(),
            reason: "depth cannot be negative".to_owned(),
        }),
        _ => Ok(spec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth::DepthAnchor;
    use pretty_assertions::assert_eq;

    fn parse(toml: &str) -> MenuOptions {
        toml::from_str(toml).unwrap()
    }

    #[test]
    fn test_empty_options_resolve_to_defaults() {
        let settings = parse("").resolve("main").unwrap();

        assert_eq!(settings, MenuSettings::default());
    }

    #[test]
    fn test_full_options() {
        let options = parse(
            r#"
group = 1
max_depth = "startdepth+2"
start_depth = "1+0"
show_root = "Yes"
open_all = 0
open_all_below = 1
force_url = "about/team"
css_class = "nav"
item_markers = ["firstlast", "number"]
item_id = "none"
url_base = "https://example.com/site/"
"#,
        );

        let settings = options.resolve("main").unwrap();

        assert_eq!(
            settings,
            MenuSettings {
                group: Some(1),
                max_depth: Some(DepthSpec::Relative {
                    anchor: DepthAnchor::StartDepth,
                    offset: 2
                }),
                start_depth: DepthSpec::Relative {
                    anchor: DepthAnchor::Group(1),
                    offset: 0
                },
                show_root: true,
                open_all: false,
                open_all_below: 1,
                force_url: Some("about/team".to_owned()),
                css_class: Some("nav".to_owned()),
                item_markers: vec![ItemMarker::FirstLast, ItemMarker::Number],
                item_id: ItemIdMode::Disabled,
                url_base: "https://example.com/site/".to_owned(),
            }
        );
    }

    #[test]
    fn test_short_aliases() {
        let options = parse(
            r#"
type = "2"
maxdepth = 3
startdepth = 1
showroot = true
openall = "no"
openallbelow = "2"
item_class = ["number"]
"#,
        );

        let settings = options.resolve("main").unwrap();

        assert_eq!(settings.group, Some(2));
        assert_eq!(settings.max_depth, Some(DepthSpec::Absolute(3)));
        assert_eq!(settings.start_depth, DepthSpec::Absolute(1));
        assert!(settings.show_root);
        assert!(!settings.open_all);
        assert_eq!(settings.open_all_below, 2);
        assert_eq!(settings.item_markers, vec![ItemMarker::Number]);
    }

    #[test]
    fn test_malformed_boolean_fails() {
        let err = parse("open_all = \"sometimes\"").resolve("main").unwrap_err();

        assert!(matches!(err, ConfigError::InvalidBoolean { .. }));
        assert!(err.to_string().contains("menus.main.open_all"));
    }

    #[test]
    fn test_malformed_depth_fails() {
        let err = parse("max_depth = \"here+x\"").resolve("main").unwrap_err();

        assert!(matches!(err, ConfigError::InvalidDepth { .. }));
    }

    #[test]
    fn test_self_referential_start_depth_fails() {
        let err = parse("start_depth = \"startdepth+1\"")
            .resolve("main")
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidDepth { .. }));
        assert!(err.to_string().contains("relative to itself"));
    }

    #[test]
    fn test_negative_absolute_depth_fails() {
        let err = parse("start_depth = -1").resolve("main").unwrap_err();

        assert!(matches!(err, ConfigError::InvalidDepth { .. }));
        assert!(err.to_string().contains("menus.main.start_depth"));

        let err = parse("max_depth = \"-2\"").resolve("main").unwrap_err();

        assert!(matches!(err, ConfigError::InvalidDepth { .. }));
        assert!(err.to_string().contains("cannot be negative"));
    }

    #[test]
    fn test_negative_relative_offset_is_accepted() {
        let settings = parse("start_depth = \"here+-1\"").resolve("main").unwrap();

        assert_eq!(
            settings.start_depth,
            DepthSpec::Relative {
                anchor: DepthAnchor::Here,
                offset: -1,
            }
        );
    }

    #[test]
    fn test_negative_open_all_below_fails() {
        let err = parse("open_all_below = -1").resolve("main").unwrap_err();

        assert!(matches!(err, ConfigError::InvalidInteger { .. }));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<MenuOptions, _> = toml::from_str("colour = \"red\"");

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_marker_rejected() {
        let result: Result<MenuOptions, _> = toml::from_str("item_markers = [\"zebra\"]");

        assert!(result.is_err());
    }
}
