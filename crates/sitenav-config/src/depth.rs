//! Symbolic depth specifications.
//!
//! Depths are absolute from the sitemap root or relative to an anchor:
//!
//! - `<int>` - absolute depth
//! - `here+<int>` - relative to the current URL
//! - `startdepth+<int>` - relative to the menu's resolved start depth
//! - `<group>+<int>` - relative to the deepest node of the current URL that
//!   stays within the given navigation group

use std::fmt;
use std::str::FromStr;

use crate::value::ConfigValue;
use crate::ConfigError;

/// Anchor of a relative depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthAnchor {
    /// Depth of the current request path.
    Here,
    /// The menu's start depth.
    StartDepth,
    /// Deepest current-path node within a navigation group.
    Group(i64),
}

/// Unresolved depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthSpec {
    Absolute(i64),
    Relative { anchor: DepthAnchor, offset: i64 },
}

impl Default for DepthSpec {
    fn default() -> Self {
        Self::Absolute(0)
    }
}

/// Reasons a depth string is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DepthParseError {
    #[error("'{0}' is not an integer")]
    InvalidInteger(String),
    #[error("offset '{0}' is not an integer")]
    InvalidOffset(String),
    #[error("anchor '{0}' is not 'here', 'startdepth' or a group number")]
    UnknownAnchor(String),
}

impl FromStr for DepthSpec {
    type Err = DepthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((anchor, offset)) = s.split_once('+') else {
            return s
                .parse()
                .map(Self::Absolute)
                .map_err(|_| DepthParseError::InvalidInteger(s.to_owned()));
        };

        let offset = offset
            .trim()
            .parse()
            .map_err(|_| DepthParseError::InvalidOffset(offset.to_owned()))?;
        let anchor = match anchor.trim() {
            "here" => DepthAnchor::Here,
            "startdepth" => DepthAnchor::StartDepth,
            group => DepthAnchor::Group(
                group
                    .parse()
                    .map_err(|_| DepthParseError::UnknownAnchor(group.to_owned()))?,
            ),
        };
        Ok(Self::Relative { anchor, offset })
    }
}

impl fmt::Display for DepthSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(n) => write!(f, "{n}"),
            Self::Relative { anchor, offset } => match anchor {
                DepthAnchor::Here => write!(f, "here+{offset}"),
                DepthAnchor::StartDepth => write!(f, "startdepth+{offset}"),
                DepthAnchor::Group(group) => write!(f, "{group}+{offset}"),
            },
        }
    }
}

impl DepthSpec {
    /// Parse a configuration value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDepth` if the value is a boolean or an
    /// unparsable string.
    pub fn from_value(value: &ConfigValue, field: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidDepth {
            field: field.to_owned(),
            value: value.to_string(),
            reason,
        };
        match value {
            ConfigValue::Int(n) => Ok(Self::Absolute(*n)),
            ConfigValue::Bool(_) => Err(invalid("expected an integer or 'anchor+offset'".to_owned())),
            ConfigValue::Text(s) => s.parse().map_err(|e: DepthParseError| invalid(e.to_string())),
        }
    }

    /// Whether this spec is anchored on the start depth.
    #[must_use]
    pub fn is_relative_to_start_depth(&self) -> bool {
        matches!(
            self,
            Self::Relative {
                anchor: DepthAnchor::StartDepth,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_absolute() {
        assert_eq!("2".parse::<DepthSpec>().unwrap(), DepthSpec::Absolute(2));
    }

    #[test]
    fn test_parse_here() {
        assert_eq!(
            "here+1".parse::<DepthSpec>().unwrap(),
            DepthSpec::Relative {
                anchor: DepthAnchor::Here,
                offset: 1
            }
        );
    }

    #[test]
    fn test_parse_startdepth() {
        assert_eq!(
            "startdepth+2".parse::<DepthSpec>().unwrap(),
            DepthSpec::Relative {
                anchor: DepthAnchor::StartDepth,
                offset: 2
            }
        );
    }

    #[test]
    fn test_parse_group_anchor() {
        assert_eq!(
            "1+0".parse::<DepthSpec>().unwrap(),
            DepthSpec::Relative {
                anchor: DepthAnchor::Group(1),
                offset: 0
            }
        );
    }

    #[test]
    fn test_parse_negative_offset() {
        assert_eq!(
            "here+-1".parse::<DepthSpec>().unwrap(),
            DepthSpec::Relative {
                anchor: DepthAnchor::Here,
                offset: -1
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "deep".parse::<DepthSpec>(),
            Err(DepthParseError::InvalidInteger("deep".to_owned()))
        );
        assert_eq!(
            "here+x".parse::<DepthSpec>(),
            Err(DepthParseError::InvalidOffset("x".to_owned()))
        );
        assert_eq!(
            "there+1".parse::<DepthSpec>(),
            Err(DepthParseError::UnknownAnchor("there".to_owned()))
        );
    }

    #[test]
    fn test_display_round_trips_text() {
        for text in ["3", "here+1", "startdepth+2", "2+0"] {
            assert_eq!(text.parse::<DepthSpec>().unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_from_value() {
        assert_eq!(
            DepthSpec::from_value(&ConfigValue::Int(1), "f").unwrap(),
            DepthSpec::Absolute(1)
        );
        let err = DepthSpec::from_value(&ConfigValue::Bool(true), "menus.a.max_depth").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDepth { .. }));
        assert!(err.to_string().contains("menus.a.max_depth"));
    }
}
