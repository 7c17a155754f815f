//! Loosely typed configuration values and their coercions.
//!
//! Menu options come from hand-written TOML where `show_root = true`,
//! `show_root = 1` and `show_root = "yes"` all mean the same thing.

use std::fmt;

use serde::Deserialize;

use crate::ConfigError;

/// A TOML scalar as written by the user.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// Coerce a boolean-like value.
///
/// Integers are true when non-zero. Strings may hold an integer or one of
/// `true`, `false`, `yes`, `no` in any case.
///
/// # Errors
///
/// Returns `ConfigError::InvalidBoolean` for anything else.
pub fn parse_boolean(value: &ConfigValue, field: &str) -> Result<bool, ConfigError> {
    match value {
        ConfigValue::Bool(b) => Ok(*b),
        ConfigValue::Int(n) => Ok(*n != 0),
        ConfigValue::Text(s) => {
            let s = s.trim();
            if let Ok(n) = s.parse::<i64>() {
                return Ok(n != 0);
            }
            match s.to_ascii_lowercase().as_str() {
                "true" | "yes" => Ok(true),
                "false" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidBoolean {
                    field: field.to_owned(),
                    value: s.to_owned(),
                }),
            }
        }
    }
}

/// Coerce an integer-like value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidInteger` for booleans and non-numeric strings.
pub fn parse_integer(value: &ConfigValue, field: &str) -> Result<i64, ConfigError> {
    match value {
        ConfigValue::Int(n) => Ok(*n),
        ConfigValue::Text(s) => s.trim().parse().map_err(|_| ConfigError::InvalidInteger {
            field: field.to_owned(),
            value: s.clone(),
        }),
        ConfigValue::Bool(_) => Err(ConfigError::InvalidInteger {
            field: field.to_owned(),
            value: value.to_string(),
        }),
    }
}
