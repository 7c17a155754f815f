//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references.
///
/// # Errors
///
/// Returns `ConfigError::EnvVar` naming `field` if a referenced variable
/// without a default is unset.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_unchanged() {
        assert_eq!(expand_env("/site/", "url_base").unwrap(), "/site/");
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SITENAV_EXPAND_UNSET");
        }

        let value = expand_env("${SITENAV_EXPAND_UNSET:-/fallback/}", "url_base").unwrap();

        assert_eq!(value, "/fallback/");
    }

    #[test]
    fn test_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SITENAV_EXPAND_MISSING");
        }

        let err = expand_env("${SITENAV_EXPAND_MISSING}", "menus.main.url_base").unwrap_err();

        let message = err.to_string();
        assert!(message.contains("menus.main.url_base"), "{message}");
        assert!(message.contains("SITENAV_EXPAND_MISSING"), "{message}");
    }
}
