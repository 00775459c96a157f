//! `${VAR}` expansion for configuration strings.

use crate::ConfigError;

/// Expand environment variable references in a configuration value.
///
/// `${VAR}` errors when VAR is unset, `${VAR:-default}` falls back to the
/// default. Values without `${` are returned unchanged, so bare `$` in URLs
/// survives.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("QUIRE_TEST_REPO", "acme/handbook");
        }
        let result = expand_env(
            "https://github.com/${QUIRE_TEST_REPO}/edit/main/docs/:path",
            "theme.edit_link.pattern",
        )
        .unwrap();
        assert_eq!(result, "https://github.com/acme/handbook/edit/main/docs/:path");
        unsafe {
            std::env::remove_var("QUIRE_TEST_REPO");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("QUIRE_TEST_UNSET_LOGO");
        }
        let result = expand_env("${QUIRE_TEST_UNSET_LOGO:-/assets/logo.png}", "theme.logo").unwrap();
        assert_eq!(result, "/assets/logo.png");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("QUIRE_TEST_MISSING");
        }
        let err = expand_env("${QUIRE_TEST_MISSING}", "theme.logo").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("QUIRE_TEST_MISSING"));
        assert!(err.to_string().contains("theme.logo"));
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("https://example.com/$path", "theme.logo").unwrap();
        assert_eq!(result, "https://example.com/$path");
    }
}
