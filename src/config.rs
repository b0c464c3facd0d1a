//! Runtime configuration.
//!
//! The Gemini credential resolves from an explicitly configured value first,
//! then the `GEMINI_API_KEY` environment variable. There is deliberately no
//! further fallback: an unresolved credential leaves the service running but
//! answering `/chat` with a configuration error.

const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration for the proxy.
#[derive(Clone, Debug)]
pub struct Config {
    /// Resolved Gemini credential, if any.
    pub api_key: Option<String>,
    /// Bare Gemini model ID.
    pub model: String,
    /// Upstream base URL. Overridable so tests can point at a mock server.
    pub base_url: String,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// | Variable          | Default                                       |
    /// |-------------------|-----------------------------------------------|
    /// | `GEMINI_API_KEY`  | none (service starts unconfigured)            |
    /// | `GEMINI_MODEL`    | `gemini-2.0-flash-exp`                        |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com`   |
    ///
    /// `configured_key` (the `--api-key` flag) takes precedence over the
    /// environment variable.
    pub fn from_env(configured_key: Option<String>) -> Self {
        Self {
            api_key: resolve_api_key(configured_key, env_var("GEMINI_API_KEY")),
            model: env_var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: env_var("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Ordered credential resolution. Blank values count as unset.
fn resolve_api_key(configured: Option<String>, from_env: Option<String>) -> Option<String> {
    configured.filter(|v| !v.trim().is_empty()).or(from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_key_wins_over_env() {
        let key = resolve_api_key(Some("from-flag".to_string()), Some("from-env".to_string()));
        assert_eq!(key.as_deref(), Some("from-flag"));
    }

    #[test]
    fn test_env_key_used_when_not_configured() {
        let key = resolve_api_key(None, Some("from-env".to_string()));
        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_blank_configured_key_counts_as_unset() {
        let key = resolve_api_key(Some("  ".to_string()), Some("from-env".to_string()));
        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_no_sources_resolves_to_none() {
        assert!(resolve_api_key(None, None).is_none());
    }
}
