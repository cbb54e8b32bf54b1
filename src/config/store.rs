//! Item store connection settings.
//!
//! The base URL comes from the `[store]` table of `config.toml` and can be
//! overridden by the `ITEM_STORE_URL` environment variable (usually set in
//! `.env`).

use serde::Deserialize;

/// Environment variable that overrides `store.base_url`
pub const STORE_URL_ENV: &str = "ITEM_STORE_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:4000";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Where the item store lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the item service; `/items` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

/// Gets the store URL override from the environment, if set and non-empty.
#[must_use]
pub fn get_store_url_override() -> Option<String> {
    std::env::var(STORE_URL_ENV)
        .ok()
        .filter(|url| !url.trim().is_empty())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_defaults_when_table_is_empty() {
        let config: StoreConfig = toml::from_str("").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.base_url, "http://localhost:4000");
        assert_eq!(config.timeout_seconds, 10);
    }

    #[test]
    fn test_parse_store_config() {
        let config: StoreConfig = toml::from_str(
            r#"
            base_url = "https://items.example.org"
            timeout_seconds = 3
        "#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://items.example.org");
        assert_eq!(config.timeout_seconds, 3);
    }
}
