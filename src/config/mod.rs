//! Application configuration loaded from config.toml and the environment.

/// Ledger participants and tie-break
pub mod ledger;

/// Item store connection settings
pub mod store;

use crate::errors::{Error, Result};
use ledger::LedgerConfig;
use serde::Deserialize;
use std::{fs, io::ErrorKind, path::Path};
use store::StoreConfig;
use tracing::{debug, info};

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Item store connection
    #[serde(default)]
    pub store: StoreConfig,
    /// Ledger participants
    #[serde(default)]
    pub ledger: LedgerConfig,
}

impl AppConfig {
    /// Replaces the store URL when an override is present.
    #[must_use]
    pub fn with_store_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            debug!("Store URL overridden to {url}");
            self.store.base_url = url;
        }
        self
    }
}

/// Loads configuration from a TOML file
///
/// A missing file is not an error: defaults are used instead.
///
/// # Errors
/// Returns `Error::Config` if the file exists but cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);

    let contents = match fs::read_to_string(path_ref) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No configuration file at {:?}, using defaults", path_ref);
            return Ok(AppConfig::default());
        }
        Err(e) => {
            return Err(Error::Config {
                message: format!("Failed to read config file {path_ref:?}: {e}"),
            });
        }
    };

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML from config file {path_ref:?}: {e}"),
    })
}

/// Loads the file configuration and applies the `ITEM_STORE_URL` override.
///
/// # Errors
/// Returns `Error::Config` if the file cannot be read or parsed, or if the
/// configured participants are invalid.
pub fn load_app_configuration<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let config = load_config(path)?.with_store_url_override(store::get_store_url_override());

    // Fail early on a bad payee set rather than on first render
    config.ledger.participants()?;

    info!(
        "Item store at {}, payees {:?}",
        config.store.base_url, config.ledger.payees
    );
    Ok(config)
}
