//! # Client Configuration
//!
//! Where the API lives, how long to wait for it, and how to show money.
//!
//! ## Load Order (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults            http://localhost:5000, 30s, ৳                  │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  2. foodhub.toml        <config dir>/foodhub.toml (optional)           │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  3. Environment         FOODHUB_API_URL, FOODHUB_TIMEOUT_SECS,         │
//! │                         FOODHUB_CURRENCY_SYMBOL, FOODHUB_DATA_DIR,     │
//! │                         FOODHUB_SESSION                                │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  4. validate()                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example File
//! ```toml
//! [api]
//! base_url = "https://api.foodhub.example"
//! timeout_secs = 15
//!
//! [display]
//! currency_symbol = "৳"
//!
//! [storage]
//! data_dir = "/home/me/.local/share/foodhub"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use foodhub_core::DEFAULT_CURRENCY_SYMBOL;

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const CONFIG_FILE_NAME: &str = "foodhub.toml";

// =============================================================================
// Sections
// =============================================================================

/// Marketplace API connection settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Raw `Cookie` header value carrying an existing session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            session_cookie: None,
        }
    }
}

impl std::fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSettings")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field(
                "session_cookie",
                &self.session_cookie.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory for the cart snapshot. Defaults to the platform data dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

// =============================================================================
// ClientConfig
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

impl ClientConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// `config_path` overrides the platform config location.
    pub fn load(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    pub fn from_file(path: &Path) -> ClientResult<Self> {
        info!(?path, "Loading client config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        let url = Url::parse(&self.api.base_url).map_err(|e| {
            ClientError::Config(format!("base_url '{}' is not a URL: {e}", self.api.base_url))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ClientError::Config(format!(
                "base_url must start with http:// or https://, got: {}",
                self.api.base_url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ClientError::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if self.display.currency_symbol.trim().is_empty() {
            return Err(ClientError::Config(
                "currency_symbol must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies `FOODHUB_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("FOODHUB_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(secs) = lookup("FOODHUB_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.api.timeout_secs = s,
                Err(_) => warn!(value = %secs, "Ignoring non-numeric FOODHUB_TIMEOUT_SECS"),
            }
        }

        if let Some(cookie) = lookup("FOODHUB_SESSION") {
            self.api.session_cookie = Some(cookie);
        }

        if let Some(symbol) = lookup("FOODHUB_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }

        if let Some(dir) = lookup("FOODHUB_DATA_DIR") {
            debug!(dir = %dir, "Overriding data dir from environment");
            self.storage.data_dir = Some(PathBuf::from(dir));
        }
    }

    fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from("com", "foodhub", "foodhub")
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Directory holding the cart snapshot.
    pub fn data_dir(&self) -> ClientResult<PathBuf> {
        self.storage
            .data_dir
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
            .ok_or_else(|| {
                ClientError::Config("no data directory available; set FOODHUB_DATA_DIR".into())
            })
    }

    pub fn currency_symbol(&self) -> &str {
        &self.display.currency_symbol
    }
}
