//! # App Context
//!
//! Everything a command needs, built once per invocation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  --config / FOODHUB_CONFIG ──► ClientConfig::load                       │
//! │                                    │                                    │
//! │                   ┌────────────────┼──────────────────┐                 │
//! │                   ▼                ▼                  ▼                 │
//! │              ApiClient      FileStorage(data_dir)   Output              │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                          CartStore::load (foodhub-cart)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use anyhow::Context as _;
use tracing::debug;

use foodhub_client::{ApiClient, ClientConfig};
use foodhub_store::{CartStore, FileStorage};

use crate::output::Output;

pub struct AppContext {
    pub config: ClientConfig,
    pub client: ApiClient,
    pub cart: CartStore<FileStorage>,
    pub out: Output,
}

impl AppContext {
    pub fn new(config_path: Option<PathBuf>, json: bool) -> anyhow::Result<Self> {
        let config = ClientConfig::load(config_path).context("Failed to load configuration")?;
        Self::from_config(config, json)
    }

    pub fn from_config(config: ClientConfig, json: bool) -> anyhow::Result<Self> {
        let client = ApiClient::new(&config).context("Failed to build API client")?;

        let data_dir = config.data_dir()?;
        let storage = FileStorage::open(data_dir.clone())
            .with_context(|| format!("Failed to open cart storage at {}", data_dir.display()))?;
        debug!(data_dir = %data_dir.display(), "Cart storage opened");

        let cart = CartStore::load(storage);
        let out = Output::new(json, config.currency_symbol());

        Ok(AppContext {
            config,
            client,
            cart,
            out,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_uses_configured_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ClientConfig::default();
        config.storage.data_dir = Some(dir.path().join("state"));
        config.display.currency_symbol = "$".to_string();

        let ctx = AppContext::from_config(config, true).unwrap();
        assert_eq!(ctx.cart.storage().root(), dir.path().join("state"));
        assert!(ctx.cart.is_empty());
        assert!(ctx.out.json);
        assert_eq!(ctx.out.currency_symbol, "$");
    }
}
