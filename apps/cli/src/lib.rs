//! # FoodHub CLI
//!
//! Terminal front end for the FoodHub marketplace.
//!
//! ## Module Organization
//! ```text
//! foodhub_cli/
//! ├── lib.rs          ◄─── You are here (tracing setup & run)
//! ├── cli.rs          ◄─── clap definitions
//! ├── context.rs      ◄─── config, API client, cart store
//! ├── output.rs       ◄─── tables and --json
//! └── commands/
//!     ├── mod.rs      ◄─── dispatch
//!     ├── catalog.rs  ◄─── meals, categories, providers
//!     ├── cart.rs     ◄─── local cart
//!     ├── orders.rs   ◄─── checkout and order history
//!     ├── provider.rs ◄─── restaurant dashboard
//!     └── admin.rs    ◄─── administration
//! ```

pub mod cli;
pub mod commands;
pub mod context;
pub mod output;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use context::AppContext;

/// Runs one command to completion.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut ctx = AppContext::new(cli.config, cli.json)?;
    debug!(api = ctx.client.base_url(), "Context ready");
    commands::dispatch(&mut ctx, cli.command).await
}

/// Initializes the tracing subscriber.
///
/// Default: WARN for dependencies, INFO for the foodhub crates.
/// Override with RUST_LOG. Logs go to stderr so `--json` output stays clean.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,foodhub=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
