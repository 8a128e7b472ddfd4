//! # Commands
//!
//! One module per command group. Each handler takes the [`AppContext`],
//! calls into the library crates and hands the result to [`Output`].
//!
//! ```text
//! commands/
//! ├── mod.rs       ◄─── dispatch
//! ├── catalog.rs   ◄─── meals, categories, providers
//! ├── cart.rs      ◄─── local cart
//! ├── orders.rs    ◄─── checkout, order history, reviews
//! ├── provider.rs  ◄─── restaurant dashboard
//! └── admin.rs     ◄─── marketplace administration
//! ```
//!
//! [`AppContext`]: crate::context::AppContext
//! [`Output`]: crate::output::Output

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod provider;

use crate::cli::Commands;
use crate::context::AppContext;

pub async fn dispatch(ctx: &mut AppContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Meals { action } => catalog::meals(ctx, action).await,
        Commands::Categories => catalog::categories(ctx).await,
        Commands::Providers { action } => catalog::providers(ctx, action).await,
        Commands::Cart { action } => cart::run(ctx, action).await,
        Commands::Checkout { address, notes } => orders::checkout(ctx, address, notes).await,
        Commands::Orders { action } => orders::run(ctx, action).await,
        Commands::Provider { action } => provider::run(ctx, action).await,
        Commands::Admin { action } => admin::run(ctx, action).await,
        Commands::Config => show_config(ctx),
    }
}

fn show_config(ctx: &AppContext) -> anyhow::Result<()> {
    let config = &ctx.config;
    let data_dir = ctx.cart.storage().root().display().to_string();
    let view = serde_json::json!({
        "apiUrl": config.api.base_url,
        "timeoutSecs": config.api.timeout_secs,
        "session": config.api.session_cookie.is_some(),
        "currencySymbol": config.display.currency_symbol,
        "dataDir": data_dir,
    });
    ctx.out.emit(&view, |_| {
        format!(
            "API URL:   {}\nTimeout:   {}s\nSession:   {}\nCurrency:  {}\nData dir:  {}\n",
            config.api.base_url,
            config.api.timeout_secs,
            if config.api.session_cookie.is_some() { "set" } else { "none" },
            config.display.currency_symbol,
            data_dir
        )
    })
}
