//! # FoodHub CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (logging)
//! 3. Load configuration, open the cart store, build the API client
//! 4. Run the command

use clap::Parser;

use foodhub_cli::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    foodhub_cli::init_tracing();

    if let Err(e) = foodhub_cli::run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
