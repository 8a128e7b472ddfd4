//! # foodhub-client: Marketplace REST Client
//!
//! Typed calls for every route the FoodHub front ends use, the client
//! configuration, and the checkout flow that hands the cart to the API.
//!
//! ## Module Organization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        foodhub-client                                   │
//! │                                                                         │
//! │  config.rs    ClientConfig (defaults → foodhub.toml → FOODHUB_* env)   │
//! │  client.rs    ApiClient: base URL, cookies, error mapping              │
//! │  catalog.rs   /api/meals, /api/providers, /api/categories              │
//! │  orders.rs    /api/orders, /api/reviews                                │
//! │  provider.rs  /api/provider/* (menu, order board, stats)               │
//! │  admin.rs     /api/admin/*, category management                        │
//! │  checkout.rs  CartStore ⇄ API                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! let config = ClientConfig::load(None)?;
//! let client = ApiClient::new(&config)?;
//! let meals = client.meals(&MealFilters::default()).await?;
//! ```

pub mod admin;
pub mod catalog;
pub mod checkout;
pub mod client;
pub mod config;
pub mod error;
pub mod orders;
pub mod provider;

pub use catalog::MealFilters;
pub use checkout::{add_meal_to_cart, place_order_from_cart};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
