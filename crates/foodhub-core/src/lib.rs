//! # foodhub-core: Pure Business Logic for the FoodHub Client
//!
//! This crate is the **heart** of the FoodHub client. It holds the domain
//! types the marketplace API speaks, the cart, and the form rules, all as
//! pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FoodHub Client Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Front End (foodhub CLI / web UI)               │   │
//! │  │    Meals ──► Cart ──► Checkout ──► Orders ──► Provider board    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ foodhub-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │   Meal    │  │   Money   │  │   Cart    │  │   rules   │  │   │
//! │  │   │   Order   │  │  parsing  │  │ CartItem  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │       foodhub-store (snapshot)   foodhub-client (REST API)      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Meal, Order, Review, etc.)
//! - [`money`] - Money type parsed from the API's decimal strings
//! - [`cart`] - The cart and its invariants
//! - [`error`] - Domain error types
//! - [`validation`] - Form rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use foodhub_core::money::Money;
//!
//! // The API sends prices as decimal strings
//! let price = Money::parse_decimal("120.50").unwrap();
//! assert_eq!(price.minor_units(), 12050);
//! assert_eq!((price * 2).to_decimal_string(), "241.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals};
pub use error::{CoreError, CoreResult, MoneyParseError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Storage key the cart snapshot lives under.
///
/// Shared with the web UI so both front ends read the same local cart.
pub const CART_STORAGE_KEY: &str = "foodhub-cart";

/// Maximum quantity a customer may type for a single cart line.
///
/// Only enforced on explicit user input (see [`validation::validate_quantity`]);
/// repeated "add" clicks are never rejected.
pub const MAX_ITEM_QUANTITY: i64 = 99;

/// Currency symbol used when rendering money for people.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "৳";
