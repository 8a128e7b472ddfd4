//! # foodhub-store: Local Persistence for the FoodHub Client
//!
//! This crate keeps the customer's cart across runs. It defines the storage
//! seam the cart persists through and the cart store built on it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        FoodHub Data Flow                                │
//! │                                                                         │
//! │  `foodhub cart add meal-1`                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   foodhub-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  CartStore    │    │   snapshot    │    │   Storage    │  │   │
//! │  │   │ (cart_store)  │───►│ encode/decode │───►│ Memory/File  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   <data dir>/foodhub-cart.json                                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`storage`] - The `Storage` trait and `MemoryStorage`
//! - [`file`] - `FileStorage`, one JSON file per key
//! - [`snapshot`] - Cart snapshot JSON layout
//! - [`cart_store`] - `CartStore`, the persisted cart
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust
//! use foodhub_store::{CartStore, MemoryStorage};
//!
//! let storage = MemoryStorage::new();
//! let store = CartStore::load(storage.clone());
//! assert_eq!(store.count(), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart_store;
pub mod error;
pub mod file;
pub mod snapshot;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use cart_store::CartStore;
pub use error::{StorageError, StorageResult};
pub use file::FileStorage;
pub use storage::{MemoryStorage, Storage};
