//! # Cart Snapshot
//!
//! The persisted form of the cart.
//!
//! ```text
//! { "items": [ { "meal": { ...Meal... }, "quantity": 2 } ] }
//! ```
//!
//! The web UI's persist middleware wraps the same object as
//! `{ "state": { "items": [...] }, "version": 0 }`; both shapes are read,
//! only the flat one is written.
//!
//! Lines are decoded one at a time: a line that no longer matches the `Meal`
//! shape is skipped with a warning and the rest of the cart is kept.

use serde::{Deserialize, Serialize};
use tracing::warn;

use foodhub_core::{Cart, CartItem};

use crate::error::StorageResult;

#[derive(Debug, Serialize)]
struct CartSnapshot<'a> {
    items: &'a [CartItem],
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    items: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredSnapshot {
    Wrapped { state: RawSnapshot },
    Flat(RawSnapshot),
}

/// Serializes the cart to its snapshot JSON.
pub fn encode(cart: &Cart) -> StorageResult<String> {
    let snapshot = CartSnapshot {
        items: cart.items(),
    };
    Ok(serde_json::to_string(&snapshot)?)
}

/// Reads a snapshot back into a cart.
///
/// Unreadable lines and lines with a non-positive quantity are dropped, and
/// duplicate meal ids are merged, so a hand-edited or stale snapshot still
/// yields a valid cart. Only a snapshot that is not a cart object at all is
/// an error.
pub fn decode(raw: &str) -> StorageResult<Cart> {
    let stored: StoredSnapshot = serde_json::from_str(raw)?;
    let snapshot = match stored {
        StoredSnapshot::Wrapped { state } => state,
        StoredSnapshot::Flat(snapshot) => snapshot,
    };

    let items = snapshot
        .items
        .into_iter()
        .enumerate()
        .filter_map(|(line, value)| match serde_json::from_value::<CartItem>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(line, error = %e, "Skipping unreadable cart line");
                None
            }
        });

    Ok(Cart::from_items(items))
}
