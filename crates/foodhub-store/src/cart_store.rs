//! # Cart Store
//!
//! The cart plus its persistence: an explicitly constructed container that
//! owns a [`Cart`] and writes a snapshot to injected [`Storage`] after every
//! change.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CartStore Lifecycle                               │
//! │                                                                         │
//! │  CartStore::load(storage)                                              │
//! │       │                                                                 │
//! │       ├── snapshot found & valid ──► restored cart                     │
//! │       ├── no snapshot ─────────────► empty cart                        │
//! │       └── unreadable / corrupt ────► empty cart + warn!                │
//! │                                                                         │
//! │  add_item / remove_item / update_quantity / clear                      │
//! │       │                                                                 │
//! │       ├── mutate Cart (foodhub-core rules)                             │
//! │       └── storage.set(CART_STORAGE_KEY, snapshot)                      │
//! │              └── on failure: warn!, in-memory cart stays current       │
//! │                                                                         │
//! │  total() / count() ──► recomputed from the items every call            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations never fail. Storage problems are logged and otherwise
//! ignored; the in-memory cart is always the source of truth.

use tracing::{debug, warn};

use foodhub_core::{Cart, CartItem, CartTotals, Meal, Money, OrderLine, CART_STORAGE_KEY};

use crate::snapshot;
use crate::storage::Storage;

/// Cart with write-through persistence.
#[derive(Debug)]
pub struct CartStore<S: Storage> {
    cart: Cart,
    storage: S,
    key: String,
}

impl<S: Storage> CartStore<S> {
    /// Restores the cart saved under [`CART_STORAGE_KEY`].
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, CART_STORAGE_KEY)
    }

    /// Restores the cart saved under `key`.
    pub fn load_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = match storage.get(&key) {
            Ok(Some(raw)) => match snapshot::decode(&raw) {
                Ok(cart) => cart,
                Err(e) => {
                    warn!(key = %key, error = %e, "Discarding unreadable cart snapshot");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "Could not read cart snapshot, starting empty");
                Cart::new()
            }
        };

        debug!(key = %key, lines = cart.line_count(), count = cart.count(), "Cart loaded");
        CartStore { cart, storage, key }
    }

    fn persist(&self) {
        let result = snapshot::encode(&self.cart)
            .and_then(|raw| self.storage.set(&self.key, &raw));
        if let Err(e) = result {
            warn!(key = %self.key, error = %e, "Failed to persist cart snapshot");
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one of `meal` (increments if already present).
    pub fn add_item(&mut self, meal: &Meal) {
        self.cart.add_item(meal);
        debug!(
            meal_id = %meal.id,
            quantity = self.cart.quantity_of(&meal.id),
            "Added to cart"
        );
        self.persist();
    }

    /// Removes the line for `meal_id`; unknown ids are a no-op.
    pub fn remove_item(&mut self, meal_id: &str) {
        let removed = self.cart.remove_item(meal_id);
        debug!(meal_id, removed, "Remove from cart");
        self.persist();
    }

    /// Sets a line's quantity; `quantity <= 0` removes it.
    pub fn update_quantity(&mut self, meal_id: &str, quantity: i64) {
        let changed = self.cart.update_quantity(meal_id, quantity);
        debug!(meal_id, quantity, changed, "Update cart quantity");
        self.persist();
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        debug!("Cart cleared");
        self.persist();
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Sum of price × quantity. Lines with an unreadable price count as zero
    /// and are reported at warn level.
    pub fn total(&self) -> Money {
        let unpriced = self.cart.unpriced_items();
        if !unpriced.is_empty() {
            warn!(meal_ids = ?unpriced, "Cart lines with unreadable prices counted as zero");
        }
        self.cart.total()
    }

    /// Sum of quantities.
    pub fn count(&self) -> i64 {
        self.cart.count()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&self.cart)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.cart.line_count()
    }

    pub fn contains(&self, meal_id: &str) -> bool {
        self.cart.contains(meal_id)
    }

    pub fn quantity_of(&self, meal_id: &str) -> i64 {
        self.cart.quantity_of(meal_id)
    }

    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.cart.order_lines()
    }

    pub fn provider_ids(&self) -> Vec<&str> {
        self.cart.provider_ids()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StorageError, StorageResult};
    use crate::storage::MemoryStorage;
    use chrono::Utc;

    fn meal(id: &str, price: &str) -> Meal {
        Meal {
            id: id.to_string(),
            provider_id: "prov-1".to_string(),
            category_id: None,
            name: format!("Meal {}", id),
            description: None,
            price: price.to_string(),
            image: None,
            is_available: true,
            is_vegetarian: false,
            is_vegan: false,
            created_at: Utc::now(),
            provider: None,
            category: None,
            reviews: None,
        }
    }

    fn stored_count(storage: &MemoryStorage) -> i64 {
        let raw = storage.get(CART_STORAGE_KEY).unwrap().unwrap();
        snapshot::decode(&raw).unwrap().count()
    }

    /// Storage whose writes always fail.
    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Io(std::io::Error::other("disk gone")))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Io(std::io::Error::other("disk gone")))
        }

        fn remove(&self, _key: &str) -> StorageResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_new_store_starts_empty() {
        let store = CartStore::load(MemoryStorage::new());
        assert!(store.is_empty());
        assert_eq!(store.total(), Money::zero());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let storage = MemoryStorage::new();
        let mut store = CartStore::load(storage.clone());
        let a = meal("a", "100.00");

        store.add_item(&a);
        assert_eq!(stored_count(&storage), 1);

        store.add_item(&a);
        assert_eq!(stored_count(&storage), 2);

        store.update_quantity("a", 5);
        assert_eq!(stored_count(&storage), 5);

        store.remove_item("a");
        assert_eq!(stored_count(&storage), 0);

        store.add_item(&a);
        store.clear();
        assert_eq!(stored_count(&storage), 0);
    }

    #[test]
    fn test_reload_restores_items_in_order() {
        let storage = MemoryStorage::new();
        {
            let mut store = CartStore::load(storage.clone());
            store.add_item(&meal("b", "50.00"));
            store.add_item(&meal("a", "100.00"));
            store.add_item(&meal("b", "50.00"));
        }

        let reloaded = CartStore::load(storage);
        let ids: Vec<&str> = reloaded.items().iter().map(CartItem::meal_id).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(reloaded.count(), 3);
        assert_eq!(reloaded.total(), Money::from_major(200));
    }

    #[test]
    fn test_corrupt_snapshot_loads_empty() {
        let storage = MemoryStorage::new();
        storage.set(CART_STORAGE_KEY, "{ definitely not json").unwrap();

        let mut store = CartStore::load(storage.clone());
        assert!(store.is_empty());

        // The next mutation replaces the corrupt snapshot.
        store.add_item(&meal("a", "1.00"));
        assert_eq!(stored_count(&storage), 1);
    }

    #[test]
    fn test_one_bad_line_does_not_lose_the_cart() {
        let storage = MemoryStorage::new();
        let good = serde_json::to_value(meal("a", "100.00")).unwrap();
        let raw = serde_json::json!({
            "items": [
                { "meal": good, "quantity": 2 },
                { "meal": { "id": "stale", "price": "5.00" }, "quantity": 1 }
            ]
        });
        storage.set(CART_STORAGE_KEY, &raw.to_string()).unwrap();

        let mut store = CartStore::load(storage.clone());
        assert_eq!(store.quantity_of("a"), 2);
        assert!(!store.contains("stale"));

        store.add_item(&meal("b", "50.00"));
        let reloaded = CartStore::load(storage);
        assert_eq!(reloaded.quantity_of("a"), 2);
        assert_eq!(reloaded.count(), 3);
    }

    #[test]
    fn test_storage_failures_do_not_break_cart() {
        let mut store = CartStore::load(BrokenStorage);
        let a = meal("a", "20.00");

        store.add_item(&a);
        store.add_item(&a);

        assert_eq!(store.count(), 2);
        assert_eq!(store.total(), Money::from_major(40));
    }

    #[test]
    fn test_noop_operations_leave_cart_unchanged() {
        let mut store = CartStore::load(MemoryStorage::new());
        store.add_item(&meal("a", "10.00"));

        store.remove_item("missing");
        store.update_quantity("missing", 3);

        assert_eq!(store.line_count(), 1);
        assert!(!store.contains("missing"));
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let storage = MemoryStorage::new();
        let mut guest = CartStore::load_with_key(storage.clone(), "guest-cart");
        guest.add_item(&meal("a", "10.00"));

        let main = CartStore::load(storage.clone());
        assert!(main.is_empty());
        assert!(storage.get("guest-cart").unwrap().is_some());
    }

    #[test]
    fn test_works_with_file_storage() {
        let dir = tempfile::tempdir().unwrap();
        let storage = crate::file::FileStorage::open(dir.path()).unwrap();
        let mut store = CartStore::load(&storage);
        store.add_item(&meal("a", "99.50"));
        store.add_item(&meal("a", "99.50"));

        let reloaded = CartStore::load(&storage);
        assert_eq!(reloaded.total(), Money::from_minor(19900));
        assert_eq!(reloaded.order_lines()[0].quantity, 2);
    }
}
