//! # Cart
//!
//! The customer's shopping cart as a plain value. Persistence lives in
//! `foodhub-store`; this module only knows the rules.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  User Action              Cart Method             Item List Change      │
//! │  ───────────              ───────────             ────────────────      │
//! │                                                                         │
//! │  Add to cart ────────────► add_item(meal) ──────► qty += 1 or push     │
//! │                                                                         │
//! │  Change quantity ────────► update_quantity() ───► qty = n  (n <= 0     │
//! │                                                    removes the line)    │
//! │                                                                         │
//! │  Click remove ───────────► remove_item(id) ─────► retain(id != ...)    │
//! │                                                                         │
//! │  Clear / order placed ───► clear() ─────────────► items.clear()        │
//! │                                                                         │
//! │  Header badge ───────────► count() ─────────────► (read only)          │
//! │  Cart page total ────────► total() ─────────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per meal id
//! - Every quantity is > 0
//! - Lines keep insertion order
//!
//! No operation returns an error. Unknown ids are no-ops and non-positive
//! quantities mean "remove".

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::MoneyParseError;
use crate::money::Money;
use crate::types::{Meal, OrderLine};

/// One meal in the cart with its quantity.
///
/// `meal` is a frozen copy of the listing at the time it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    pub meal: Meal,
    pub quantity: i64,
}

impl CartItem {
    pub fn meal_id(&self) -> &str {
        &self.meal.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Result<Money, MoneyParseError> {
        Ok(self.meal.unit_price()?.multiply_quantity(self.quantity))
    }
}

/// The shopping cart.
///
/// Serializes as `{ "items": [ { "meal": ..., "quantity": n } ] }`, which is
/// also the persisted snapshot layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from raw lines, restoring the invariants.
    ///
    /// Lines with quantity <= 0 are dropped; repeated meal ids are merged into
    /// the first occurrence with their quantities summed.
    pub fn from_items(items: impl IntoIterator<Item = CartItem>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            if item.quantity <= 0 {
                continue;
            }
            match cart.position(item.meal_id()) {
                Some(idx) => {
                    let existing = &mut cart.items[idx];
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    fn position(&self, meal_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.meal_id() == meal_id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one of `meal`. Increments the existing line if the meal is
    /// already in the cart, otherwise appends a new line with quantity 1.
    pub fn add_item(&mut self, meal: &Meal) {
        match self.position(&meal.id) {
            Some(idx) => {
                let item = &mut self.items[idx];
                item.quantity = item.quantity.saturating_add(1);
            }
            None => self.items.push(CartItem {
                meal: meal.clone(),
                quantity: 1,
            }),
        }
    }

    /// Removes the line for `meal_id`. Returns whether a line was removed.
    pub fn remove_item(&mut self, meal_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.meal_id() != meal_id);
        self.items.len() != before
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as [`Cart::remove_item`]
    /// - meal not in cart: no-op, no line is created
    ///
    /// Returns whether the cart changed.
    pub fn update_quantity(&mut self, meal_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(meal_id);
        }

        match self.position(meal_id) {
            Some(idx) if self.items[idx].quantity != quantity => {
                self.items[idx].quantity = quantity;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    // =========================================================================
    // Derived Values
    // =========================================================================

    /// Sum of price × quantity over all lines.
    ///
    /// Lines whose price cannot be parsed contribute zero; see
    /// [`Cart::unpriced_items`].
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .filter_map(|i| i.line_total().ok())
            .sum()
    }

    /// Sum of quantities (the header badge number).
    pub fn count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Meal ids whose price string did not parse.
    pub fn unpriced_items(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter(|i| i.meal.unit_price().is_err())
            .map(CartItem::meal_id)
            .collect()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct meals.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, meal_id: &str) -> bool {
        self.position(meal_id).is_some()
    }

    /// Quantity of `meal_id`, 0 when absent.
    pub fn quantity_of(&self, meal_id: &str) -> i64 {
        self.position(meal_id)
            .map(|idx| self.items[idx].quantity)
            .unwrap_or(0)
    }

    /// `{ mealId, quantity }` pairs in insertion order, for order submission.
    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.items
            .iter()
            .map(|i| OrderLine {
                meal_id: i.meal.id.clone(),
                quantity: i.quantity,
            })
            .collect()
    }

    /// Distinct provider ids, in the order their meals were first added.
    pub fn provider_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for item in &self.items {
            let id = item.meal.provider_id.as_str();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }
}

/// Cart summary for display and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub item_count: i64,
    /// Decimal string on the wire, like the meal prices it sums.
    #[serde(with = "crate::money::as_decimal_string")]
    #[ts(type = "string")]
    pub total: Money,
    pub unpriced_meal_ids: Vec<String>,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            item_count: cart.count(),
            total: cart.total(),
            unpriced_meal_ids: cart
                .unpriced_items()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn meal(id: &str, price: &str) -> Meal {
        Meal {
            id: id.to_string(),
            provider_id: format!("prov-{}", id),
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

    #[test]
    fn test_add_same_meal_twice_merges() {
        let mut cart = Cart::new();
        let a = meal("a", "100.00");

        cart.add_item(&a);
        cart.add_item(&a);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of("a"), 2);
    }

    #[test]
    fn test_example_total_and_count() {
        let mut cart = Cart::new();
        let a = meal("a", "100.00");
        let b = meal("b", "50.00");

        cart.add_item(&a);
        cart.add_item(&b);
        cart.add_item(&b);

        assert_eq!(cart.total(), Money::from_major(200));
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let cart = Cart::new();
        assert_eq!(cart.total(), Money::zero());
        assert_eq!(cart.count(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_non_positive_removes() {
        let mut cart = Cart::new();
        cart.add_item(&meal("a", "10.00"));
        cart.add_item(&meal("b", "10.00"));

        assert!(cart.update_quantity("a", 0));
        assert!(cart.update_quantity("b", -5));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_and_ignores_unknown() {
        let mut cart = Cart::new();
        cart.add_item(&meal("a", "12.50"));

        assert!(cart.update_quantity("a", 4));
        assert_eq!(cart.quantity_of("a"), 4);
        assert_eq!(cart.total(), Money::from_minor(5000));

        assert!(!cart.update_quantity("missing", 3));
        assert!(!cart.contains("missing"));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&meal("a", "10.00"));
        let before = cart.clone();

        assert!(!cart.remove_item("zzz"));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_resets_totals() {
        let mut cart = Cart::new();
        cart.add_item(&meal("a", "10.00"));
        cart.add_item(&meal("b", "20.00"));

        cart.clear();

        assert_eq!(cart.total(), Money::zero());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_insertion_order_and_order_lines() {
        let mut cart = Cart::new();
        cart.add_item(&meal("c", "1.00"));
        cart.add_item(&meal("a", "1.00"));
        cart.add_item(&meal("c", "1.00"));

        let lines = cart.order_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].meal_id, "c");
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[1].meal_id, "a");
        assert_eq!(cart.provider_ids(), vec!["prov-c", "prov-a"]);
    }

    #[test]
    fn test_unparseable_price_counts_as_zero() {
        let mut cart = Cart::new();
        cart.add_item(&meal("a", "100.00"));
        cart.add_item(&meal("bad", "free"));

        assert_eq!(cart.total(), Money::from_major(100));
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.unpriced_items(), vec!["bad"]);
    }

    #[test]
    fn test_from_items_restores_invariants() {
        let cart = Cart::from_items(vec![
            CartItem { meal: meal("a", "1.00"), quantity: 2 },
            CartItem { meal: meal("b", "1.00"), quantity: 0 },
            CartItem { meal: meal("a", "1.00"), quantity: 3 },
            CartItem { meal: meal("c", "1.00"), quantity: -1 },
        ]);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of("a"), 5);
    }

    #[test]
    fn test_snapshot_layout() {
        let mut cart = Cart::new();
        cart.add_item(&meal("a", "100.00"));

        let value = serde_json::to_value(&cart).unwrap();
        assert_eq!(value["items"][0]["quantity"], 1);
        assert_eq!(value["items"][0]["meal"]["id"], "a");
        assert_eq!(value["items"][0]["meal"]["price"], "100.00");
    }

    #[test]
    fn test_cart_totals_summary() {
        let mut cart = Cart::new();
        cart.add_item(&meal("a", "100.00"));
        cart.add_item(&meal("a", "100.00"));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 1);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total, Money::from_major(200));
        assert!(totals.unpriced_meal_ids.is_empty());

        let value = serde_json::to_value(&totals).unwrap();
        assert_eq!(value["total"], "200.00");
        assert_eq!(serde_json::from_value::<CartTotals>(value).unwrap(), totals);
    }
}
