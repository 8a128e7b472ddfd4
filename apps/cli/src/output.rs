//! # Output
//!
//! Renders command results as plain tables, or as JSON with `--json`.
//! Everything goes to stdout; logs go to stderr.

use std::fmt::Write as _;

use serde::Serialize;

use foodhub_core::{
    Cart, CartTotals, Category, Meal, Money, Order, ProviderProfile, Stats, User,
};

/// How to print results.
#[derive(Debug, Clone)]
pub struct Output {
    pub json: bool,
    pub currency_symbol: String,
}

impl Output {
    pub fn new(json: bool, currency_symbol: impl Into<String>) -> Self {
        Output {
            json,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Prints `value` as pretty JSON or the `text` rendering.
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&Self) -> String) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            print!("{}", text(self));
        }
        Ok(())
    }

    pub fn money(&self, money: Money) -> String {
        money.format_with_symbol(&self.currency_symbol)
    }

    /// Formats an API decimal string, falling back to the raw text.
    pub fn price(&self, raw: &str) -> String {
        Money::parse_decimal(raw)
            .map(|m| self.money(m))
            .unwrap_or_else(|_| raw.to_string())
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    pub fn meals_table(&self, meals: &[Meal]) -> String {
        if meals.is_empty() {
            return "No meals found.\n".to_string();
        }
        let mut out = String::new();
        for meal in meals {
            let _ = writeln!(
                out,
                "{:<24} {:<32} {:>12}  {}",
                meal.id,
                truncate(&meal.name, 32),
                self.price(&meal.price),
                meal_tags(meal)
            );
        }
        out
    }

    pub fn meal_detail(&self, meal: &Meal) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}  ({})", meal.name, meal.id);
        let _ = writeln!(out, "Price:      {}", self.price(&meal.price));
        if let Some(provider) = &meal.provider {
            let open = if provider.is_open { "open" } else { "closed" };
            let _ = writeln!(out, "Restaurant: {} ({open})", provider.restaurant_name);
        }
        if let Some(category) = &meal.category {
            let _ = writeln!(out, "Category:   {}", category.name);
        }
        let tags = meal_tags(meal);
        if !tags.is_empty() {
            let _ = writeln!(out, "Tags:       {tags}");
        }
        if let Some(description) = &meal.description {
            let _ = writeln!(out, "\n{description}");
        }
        if let Some(reviews) = meal.reviews.as_ref().filter(|r| !r.is_empty()) {
            let avg = meal.average_rating().unwrap_or_default();
            let _ = writeln!(out, "\nReviews ({}, avg {avg:.1}):", reviews.len());
            for review in reviews {
                let author = review
                    .customer
                    .as_ref()
                    .map(|c| c.name.as_str())
                    .unwrap_or("customer");
                let _ = writeln!(
                    out,
                    "  {} {}  {}",
                    stars(review.rating),
                    author,
                    review.comment.as_deref().unwrap_or("")
                );
            }
        }
        out
    }

    pub fn categories_table(&self, categories: &[Category]) -> String {
        let mut out = String::new();
        for category in categories {
            let _ = writeln!(out, "{:<24} {:<20} {}", category.id, category.slug, category.name);
        }
        out
    }

    pub fn providers_table(&self, providers: &[ProviderProfile]) -> String {
        if providers.is_empty() {
            return "No restaurants found.\n".to_string();
        }
        let mut out = String::new();
        for provider in providers {
            let open = if provider.is_open { "open" } else { "closed" };
            let _ = writeln!(
                out,
                "{:<24} {:<32} {:<6} {}",
                provider.id,
                truncate(&provider.restaurant_name, 32),
                open,
                provider.address.as_deref().unwrap_or("")
            );
        }
        out
    }

    pub fn provider_detail(&self, provider: &ProviderProfile) -> String {
        let mut out = String::new();
        let open = if provider.is_open { "open" } else { "closed" };
        let _ = writeln!(out, "{} ({open})", provider.restaurant_name);
        if let Some(address) = &provider.address {
            let _ = writeln!(out, "{address}");
        }
        if let Some(description) = &provider.description {
            let _ = writeln!(out, "\n{description}");
        }
        if let Some(meals) = &provider.meals {
            let _ = writeln!(out, "\nMenu:");
            out.push_str(&self.meals_table(meals));
        }
        out
    }

    // =========================================================================
    // Cart
    // =========================================================================

    pub fn cart_table(&self, cart: &Cart) -> String {
        if cart.is_empty() {
            return "Your cart is empty.\n".to_string();
        }
        let mut out = String::new();
        for item in cart.items() {
            let line = item
                .line_total()
                .map(|m| self.money(m))
                .unwrap_or_else(|_| "?".to_string());
            let _ = writeln!(
                out,
                "{:<24} {:<32} x{:<4} {:>12}",
                item.meal.id,
                truncate(&item.meal.name, 32),
                item.quantity,
                line
            );
        }
        let totals = CartTotals::from(cart);
        let _ = writeln!(
            out,
            "\n{} item(s), {} line(s)    Total: {}",
            totals.item_count,
            totals.line_count,
            self.money(totals.total)
        );
        if !totals.unpriced_meal_ids.is_empty() {
            let _ = writeln!(
                out,
                "Not priced (counted as 0): {}",
                totals.unpriced_meal_ids.join(", ")
            );
        }
        out
    }

    // =========================================================================
    // Orders
    // =========================================================================

    pub fn orders_table(&self, orders: &[Order]) -> String {
        if orders.is_empty() {
            return "No orders.\n".to_string();
        }
        let mut out = String::new();
        for order in orders {
            let restaurant = order
                .provider
                .as_ref()
                .map(|p| p.restaurant_name.as_str())
                .unwrap_or(order.provider_id.as_str());
            let _ = writeln!(
                out,
                "{:<24} {:<10} {:>12}  {}  {}",
                order.id,
                order.status.as_str(),
                self.price(&order.total_amount),
                order.created_at.format("%Y-%m-%d %H:%M"),
                restaurant
            );
        }
        out
    }

    pub fn order_detail(&self, order: &Order) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Order {}  [{}]", order.id, order.status);
        if let Some(provider) = &order.provider {
            let _ = writeln!(out, "Restaurant: {}", provider.restaurant_name);
        }
        let _ = writeln!(out, "Deliver to: {}", order.delivery_address);
        if let Some(notes) = &order.notes {
            let _ = writeln!(out, "Notes:      {notes}");
        }
        let _ = writeln!(out, "Placed:     {}", order.created_at.format("%Y-%m-%d %H:%M"));
        if let Some(items) = &order.items {
            let _ = writeln!(out);
            for item in items {
                let name = item
                    .meal
                    .as_ref()
                    .map(|m| m.name.as_str())
                    .unwrap_or(item.meal_id.as_str());
                let _ = writeln!(
                    out,
                    "  {:<32} x{:<4} {:>12}",
                    truncate(name, 32),
                    item.quantity,
                    self.price(&item.subtotal)
                );
            }
        }
        let _ = writeln!(out, "\nTotal: {}", self.price(&order.total_amount));
        if let Some(next) = order.status.next() {
            let _ = writeln!(out, "Next:  {next}");
        }
        out
    }

    // =========================================================================
    // Admin
    // =========================================================================

    pub fn users_table(&self, users: &[User]) -> String {
        let mut out = String::new();
        for user in users {
            let _ = writeln!(
                out,
                "{:<24} {:<24} {:<32} {:?}/{:?}",
                user.id,
                truncate(&user.name, 24),
                user.email,
                user.role,
                user.status
            );
        }
        out
    }

    pub fn stats_table(&self, stats: &Stats) -> String {
        let mut out = String::new();
        for (key, value) in stats {
            let shown = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let _ = writeln!(out, "{key:<24} {shown}");
        }
        out
    }
}

fn meal_tags(meal: &Meal) -> String {
    let mut tags = Vec::new();
    if meal.is_vegan {
        tags.push("vegan");
    } else if meal.is_vegetarian {
        tags.push("vegetarian");
    }
    if !meal.is_available {
        tags.push("unavailable");
    }
    tags.join(", ")
}

fn stars(rating: i64) -> String {
    let filled = rating.clamp(0, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn meal(id: &str, price: &str) -> Meal {
        Meal {
            id: id.to_string(),
            provider_id: "prov-1".to_string(),
            category_id: None,
            name: format!("Meal {id}"),
            description: None,
            price: price.to_string(),
            image: None,
            is_available: true,
            is_vegetarian: true,
            is_vegan: false,
            created_at: Utc::now(),
            provider: None,
            category: None,
            reviews: None,
        }
    }

    #[test]
    fn test_cart_table_shows_total_with_symbol() {
        let out = Output::new(false, "৳");
        let mut cart = Cart::new();
        cart.add_item(&meal("a", "100.00"));
        cart.add_item(&meal("b", "50.00"));
        cart.add_item(&meal("b", "50.00"));

        let text = out.cart_table(&cart);
        assert!(text.contains("x2"));
        assert!(text.contains("3 item(s), 2 line(s)"));
        assert!(text.contains("Total: ৳200.00"));
    }

    #[test]
    fn test_empty_cart_message() {
        let out = Output::new(false, "$");
        assert_eq!(out.cart_table(&Cart::new()), "Your cart is empty.\n");
    }

    #[test]
    fn test_cart_table_flags_unpriced_lines() {
        let out = Output::new(false, "$");
        let mut cart = Cart::new();
        cart.add_item(&meal("odd", "n/a"));
        let text = out.cart_table(&cart);
        assert!(text.contains("Not priced (counted as 0): odd"));
        assert!(text.contains("Total: $0.00"));
    }

    #[test]
    fn test_price_falls_back_to_raw() {
        let out = Output::new(false, "$");
        assert_eq!(out.price("12.5"), "$12.50");
        assert_eq!(out.price("call us"), "call us");
    }

    #[test]
    fn test_meal_tags_and_helpers() {
        let mut m = meal("a", "1.00");
        assert_eq!(meal_tags(&m), "vegetarian");
        m.is_vegan = true;
        m.is_available = false;
        assert_eq!(meal_tags(&m), "vegan, unavailable");

        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 4), "abc");
    }
}
