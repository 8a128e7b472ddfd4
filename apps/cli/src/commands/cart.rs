//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐  cart add   ┌──────────┐  checkout   ┌──────────────┐     │
//! │  │  Empty   │────────────►│ In Cart  │────────────►│ Order placed │     │
//! │  │  Cart    │             │          │             │ (cart empty) │     │
//! │  └──────────┘             └──────────┘             └──────────────┘     │
//! │       ▲                    │  cart set / remove                         │
//! │       └──── cart clear ────┘                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every change is written to `foodhub-cart.json` in the data dir before the
//! command returns, so the cart survives between runs.

use anyhow::Context as _;
use serde::Serialize;
use tracing::{debug, warn};

use foodhub_client::add_meal_to_cart;
use foodhub_core::validation::validate_quantity;
use foodhub_core::{Cart, CartItem, CartTotals};

use crate::cli::CartAction;
use crate::context::AppContext;

/// Cart response including items and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

pub async fn run(ctx: &mut AppContext, action: CartAction) -> anyhow::Result<()> {
    match action {
        CartAction::Show => {
            debug!("cart show command");
            if !ctx.cart.cart().unpriced_items().is_empty() {
                warn!("Some cart lines have unreadable prices and count as zero");
            }
        }
        CartAction::Add { meal_id } => {
            debug!(meal_id = %meal_id, "cart add command");
            let meal = add_meal_to_cart(&ctx.client, &mut ctx.cart, &meal_id)
                .await
                .with_context(|| format!("Could not add meal {meal_id}"))?;
            if !ctx.out.json {
                println!("Added {} ({} in cart)", meal.name, ctx.cart.quantity_of(&meal.id));
            }
        }
        CartAction::Remove { meal_id } => {
            debug!(meal_id = %meal_id, "cart remove command");
            if !ctx.cart.contains(&meal_id) {
                warn!(meal_id = %meal_id, "Meal is not in the cart");
            }
            ctx.cart.remove_item(&meal_id);
        }
        CartAction::Set { meal_id, quantity } => {
            debug!(meal_id = %meal_id, quantity, "cart set command");
            if quantity > 0 {
                validate_quantity(quantity)?;
            }
            if !ctx.cart.contains(&meal_id) {
                warn!(meal_id = %meal_id, "Meal is not in the cart; use `cart add` first");
            }
            ctx.cart.update_quantity(&meal_id, quantity);
        }
        CartAction::Clear => {
            debug!("cart clear command");
            ctx.cart.clear();
        }
    }

    show(ctx)
}

fn show(ctx: &AppContext) -> anyhow::Result<()> {
    let cart = ctx.cart.cart();
    ctx.out
        .emit(&CartResponse::from(cart), |out| out.cart_table(cart))
}
