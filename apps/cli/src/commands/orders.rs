//! # Order Commands
//!
//! Checkout and the customer's order history.
//!
//! ```text
//!  foodhub checkout -a "House 12, Road 5"
//!        │
//!        ▼
//!  place_order_from_cart ──► POST /api/orders ──► cart cleared
//!        │
//!        └── on error the cart is left as it was
//! ```

use anyhow::Context as _;
use tracing::{debug, info};

use foodhub_client::place_order_from_cart;
use foodhub_core::ReviewRequest;

use crate::cli::OrdersAction;
use crate::context::AppContext;

pub async fn checkout(
    ctx: &mut AppContext,
    address: String,
    notes: Option<String>,
) -> anyhow::Result<()> {
    debug!(lines = ctx.cart.line_count(), "checkout command");
    let total = ctx.cart.total();

    let order = place_order_from_cart(&ctx.client, &mut ctx.cart, &address, notes.as_deref())
        .await
        .context("Checkout failed; your cart was kept")?;

    info!(order_id = %order.id, "Order placed");
    ctx.out.emit(&order, |out| {
        format!(
            "Order {} placed ({}). Cart total was {}.\n",
            order.id,
            order.status,
            out.money(total)
        )
    })
}

pub async fn run(ctx: &AppContext, action: OrdersAction) -> anyhow::Result<()> {
    match action {
        OrdersAction::List => {
            debug!("orders list command");
            let orders = ctx.client.orders().await?;
            ctx.out.emit(&orders, |out| out.orders_table(&orders))
        }
        OrdersAction::Show { id } => {
            debug!(order_id = %id, "orders show command");
            let order = ctx.client.order(&id).await?;
            ctx.out.emit(&order, |out| out.order_detail(&order))
        }
        OrdersAction::Cancel { id } => {
            debug!(order_id = %id, "orders cancel command");
            let order = ctx.client.order(&id).await?;
            order.ensure_cancellable()?;
            let order = ctx.client.cancel_order(&id).await?;
            ctx.out
                .emit(&order, |_| format!("Order {} cancelled.\n", order.id))
        }
        OrdersAction::Review {
            order_id,
            meal_id,
            rating,
            comment,
        } => {
            debug!(order_id = %order_id, meal_id = %meal_id, rating, "orders review command");
            let review = ctx
                .client
                .leave_review(&ReviewRequest {
                    meal_id,
                    order_id,
                    rating,
                    comment,
                })
                .await?;
            ctx.out
                .emit(&review, |_| "Thanks for your review!\n".to_string())
        }
    }
}
