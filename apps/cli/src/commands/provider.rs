//! # Provider Commands
//!
//! Restaurant dashboard: menu editing, the incoming order board and stats.

use anyhow::{bail, Context as _};
use tracing::debug;

use foodhub_core::validation::{validate_meal_name, validate_price, ValidationResult};
use foodhub_core::{MealInput, OrderStatus};

use crate::cli::{MealArgs, ProviderAction};
use crate::context::AppContext;

/// Turns menu editor flags into a request body, validating what was given.
pub fn meal_input(args: MealArgs) -> ValidationResult<MealInput> {
    Ok(MealInput {
        name: args.name.as_deref().map(validate_meal_name).transpose()?,
        description: args.description.filter(|d| !d.trim().is_empty()),
        price: args.price.as_deref().map(validate_price).transpose()?,
        category_id: args.category_id,
        image: args.image,
        is_available: args.available,
        is_vegetarian: args.vegetarian,
        is_vegan: args.vegan,
    })
}

pub async fn run(ctx: &AppContext, action: ProviderAction) -> anyhow::Result<()> {
    match action {
        ProviderAction::Meals => {
            debug!("provider meals command");
            let meals = ctx.client.provider_meals().await?;
            ctx.out.emit(&meals, |out| out.meals_table(&meals))
        }
        ProviderAction::AddMeal(args) => {
            debug!("provider add-meal command");
            let input = meal_input(args)?;
            let meal = ctx.client.add_meal(&input).await?;
            ctx.out.emit(&meal, |out| out.meal_detail(&meal))
        }
        ProviderAction::UpdateMeal { id, fields } => {
            debug!(meal_id = %id, "provider update-meal command");
            let input = meal_input(fields)?;
            if input.is_empty() {
                bail!("Nothing to update; pass at least one field");
            }
            let meal = ctx.client.update_meal(&id, &input).await?;
            ctx.out.emit(&meal, |out| out.meal_detail(&meal))
        }
        ProviderAction::DeleteMeal { id } => {
            debug!(meal_id = %id, "provider delete-meal command");
            ctx.client.delete_meal(&id).await?;
            ctx.out.emit(&serde_json::json!({ "deleted": id }), |_| {
                format!("Meal {id} deleted.\n")
            })
        }
        ProviderAction::Orders { status } => {
            debug!(?status, "provider orders command");
            let wanted = status
                .as_deref()
                .map(str::parse::<OrderStatus>)
                .transpose()?;
            let mut orders = ctx.client.provider_orders().await?;
            if let Some(wanted) = wanted {
                orders.retain(|o| o.status == wanted);
            }
            ctx.out.emit(&orders, |out| out.orders_table(&orders))
        }
        ProviderAction::Advance { order_id } => {
            debug!(order_id = %order_id, "provider advance command");
            let orders = ctx.client.provider_orders().await?;
            let order = orders
                .iter()
                .find(|o| o.id == order_id)
                .with_context(|| format!("Order {order_id} is not on your order board"))?;
            let updated = ctx.client.advance_order(order).await?;
            ctx.out.emit(&updated, |_| {
                format!("Order {} is now {}.\n", updated.id, updated.status)
            })
        }
        ProviderAction::Stats => {
            debug!("provider stats command");
            let stats = ctx.client.provider_stats().await?;
            ctx.out.emit(&stats, |out| out.stats_table(&stats))
        }
    }
}
