//! Menu browsing: meals, categories, restaurants.

use tracing::debug;

use foodhub_client::MealFilters;

use crate::cli::{MealsAction, ProvidersAction};
use crate::context::AppContext;

pub async fn meals(ctx: &AppContext, action: MealsAction) -> anyhow::Result<()> {
    match action {
        MealsAction::List {
            category,
            search,
            vegetarian,
            vegan,
        } => {
            let filters = MealFilters {
                category,
                search,
                vegetarian,
                vegan,
            };
            debug!(?filters, "meals list command");
            let meals = ctx.client.meals(&filters).await?;
            ctx.out.emit(&meals, |out| out.meals_table(&meals))
        }
        MealsAction::Show { id } => {
            debug!(meal_id = %id, "meals show command");
            let meal = ctx.client.meal(&id).await?;
            ctx.out.emit(&meal, |out| out.meal_detail(&meal))
        }
    }
}

pub async fn categories(ctx: &AppContext) -> anyhow::Result<()> {
    debug!("categories command");
    let categories = ctx.client.categories().await?;
    ctx.out
        .emit(&categories, |out| out.categories_table(&categories))
}

pub async fn providers(ctx: &AppContext, action: ProvidersAction) -> anyhow::Result<()> {
    match action {
        ProvidersAction::List => {
            debug!("providers list command");
            let providers = ctx.client.providers().await?;
            ctx.out
                .emit(&providers, |out| out.providers_table(&providers))
        }
        ProvidersAction::Show { id } => {
            debug!(provider_id = %id, "providers show command");
            let provider = ctx.client.provider(&id).await?;
            ctx.out
                .emit(&provider, |out| out.provider_detail(&provider))
        }
    }
}
