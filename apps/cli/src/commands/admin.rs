//! Admin panel commands.

use tracing::debug;

use foodhub_core::{CategoryInput, UserStatus};

use crate::cli::AdminAction;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, action: AdminAction) -> anyhow::Result<()> {
    match action {
        AdminAction::Stats => {
            debug!("admin stats command");
            let stats = ctx.client.admin_stats().await?;
            ctx.out.emit(&stats, |out| out.stats_table(&stats))
        }
        AdminAction::Users => {
            debug!("admin users command");
            let users = ctx.client.admin_users().await?;
            ctx.out.emit(&users, |out| out.users_table(&users))
        }
        AdminAction::Suspend { user_id } => set_status(ctx, &user_id, UserStatus::Suspended).await,
        AdminAction::Activate { user_id } => set_status(ctx, &user_id, UserStatus::Active).await,
        AdminAction::Orders => {
            debug!("admin orders command");
            let orders = ctx.client.admin_orders().await?;
            ctx.out.emit(&orders, |out| out.orders_table(&orders))
        }
        AdminAction::AddCategory { name, slug } => {
            debug!(slug = %slug, "admin add-category command");
            let category = ctx.client.add_category(&CategoryInput { name, slug }).await?;
            ctx.out.emit(&category, |out| {
                out.categories_table(std::slice::from_ref(&category))
            })
        }
        AdminAction::DeleteCategory { id } => {
            debug!(category_id = %id, "admin delete-category command");
            ctx.client.delete_category(&id).await?;
            ctx.out.emit(&serde_json::json!({ "deleted": id }), |_| {
                format!("Category {id} deleted.\n")
            })
        }
    }
}

async fn set_status(ctx: &AppContext, user_id: &str, status: UserStatus) -> anyhow::Result<()> {
    debug!(user_id, ?status, "admin user status command");
    let user = ctx.client.update_user_status(user_id, status).await?;
    ctx.out.emit(&user, |out| out.users_table(std::slice::from_ref(&user)))
}
