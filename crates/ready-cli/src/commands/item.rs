mod create;
mod delete;
mod get;
mod list;
mod low_stock;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ItemCommands;
use crate::context::AppContext;

/// Handle `rdy item`.
pub async fn handle(action: &ItemCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ItemCommands::List { category } => list::run(category.as_deref(), ctx, flags).await,
        ItemCommands::Get { id } => get::run(*id, ctx, flags).await,
        ItemCommands::Create {
            name,
            category,
            quantity,
            min_quantity,
        } => create::run(name, category.as_deref(), *quantity, *min_quantity, ctx, flags).await,
        ItemCommands::Update {
            id,
            name,
            category,
            clear_category,
            quantity,
            min_quantity,
        } => {
            let params = update::UpdateParams {
                name: name.clone(),
                category: category.clone(),
                clear_category: *clear_category,
                quantity: *quantity,
                min_quantity: *min_quantity,
            };
            update::run(*id, params, ctx, flags).await
        }
        ItemCommands::Delete { id } => delete::run(*id, ctx, flags).await,
        ItemCommands::LowStock => low_stock::run(ctx, flags).await,
    }
}
