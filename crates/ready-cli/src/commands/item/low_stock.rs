use crate::cli::GlobalFlags;
use crate::commands::shared::limit::truncate_to;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut items = ctx.service.low_stock_items().await?;
    truncate_to(&mut items, flags.limit);
    output(&items, flags.format)
}
