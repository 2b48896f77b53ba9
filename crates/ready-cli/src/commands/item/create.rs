use ready_core::inputs::NewItem;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    category: Option<&str>,
    quantity: i64,
    min_quantity: Option<i64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let min_quantity = min_quantity.unwrap_or(ctx.config.general.default_min_quantity);
    let mut new_item = NewItem::new(name, quantity, min_quantity);
    if let Some(category) = category {
        new_item = new_item.with_category(category);
    }

    let item = ctx.service.create_item(&new_item).await?;
    output(&item, flags.format)
}
