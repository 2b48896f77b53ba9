use crate::cli::GlobalFlags;
use crate::commands::shared::limit::truncate_to;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    category: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut items = ctx.service.list_items().await?;
    if let Some(category) = category {
        items.retain(|item| {
            item.category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(category))
        });
    }
    truncate_to(&mut items, flags.limit);
    output(&items, flags.format)
}
