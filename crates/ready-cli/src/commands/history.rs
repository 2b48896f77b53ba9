use anyhow::Context;
use ready_core::history::{HistoryPage, HistoryQuery, parse_action_filter};

use crate::cli::root_commands::HistoryArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::{output, render_rows};

/// Handle `rdy history`.
pub async fn handle(args: &HistoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page_size = effective_limit(args.page_size, flags.limit, ctx.config.general.page_size);
    let filter = parse_action_filter(&args.action)
        .with_context(|| format!("invalid --action '{}'", args.action))?;
    let query = HistoryQuery::page(args.page, page_size).with_filter(filter);

    let page = ctx.service.history(query).await?;

    if flags.format == OutputFormat::Table {
        println!("{}", render_page(&page)?);
        return Ok(());
    }
    output(&page, flags.format)
}

fn render_page(page: &HistoryPage) -> anyhow::Result<String> {
    let rows = page
        .rows
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!(
        "{}\n\npage {}/{} ({} transactions)",
        render_rows(&rows),
        page.page,
        page.page_count().max(1),
        page.total
    ))
}

#[cfg(test)]
mod tests {
    use ready_core::history::{HistoryPage, HistoryQuery};

    use super::render_page;

    #[test]
    fn footer_reports_page_position() {
        let mut page = HistoryPage::empty(&HistoryQuery::page(2, 10));
        page.total = 25;
        let out = render_page(&page).expect("render");
        assert!(out.starts_with("(no rows)"));
        assert!(out.ends_with("page 2/3 (25 transactions)"));
    }

    #[test]
    fn empty_history_is_page_one_of_one() {
        let page = HistoryPage::empty(&HistoryQuery::default());
        let out = render_page(&page).expect("render");
        assert!(out.ends_with("page 1/1 (0 transactions)"));
    }
}
