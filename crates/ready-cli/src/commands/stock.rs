use crate::cli::GlobalFlags;
use crate::cli::subcommands::StockCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `rdy stock`.
pub async fn handle(action: &StockCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = match action {
        StockCommands::Receive {
            item_id,
            amount,
            note,
        } => {
            ctx.service
                .receive(*item_id, *amount, note.as_deref())
                .await?
        }
        StockCommands::Withdraw {
            item_id,
            amount,
            note,
        } => {
            ctx.service
                .withdraw(*item_id, *amount, note.as_deref())
                .await?
        }
    };
    output(&outcome, flags.format)
}
