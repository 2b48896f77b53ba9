use clap::Subcommand;

/// Stock movement commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StockCommands {
    /// Receive units into stock.
    Receive {
        item_id: i64,
        amount: i64,
        #[arg(long)]
        note: Option<String>,
    },
    /// Withdraw units from stock.
    Withdraw {
        item_id: i64,
        amount: i64,
        #[arg(long)]
        note: Option<String>,
    },
}
