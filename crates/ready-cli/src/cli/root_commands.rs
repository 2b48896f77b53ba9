use clap::{Args, Subcommand};

use crate::cli::subcommands::{ItemCommands, StockCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Inventory items.
    Item {
        #[command(subcommand)]
        action: ItemCommands,
    },
    /// Stock movements.
    Stock {
        #[command(subcommand)]
        action: StockCommands,
    },
    /// Transaction history, newest first.
    History(HistoryArgs),
    /// Stock totals, low-stock count and recent transactions.
    Dashboard,
    /// Show the acting user and backend.
    Whoami,
    /// Print the JSON schema of an output type.
    Schema(SchemaArgs),
}

/// Arguments for `rdy history`.
#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Rows per page (defaults to `--limit`, then `general.page_size`).
    #[arg(long)]
    pub page_size: Option<u32>,
    /// Action filter: all, create, receive, withdraw, update, delete.
    #[arg(long, default_value = "all")]
    pub action: String,
}

/// Arguments for `rdy schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub type_name: String,
}
