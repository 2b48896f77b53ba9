use clap::Subcommand;

/// Item commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ItemCommands {
    /// List active items ordered by name.
    List {
        /// Only items in this category (case-insensitive).
        #[arg(long)]
        category: Option<String>,
    },
    /// Get an item by ID.
    Get { id: i64 },
    /// Create an item and log its opening quantity.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = 0)]
        quantity: i64,
        /// Reorder threshold (defaults to `general.default_min_quantity`).
        #[arg(long)]
        min_quantity: Option<i64>,
    },
    /// Edit an item. A quantity change is logged as UPDATE.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, conflicts_with = "clear_category")]
        category: Option<String>,
        /// Remove the item's category.
        #[arg(long)]
        clear_category: bool,
        #[arg(long)]
        quantity: Option<i64>,
        #[arg(long)]
        min_quantity: Option<i64>,
    },
    /// Soft-delete an item, zeroing its stock.
    Delete { id: i64 },
    /// Items at or below their reorder threshold.
    LowStock,
}
