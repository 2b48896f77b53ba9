use anyhow::bail;
use schemars::{Schema, schema_for};

use ready_core::entities::{Item, Profile, Transaction, TransactionWithItem};
use ready_core::history::HistoryPage;
use ready_core::identity::Actor;
use ready_core::inputs::NewItem;
use ready_service::{DashboardStats, StockOutcome};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names accepted by `rdy schema`.
const SCHEMA_TYPES: &[&str] = &[
    "item",
    "new-item",
    "transaction",
    "history-row",
    "history-page",
    "profile",
    "actor",
    "stock-outcome",
    "dashboard",
];

fn schema_by_name(name: &str) -> Option<Schema> {
    let schema = match name {
        "item" => schema_for!(Item),
        "new-item" => schema_for!(NewItem),
        "transaction" => schema_for!(Transaction),
        "history-row" => schema_for!(TransactionWithItem),
        "history-page" => schema_for!(HistoryPage),
        "profile" => schema_for!(Profile),
        "actor" => schema_for!(Actor),
        "stock-outcome" => schema_for!(StockOutcome),
        "dashboard" => schema_for!(DashboardStats),
        _ => return None,
    };
    Some(schema)
}

/// Handle `rdy schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let name = args.type_name.trim().to_ascii_lowercase();
    let Some(schema) = schema_by_name(&name) else {
        bail!(
            "unknown schema type '{}'; expected one of: {}",
            args.type_name,
            SCHEMA_TYPES.join(", ")
        );
    };
    output(&schema, flags.format)
}
