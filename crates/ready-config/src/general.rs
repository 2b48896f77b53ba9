//! General application configuration.

use serde::{Deserialize, Serialize};

const fn default_page_size() -> u32 {
    ready_core::DEFAULT_PAGE_SIZE
}

const fn default_min_quantity() -> i64 {
    ready_core::DEFAULT_MIN_QUANTITY
}

const fn default_recent_limit() -> u32 {
    ready_core::DEFAULT_RECENT_LIMIT
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Rows per history page when `--page-size` is not given.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Reorder threshold for items created without `--min-quantity`.
    #[serde(default = "default_min_quantity")]
    pub default_min_quantity: i64,

    /// Transactions shown on the dashboard.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_min_quantity: default_min_quantity(),
            recent_limit: default_recent_limit(),
        }
    }
}
