//! Entity structs for all ReadyStock domain objects.
//!
//! Each entity maps to a table on the backend (`items`, `transactions`,
//! `profiles`). All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON transport and the CLI's `schema` command.

mod item;
mod profile;
mod transaction;

pub use item::Item;
pub use profile::Profile;
pub use transaction::{Transaction, TransactionWithItem};
