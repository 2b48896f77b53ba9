//! Table repositories, implemented as `impl StockDb` blocks.

pub mod item;
pub mod profile;
pub mod transaction;
