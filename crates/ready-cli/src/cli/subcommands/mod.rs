mod item;
mod stock;

pub use item::ItemCommands;
pub use stock::StockCommands;
