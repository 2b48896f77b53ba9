pub mod history;
pub mod items;
pub mod stock;
