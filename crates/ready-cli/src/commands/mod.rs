pub mod dashboard;
pub mod dispatch;
pub mod history;
pub mod item;
pub mod schema;
pub mod shared;
pub mod stock;
pub mod whoami;
