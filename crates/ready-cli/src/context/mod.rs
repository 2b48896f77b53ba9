mod app_context;
mod backend;
mod config_warnings;

pub use app_context::AppContext;
pub use backend::AnyBackend;
pub use config_warnings::warn_unconfigured;
