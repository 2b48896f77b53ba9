//! # ready-service
//!
//! Inventory operations for ReadyStock over any [`StockBackend`].
//!
//! The central piece is the stock-mutation protocol: receive and withdraw
//! first call the backend's atomic procedure and, when that fails for any
//! reason other than insufficient stock, fall back to a client-side
//! read-check-log-update sequence. Item edits and deletes log their quantity
//! changes the same way. Every successful mutation invalidates the query
//! cache.
//!
//! [`StockBackend`]: ready_core::backend::StockBackend

pub mod cache;
mod error;
pub mod ops;
mod service;

pub use cache::{QueryCache, QueryKey};
pub use error::ServiceError;
pub use ops::history::DashboardStats;
pub use ops::stock::{StockOutcome, StockPath};
pub use service::StockService;
