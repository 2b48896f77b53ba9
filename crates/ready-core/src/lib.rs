//! # ready-core
//!
//! Core types and error types for ReadyStock.
//!
//! This crate provides the foundational types shared across all ReadyStock crates:
//! - Entity structs for items, transactions, and profiles
//! - Action and role enums
//! - Item inputs and the partial update builder
//! - History query and page types
//! - The `StockBackend` trait every storage backend implements
//! - Cross-cutting error types
//! - Acting-user identity

pub mod backend;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod history;
pub mod identity;
pub mod inputs;

/// Default number of history rows per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default reorder threshold applied to new items.
pub const DEFAULT_MIN_QUANTITY: i64 = 5;

/// Number of transactions shown on the dashboard.
pub const DEFAULT_RECENT_LIMIT: u32 = 5;
