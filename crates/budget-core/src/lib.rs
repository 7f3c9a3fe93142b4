//! # Budget Core
//!
//! Core library for Budget - a personal income/expense ledger.
//!
//! This crate provides the domain model, storage abstractions and the pure
//! read-side views (totals, breakdowns, search) independent of the CLI.
//!
//! ## Architecture
//!
//! - **model**: Transactions, kinds, identifiers and calendar dates
//! - **storage**: Key-value storage trait and backends (file, memory)
//! - **store**: The ledger store, sole owner and writer of the snapshot
//! - **aggregate**: Totals, per-category sums, top category, chart series
//! - **filter**: Free-text search plus category/type filtering
//! - **form**: Entry-time validation of user drafts
//! - **confirm**: Delete confirmation state machine
//!
//! Data flows one way: store → aggregate/filter → presentation.

pub mod aggregate;
pub mod categories;
pub mod confirm;
pub mod error;
pub mod filter;
pub mod form;
pub mod fs;
pub mod ids;
pub mod model;
pub mod seed;
pub mod storage;
pub mod store;

pub use error::{LedgerError, Result};
pub use model::{Kind, NewTransaction, Transaction, TransactionId};
pub use storage::KeyValueStore;
pub use store::LedgerStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
