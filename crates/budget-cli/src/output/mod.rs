//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying transactions,
//! the dashboard summary and category breakdowns as JSON or text.

mod json;
mod text;

// Re-export public API
pub use json::{breakdown_json, categories_json, summary_json, transaction_json, transactions_json};
pub use text::{
    print_breakdown, print_categories, print_summary, print_transaction, print_transaction_list,
};
