//! UI primitives for the Budget CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges, styles and the chart palette
//! - **Render**: Tables, headers, receipts, hints, bars
//! - **Format**: Money, dates, ids, truncation
//! - **Notify**: User feedback after add/delete

mod context;
pub mod format;
pub mod mode;
pub mod notify;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;

// Re-export commonly used render functions
pub use render::{bar, header, hint, kv, print, receipt, simple_table, Column};

// Re-export commonly used format functions
pub use format::{format_date, format_money, short_id, truncate};
