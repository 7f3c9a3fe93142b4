//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Interactive prompts for the add form (`input`)
//! - Date, type, filter and format parsing (`parsing`)

mod input;
mod parsing;

// Re-export public API
pub use input::{prompt_amount, prompt_category, prompt_kind, prompt_note};
pub use parsing::{
    parse_category_selection, parse_date, parse_kind, parse_kind_selection, parse_output_format,
};
