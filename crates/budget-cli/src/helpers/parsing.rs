//! Parsing helpers for dates, transaction types, filters and output format.

use chrono::{Duration, Local, NaiveDate};

use budget_core::filter::Selection;
use budget_core::model::parse_calendar_date;
use budget_core::Kind;

use crate::errors::CliError;

/// Parse a date argument: "today", "yesterday", or a calendar date.
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    parse_date_relative(value, Local::now().date_naive())
}

fn parse_date_relative(value: &str, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    match value.trim().to_ascii_lowercase().as_str() {
        "today" => Ok(today),
        "yesterday" => Ok(today - Duration::days(1)),
        _ => parse_calendar_date(value.trim()).ok_or_else(|| {
            CliError::invalid_input(format!(
                "Invalid date (expected YYYY-MM-DD, today or yesterday): {}",
                value
            ))
            .into()
        }),
    }
}

/// Parse a transaction type ("income" or "expense").
pub fn parse_kind(value: &str) -> anyhow::Result<Kind> {
    value
        .parse::<Kind>()
        .map_err(|e| CliError::invalid_input(e.to_string()).into())
}

/// Parse a `--type` filter; `None` and "all" select every type.
pub fn parse_kind_selection(value: Option<&str>) -> anyhow::Result<Selection<Kind>> {
    match value {
        None => Ok(Selection::All),
        Some(v) => v
            .parse::<Selection<Kind>>()
            .map_err(|e| CliError::invalid_input(e.to_string()).into()),
    }
}

/// Parse a `--category` filter; `None`, blank and "all" select every category.
pub fn parse_category_selection(value: Option<&str>) -> Selection<String> {
    value.and_then(|v| v.parse().ok()).unwrap_or_default()
}

/// Output format for list-style commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

impl OutputFormat {
    /// Value handed to the UI context's mode resolution.
    pub fn as_flag(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Plain => "plain",
        }
    }
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}
