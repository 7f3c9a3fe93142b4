//! String formatting utilities for UI rendering.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use budget_core::TransactionId;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Pad a string to a fixed width (left-aligned).
pub fn pad_right(s: &str, width: usize) -> String {
    let char_count = s.chars().count();
    if char_count >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - char_count))
    }
}

/// First 8 characters of an id.
pub fn short_id(id: &TransactionId) -> String {
    id.as_str().chars().take(8).collect()
}

/// Two decimal places, half away from zero, sign ahead of the symbol.
pub fn format_money(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{:.2}", currency, rounded.abs())
    } else {
        format!("{}{:.2}", currency, rounded.abs())
    }
}

/// Amount without currency, for plain output.
pub fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Format a date for display.
pub fn format_date(date: &NaiveDate, pretty: bool) -> String {
    if pretty {
        date.format("%b %-d, %Y").to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Grocery shopping", 10), "Grocery...");
        assert_eq!(truncate("Food", 10), "Food");
        assert_eq!(truncate("Food", 2), "Fo");
    }

    #[test]
    fn test_pad_right() {
        assert_eq!(pad_right("Food", 6), "Food  ");
        assert_eq!(pad_right("Housing", 3), "Housing");
    }

    #[test]
    fn test_short_id() {
        let id = TransactionId::new("9b1deb4d-3b7d-4bad");
        assert_eq!(short_id(&id), "9b1deb4d");
        assert_eq!(short_id(&TransactionId::new("abc")), "abc");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(dec!(1580), "$"), "$1580.00");
        assert_eq!(format_money(dec!(50.005), "$"), "$50.01");
        assert_eq!(format_money(dec!(-20), "$"), "-$20.00");
        assert_eq!(format_money(dec!(-0.001), "$"), "$0.00");
        assert_eq!(format_money(dec!(3.5), "€"), "€3.50");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(2500)), "2500.00");
        assert_eq!(format_amount(dec!(0.125)), "0.13");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2023, 10, 5).unwrap();
        assert_eq!(format_date(&date, true), "Oct 5, 2023");
        assert_eq!(format_date(&date, false), "2023-10-05");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("a\nb\r"), "a b");
    }
}
