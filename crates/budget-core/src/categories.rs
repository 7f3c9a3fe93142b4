//! Enumerated category catalogue offered at entry time.
//!
//! The catalogue is advisory. Records carrying any other label still load,
//! aggregate and filter; only the entry-form validator consults this list.

use crate::model::Kind;

pub const INCOME_CATEGORIES: &[&str] = &[
    "Salary",
    "Freelance",
    "Investments",
    "Gifts",
    "Other Income",
];

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Housing",
    "Transportation",
    "Food",
    "Utilities",
    "Entertainment",
    "Healthcare",
    "Shopping",
    "Personal Care",
    "Education",
    "Debt",
    "Savings",
    "Other Expenses",
];

/// Categories offered for a kind, in display order.
pub fn for_kind(kind: Kind) -> &'static [&'static str] {
    match kind {
        Kind::Income => INCOME_CATEGORIES,
        Kind::Expense => EXPENSE_CATEGORIES,
    }
}

/// Case-insensitive lookup returning the catalogue's spelling.
pub fn canonical(kind: Kind, input: &str) -> Option<&'static str> {
    let needle = input.trim();
    for_kind(kind)
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(needle))
}
