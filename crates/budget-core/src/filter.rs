//! Search and filtering over a ledger snapshot.

use std::collections::HashSet;
use std::convert::Infallible;
use std::str::FromStr;

use crate::error::LedgerError;
use crate::model::{Kind, Transaction};

/// Sentinel accepted wherever a filter value is parsed.
pub const ALL: &str = "all";

/// Either every value or exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl FromStr for Selection<Kind> {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

/// Blank input and "all" (any case) select every category.
impl FromStr for Selection<String> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(ALL) {
            Ok(Selection::All)
        } else {
            Ok(Selection::Only(s.to_string()))
        }
    }
}

/// Search text plus category and type filters, ANDed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub search: String,
    pub category: Selection<String>,
    pub kind: Selection<Kind>,
}

impl TransactionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn category(mut self, category: Selection<String>) -> Self {
        self.category = category;
        self
    }

    pub fn kind(mut self, kind: Selection<Kind>) -> Self {
        self.kind = kind;
        self
    }

    /// Case-insensitive substring match on note or category, then the
    /// category and kind filters.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let needle = self.search.to_lowercase();
        let in_note = transaction
            .note
            .as_deref()
            .unwrap_or_default()
            .to_lowercase()
            .contains(&needle);
        let in_category = transaction.category.to_lowercase().contains(&needle);

        (in_note || in_category)
            && self.category.accepts(&transaction.category)
            && self.kind.accepts(&transaction.kind)
    }
}

/// Every record matching `query`, in snapshot order.
pub fn filter_transactions<'a>(
    snapshot: &'a [Transaction],
    query: &TransactionQuery,
) -> Vec<&'a Transaction> {
    snapshot.iter().filter(|t| query.matches(t)).collect()
}

/// Distinct categories in first-seen order.
pub fn categories_in(snapshot: &[Transaction]) -> Vec<&str> {
    let mut seen = HashSet::new();
    snapshot
        .iter()
        .map(|t| t.category.as_str())
        .filter(|category| seen.insert(*category))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::model::TransactionId;

    fn tx(id: &str, kind: Kind, category: &str, note: Option<&str>) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            kind,
            amount: dec!(1),
            category: category.to_string(),
            occurred_on: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            note: note.map(String::from),
        }
    }

    fn ledger() -> Vec<Transaction> {
        vec![
            tx("1", Kind::Income, "Salary", Some("Monthly salary")),
            tx("2", Kind::Expense, "Housing", Some("Rent payment")),
            tx("3", Kind::Expense, "Utilities", Some("Electricity bill")),
            tx("4", Kind::Expense, "Food", None),
        ]
    }

    fn ids(found: &[&Transaction]) -> Vec<String> {
        found.iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_on_note() {
        let ledger = ledger();
        let found = filter_transactions(&ledger, &TransactionQuery::new().search("rent"));
        assert_eq!(ids(&found), ["2"]);
    }

    #[test]
    fn test_search_matches_category() {
        let ledger = ledger();
        let found = filter_transactions(&ledger, &TransactionQuery::new().search("FOO"));
        assert_eq!(ids(&found), ["4"]);
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let ledger = ledger();
        assert_eq!(filter_transactions(&ledger, &TransactionQuery::new()).len(), 4);
    }

    #[test]
    fn test_filters_are_anded() {
        let ledger = ledger();
        let query = TransactionQuery::new()
            .search("i")
            .kind(Selection::Only(Kind::Expense))
            .category("Utilities".parse().unwrap());
        assert_eq!(ids(&filter_transactions(&ledger, &query)), ["3"]);

        let none = TransactionQuery::new()
            .kind(Selection::Only(Kind::Income))
            .category(Selection::Only("Housing".to_string()));
        assert!(filter_transactions(&ledger, &none).is_empty());
    }

    #[test]
    fn test_category_match_is_exact() {
        let ledger = ledger();
        let query = TransactionQuery::new().category(Selection::Only("housing".to_string()));
        assert!(filter_transactions(&ledger, &query).is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let ledger = ledger();
        let query = TransactionQuery::new()
            .search("e")
            .kind(Selection::Only(Kind::Expense));
        let once: Vec<Transaction> = filter_transactions(&ledger, &query)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Transaction> = filter_transactions(&once, &query)
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!("all".parse::<Selection<Kind>>().unwrap(), Selection::All);
        assert_eq!("ALL".parse::<Selection<Kind>>().unwrap(), Selection::All);
        assert_eq!(
            "income".parse::<Selection<Kind>>().unwrap(),
            Selection::Only(Kind::Income)
        );
        assert!("bogus".parse::<Selection<Kind>>().is_err());
        assert_eq!("all".parse::<Selection<String>>().unwrap(), Selection::All);
        assert_eq!(" ALL ".parse::<Selection<String>>().unwrap(), Selection::All);
        assert_eq!("".parse::<Selection<String>>().unwrap(), Selection::All);
        assert_eq!(
            " Food ".parse::<Selection<String>>().unwrap(),
            Selection::Only("Food".to_string())
        );
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let mut ledger = ledger();
        ledger.push(tx("5", Kind::Expense, "Housing", None));
        assert_eq!(
            categories_in(&ledger),
            ["Salary", "Housing", "Utilities", "Food"]
        );
    }
}
