//! Entry-time validation of a user's transaction draft.
//!
//! This is the only place the category catalogue is enforced. The store
//! trusts whatever it is handed.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::categories;
use crate::model::{Kind, NewTransaction};

/// Largest amount a single entry may carry, in whole currency units.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Raw form input, as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub kind: Kind,
    pub amount: String,
    pub category: String,
    pub occurred_on: NaiveDate,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please fill in all required fields (missing: {})", .missing.join(", "))]
    MissingFields { missing: Vec<&'static str> },

    #[error("Amount \"{0}\" is not a number")]
    InvalidAmount(String),

    #[error("Amount must not be negative")]
    NegativeAmount,

    #[error("Amount must not exceed {}", MAX_AMOUNT)]
    AmountTooLarge,

    #[error("\"{category}\" is not a known {kind} category")]
    UnknownCategory { kind: &'static str, category: String },
}

impl TransactionDraft {
    pub fn new(kind: Kind, occurred_on: NaiveDate) -> Self {
        Self {
            kind,
            amount: String::new(),
            category: String::new(),
            occurred_on,
            note: String::new(),
        }
    }

    /// Check the draft and turn it into a record ready for the store.
    ///
    /// Amounts are kept exactly as entered; no rounding is applied.
    pub fn validate(&self) -> Result<NewTransaction, DraftError> {
        let amount = self.amount.trim();
        let category = self.category.trim();

        let mut missing = Vec::new();
        if amount.is_empty() {
            missing.push("amount");
        }
        if category.is_empty() {
            missing.push("category");
        }
        if !missing.is_empty() {
            return Err(DraftError::MissingFields { missing });
        }

        let amount = Decimal::from_str(amount)
            .map_err(|_| DraftError::InvalidAmount(amount.to_string()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DraftError::NegativeAmount);
        }
        if amount > Decimal::from(MAX_AMOUNT) {
            return Err(DraftError::AmountTooLarge);
        }

        let category = categories::canonical(self.kind, category).ok_or_else(|| {
            DraftError::UnknownCategory {
                kind: self.kind.as_str(),
                category: category.to_string(),
            }
        })?;

        Ok(NewTransaction::new(self.kind, amount, category, self.occurred_on).with_note(&self.note))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn draft(kind: Kind, amount: &str, category: &str) -> TransactionDraft {
        TransactionDraft {
            amount: amount.to_string(),
            category: category.to_string(),
            ..TransactionDraft::new(kind, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
        }
    }

    #[test]
    fn test_valid_draft() {
        let mut input = draft(Kind::Expense, " 42.10 ", "food");
        input.note = "Lunch".to_string();
        let new = input.validate().unwrap();

        assert_eq!(new.amount, dec!(42.10));
        assert_eq!(new.category, "Food");
        assert_eq!(new.note.as_deref(), Some("Lunch"));
    }

    #[test]
    fn test_missing_fields_rejected() {
        let err = draft(Kind::Expense, "", " ").validate().unwrap_err();
        assert_eq!(
            err,
            DraftError::MissingFields {
                missing: vec!["amount", "category"]
            }
        );
        assert!(err.to_string().starts_with("Please fill in all required fields"));
    }

    #[test]
    fn test_amount_kept_exact() {
        let new = draft(Kind::Expense, "50.005", "Food").validate().unwrap();
        assert_eq!(new.amount, dec!(50.005));
    }

    #[test]
    fn test_bad_amounts() {
        assert_eq!(
            draft(Kind::Expense, "ten", "Food").validate(),
            Err(DraftError::InvalidAmount("ten".to_string()))
        );
        assert_eq!(
            draft(Kind::Expense, "-5", "Food").validate(),
            Err(DraftError::NegativeAmount)
        );
        assert!(draft(Kind::Expense, "0", "Food").validate().is_ok());
    }

    #[test]
    fn test_amount_ceiling() {
        assert!(draft(Kind::Income, "1000000000000", "Salary").validate().is_ok());
        assert_eq!(
            draft(Kind::Income, "1000000000000.01", "Salary").validate(),
            Err(DraftError::AmountTooLarge)
        );
        let err = draft(Kind::Expense, "79228162514264337593543950335", "Food")
            .validate()
            .unwrap_err();
        assert_eq!(err, DraftError::AmountTooLarge);
        assert_eq!(err.to_string(), "Amount must not exceed 1000000000000");
    }

    #[test]
    fn test_category_must_match_kind() {
        let err = draft(Kind::Income, "10", "Housing").validate().unwrap_err();
        assert!(matches!(err, DraftError::UnknownCategory { kind: "income", .. }));
    }
}
