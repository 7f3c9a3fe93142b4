//! Sample transactions used when no usable ledger is stored.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::ids::IdGenerator;
use crate::model::{Kind, NewTransaction, Transaction};

// (kind, amount, category, (y, m, d), note)
const SEED: &[(Kind, i64, &str, (i32, u32, u32), &str)] = &[
    (Kind::Income, 2500, "Salary", (2023, 10, 5), "Monthly salary"),
    (Kind::Expense, 800, "Housing", (2023, 10, 2), "Rent payment"),
    (Kind::Expense, 120, "Utilities", (2023, 10, 10), "Electricity bill"),
    (Kind::Expense, 250, "Food", (2023, 10, 15), "Grocery shopping"),
    (Kind::Expense, 50, "Entertainment", (2023, 10, 20), "Movie night"),
];

/// Build the seed set with fresh ids.
pub fn seed_transactions<G: IdGenerator>(ids: &mut G) -> Vec<Transaction> {
    SEED.iter()
        .filter_map(|&(kind, amount, category, (y, m, d), note)| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            let new = NewTransaction::new(kind, Decimal::from(amount), category, date).with_note(note);
            Some(new.into_transaction(ids.next_id()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialGenerator;

    #[test]
    fn test_seed_shape() {
        let seed = seed_transactions(&mut SequentialGenerator::new("seed"));
        assert_eq!(seed.len(), 5);
        assert_eq!(seed[0].category, "Salary");
        assert_eq!(seed[0].kind, Kind::Income);
        assert_eq!(seed[1].note.as_deref(), Some("Rent payment"));
        assert_eq!(seed.iter().filter(|t| t.kind == Kind::Expense).count(), 4);
    }
}
