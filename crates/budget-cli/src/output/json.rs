//! JSON output formatting.

use serde_json::{json, Value};

use budget_core::aggregate::{Breakdown, Standing, Summary};
use budget_core::{Kind, Transaction};

/// Convert a transaction to JSON for output.
pub fn transaction_json(transaction: &Transaction) -> Value {
    json!({
        "id": transaction.id,
        "type": transaction.kind,
        "amount": transaction.amount,
        "category": transaction.category,
        "date": transaction.occurred_on.format("%Y-%m-%d").to_string(),
        "description": transaction.note,
    })
}

/// Convert multiple transactions to a JSON array for output.
pub fn transactions_json(transactions: &[&Transaction]) -> Vec<Value> {
    transactions.iter().map(|t| transaction_json(t)).collect()
}

pub fn summary_json(summary: &Summary) -> Value {
    let (standing, difference) = match summary.standing() {
        Standing::Saving(amount) => ("saving", amount),
        Standing::Overspent(amount) => ("overspent", amount),
    };
    json!({
        "income": summary.income,
        "expenses": summary.expenses,
        "balance": summary.balance,
        "top_expense": summary.top_expense,
        "standing": standing,
        "difference": difference,
    })
}

pub fn breakdown_json(kind: Kind, breakdown: &Breakdown) -> Value {
    match breakdown {
        Breakdown::NoData => json!({
            "type": kind,
            "no_data": true,
            "total": Value::Null,
            "slices": [],
        }),
        Breakdown::Slices { total, slices } => json!({
            "type": kind,
            "no_data": false,
            "total": total,
            "slices": slices,
        }),
    }
}

/// Catalogue per type, plus categories only found in the ledger.
pub fn categories_json(groups: &[(Kind, &[&str])], unlisted: &[&str]) -> Value {
    let mut out = serde_json::Map::new();
    for (kind, names) in groups {
        out.insert(kind.as_str().to_string(), json!(names));
    }
    if !unlisted.is_empty() {
        out.insert("unlisted".to_string(), json!(unlisted));
    }
    Value::Object(out)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use budget_core::aggregate::{breakdown, summarize};
    use budget_core::TransactionId;

    use super::*;

    fn tx(id: &str, kind: Kind, amount: rust_decimal::Decimal, category: &str) -> Transaction {
        Transaction {
            id: TransactionId::new(id),
            kind,
            amount,
            category: category.to_string(),
            occurred_on: NaiveDate::from_ymd_opt(2023, 10, 2).unwrap(),
            note: None,
        }
    }

    #[test]
    fn test_transaction_json_fields() {
        let value = transaction_json(&tx("a1", Kind::Expense, dec!(50.005), "Food"));
        assert_eq!(value["id"], "a1");
        assert_eq!(value["type"], "expense");
        assert_eq!(value["amount"], "50.005");
        assert_eq!(value["date"], "2023-10-02");
        assert!(value["description"].is_null());
    }

    #[test]
    fn test_summary_json_standing() {
        let ledger = vec![
            tx("1", Kind::Income, dec!(100), "Salary"),
            tx("2", Kind::Expense, dec!(120), "Housing"),
        ];
        let value = summary_json(&summarize(&ledger));
        assert_eq!(value["standing"], "overspent");
        assert_eq!(value["difference"], "20");
        assert_eq!(value["top_expense"]["category"], "Housing");
    }

    #[test]
    fn test_breakdown_json_no_data() {
        let value = breakdown_json(Kind::Expense, &breakdown(&[], Kind::Expense));
        assert_eq!(value["no_data"], true);
        assert_eq!(value["slices"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_categories_json_groups() {
        let groups: Vec<(Kind, &[&str])> = vec![(Kind::Income, &["Salary", "Gifts"][..])];
        let value = categories_json(&groups, &["Pets"]);
        assert_eq!(value["income"][1], "Gifts");
        assert_eq!(value["unlisted"][0], "Pets");
    }
}
