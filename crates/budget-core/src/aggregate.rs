//! Derived views over a ledger snapshot.
//!
//! Everything here is pure and recomputed on every call; nothing is cached.
//! Sums saturate at the `Decimal` range instead of overflowing, so a stored
//! ledger with absurd amounts still renders.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::model::{Kind, Transaction};

/// Sum of amounts for one kind.
pub fn total_by_kind(snapshot: &[Transaction], kind: Kind) -> Decimal {
    saturating_sum(snapshot.iter().filter(|t| t.kind == kind).map(|t| t.amount))
}

fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Income minus expenses.
pub fn balance(snapshot: &[Transaction]) -> Decimal {
    total_by_kind(snapshot, Kind::Income).saturating_sub(total_by_kind(snapshot, Kind::Expense))
}

/// One category and its summed amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

/// Category → summed amount, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<CategoryTotal>,
    index: HashMap<String, usize>,
}

impl CategoryTotals {
    fn accumulate(&mut self, category: &str, amount: Decimal) {
        match self.index.get(category) {
            Some(&slot) => {
                let entry = &mut self.entries[slot];
                entry.amount = entry.amount.saturating_add(amount);
            }
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push(CategoryTotal {
                    category: category.to_string(),
                    amount,
                });
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.index
            .get(category)
            .map(|&slot| self.entries[slot].amount)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryTotal> {
        self.entries.iter()
    }

    /// Sum across all categories.
    pub fn total(&self) -> Decimal {
        saturating_sum(self.entries.iter().map(|e| e.amount))
    }

    pub fn into_vec(self) -> Vec<CategoryTotal> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a CategoryTotals {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.category, &entry.amount)?;
        }
        map.end()
    }
}

/// Per-category sums for one kind, built in a single pass.
pub fn category_totals(snapshot: &[Transaction], kind: Kind) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for transaction in snapshot.iter().filter(|t| t.kind == kind) {
        totals.accumulate(&transaction.category, transaction.amount);
    }
    totals
}

/// Category with the largest sum for `kind`.
///
/// Scans in first-seen order and only replaces the leader on a strictly
/// greater amount, starting from zero: ties go to the first category seen,
/// and `None` means no records of that kind (or only zero amounts).
pub fn top_category(snapshot: &[Transaction], kind: Kind) -> Option<CategoryTotal> {
    let mut leader: Option<CategoryTotal> = None;
    let mut best = Decimal::ZERO;
    for entry in category_totals(snapshot, kind).into_vec() {
        if entry.amount > best {
            best = entry.amount;
            leader = Some(entry);
        }
    }
    leader
}

/// The dashboard's headline numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
    pub top_expense: Option<CategoryTotal>,
}

/// Whether the period ends with money left over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    Saving(Decimal),
    Overspent(Decimal),
}

impl Summary {
    pub fn standing(&self) -> Standing {
        if self.balance >= Decimal::ZERO {
            Standing::Saving(self.balance)
        } else {
            Standing::Overspent(self.balance.abs())
        }
    }
}

pub fn summarize(snapshot: &[Transaction]) -> Summary {
    let income = total_by_kind(snapshot, Kind::Income);
    let expenses = total_by_kind(snapshot, Kind::Expense);
    Summary {
        income,
        expenses,
        balance: income.saturating_sub(expenses),
        top_expense: top_category(snapshot, Kind::Expense),
    }
}

/// One chart slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub category: String,
    pub amount: Decimal,
    /// Share of the series total, one decimal place
    pub percentage: Decimal,
}

/// Chart series for one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Breakdown {
    /// Nothing to chart (no records, or every amount is zero)
    NoData,
    Slices { total: Decimal, slices: Vec<Slice> },
}

impl Breakdown {
    pub fn is_empty(&self) -> bool {
        matches!(self, Breakdown::NoData)
    }

    pub fn slices(&self) -> &[Slice] {
        match self {
            Breakdown::NoData => &[],
            Breakdown::Slices { slices, .. } => slices,
        }
    }
}

/// Category totals sorted by amount, largest first, with percentages.
///
/// Equal amounts keep first-seen order.
pub fn breakdown(snapshot: &[Transaction], kind: Kind) -> Breakdown {
    let mut entries = category_totals(snapshot, kind).into_vec();
    let total = saturating_sum(entries.iter().map(|e| e.amount));
    if entries.is_empty() || total.is_zero() {
        return Breakdown::NoData;
    }

    entries.sort_by(|a, b| b.amount.cmp(&a.amount));
    let slices = entries
        .into_iter()
        .map(|entry| {
            // Divide first: the share is at most 1, so scaling by 100 cannot overflow.
            let percentage = entry
                .amount
                .checked_div(total)
                .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or_default()
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            Slice {
                category: entry.category,
                amount: entry.amount,
                percentage,
            }
        })
        .collect();
    Breakdown::Slices { total, slices }
}
