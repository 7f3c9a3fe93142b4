//! Delete confirmation flow: `Idle → PendingDelete(id) → Idle`.

use crate::error::Result;
use crate::ids::IdGenerator;
use crate::model::{Transaction, TransactionId};
use crate::storage::KeyValueStore;
use crate::store::LedgerStore;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteFlow {
    #[default]
    Idle,
    PendingDelete(TransactionId),
}

impl DeleteFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask to delete `id`. A previously pending id is replaced.
    pub fn request(&mut self, id: TransactionId) {
        *self = DeleteFlow::PendingDelete(id);
    }

    pub fn pending(&self) -> Option<&TransactionId> {
        match self {
            DeleteFlow::Idle => None,
            DeleteFlow::PendingDelete(id) => Some(id),
        }
    }

    /// Drop the pending id without deleting anything.
    pub fn cancel(&mut self) -> Option<TransactionId> {
        match std::mem::take(self) {
            DeleteFlow::Idle => None,
            DeleteFlow::PendingDelete(id) => Some(id),
        }
    }

    /// Delete the pending id through the store and return to `Idle`.
    ///
    /// Confirming while idle does nothing. The flow is back to `Idle` even
    /// when the store fails to persist.
    pub fn confirm<S, G>(&mut self, store: &mut LedgerStore<S, G>) -> Result<Option<Transaction>>
    where
        S: KeyValueStore,
        G: IdGenerator,
    {
        match self.cancel() {
            Some(id) => store.delete(&id),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::ids::SequentialGenerator;
    use crate::model::{Kind, NewTransaction};
    use crate::storage::MemoryStore;
    use crate::store::LEDGER_KEY;

    fn store_with_one() -> (LedgerStore<MemoryStore, SequentialGenerator>, TransactionId) {
        let mut store = LedgerStore::load_with_ids(
            MemoryStore::with_value(LEDGER_KEY, "[]"),
            SequentialGenerator::new("tx"),
        );
        let added = store
            .add(NewTransaction::new(
                Kind::Expense,
                dec!(9),
                "Food",
                NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
            ))
            .unwrap();
        (store, added.id)
    }

    #[test]
    fn test_confirm_deletes_and_returns_to_idle() {
        let (mut store, id) = store_with_one();
        let mut flow = DeleteFlow::new();
        flow.request(id.clone());
        assert_eq!(flow.pending(), Some(&id));

        let removed = flow.confirm(&mut store).unwrap();
        assert_eq!(removed.map(|t| t.id), Some(id));
        assert_eq!(flow, DeleteFlow::Idle);
        assert!(store.is_empty());
    }

    #[test]
    fn test_cancel_keeps_record() {
        let (mut store, id) = store_with_one();
        let mut flow = DeleteFlow::new();
        flow.request(id.clone());

        assert_eq!(flow.cancel(), Some(id));
        assert_eq!(flow, DeleteFlow::Idle);
        assert!(flow.confirm(&mut store).unwrap().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_request_replaces_pending() {
        let mut flow = DeleteFlow::new();
        flow.request(TransactionId::new("a"));
        flow.request(TransactionId::new("b"));
        assert_eq!(flow.pending().map(|id| id.as_str()), Some("b"));
    }
}
