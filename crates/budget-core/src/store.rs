//! The ledger store: sole owner and writer of the transaction snapshot.
//!
//! Lifecycle: `load` once at startup, then `add`/`delete` as the only
//! mutators. Every mutation writes the full snapshot back to the backend
//! under a single fixed key.

use tracing::{debug, info, warn};

use crate::error::{LedgerError, Result};
use crate::ids::{IdGenerator, UuidGenerator};
use crate::model::{NewTransaction, Transaction, TransactionId};
use crate::seed::seed_transactions;
use crate::storage::KeyValueStore;

/// Key holding the whole ledger.
pub const LEDGER_KEY: &str = "transactions";

/// Key receiving an unreadable snapshot before the seed replaces it.
pub const MALFORMED_KEY: &str = "transactions.malformed";

const MAX_ID_ATTEMPTS: usize = 8;

/// Where the in-memory snapshot came from at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    /// Read from storage
    Restored,
    /// Nothing stored yet; seed data
    Seeded,
    /// Stored value was unreadable; seed data
    Recovered,
}

/// Explicitly owned ledger store.
pub struct LedgerStore<S, G = UuidGenerator> {
    backend: S,
    ids: G,
    transactions: Vec<Transaction>,
    origin: LoadOrigin,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Load the ledger from `backend`, generating UUID v4 ids.
    pub fn load(backend: S) -> Self {
        Self::load_with_ids(backend, UuidGenerator)
    }
}

impl<S: KeyValueStore, G: IdGenerator> LedgerStore<S, G> {
    /// Load the ledger from `backend` with a custom id generator.
    ///
    /// Never fails. An absent or malformed snapshot is replaced by the seed
    /// set, which is written back so its ids stay stable across loads.
    pub fn load_with_ids(mut backend: S, mut ids: G) -> Self {
        let (transactions, origin, write_back) = match backend.get(LEDGER_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Transaction>>(&raw) {
                Ok(transactions) => {
                    debug!(count = transactions.len(), "restored ledger snapshot");
                    (transactions, LoadOrigin::Restored, false)
                }
                Err(err) => {
                    warn!(error = %err, "stored ledger is malformed; falling back to sample data");
                    if let Err(err) = backend.set(MALFORMED_KEY, &raw) {
                        warn!(error = %err, "could not preserve malformed ledger");
                    }
                    (seed_transactions(&mut ids), LoadOrigin::Recovered, true)
                }
            },
            Ok(None) => {
                info!("no stored ledger; starting from sample data");
                (seed_transactions(&mut ids), LoadOrigin::Seeded, true)
            }
            Err(err) => {
                // Unknown on-disk state: do not overwrite it.
                warn!(error = %err, "could not read stored ledger; using sample data");
                (seed_transactions(&mut ids), LoadOrigin::Recovered, false)
            }
        };

        let mut store = Self {
            backend,
            ids,
            transactions,
            origin,
        };
        if write_back {
            if let Err(err) = store.persist() {
                warn!(error = %err, "could not write sample data back to storage");
            }
        }
        store
    }

    /// Current snapshot, newest first.
    pub fn snapshot(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn origin(&self) -> LoadOrigin {
        self.origin
    }

    pub fn get(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Look up a record by exact id or unique id prefix.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidInput` for an empty needle or a prefix
    /// shared by several records.
    pub fn find(&self, needle: &str) -> Result<Option<&Transaction>> {
        let needle = needle.trim();
        if needle.is_empty() {
            return Err(LedgerError::InvalidInput(
                "Transaction id must not be empty".to_string(),
            ));
        }
        if let Some(exact) = self.transactions.iter().find(|t| t.id.as_str() == needle) {
            return Ok(Some(exact));
        }

        let mut matches = self
            .transactions
            .iter()
            .filter(|t| t.id.as_str().starts_with(needle));
        match (matches.next(), matches.next()) {
            (Some(only), None) => Ok(Some(only)),
            (None, _) => Ok(None),
            (Some(_), Some(_)) => Err(LedgerError::InvalidInput(format!(
                "Id prefix \"{}\" matches more than one transaction",
                needle
            ))),
        }
    }

    /// Assign a fresh id, prepend the record and persist.
    ///
    /// # Errors
    ///
    /// `LedgerError::Storage` if the snapshot could not be written. The
    /// record stays in the in-memory snapshot regardless.
    pub fn add(&mut self, new: NewTransaction) -> Result<Transaction> {
        let id = self.fresh_id()?;
        let record = new.into_transaction(id);
        self.transactions.insert(0, record.clone());
        debug!(id = %record.id, kind = record.kind.as_str(), "added transaction");
        self.persist()?;
        Ok(record)
    }

    /// Remove the record with `id`, if any, and persist.
    ///
    /// Returns the removed record; `None` when no record matched.
    pub fn delete(&mut self, id: &TransactionId) -> Result<Option<Transaction>> {
        let removed = self
            .transactions
            .iter()
            .position(|t| &t.id == id)
            .map(|index| self.transactions.remove(index));
        debug!(id = %id, removed = removed.is_some(), "deleted transaction");
        self.persist()?;
        Ok(removed)
    }

    /// Give the backend back, e.g. to load it again.
    pub fn into_backend(self) -> S {
        self.backend
    }

    fn fresh_id(&mut self) -> Result<TransactionId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if self.get(&id).is_none() {
                return Ok(id);
            }
            debug!(id = %id, "generated id already in use; drawing again");
        }
        Err(LedgerError::IdExhausted(MAX_ID_ATTEMPTS))
    }

    fn persist(&mut self) -> Result<()> {
        let encoded = serde_json::to_string(&self.transactions)?;
        if let Err(err) = self.backend.set(LEDGER_KEY, &encoded) {
            warn!(error = %err, "failed to persist ledger; in-memory change kept");
            return Err(err);
        }
        debug!(count = self.transactions.len(), "persisted ledger snapshot");
        Ok(())
    }
}
