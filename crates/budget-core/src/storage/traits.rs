//! Storage trait definition.

use crate::error::Result;

/// Durable key-value storage for serialized snapshots.
///
/// Values are opaque strings; the ledger stores one JSON document per key.
/// Implementations must make `set` all-or-nothing from a reader's point of
/// view: a subsequent `get` sees either the old or the new value.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the write cannot be completed and
    /// `LedgerError::InvalidInput` for keys the backend cannot represent.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
