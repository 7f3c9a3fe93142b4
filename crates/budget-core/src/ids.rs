//! Transaction identifier generation.

use uuid::Uuid;

use crate::model::TransactionId;

/// Source of fresh transaction ids.
///
/// The store only requires that ids are strings; it re-draws on collision.
pub trait IdGenerator {
    fn next_id(&mut self) -> TransactionId;
}

/// Random UUID v4 ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> TransactionId {
        TransactionId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic `<prefix>-<n>` ids, for tests and fixtures.
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
    prefix: String,
    next: u64,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&mut self) -> TransactionId {
        let id = TransactionId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_distinct() {
        let mut ids = UuidGenerator;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialGenerator::new("tx");
        assert_eq!(ids.next_id().as_str(), "tx-1");
        assert_eq!(ids.next_id().as_str(), "tx-2");
    }
}
