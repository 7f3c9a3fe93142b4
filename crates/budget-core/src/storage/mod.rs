//! Storage layer for the ledger.
//!
//! The ledger persists through a durable key-value store. The `KeyValueStore`
//! trait is the seam; `FileStore` is the on-disk backend and `MemoryStore`
//! keeps everything in process.

mod file;
mod memory;
mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
