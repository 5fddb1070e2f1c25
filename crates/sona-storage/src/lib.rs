//! sona-storage
//!
//! Local persistence. A synchronous key-value surface over a single JSON
//! file on disk, plus an in-memory implementation for tests.

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
