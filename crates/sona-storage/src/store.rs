use crate::error::StorageError;

/// A synchronous, local string-to-string store. The engine persists its
/// score snapshot through this surface and nothing else.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
