//! Key-value store trait and in-memory implementation.

use std::collections::HashMap;

use crate::error::{NoteError, Result};

/// Blob store keyed by short strings.
pub trait KvStore {
    /// Read the blob stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;
    /// Store `value` under `key`, replacing any previous blob.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: KvStore + ?Sized> KvStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Reject keys that could escape the store (path separators, leading dots).
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(NoteError::InvalidKey(key.to_string()))
    }
}

// --- Memory Implementation ---

#[derive(Debug, Default, Clone)]
pub struct MemoryKvStore {
    data: HashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Unavailable Backend ---

/// Stands in for a backend that could not be opened. Every call fails with
/// the reason it could not be opened.
#[derive(Debug, Clone)]
pub struct UnavailableKvStore {
    reason: String,
}

impl UnavailableKvStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl KvStore for UnavailableKvStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(NoteError::StoreUnavailable(self.reason.clone()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(NoteError::StoreUnavailable(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_returns_none() {
        let kv = MemoryKvStore::new();
        assert!(kv.get("notes").unwrap().is_none());
    }

    #[test]
    fn set_and_get() {
        let mut kv = MemoryKvStore::new();
        kv.set("notes", "[]").unwrap();
        assert_eq!(kv.get("notes").unwrap().as_deref(), Some("[]"));

        kv.set("notes", "[1]").unwrap();
        assert_eq!(kv.get("notes").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn boxed_store_delegates() {
        let mut kv: Box<dyn KvStore> = Box::new(MemoryKvStore::new());
        kv.set("k", "v").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn unavailable_store_fails_every_call() {
        let mut kv = UnavailableKvStore::new("file is not a database");
        assert!(matches!(
            kv.get("notes"),
            Err(NoteError::StoreUnavailable(reason)) if reason == "file is not a database"
        ));
        assert!(matches!(
            kv.set("notes", "[]"),
            Err(NoteError::StoreUnavailable(_))
        ));
    }

    #[test]
    fn validate_key_rules() {
        assert!(validate_key("notes").is_ok());
        assert!(validate_key("notes-v1.backup_2").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key(".hidden").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("sp ace").is_err());
    }
}
