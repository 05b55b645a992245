//! In-memory key-value backend.

use crate::domain::error::Result;
use crate::storage::backend::KeyValueStore;
use std::collections::HashMap;

/// `HashMap`-backed store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        tracing::trace!(key, len = value.len(), "memory store write");
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoreHandle;

    #[test]
    fn set_overwrites_and_missing_reads_none() {
        let mut store = MemoryStore::with_entries([("language", "fr")]);
        assert_eq!(store.get("language").unwrap().as_deref(), Some("fr"));
        store.set("language", "vi").unwrap();
        assert_eq!(store.get("language").unwrap().as_deref(), Some("vi"));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn handles_share_one_backend() {
        let a = StoreHandle::new(MemoryStore::new());
        let b = a.clone();
        a.set("theme", "dark").unwrap();
        assert_eq!(b.get("theme").unwrap().as_deref(), Some("dark"));
    }
}
