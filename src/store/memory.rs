//! In-memory cookie storage.
//!
//! Suitable for tests and for embedding the bridge in a host that supplies
//! its own persistence. Entries live as long as the store value does,
//! mirroring a browser tab's session lifetime.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::cookie::entry_name;
use crate::BridgeError;

use super::CookieStore;

/// In-memory cookie storage.
///
/// Entries are kept in a `BTreeMap` protected by a `RwLock`, keyed by
/// cookie name.
///
/// # Note
///
/// Entries are lost when the value is dropped. For persistent storage,
/// use [`FileCookieStore`](super::FileCookieStore).
#[derive(Clone)]
pub struct InMemoryCookieStore {
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl InMemoryCookieStore {
    /// Creates a new empty in-memory cookie store.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Returns the number of entries currently stored.
    pub fn len(&self) -> usize {
        self.entries.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns true if there are no entries stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryCookieStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CookieStore for InMemoryCookieStore {
    async fn read(&self) -> Result<String, BridgeError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| BridgeError::StoreUnavailable("lock poisoned".to_owned()))?;

        Ok(entries.values().cloned().collect::<Vec<_>>().join("; "))
    }

    async fn write(&self, entry: &str) -> Result<(), BridgeError> {
        let name = entry_name(entry);
        if name.is_empty() {
            return Err(BridgeError::MalformedEntry(entry.to_owned()));
        }

        self.entries
            .write()
            .map_err(|_| BridgeError::StoreUnavailable("lock poisoned".to_owned()))?
            .insert(name.to_owned(), entry.to_owned());

        Ok(())
    }

    async fn remove(&self, name: &str) -> Result<(), BridgeError> {
        self.entries
            .write()
            .map_err(|_| BridgeError::StoreUnavailable("lock poisoned".to_owned()))?
            .remove(name);

        Ok(())
    }

    async fn clear(&self) -> Result<(), BridgeError> {
        self.entries
            .write()
            .map_err(|_| BridgeError::StoreUnavailable("lock poisoned".to_owned()))?
            .clear();

        Ok(())
    }
}
