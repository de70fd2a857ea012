//! File-backed cookie storage.
//!
//! Persists the jar as a single JSON object mapping cookie names to their
//! full entries, the way a browser profile persists its cookie database
//! across restarts.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::cookie::entry_name;
use crate::BridgeError;

use super::CookieStore;

/// Cookie jar persisted to a JSON file.
///
/// # Example
///
/// ```rust,ignore
/// use gangway::store::FileCookieStore;
///
/// let store = FileCookieStore::new("/var/lib/myapp/cookies.json")?;
/// ```
pub struct FileCookieStore {
    path: PathBuf,
}

impl FileCookieStore {
    /// Creates a file cookie store at the given path.
    ///
    /// Creates the parent directory if it doesn't exist. The file itself
    /// is created on first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, BridgeError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BridgeError::StoreUnavailable(format!("failed to create jar directory: {e}"))
            })?;
        }

        Ok(Self { path })
    }

    fn read_jar(&self) -> Result<BTreeMap<String, String>, BridgeError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| BridgeError::StoreUnavailable(format!("failed to read jar: {e}")))?;

        serde_json::from_str(&content)
            .map_err(|e| BridgeError::StoreUnavailable(format!("failed to parse jar: {e}")))
    }

    fn write_jar(&self, jar: &BTreeMap<String, String>) -> Result<(), BridgeError> {
        let content = serde_json::to_string_pretty(jar)
            .map_err(|e| BridgeError::StoreUnavailable(format!("failed to serialize jar: {e}")))?;

        std::fs::write(&self.path, content)
            .map_err(|e| BridgeError::StoreUnavailable(format!("failed to write jar: {e}")))
    }
}

#[async_trait]
impl CookieStore for FileCookieStore {
    async fn read(&self) -> Result<String, BridgeError> {
        let jar = self.read_jar()?;
        Ok(jar.values().cloned().collect::<Vec<_>>().join("; "))
    }

    async fn write(&self, entry: &str) -> Result<(), BridgeError> {
        let name = entry_name(entry);
        if name.is_empty() {
            return Err(BridgeError::MalformedEntry(entry.to_owned()));
        }

        let mut jar = self.read_jar()?;
        jar.insert(name.to_owned(), entry.to_owned());
        self.write_jar(&jar)
    }

    async fn remove(&self, name: &str) -> Result<(), BridgeError> {
        let mut jar = self.read_jar()?;
        if jar.remove(name).is_some() {
            self.write_jar(&jar)?;
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), BridgeError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| {
                BridgeError::StoreUnavailable(format!("failed to delete jar: {e}"))
            })?;
        }
        Ok(())
    }
}
