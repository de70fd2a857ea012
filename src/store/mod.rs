//! Cookie storage abstraction.
//!
//! The bridge never touches a real browser document; it talks to a
//! [`CookieStore`], which models `document.cookie` as a set of named
//! entries with last-write-wins overwrite semantics.

mod file;
mod memory;

use async_trait::async_trait;

pub use file::FileCookieStore;
pub use memory::InMemoryCookieStore;

use crate::BridgeError;

/// Document-scoped cookie storage.
///
/// Implementations provide different backings:
/// - [`InMemoryCookieStore`]: tab-lifetime storage for testing and embedding
/// - [`FileCookieStore`]: a jar persisted to a single JSON file
///
/// A written entry is keyed by its leading `name=value` pair; writing a
/// second entry under the same name replaces the first. Reads return every
/// stored entry, attributes included, joined with `"; "`.
#[async_trait]
pub trait CookieStore: Send + Sync {
    /// Returns the full cookie string for the document.
    async fn read(&self) -> Result<String, BridgeError>;

    /// Inserts or overwrites the entry named by its leading pair.
    async fn write(&self, entry: &str) -> Result<(), BridgeError>;

    /// Removes the entry with the given cookie name, if present.
    async fn remove(&self, name: &str) -> Result<(), BridgeError>;

    /// Removes every entry.
    async fn clear(&self) -> Result<(), BridgeError>;
}
