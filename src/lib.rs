//! gangway: a session cookie bridge.
//!
//! Relays a session token and its expiry between a long-lived application
//! and a document-scoped cookie store, over asynchronous one-way message
//! channels. The store is an injected abstraction so the bridge logic is
//! testable without a real browser environment.
//!
//! # Quick start
//!
//! ```rust
//! use gangway::bridge::SessionCookieBridge;
//! use gangway::ports;
//! use gangway::store::InMemoryCookieStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let bridge = SessionCookieBridge::new(InMemoryCookieStore::new());
//! let (ports, mut replies) = ports::spawn(bridge);
//!
//! ports.set_session("abc123", 7.0);
//! ports.request_session();
//!
//! let session = replies.recv().await.unwrap();
//! assert_eq!(session.token, "abc123");
//! # }
//! ```

pub mod bridge;
pub mod config;
pub mod cookie;
pub mod pipeline;
pub mod ports;
pub mod session;
pub mod store;
pub mod theme;

use std::fmt;

pub use bridge::SessionCookieBridge;
pub use config::{AppConfig, CookieConfig, SameSite};
pub use ports::{SessionPorts, SessionRequest};
pub use session::{Session, MS_PER_DAY};
pub use store::{CookieStore, FileCookieStore, InMemoryCookieStore};

/// Errors surfaced by cookie store implementations.
///
/// These never reach the application's ports: the bridge logs them and
/// degrades to the absent-session defaults, so the two session operations
/// never fail from the caller's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The storage backing could not be read or written.
    StoreUnavailable(String),
    /// A written entry had no leading `name=value` pair.
    MalformedEntry(String),
}

impl std::error::Error for BridgeError {}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::StoreUnavailable(msg) => write!(f, "cookie store unavailable: {}", msg),
            BridgeError::MalformedEntry(entry) => {
                write!(f, "cookie entry has no name=value pair: {:?}", entry)
            }
        }
    }
}
