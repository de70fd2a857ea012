//! Session data model.
//!
//! A session is a token plus the number of milliseconds until its cookie
//! expires. Both halves degrade to a well-known default rather than an
//! error: an absent token is the empty string, and a missing expiry is the
//! `0` sentinel.

use serde::{Deserialize, Serialize};

/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// A session token and its remaining lifetime.
///
/// `expiry_delta_ms` is measured from the moment the cookie store was read.
/// It is `0` when the cookie carries no expiry (a session-scoped cookie or
/// no cookie at all) and negative when the cookie has already expired but
/// has not yet been purged by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub expiry_delta_ms: i64,
}

impl Session {
    /// The value reported when no session cookie is present.
    pub fn absent() -> Self {
        Self {
            token: String::new(),
            expiry_delta_ms: 0,
        }
    }

    /// Returns true if no token is stored.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.token.is_empty()
    }

    /// Returns true if the cookie carried an expiry that has already passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expiry_delta_ms < 0
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::absent()
    }
}
