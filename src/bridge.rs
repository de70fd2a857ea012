//! The session cookie bridge.
//!
//! Translates between the application's two session requests and the
//! cookie store's string format. Neither operation can fail from the
//! caller's point of view: store errors and malformed cookies degrade to
//! the absent-session defaults, so the worst outcome is being treated as
//! logged out.

use chrono::{Duration, Utc};

use crate::config::CookieConfig;
use crate::cookie::{parse_cookie, parse_http_date, render_entry};
use crate::session::{Session, MS_PER_DAY};
use crate::store::CookieStore;

/// Relays a session token and its expiry between the application and a
/// [`CookieStore`].
///
/// # Example
///
/// ```rust
/// use gangway::bridge::SessionCookieBridge;
/// use gangway::store::InMemoryCookieStore;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let bridge = SessionCookieBridge::new(InMemoryCookieStore::new());
///
/// bridge.set_session("abc123", 7.0).await;
/// let session = bridge.get_session().await;
/// assert_eq!(session.token, "abc123");
/// # }
/// ```
pub struct SessionCookieBridge<S: CookieStore> {
    store: S,
    config: CookieConfig,
}

impl<S: CookieStore> SessionCookieBridge<S> {
    /// Creates a bridge over the given store with default cookie attributes.
    pub fn new(store: S) -> Self {
        Self::with_config(store, CookieConfig::default())
    }

    /// Creates a bridge with custom cookie attributes.
    pub fn with_config(store: S, config: CookieConfig) -> Self {
        Self { store, config }
    }

    /// Stores a session token, expiring `days_until_expiry` days from now.
    ///
    /// Days may be fractional or negative. A computed millisecond delta of
    /// exactly `0` omits the `Expires` attribute, producing a
    /// session-scoped cookie; a delta too large for the datetime range is
    /// logged and treated the same way.
    ///
    /// Fire-and-forget: store failures are logged and swallowed, and the
    /// effect is observable only via subsequent reads.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "set_session", skip_all)
    )]
    pub async fn set_session(&self, token: &str, days_until_expiry: f64) {
        let delta_ms = (days_until_expiry * MS_PER_DAY as f64) as i64;
        let expires_at = if delta_ms == 0 {
            None
        } else {
            let at = Utc::now().checked_add_signed(Duration::milliseconds(delta_ms));
            if at.is_none() {
                log::warn!(
                    target: "gangway::bridge",
                    "msg=\"expiry out of datetime range, storing session-scoped cookie\" delta_ms={delta_ms}"
                );
            }
            at
        };

        let entry = render_entry(&self.config, token, expires_at);

        if let Err(e) = self.store.write(&entry).await {
            log::warn!(
                target: "gangway::bridge",
                "msg=\"session write failed\" error=\"{e}\""
            );
            return;
        }

        log::debug!(
            target: "gangway::bridge",
            "msg=\"session stored\" persistent={}",
            expires_at.is_some()
        );
    }

    /// Reads the current session back out of the cookie store.
    ///
    /// Returns the absent-session defaults (`token = ""`,
    /// `expiry_delta_ms = 0`) when no cookie is present, the store is
    /// unreadable, or the `Expires` attribute fails to parse. The delta is
    /// negative for a cookie that expired but has not been purged yet.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "get_session", skip_all)
    )]
    pub async fn get_session(&self) -> Session {
        let raw = match self.store.read().await {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!(
                    target: "gangway::bridge",
                    "msg=\"cookie read failed\" error=\"{e}\""
                );
                return Session::absent();
            }
        };

        let parsed = parse_cookie(&raw, &self.config.name);

        let token = parsed.value.unwrap_or_default();
        let expiry_delta_ms = parsed
            .expires
            .as_deref()
            .and_then(parse_http_date)
            .map(|at| (at - Utc::now()).num_milliseconds())
            .unwrap_or(0);

        Session {
            token,
            expiry_delta_ms,
        }
    }

    /// Drops the session cookie entirely (logout path).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "clear_session", skip_all)
    )]
    pub async fn clear_session(&self) {
        if let Err(e) = self.store.remove(&self.config.name).await {
            log::warn!(
                target: "gangway::bridge",
                "msg=\"session clear failed\" error=\"{e}\""
            );
        }
    }
}
