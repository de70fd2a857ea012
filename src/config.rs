//! Configuration types for the cookie bridge.
//!
//! [`CookieConfig`] controls the attributes written on the session cookie.
//! [`AppConfig`] carries the two environment-supplied values the hosting
//! application receives at startup; both are opaque strings to this crate.
//!
//! # Example
//!
//! ```rust
//! use gangway::config::CookieConfig;
//!
//! // Use defaults
//! let config = CookieConfig::default();
//!
//! // Or customize
//! let config = CookieConfig {
//!     name: "app_session".to_owned(),
//!     secure: false,
//!     ..Default::default()
//! };
//! ```

use std::env;
use std::fmt;

/// The `SameSite` cookie attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    None,
    Lax,
    #[default]
    Strict,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameSite::None => write!(f, "None"),
            SameSite::Lax => write!(f, "Lax"),
            SameSite::Strict => write!(f, "Strict"),
        }
    }
}

/// Attributes written on the session cookie.
///
/// Defaults produce a same-site strict, HTTPS-only cookie scoped to the
/// root path.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    /// Cookie name the session token is stored under.
    pub name: String,

    /// `Path` attribute.
    pub path: String,

    /// Whether the `Secure` attribute is written.
    pub secure: bool,

    /// `SameSite` attribute.
    pub same_site: SameSite,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_owned(),
            path: "/".to_owned(),
            secure: true,
            same_site: SameSite::Strict,
        }
    }
}

/// Startup configuration supplied by the environment.
///
/// The hosting application receives these as flags at boot; the bridge
/// itself never interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base API endpoint URL.
    pub api_url: String,

    /// Optional account-message identifier.
    pub account_message_id: Option<String>,
}

impl AppConfig {
    /// Loads configuration from `APP_API_URL` and `APP_ACCOUNT_MESSAGE_ID`.
    ///
    /// A `.env` file in the working directory is honored if present.
    /// `APP_API_URL` defaults to the empty string when unset; the hosting
    /// application decides what to do with it.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_url: env::var("APP_API_URL").unwrap_or_default(),
            account_message_id: env::var("APP_ACCOUNT_MESSAGE_ID").ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cookie_config() {
        let config = CookieConfig::default();
        assert_eq!(config.name, "session");
        assert_eq!(config.path, "/");
        assert!(config.secure);
        assert_eq!(config.same_site, SameSite::Strict);
    }

    #[test]
    fn test_app_config_from_env() {
        env::set_var("APP_API_URL", "https://api.example.com");
        env::remove_var("APP_ACCOUNT_MESSAGE_ID");

        let config = AppConfig::from_env();
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.account_message_id, None);

        env::set_var("APP_ACCOUNT_MESSAGE_ID", "welcome-back");
        let config = AppConfig::from_env();
        assert_eq!(config.account_message_id.as_deref(), Some("welcome-back"));

        env::remove_var("APP_API_URL");
        env::remove_var("APP_ACCOUNT_MESSAGE_ID");
    }

    #[test]
    fn test_same_site_display() {
        assert_eq!(SameSite::Strict.to_string(), "Strict");
        assert_eq!(SameSite::Lax.to_string(), "Lax");
        assert_eq!(SameSite::None.to_string(), "None");
    }
}
