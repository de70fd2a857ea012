//! Cookie wire format: rendering and parsing.
//!
//! Entries look like `session=abc123; Expires=Tue, 01 Jul 2025 10:00:00 GMT;
//! SameSite=Strict; Secure; Path=/`. The `Expires` attribute is the only
//! persistence signal read back out; everything else is write-only.
//!
//! Parsing is exact key/value matching: the cookie name must match the
//! whole text before the first `=` of a pair, and `Expires` is only
//! recognized among the attribute pairs that follow the matched cookie. A
//! token whose value happens to contain the text `Expires=` or `session=`
//! therefore cannot misparse.

use chrono::{DateTime, Utc};

use crate::config::CookieConfig;

/// Attribute names defined for Set-Cookie, lowercase.
///
/// Segments with one of these keys (or the bare `secure`/`httponly` flags)
/// belong to the preceding cookie pair rather than naming a new cookie.
const ATTRIBUTE_KEYS: [&str; 7] = [
    "expires",
    "max-age",
    "domain",
    "path",
    "samesite",
    "secure",
    "httponly",
];

/// The parts of a raw cookie string relevant to one named cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCookie {
    /// Cookie value; `None` when the name was not present.
    pub value: Option<String>,
    /// Raw `Expires` attribute text, if the cookie carried one.
    pub expires: Option<String>,
}

/// Formats an instant as an HTTP-date (`Tue, 01 Jul 2025 10:00:00 GMT`).
pub fn format_http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parses an HTTP-date, returning `None` for anything malformed.
///
/// RFC 1123 dates are a subset of RFC 2822, and chrono's RFC 2822 parser
/// accepts the obsolete `GMT` zone name browsers emit.
pub fn parse_http_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw.trim())
        .ok()
        .map(|at| at.with_timezone(&Utc))
}

/// Renders a single cookie entry with the configured attributes.
///
/// `expires_at` of `None` omits the `Expires` attribute, producing a
/// session-scoped cookie that the store drops at end of life.
pub fn render_entry(
    config: &CookieConfig,
    token: &str,
    expires_at: Option<DateTime<Utc>>,
) -> String {
    let mut entry = format!("{}={}", config.name, token);

    if let Some(at) = expires_at {
        entry.push_str("; Expires=");
        entry.push_str(&format_http_date(at));
    }

    entry.push_str("; SameSite=");
    entry.push_str(&config.same_site.to_string());

    if config.secure {
        entry.push_str("; Secure");
    }

    entry.push_str("; Path=");
    entry.push_str(&config.path);

    entry
}

/// Returns the cookie name of an entry: the text before the first `=` of
/// its leading pair. Empty when the entry has no `key=value` head.
pub fn entry_name(entry: &str) -> &str {
    let head = entry.split(';').next().unwrap_or("");
    head.split_once('=').map_or("", |(name, _)| name.trim())
}

/// Extracts one named cookie (value and `Expires`) from a raw cookie string.
///
/// Segments are split on `;` and trimmed. A segment whose key is a known
/// cookie attribute is ascribed to the most recent cookie pair; any other
/// `key=value` segment starts a new cookie. The last occurrence of `name`
/// wins, matching a store's last-write-wins overwrite rule.
pub fn parse_cookie(raw: &str, name: &str) -> ParsedCookie {
    let mut parsed = ParsedCookie::default();
    let mut in_target = false;

    for segment in raw.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let (key, value) = match segment.split_once('=') {
            Some((key, value)) => (key.trim(), value),
            // Bare flags like `Secure` are attributes of the current cookie.
            None => (segment, ""),
        };

        if ATTRIBUTE_KEYS.contains(&key.to_ascii_lowercase().as_str()) {
            if in_target && key.eq_ignore_ascii_case("expires") && parsed.expires.is_none() {
                parsed.expires = Some(value.trim().to_owned());
            }
            continue;
        }

        // A non-attribute pair names a cookie.
        in_target = key == name;
        if in_target {
            parsed.value = Some(value.to_owned());
            parsed.expires = None;
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn test_http_date_round_trip() {
        let at = Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap();
        let rendered = format_http_date(at);
        assert_eq!(rendered, "Tue, 01 Jul 2025 10:00:00 GMT");
        assert_eq!(parse_http_date(&rendered), Some(at));
    }

    #[test]
    fn test_parse_http_date_malformed() {
        assert_eq!(parse_http_date(""), None);
        assert_eq!(parse_http_date("not a date"), None);
        assert_eq!(parse_http_date("2025-07-01T10:00:00Z"), None);
    }

    #[test]
    fn test_render_entry_with_expiry() {
        let config = CookieConfig::default();
        let at = Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap();
        let entry = render_entry(&config, "abc123", Some(at));
        assert_eq!(
            entry,
            "session=abc123; Expires=Tue, 01 Jul 2025 10:00:00 GMT; SameSite=Strict; Secure; Path=/"
        );
    }

    #[test]
    fn test_render_entry_session_scoped() {
        let config = CookieConfig::default();
        let entry = render_entry(&config, "abc123", None);
        assert_eq!(entry, "session=abc123; SameSite=Strict; Secure; Path=/");
    }

    #[test]
    fn test_render_entry_insecure_lax() {
        let config = CookieConfig {
            secure: false,
            same_site: crate::config::SameSite::Lax,
            ..Default::default()
        };
        let entry = render_entry(&config, "t", None);
        assert_eq!(entry, "session=t; SameSite=Lax; Path=/");
    }

    #[test]
    fn test_entry_name() {
        assert_eq!(entry_name("session=abc; Path=/"), "session");
        assert_eq!(entry_name("theme=dark"), "theme");
        assert_eq!(entry_name("no pair here"), "");
    }

    #[test]
    fn test_parse_cookie_round_trip() {
        let config = CookieConfig::default();
        let at = Utc::now() + Duration::days(7);
        let raw = render_entry(&config, "abc123", Some(at));

        let parsed = parse_cookie(&raw, "session");
        assert_eq!(parsed.value.as_deref(), Some("abc123"));
        let expires = parse_http_date(parsed.expires.as_deref().unwrap()).unwrap();
        // HTTP-dates have second precision.
        assert!((expires - at).num_seconds().abs() <= 1);
    }

    #[test]
    fn test_parse_cookie_absent() {
        let parsed = parse_cookie("theme=dark; Path=/", "session");
        assert_eq!(parsed, ParsedCookie::default());
    }

    #[test]
    fn test_parse_cookie_empty_string() {
        let parsed = parse_cookie("", "session");
        assert_eq!(parsed, ParsedCookie::default());
    }

    #[test]
    fn test_exact_name_match_rejects_superstrings() {
        let raw = "app_session=evil; session=good; SameSite=Strict";
        let parsed = parse_cookie(raw, "session");
        assert_eq!(parsed.value.as_deref(), Some("good"));
    }

    #[test]
    fn test_token_containing_attribute_text_survives() {
        // The old substring match would have tripped on this value.
        let config = CookieConfig::default();
        let raw = render_entry(&config, "xExpires=1999y", None);
        let parsed = parse_cookie(&raw, "session");
        assert_eq!(parsed.value.as_deref(), Some("xExpires=1999y"));
        assert_eq!(parsed.expires, None);
    }

    #[test]
    fn test_expires_of_other_cookie_is_not_ascribed() {
        let raw = "other=x; Expires=Tue, 01 Jul 2025 10:00:00 GMT; session=abc";
        let parsed = parse_cookie(raw, "session");
        assert_eq!(parsed.value.as_deref(), Some("abc"));
        assert_eq!(parsed.expires, None);
    }

    #[test]
    fn test_last_occurrence_wins() {
        let raw = "session=old; Expires=Tue, 01 Jul 2025 10:00:00 GMT; session=new";
        let parsed = parse_cookie(raw, "session");
        assert_eq!(parsed.value.as_deref(), Some("new"));
        assert_eq!(parsed.expires, None);
    }

    #[test]
    fn test_attribute_keys_are_case_insensitive() {
        let raw = "session=abc; expires=Tue, 01 Jul 2025 10:00:00 GMT; secure";
        let parsed = parse_cookie(raw, "session");
        assert_eq!(parsed.value.as_deref(), Some("abc"));
        assert_eq!(
            parsed.expires.as_deref(),
            Some("Tue, 01 Jul 2025 10:00:00 GMT")
        );
    }
}
