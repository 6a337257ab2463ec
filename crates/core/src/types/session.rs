//! Admin session records and their opaque tokens.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// How long an issued session stays valid.
#[must_use]
pub fn session_ttl() -> TimeDelta {
    TimeDelta::hours(24)
}

/// An opaque, high-entropy admin session token.
///
/// 256 bits of CSPRNG output, hex-encoded (64 characters). The token is the
/// bearer capability itself, so `Debug` redacts it.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap an existing token string.
    #[must_use]
    pub const fn new(token: String) -> Self {
        Self(token)
    }

    /// The raw token as sent in the `X-Admin-Token` header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl core::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

/// A stored admin session.
///
/// Valid iff present in the session store and the current time is strictly
/// before `expires`. Timestamps persist as epoch milliseconds, matching the
/// historical session file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// When the session was issued.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created: DateTime<Utc>,
    /// When the session stops being valid: `created` + 24h.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expires: DateTime<Utc>,
}

impl Session {
    /// Create a session issued at `now`, expiring 24 hours later.
    #[must_use]
    pub fn issued_at(now: DateTime<Utc>) -> Self {
        Self {
            created: now,
            expires: now + session_ttl(),
        }
    }

    /// Whether the session has expired as of `now`.
    ///
    /// A session is live strictly while `now < expires`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_session_expires_24h_after_issue() {
        let now = Utc::now();
        let session = Session::issued_at(now);
        assert_eq!(session.created, now);
        assert_eq!(session.expires - session.created, TimeDelta::hours(24));
    }

    #[test]
    fn test_is_expired_boundary() {
        let now = Utc::now();
        let session = Session::issued_at(now);

        assert!(!session.is_expired(now));
        assert!(!session.is_expired(session.expires - TimeDelta::seconds(1)));
        // Exactly at expiry counts as expired.
        assert!(session.is_expired(session.expires));
        assert!(session.is_expired(session.expires + TimeDelta::seconds(1)));
    }

    #[test]
    fn test_persists_as_epoch_milliseconds() {
        let now = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        let session = Session::issued_at(now);
        let value = serde_json::to_value(session).unwrap();
        assert_eq!(value["created"], 1_700_000_000_000_i64);
        assert_eq!(value["expires"], 1_700_000_000_000_i64 + 24 * 60 * 60 * 1000);
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = SessionToken::from("deadbeef");
        assert_eq!(format!("{token:?}"), "SessionToken([REDACTED])");
    }
}
