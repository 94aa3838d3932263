use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a bearer token.
///
/// `sub` identifies the authenticated principal; `exp` is an absolute Unix
/// timestamp after which the token is dead. Tokens are never persisted, so
/// these three claims are the token's entire state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (principal identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Create claims for a subject with an expiry `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - Principal identifier to embed
    /// * `ttl` - Validity window starting now
    ///
    /// # Returns
    /// Claims with sub, iat, and exp set
    pub fn for_subject(subject: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: Some(subject.to_string()),
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        }
    }
}
