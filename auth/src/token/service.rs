use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed, time-limited bearer tokens.
///
/// Tokens are self-contained: validity is established purely by the HS256
/// signature and the expiry claim, with no server-side session state. That
/// trades revocability for zero lookup cost per request; the fixed TTL
/// bounds the exposure window of a leaked token.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenService {
    /// Create a new token service.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing key, shared process-wide
    /// * `ttl` - Validity window applied to every issued token
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Issue a signed token for a subject, expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - Principal identifier embedded as the `sub` claim
    ///
    /// # Returns
    /// Encoded token string
    ///
    /// # Errors
    /// * `SigningFailed` - Internal signing error; never caused by the subject value
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let claims = Claims::for_subject(subject, self.ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token and extract its subject.
    ///
    /// Expiry is checked against the current clock with zero leeway.
    ///
    /// # Arguments
    /// * `token` - Encoded token string
    ///
    /// # Returns
    /// The subject claim
    ///
    /// # Errors
    /// * `InvalidSignature` - MAC does not match
    /// * `Expired` - Expiry timestamp is in the past
    /// * `Malformed` - Payload cannot be parsed or a required claim is absent
    /// * `MissingSubject` - Token is valid but carries no subject
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        token_data.claims.sub.ok_or(TokenError::MissingSubject)
    }
}
