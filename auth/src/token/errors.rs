use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures stay distinct here for diagnostic logging; callers
/// at the service edge collapse them into a single uniform rejection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token has no subject claim")]
    MissingSubject,
}
