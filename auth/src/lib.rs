//! Authentication primitives library
//!
//! Provides the building blocks for password-based authentication with
//! stateless bearer tokens:
//! - Password hashing (Argon2id)
//! - Token issuance and verification (HS256)
//!
//! The library has no knowledge of any credential store. Services compose
//! these primitives with their own persistence ports.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(30));
//! let token = tokens.issue("alice").unwrap();
//! let subject = tokens.verify(&token).unwrap();
//! assert_eq!(subject, "alice");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
