//! Single-account credential gate.

use sha2::{Digest, Sha256};

/// The configured login identity.
///
/// Only the password's SHA-256 digest is retained; the raw password is
/// dropped as soon as the identity is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    username: String,
    password_hash: String,
}

impl Identity {
    /// Creates an identity, hashing the raw password immediately.
    pub fn new(username: impl Into<String>, password: &str) -> Self {
        Self {
            username: username.into(),
            password_hash: hash_password(password),
        }
    }

    /// Returns the configured username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns `true` iff both the username and the password hash match.
    ///
    /// There is no lockout or rate limiting here; a failed attempt simply
    /// leaves the session unauthenticated.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        let hash = hash_password(password);
        username == self.username && constant_time_compare(&hash, &self.password_hash)
    }
}

/// Hex-encoded SHA-256 digest of a password.
fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }

    result == 0
}
