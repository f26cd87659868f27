//! Password value object backed by bcrypt.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{MAX_PASSWORD_BYTES, PASSWORD_HASH_COST};
use crate::error::{DomainError, DomainResult};

/// Modular-crypt bcrypt digest: `$2<v>$<cost>$<22 salt + 31 hash chars>`.
static BCRYPT_HASH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\$2[abxy]?\$(\d{2})\$[./A-Za-z0-9]{53}$").expect("static regex is valid")
});

/// A stored password hash. Plaintext never lives inside this type.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plaintext password.
    ///
    /// # Errors
    /// `InvalidPassword` when empty, `PasswordTooLong` past 72 bytes.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        if plain_text.is_empty() {
            return Err(DomainError::InvalidPassword);
        }
        if plain_text.len() > MAX_PASSWORD_BYTES {
            return Err(DomainError::PasswordTooLong);
        }

        let hash = bcrypt::hash(plain_text, PASSWORD_HASH_COST)
            .map_err(|e| DomainError::hashing(e.to_string()))?;
        Ok(Self { hash })
    }

    /// Wrap a hash loaded from storage, rejecting anything that is not a bcrypt digest.
    pub fn from_hash(hash: impl Into<String>) -> DomainResult<Self> {
        let hash = hash.into();
        if hash.is_empty() {
            return Err(DomainError::InvalidHashedPassword);
        }

        let cost = BCRYPT_HASH
            .captures(&hash)
            .and_then(|caps| caps.get(1))
            .and_then(|cost| cost.as_str().parse::<u32>().ok())
            .ok_or_else(|| DomainError::malformed_hash("not a bcrypt digest"))?;

        if !(4..=31).contains(&cost) {
            return Err(DomainError::malformed_hash(format!("cost {cost} out of range")));
        }

        Ok(Self { hash })
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Check a plaintext candidate against this hash.
    ///
    /// A mismatch is `Ok(false)`; a digest bcrypt cannot parse is an error.
    pub fn verify(&self, plain_text: &str) -> DomainResult<bool> {
        bcrypt::verify(plain_text, &self.hash).map_err(|e| DomainError::malformed_hash(e.to_string()))
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}
