//! Argon2id password hashing.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$m=...`), so the parameters
//! and salt travel with the hash and verification needs nothing else.

use argon2::{
    Argon2,
    password_hash::{
        self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use thiserror::Error;
use tokio::task::{JoinError, spawn_blocking};
use zeroize::Zeroizing;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password hash error: {0}")]
    Hash(password_hash::Error),

    #[error("hashing task failed")]
    Task(#[from] JoinError),
}

impl From<password_hash::Error> for PasswordError {
    fn from(error: password_hash::Error) -> Self {
        Self::Hash(error)
    }
}

/// Hash a password with a fresh random salt, returning a PHC string.
///
/// # Errors
///
/// Returns an error if Argon2 rejects the input.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Compare a password with a stored PHC string.
///
/// # Errors
///
/// Returns an error if the stored hash cannot be parsed. A mismatch is `Ok(false)`.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(hash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(error) => Err(error.into()),
    }
}

/// [`hash_password`] on the blocking pool.
pub(crate) async fn hash_password_blocking(
    password: Zeroizing<String>,
) -> Result<String, PasswordError> {
    spawn_blocking(move || hash_password(&password)).await?
}

/// [`verify_password`] on the blocking pool.
pub(crate) async fn verify_password_blocking(
    password: Zeroizing<String>,
    hash: String,
) -> Result<bool, PasswordError> {
    spawn_blocking(move || verify_password(&password, &hash)).await?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_phc_argon2id() {
        let hash = hash_password("correct horse").expect("hashing should succeed");

        assert!(hash.starts_with("$argon2id$"), "unexpected hash: {hash}");
        assert!(!hash.contains("correct horse"));
    }

    #[test]
    fn same_password_hashes_differently() {
        let first = hash_password("correct horse").expect("hashing should succeed");
        let second = hash_password("correct horse").expect("hashing should succeed");

        assert_ne!(first, second);
    }

    #[test]
    fn matching_password_verifies() {
        let hash = hash_password("correct horse").expect("hashing should succeed");

        assert!(verify_password("correct horse", &hash).expect("verify should succeed"));
    }

    #[test]
    fn wrong_password_is_false() {
        let hash = hash_password("correct horse").expect("hashing should succeed");

        assert!(!verify_password("battery staple", &hash).expect("verify should succeed"));
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(matches!(
            verify_password("correct horse", "not-a-hash"),
            Err(PasswordError::Hash(_))
        ));
    }

    #[tokio::test]
    async fn blocking_wrappers_round_trip() {
        let hash = hash_password_blocking(Zeroizing::new("correct horse".to_string()))
            .await
            .expect("hashing should succeed");

        let verified =
            verify_password_blocking(Zeroizing::new("correct horse".to_string()), hash)
                .await
                .expect("verify should succeed");

        assert!(verified);
    }
}
