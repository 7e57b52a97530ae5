use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::Error;

/// Hash a password with Argon2id and a fresh random salt.
///
/// Returns the PHC string, which embeds the algorithm parameters and the salt.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::PasswordHashError(e.to_string()))?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against a stored PHC string.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(Error::PasswordHashError)` - The stored hash could not be parsed
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, Error> {
    let parsed_hash =
        PasswordHash::new(password_hash).map_err(|e| Error::PasswordHashError(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::PasswordHashError(e.to_string())),
    }
}

static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

/// Run a full verification against a throwaway hash.
///
/// Used when the username is unknown so the failure takes as long as a wrong password.
pub fn verify_dummy(password: &str) {
    let dummy = DUMMY_HASH.get_or_init(|| hash_password("skinvault-dummy-password").ok());

    if let Some(dummy) = dummy {
        let _ = verify_password(password, dummy);
    }
}

/// Hash on the blocking thread pool so Argon2 does not stall the async workers.
pub async fn hash_password_blocking(password: String) -> Result<String, Error> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| Error::InternalError(format!("Password hashing task failed: {}", e)))?
}

/// Verify on the blocking thread pool.
///
/// With no stored hash, runs [`verify_dummy`] and reports a mismatch.
pub async fn verify_password_blocking(
    password: String,
    password_hash: Option<String>,
) -> Result<bool, Error> {
    tokio::task::spawn_blocking(move || match password_hash {
        Some(password_hash) => verify_password(&password, &password_hash),
        None => {
            verify_dummy(&password);
            Ok(false)
        }
    })
    .await
    .map_err(|e| Error::InternalError(format!("Password verification task failed: {}", e)))?
}
