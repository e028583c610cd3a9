//! Password hashing with argon2

use std::sync::OnceLock;

use anyhow::Result;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};

#[cfg(test)]
thread_local! {
    static VERIFY_CALLS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

/// Number of `verify_password` calls made on the current thread
#[cfg(test)]
pub(crate) fn verify_calls() -> usize {
    VERIFY_CALLS.with(|calls| calls.get())
}

/// Hash a plaintext password into a PHC string with a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verify a plaintext password against a stored PHC string
///
/// A stored hash that cannot be parsed never verifies.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    #[cfg(test)]
    VERIFY_CALLS.with(|calls| calls.set(calls.get() + 1));

    let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Run a full verification against a fixed hash and discard the result
///
/// Used when no account matches, so a login attempt for an unknown email
/// costs the same argon2 work as one for a known email.
pub fn verify_dummy_password(password: &str) {
    static DUMMY_HASH: OnceLock<String> = OnceLock::new();
    let dummy_hash = DUMMY_HASH
        .get_or_init(|| hash_password("no account uses this password").unwrap_or_default());

    let _ = verify_password(password, dummy_hash);
}
