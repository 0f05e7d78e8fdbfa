use anyhow::{anyhow, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Well-formed Argon2id hash with the default parameters. Logins for unknown
/// usernames verify against it so they cost the same as a wrong password.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c3VydmV5b3ItZHVtbXkxNg$k4kg1VXyT0G3Y/qNiZE5i4rEIlLUDm7RipLSm4Jo6jk";

/// Hashes a password with Argon2id and a fresh random salt. Returns a PHC string.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| anyhow!("Password hashing failed: {e}"))
}

/// Checks a password against a stored PHC hash.
/// A mismatch is `Ok(false)`; only a malformed hash is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| anyhow!("Invalid password hash format: {e}"))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Checks a login attempt. A missing account still runs a full verification
/// against `DUMMY_HASH` and always reports `false`.
pub fn verify_login(password: &str, stored_hash: Option<&str>) -> Result<bool> {
    match stored_hash {
        Some(hash) => verify_password(password, hash),
        None => verify_password(password, DUMMY_HASH).map(|_| false),
    }
}
