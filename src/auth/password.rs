//! Password hashing and verification.
//!
//! Uses scrypt through the `password_hash` API: salted, adaptive-cost, and
//! encoded in the PHC string format so parameters travel with the hash.

use scrypt::password_hash::rand_core::OsRng;
use scrypt::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use scrypt::Scrypt;

use crate::domain::Error;

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(plain: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    Scrypt
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| Error::internal(format!("failed to hash password: {err}")))
}

/// Verify a plaintext password against a stored PHC hash.
///
/// Mismatches and unparseable hashes both report `false`; this never fails
/// for well-formed input.
pub fn verify_password(hash: &str, plain: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Scrypt.verify_password(plain.as_bytes(), &parsed).is_ok()
}
