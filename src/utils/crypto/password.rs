//! Password hashing and verification using Argon2id

use crate::config::HashingConfig;
use crate::utils::error::{JustInvestError, Result};
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

fn hasher(config: &HashingConfig) -> Result<Argon2<'static>> {
    let params = Params::new(
        config.memory_cost,
        config.time_cost,
        config.parallelism,
        Some(config.hash_len),
    )
    .map_err(|e| JustInvestError::Crypto(format!("Invalid Argon2 parameters: {}", e)))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hash a password into a PHC string using the configured Argon2id cost.
pub fn hash_password(password: &str, config: &HashingConfig) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = hasher(config)?;

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| JustInvestError::Crypto(format!("Failed to hash password: {}", e)))?;

    Ok(password_hash.to_string())
}

/// Verify a password against its hash.
///
/// Cost parameters are read back from the PHC string, so records hashed
/// under an older configuration still verify.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| JustInvestError::Crypto(format!("Failed to parse password hash: {}", e)))?;

    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(JustInvestError::Crypto(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}
