use argon2::{
    Argon2, PasswordHash, PasswordVerifier,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use thiserror::Error;

const MIN_PASSWORD_LEN: usize = 8;
const MAX_PASSWORD_LEN: usize = 512;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("password length out of bounds")]
    LengthOutOfBounds,

    #[error("Failed to hash password: {0}")]
    HashingFailed(String),

    #[error("Failed to parse password hash: {0}")]
    InvalidHash(String),
}

pub type Result<T> = std::result::Result<T, PasswordError>;

/// Hash a password with argon2id and a fresh random salt, producing a
/// PHC-format string.
pub fn hash_password(password: &str) -> Result<String> {
    let len = password.chars().count();
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
        return Err(PasswordError::LengthOutOfBounds);
    }

    let salt = SaltString::generate(&mut OsRng);
    let phc = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?;
    Ok(phc.to_string())
}

/// Verify a password against a stored PHC-format hash.
pub fn verify_password(password: &str, pw_hash: &str) -> Result<bool> {
    let parsed =
        PasswordHash::new(pw_hash).map_err(|e| PasswordError::InvalidHash(e.to_string()))?;
    let password_ok = Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok();
    Ok(password_ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_ok() {
        let h = hash_password("correct-horse").unwrap();
        assert!(verify_password("correct-horse", &h).unwrap());
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let h = hash_password("correct-horse").unwrap();
        assert!(!verify_password("battery-staple", &h).unwrap());
    }

    #[test]
    fn test_invalid_hash() {
        let result = verify_password("secret-enough", "invalid_hash");
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), PasswordError::InvalidHash(_)));
    }

    #[test]
    fn test_short_password_rejected() {
        let result = hash_password("short");
        assert!(matches!(
            result.unwrap_err(),
            PasswordError::LengthOutOfBounds
        ));
    }
}
