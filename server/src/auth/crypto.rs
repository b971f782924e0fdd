use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Length of a hex-encoded session token (32 random bytes).
pub const TOKEN_LEN: usize = 64;

pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn is_well_formed_token(token: &str) -> bool {
    token.len() == TOKEN_LEN && token.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Argon2 cost selection. `Fast` is for dev/test only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordHashing {
    #[default]
    Secure,
    Fast,
}

impl PasswordHashing {
    fn argon2(self) -> Result<Argon2<'static>, argon2::Error> {
        match self {
            PasswordHashing::Secure => Ok(Argon2::default()),
            PasswordHashing::Fast => {
                // Minimal params - NOT SECURE FOR PRODUCTION
                let params = Params::new(1024, 1, 1, None)?;
                Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
            }
        }
    }

    pub fn hash(self, password: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.argon2()?.hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    /// Parameters are read from the stored hash, so either cost setting
    /// verifies hashes produced by the other.
    pub fn verify(self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(h) => h,
            Err(_) => return false,
        };
        match self.argon2() {
            Ok(argon2) => argon2
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok(),
            Err(_) => false,
        }
    }
}
