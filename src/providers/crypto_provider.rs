use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use argon2::{Algorithm, Argon2, Params, Version};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use rand::Rng;
use crate::config::{ApplicationError, PasswordSettings, SecretManager, ENCRYPTION_KEY_VAR};
use crate::errors::{CryptoError, PasswordError};

const COMPONENT: &str = "password_cipher";
const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;
const KEY_LEN: usize = 32;
const TAG_LEN: usize = 16;

// Argon2id cost for deriving the cipher key from the configured passphrase
const KDF_MEMORY_KIB: u32 = 4096;
const KDF_ITERATIONS: u32 = 3;
const KDF_PARALLELISM: u32 = 1;

/// Reversible transform applied to passwords before they reach the store
///
/// When disabled both directions are the identity. When enabled a value is
/// sealed with AES-256-GCM under a key derived by Argon2id from the
/// configured passphrase and a fresh random salt. The stored form is
/// `base64(salt || nonce || ciphertext)`, so encrypting the same password
/// twice gives different output.
#[derive(Clone)]
pub struct PasswordCipher {
    passphrase: Option<String>,
}

impl PasswordCipher {
    /// Cipher that leaves passwords untouched
    pub fn disabled() -> Self {
        Self { passphrase: None }
    }

    /// Cipher keyed by `passphrase`
    ///
    /// # Errors
    /// `PasswordError::Configuration` when the passphrase is empty
    pub fn encrypted(passphrase: impl Into<String>) -> Result<Self, PasswordError> {
        let passphrase = passphrase.into();
        if passphrase.is_empty() {
            return Err(ApplicationError::invalid(ENCRYPTION_KEY_VAR, "Encryption key cannot be empty").into());
        }
        Ok(Self { passphrase: Some(passphrase) })
    }

    /// Build the cipher the settings ask for
    pub fn from_settings(settings: &PasswordSettings, secrets: &SecretManager) -> Result<Self, PasswordError> {
        if !settings.encrypt_password() {
            return Ok(Self::disabled());
        }
        let key = secrets
            .encryption_key()
            .ok_or_else(|| ApplicationError::missing(ENCRYPTION_KEY_VAR))?;
        Self::encrypted(key)
    }

    pub fn is_enabled(&self) -> bool {
        self.passphrase.is_some()
    }

    /// Secure a clear-text password for storage
    ///
    /// Empty input always gives empty output.
    pub fn secure_password(&self, password: &str) -> Result<String, PasswordError> {
        let Some(passphrase) = self.passphrase.as_deref() else {
            return Ok(password.to_string());
        };
        if password.is_empty() {
            return Ok(String::new());
        }

        let mut rng = rand::rng();
        let mut salt = [0u8; SALT_LEN];
        let mut nonce_bytes = [0u8; NONCE_LEN];
        rng.fill(&mut salt);
        rng.fill(&mut nonce_bytes);

        let cipher = Self::cipher_for(passphrase, &salt, "encrypt")?;
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce_bytes), password.as_bytes())
            .map_err(|e| CryptoError::other_from_string(COMPONENT, "encrypt", e.to_string()))?;

        let mut combined = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
        combined.extend_from_slice(&salt);
        combined.extend_from_slice(&nonce_bytes);
        combined.extend_from_slice(&ciphertext);

        Ok(STANDARD.encode(combined))
    }

    /// Recover the clear text from a value produced by [`Self::secure_password`]
    pub fn reveal_password(&self, secured: &str) -> Result<String, PasswordError> {
        let Some(passphrase) = self.passphrase.as_deref() else {
            return Ok(secured.to_string());
        };
        if secured.is_empty() {
            return Ok(String::new());
        }

        let combined = STANDARD
            .decode(secured)
            .map_err(|e| CryptoError::malformed(COMPONENT, "decrypt", e.to_string()))?;
        if combined.len() < SALT_LEN + NONCE_LEN + TAG_LEN {
            return Err(CryptoError::malformed(
                COMPONENT,
                "decrypt",
                format!("payload is {} bytes, too short to hold salt, nonce and tag", combined.len()),
            )
            .into());
        }

        let (salt, rest) = combined.split_at(SALT_LEN);
        let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);

        let cipher = Self::cipher_for(passphrase, salt, "decrypt")?;
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| {
                CryptoError::other_from_string(
                    COMPONENT,
                    "decrypt",
                    "authentication failed: wrong key or altered ciphertext".to_string(),
                )
            })?;

        String::from_utf8(plaintext)
            .map_err(|e| CryptoError::other_from_error(COMPONENT, "decrypt", e).into())
    }

    fn cipher_for(passphrase: &str, salt: &[u8], operation: &'static str) -> Result<Aes256Gcm, CryptoError> {
        let params = Params::new(KDF_MEMORY_KIB, KDF_ITERATIONS, KDF_PARALLELISM, Some(KEY_LEN))
            .map_err(|e| CryptoError::key_derivation(COMPONENT, operation, e.to_string()))?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let mut key = [0u8; KEY_LEN];
        argon2
            .hash_password_into(passphrase.as_bytes(), salt, &mut key)
            .map_err(|e| CryptoError::key_derivation(COMPONENT, operation, e.to_string()))?;

        Aes256Gcm::new_from_slice(&key)
            .map_err(|e| CryptoError::other_from_string(COMPONENT, operation, e.to_string()))
    }
}

impl std::fmt::Debug for PasswordCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordCipher")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
