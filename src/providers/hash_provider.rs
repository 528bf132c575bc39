use base64::{Engine as _, engine::general_purpose::STANDARD};
use sha1::{Digest, Sha1};
use sha2::Sha256;
use crate::errors::PasswordError;

/// Digest used by [`HashProvider`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    /// Matches digests already written by the legacy provider
    #[default]
    Sha1,
    Sha256,
}

/// One-way digest of clear-text values
///
/// The input is encoded as UTF-16LE before hashing and the digest is
/// returned as standard base64.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashProvider {
    algorithm: HashAlgorithm,
}

impl HashProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_algorithm(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Hash `value` and return the base64 digest
    ///
    /// # Errors
    /// `PasswordError::InvalidArgument` when `value` is empty
    pub fn generate_hash(&self, value: &str) -> Result<String, PasswordError> {
        PasswordError::require_non_empty("value", value)?;

        let bytes: Vec<u8> = value.encode_utf16().flat_map(u16::to_le_bytes).collect();
        let digest = match self.algorithm {
            HashAlgorithm::Sha1 => Sha1::digest(&bytes).to_vec(),
            HashAlgorithm::Sha256 => Sha256::digest(&bytes).to_vec(),
        };

        Ok(STANDARD.encode(digest))
    }
}

/// Hash `value` with the default algorithm (standalone function)
pub fn generate_hash(value: &str) -> Result<String, PasswordError> {
    HashProvider::new().generate_hash(value)
}
