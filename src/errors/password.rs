use std::time::Duration;
use thiserror::Error;
use crate::config::{ApplicationError, SecretError};
use crate::errors::internal::{CryptoError, StoreError};

/// Error type for every public password operation
///
/// Decisions about the credential itself (wrong password, unknown user,
/// policy violation) are not errors; see `PasswordOutcome`.
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Argument '{argument}' must not be empty")]
    InvalidArgument { argument: &'static str },

    #[error("Password configuration error: {0}")]
    Configuration(#[from] ApplicationError),

    #[error("Password secret error: {0}")]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Credential store did not respond within {0:?}")]
    StoreTimeout(Duration),
}

impl PasswordError {
    pub fn invalid_argument(argument: &'static str) -> Self {
        Self::InvalidArgument { argument }
    }

    /// Fail with `InvalidArgument` when `value` is empty
    pub fn require_non_empty(argument: &'static str, value: &str) -> Result<(), Self> {
        if value.is_empty() {
            return Err(Self::invalid_argument(argument));
        }
        Ok(())
    }
}
