use std::fmt;
use crate::config::{EnvironmentProvider, SecretConfig, SecretType};

/// Custom error type for secret-related failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    Missing { secret_name: String },
    InvalidLength { secret_name: String, expected: usize, actual: usize },
}

impl SecretError {
    pub fn missing(secret_name: &str) -> Self {
        Self::Missing {
            secret_name: secret_name.to_string(),
        }
    }

    pub fn invalid_length(secret_name: &str, expected: usize, actual: usize) -> Self {
        Self::InvalidLength {
            secret_name: secret_name.to_string(),
            expected,
            actual,
        }
    }
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { secret_name } => {
                write!(f, "Required secret '{}' is missing", secret_name)
            }
            Self::InvalidLength { secret_name, expected, actual } => {
                write!(
                    f,
                    "Secret '{}' must be at least {} characters, got {}",
                    secret_name, expected, actual
                )
            }
        }
    }
}

impl std::error::Error for SecretError {}

pub const ENCRYPTION_KEY_VAR: &str = "ENCRYPTION_KEY";
pub const ENCRYPTION_KEY_MIN_LENGTH: usize = 8;

/// Holds the passphrase used to encrypt stored passwords
pub struct SecretManager {
    encryption_key: Option<String>,
}

impl SecretManager {
    /// Load secrets needed by the current configuration
    ///
    /// The encryption key is only required when password encryption is on.
    ///
    /// # Errors
    /// Returns `SecretError` if a required secret is missing or too short
    pub fn init(
        env_provider: &(dyn EnvironmentProvider + Send + Sync),
        encryption_enabled: bool,
    ) -> Result<Self, SecretError> {
        let config = Self::encryption_key_config().required(encryption_enabled);
        let key = Self::load_secret(env_provider, &config)?;

        Ok(Self {
            encryption_key: (!key.is_empty()).then_some(key),
        })
    }

    fn encryption_key_config() -> SecretConfig {
        SecretConfig::new(SecretType::EnvVar {
            name: ENCRYPTION_KEY_VAR.to_string(),
        })
        .min_length(ENCRYPTION_KEY_MIN_LENGTH)
    }

    pub fn encryption_key(&self) -> Option<&str> {
        self.encryption_key.as_deref()
    }

    /// Read and validate a secret
    ///
    /// A secret that is not required is never read, so a stale or short
    /// value left in the environment does not block startup.
    pub(crate) fn load_secret(
        env_provider: &(dyn EnvironmentProvider + Send + Sync),
        config: &SecretConfig,
    ) -> Result<String, SecretError> {
        let value = match &config.secret_type {
            SecretType::EnvVar { name } => match env_provider.get_var(name) {
                _ if !config.required => return Ok(String::new()),
                Some(v) if !v.is_empty() => v,
                _ => return Err(SecretError::missing(name)),
            },
        };

        if let Some(min_len) = config.min_length {
            if value.len() < min_len {
                return Err(SecretError::invalid_length(config.name(), min_len, value.len()));
            }
        }

        Ok(value)
    }
}

impl fmt::Debug for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretManager")
            .field("encryption_key", &self.encryption_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    #[test]
    fn test_key_loaded_when_encryption_enabled() {
        let env = MockEnvironment::empty().with_var(ENCRYPTION_KEY_VAR, "correct horse battery");

        let manager = SecretManager::init(&env, true).unwrap();
        assert_eq!(manager.encryption_key(), Some("correct horse battery"));
    }

    #[test]
    fn test_missing_key_fails_when_encryption_enabled() {
        let env = MockEnvironment::empty();

        let err = SecretManager::init(&env, true).unwrap_err();
        assert_eq!(err, SecretError::missing(ENCRYPTION_KEY_VAR));
        assert_eq!(err.to_string(), "Required secret 'ENCRYPTION_KEY' is missing");
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        let env = MockEnvironment::empty().with_var(ENCRYPTION_KEY_VAR, "");

        assert!(matches!(SecretManager::init(&env, true), Err(SecretError::Missing { .. })));
    }

    #[test]
    fn test_short_key_rejected() {
        let env = MockEnvironment::empty().with_var(ENCRYPTION_KEY_VAR, "abc");

        let err = SecretManager::init(&env, true).unwrap_err();
        assert_eq!(err, SecretError::invalid_length(ENCRYPTION_KEY_VAR, 8, 3));
    }

    #[test]
    fn test_key_optional_when_encryption_disabled() {
        let env = MockEnvironment::empty();

        let manager = SecretManager::init(&env, false).unwrap();
        assert_eq!(manager.encryption_key(), None);
    }

    #[test]
    fn test_short_key_ignored_when_encryption_disabled() {
        let env = MockEnvironment::empty().with_var(ENCRYPTION_KEY_VAR, "abc");

        let manager = SecretManager::init(&env, false).unwrap();
        assert_eq!(manager.encryption_key(), None);
    }

    #[test]
    fn test_debug_redacts_key() {
        let manager = SecretManager {
            encryption_key: Some("super-secret-passphrase".to_string()),
        };
        let debug = format!("{:?}", manager);

        assert!(!debug.contains("super-secret-passphrase"));
        assert!(debug.contains("<redacted>"));
    }
}
