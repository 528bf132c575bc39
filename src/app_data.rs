use std::sync::Arc;
use crate::config::{EnvironmentProvider, PasswordSettings, SecretManager, SystemEnvironment};
use crate::errors::PasswordError;
use crate::providers::{PasswordCipher, PasswordPolicyProvider};

/// Password subsystem state resolved once at startup
///
/// Built in main.rs (or by an embedding authentication provider) and shared
/// by `Arc`. Nothing in here changes after `init` returns.
///
/// ```text
/// AppData::init(env_provider)
///   ├─ settings (Arc<PasswordSettings>)
///   ├─ secret_manager (Arc<SecretManager>)
///   ├─ cipher (Arc<PasswordCipher>)
///   └─ policy_provider (Arc<PasswordPolicyProvider>)
///   ↓
/// PasswordManager::new(&app_data, credential_store)
/// ```
pub struct AppData {
    pub env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    pub settings: Arc<PasswordSettings>,
    pub secret_manager: Arc<SecretManager>,
    pub cipher: Arc<PasswordCipher>,
    pub policy_provider: Arc<PasswordPolicyProvider>,
}

impl AppData {
    /// Resolve settings and secrets and build the providers
    ///
    /// # Errors
    ///
    /// Returns `PasswordError::Configuration` or `PasswordError::Secret` when
    /// the password configuration is incomplete. Callers should not continue
    /// without a resolved policy.
    pub fn init(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, PasswordError> {
        tracing::info!("Initializing password subsystem...");

        let settings = Arc::new(PasswordSettings::from_env_provider(env_provider.clone())?);

        tracing::debug!("Initializing secret manager...");
        let secret_manager = Arc::new(SecretManager::init(
            env_provider.as_ref(),
            settings.encrypt_password(),
        )?);
        tracing::debug!("Secret manager initialized");

        let cipher = Arc::new(PasswordCipher::from_settings(&settings, &secret_manager)?);
        let policy_provider = Arc::new(PasswordPolicyProvider::new(settings.clone(), cipher.clone()));

        tracing::info!(
            apply_policy = settings.apply_policy(),
            encrypt_password = settings.encrypt_password(),
            "Password subsystem initialization complete"
        );

        Ok(Self {
            env_provider,
            settings,
            secret_manager,
            cipher,
            policy_provider,
        })
    }

    /// Initialize from the process environment
    pub fn from_env() -> Result<Self, PasswordError> {
        Self::init(Arc::new(SystemEnvironment))
    }
}
