use std::sync::Arc;
use std::time::Duration;
use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;
use crate::config::{EnvironmentProvider, SystemEnvironment};
use crate::types::policy::{
    MAX_EXPIRES_IN_DAYS, MAX_MAXIMUM_LENGTH, MIN_EXPIRES_IN_DAYS, MIN_MINIMUM_LENGTH, PasswordPolicy,
};

pub const APPLY_PASSWORD_POLICY: &str = "APPLY_PASSWORD_POLICY";
pub const ENCRYPT_PASSWORD: &str = "ENCRYPT_PASSWORD";
pub const CREDENTIAL_STORE_TIMEOUT_SECONDS: &str = "CREDENTIAL_STORE_TIMEOUT_SECONDS";
pub const POLICY_EXPIRES_IN_DAYS: &str = "PASSWORD_POLICY_EXPIRES_IN_DAYS";
pub const POLICY_MINIMUM_LENGTH: &str = "PASSWORD_POLICY_MINIMUM_LENGTH";
pub const POLICY_MAXIMUM_LENGTH: &str = "PASSWORD_POLICY_MAXIMUM_LENGTH";
pub const POLICY_START_WITH_ALPHABET: &str = "PASSWORD_POLICY_START_WITH_ALPHABET";
pub const POLICY_MUST_CONTAIN_DIGIT: &str = "PASSWORD_POLICY_MUST_CONTAIN_DIGIT";
pub const POLICY_MUST_CONTAIN_SPECIAL_CHARACTER: &str = "PASSWORD_POLICY_MUST_CONTAIN_SPECIAL_CHARACTER";

const DEFAULT_STORE_TIMEOUT_SECONDS: &str = "30";

/// Password handling settings resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordSettings {
    apply_policy: bool,
    encrypt_password: bool,
    policy: PasswordPolicy,
    store_timeout: Duration,
}

impl PasswordSettings {
    /// Load password settings through the given environment provider
    ///
    /// When the policy is switched off the policy variables are not read at
    /// all. When it is on, every one of them is required.
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let apply_policy = ConfigSpec::new(env_provider.clone())
            .env_var(APPLY_PASSWORD_POLICY)
            .default_value("false")
            .load_bool()?;

        let encrypt_password = ConfigSpec::new(env_provider.clone())
            .env_var(ENCRYPT_PASSWORD)
            .default_value("false")
            .load_bool()?;

        let timeout_secs = ConfigSpec::new(env_provider.clone())
            .env_var(CREDENTIAL_STORE_TIMEOUT_SECONDS)
            .default_value(DEFAULT_STORE_TIMEOUT_SECONDS)
            .validator(|v| ConfigSpec::validate_integer_range(v, 1, 300))
            .load_integer()?;

        let policy = if apply_policy {
            Self::load_policy(env_provider)?
        } else {
            PasswordPolicy::unrestricted()
        };

        tracing::debug!(
            apply_policy,
            encrypt_password,
            minimum_length = policy.minimum_length,
            "Password settings loaded"
        );

        Ok(Self {
            apply_policy,
            encrypt_password,
            policy,
            store_timeout: Duration::from_secs(timeout_secs as u64),
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    /// Build settings directly, applying the same policy checks as loading
    pub fn new(
        policy: Option<PasswordPolicy>,
        encrypt_password: bool,
        store_timeout: Duration,
    ) -> Result<Self, ApplicationError> {
        let apply_policy = policy.is_some();
        let policy = match policy {
            Some(policy) => {
                Self::check_policy_bounds(&policy)?;
                policy
            }
            None => PasswordPolicy::unrestricted(),
        };

        Ok(Self {
            apply_policy,
            encrypt_password,
            policy,
            store_timeout,
        })
    }

    fn load_policy(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<PasswordPolicy, ApplicationError> {
        let required = |name: &str| {
            ConfigSpec::new(env_provider.clone())
                .env_var(name)
                .required(true)
        };

        let expires_in_days = required(POLICY_EXPIRES_IN_DAYS)
            .validator(|v| {
                ConfigSpec::validate_integer_range(v, MIN_EXPIRES_IN_DAYS as i64, MAX_EXPIRES_IN_DAYS as i64)
            })
            .load_integer()?;

        let minimum_length = required(POLICY_MINIMUM_LENGTH)
            .validator(|v| ConfigSpec::validate_integer_range(v, MIN_MINIMUM_LENGTH as i64, i64::from(u16::MAX)))
            .load_integer()?;

        let maximum_length = required(POLICY_MAXIMUM_LENGTH)
            .validator(|v| ConfigSpec::validate_integer_range(v, 1, MAX_MAXIMUM_LENGTH as i64))
            .load_integer()?;

        let policy = PasswordPolicy {
            expires_in_days: Some(expires_in_days as u32),
            minimum_length: minimum_length as usize,
            maximum_length: maximum_length as usize,
            must_start_with_alphabet: required(POLICY_START_WITH_ALPHABET).load_bool()?,
            must_contain_digit: required(POLICY_MUST_CONTAIN_DIGIT).load_bool()?,
            must_contain_special_character: required(POLICY_MUST_CONTAIN_SPECIAL_CHARACTER).load_bool()?,
        };

        Self::check_policy_bounds(&policy)?;
        Ok(policy)
    }

    fn check_policy_bounds(policy: &PasswordPolicy) -> Result<(), ApplicationError> {
        if let Some(days) = policy.expires_in_days {
            if !(MIN_EXPIRES_IN_DAYS..=MAX_EXPIRES_IN_DAYS).contains(&days) {
                return Err(ApplicationError::invalid(
                    POLICY_EXPIRES_IN_DAYS,
                    format!("Value {} is outside valid range {}-{}", days, MIN_EXPIRES_IN_DAYS, MAX_EXPIRES_IN_DAYS),
                ));
            }
        }
        if policy.minimum_length < MIN_MINIMUM_LENGTH {
            return Err(ApplicationError::invalid(
                POLICY_MINIMUM_LENGTH,
                format!("Minimum length must be at least {}", MIN_MINIMUM_LENGTH),
            ));
        }
        if policy.maximum_length > MAX_MAXIMUM_LENGTH {
            return Err(ApplicationError::invalid(
                POLICY_MAXIMUM_LENGTH,
                format!("Maximum length must be at most {}", MAX_MAXIMUM_LENGTH),
            ));
        }
        if policy.minimum_length > policy.maximum_length {
            return Err(ApplicationError::invalid(
                POLICY_MAXIMUM_LENGTH,
                format!(
                    "Maximum length {} is below minimum length {}",
                    policy.maximum_length, policy.minimum_length
                ),
            ));
        }
        Ok(())
    }

    pub fn apply_policy(&self) -> bool {
        self.apply_policy
    }

    pub fn encrypt_password(&self) -> bool {
        self.encrypt_password
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    pub fn store_timeout(&self) -> Duration {
        self.store_timeout
    }
}
