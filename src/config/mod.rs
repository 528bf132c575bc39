mod config_spec;
mod env_provider;
mod errors;
mod logging;
mod password_settings;
mod secret_config;
mod secret_manager;

pub use config_spec::{ConfigSpec, ConfigValue, ConfigValueSource};
pub use env_provider::{EnvironmentProvider, MockEnvironment, SystemEnvironment};
pub use errors::ApplicationError;
pub use logging::{init_logging, LoggingConfig, LoggingError};
pub use password_settings::*;
pub use secret_config::{SecretConfig, SecretType};
pub use secret_manager::{SecretError, SecretManager, ENCRYPTION_KEY_MIN_LENGTH, ENCRYPTION_KEY_VAR};
