use std::sync::Arc;
use crate::config::errors::ApplicationError;
use crate::config::EnvironmentProvider;

/// Where a resolved setting came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
}

#[derive(Debug, Clone)]
pub struct ConfigValue {
    pub value: String,
    pub source: ConfigValueSource,
}

/// Configuration specification with environment variable → default priority
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    pub env_var: Option<String>,
    pub default_value: Option<String>,
    pub required: bool,
    pub validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_var: None,
            default_value: None,
            required: false,
            validator: None,
        }
    }

    pub fn env_var(mut self, name: &str) -> Self {
        self.env_var = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    fn setting_name(&self) -> &str {
        self.env_var.as_deref().unwrap_or("unknown_setting")
    }

    /// Resolve the setting, validating whichever value wins
    ///
    /// Returns `Ok(None)` only for optional settings with no value and no default.
    pub fn load(&self) -> Result<Option<ConfigValue>, ApplicationError> {
        if let Some(name) = &self.env_var {
            if let Some(value) = self.env_provider.get_var(name) {
                self.validate_value(&value, name)?;
                return Ok(Some(ConfigValue {
                    value,
                    source: ConfigValueSource::EnvironmentVariable { name: name.clone() },
                }));
            }
        }

        if let Some(default) = &self.default_value {
            self.validate_value(default, self.setting_name())?;
            return Ok(Some(ConfigValue {
                value: default.clone(),
                source: ConfigValueSource::Default,
            }));
        }

        if self.required {
            return Err(ApplicationError::missing(self.setting_name()));
        }

        Ok(None)
    }

    /// Resolve a setting that must produce a value
    pub fn load_required(&self) -> Result<String, ApplicationError> {
        self.load()?
            .map(|v| v.value)
            .ok_or_else(|| ApplicationError::missing(self.setting_name()))
    }

    /// Resolve and parse a boolean setting
    pub fn load_bool(&self) -> Result<bool, ApplicationError> {
        let value = self.load_required()?;
        Self::parse_bool(&value, self.setting_name())
    }

    /// Resolve and parse an integer setting
    pub fn load_integer(&self) -> Result<i64, ApplicationError> {
        let value = self.load_required()?;
        Self::parse_integer(&value, self.setting_name())
    }

    /// Validate a setting value according to the ConfigSpec rules
    pub fn validate_value(&self, value: &str, setting_name: &str) -> Result<(), ApplicationError> {
        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ApplicationError::invalid(setting_name, reason))?;
        }

        Ok(())
    }
}

/// Type parsing utilities for configuration values
impl ConfigSpec {
    /// Parse a boolean value from string
    ///
    /// Supports various boolean representations:
    /// - true: "true", "1", "yes", "on", "enabled" (case insensitive)
    /// - false: "false", "0", "no", "off", "disabled" (case insensitive)
    pub fn parse_bool(value: &str, setting_name: &str) -> Result<bool, ApplicationError> {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" | "enabled" => Ok(true),
            "false" | "0" | "no" | "off" | "disabled" => Ok(false),
            _ => Err(ApplicationError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!(
                    "Expected boolean value, got '{}'. Valid values: true/false, 1/0, yes/no, on/off, enabled/disabled",
                    value
                ),
            }),
        }
    }

    pub fn parse_integer(value: &str, setting_name: &str) -> Result<i64, ApplicationError> {
        value.trim().parse::<i64>()
            .map_err(|e| ApplicationError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!("Expected integer, got '{}': {}", value, e),
            })
    }

    /// Validate an integer value is within the specified range (inclusive)
    pub fn validate_integer_range(value: &str, min: i64, max: i64) -> Result<(), String> {
        let parsed = value.trim().parse::<i64>()
            .map_err(|_| format!("Expected integer between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Value {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }
}
