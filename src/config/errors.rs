use std::fmt;

/// Failure to resolve the password configuration at startup
///
/// Any of these leaves the process without a defined password policy, so
/// callers are expected to abort initialization rather than continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    MissingSetting { setting_name: String },
    InvalidSetting { setting_name: String, reason: String },
    ParseError { setting_name: String, error: String },
}

impl ApplicationError {
    pub fn missing(setting_name: &str) -> Self {
        Self::MissingSetting {
            setting_name: setting_name.to_string(),
        }
    }

    pub fn invalid(setting_name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            setting_name: setting_name.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the offending setting
    pub fn setting_name(&self) -> &str {
        match self {
            Self::MissingSetting { setting_name }
            | Self::InvalidSetting { setting_name, .. }
            | Self::ParseError { setting_name, .. } => setting_name,
        }
    }
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting { setting_name } => {
                write!(f, "Required setting '{}' is missing", setting_name)
            }
            Self::InvalidSetting { setting_name, reason } => {
                write!(f, "Invalid setting '{}': {}", setting_name, reason)
            }
            Self::ParseError { setting_name, error } => {
                write!(f, "Failed to parse setting '{}': {}", setting_name, error)
            }
        }
    }
}

impl std::error::Error for ApplicationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ApplicationError::missing("PASSWORD_POLICY_MINIMUM_LENGTH").to_string(),
            "Required setting 'PASSWORD_POLICY_MINIMUM_LENGTH' is missing"
        );
        assert_eq!(
            ApplicationError::invalid("ENCRYPTION_KEY", "cannot be empty").to_string(),
            "Invalid setting 'ENCRYPTION_KEY': cannot be empty"
        );
    }

    #[test]
    fn test_setting_name_accessor() {
        let err = ApplicationError::ParseError {
            setting_name: "ENCRYPT_PASSWORD".to_string(),
            error: "bad".to_string(),
        };
        assert_eq!(err.setting_name(), "ENCRYPT_PASSWORD");
    }
}
