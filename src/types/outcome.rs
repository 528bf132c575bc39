use serde::Serialize;
use crate::types::PolicyViolation;

/// Result of a credential operation that reached a decision
///
/// Store and cipher failures are reported separately as `PasswordError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordOutcome<T = ()> {
    Success(T),
    InvalidCredentials,
    PolicyViolation(Vec<PolicyViolation>),
    UserNotFound,
}

impl<T> PasswordOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The success value, if any
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }
}

/// Remaining lifetime of a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordExpiry {
    /// Expiry is not enforced
    Never,
    /// Whole days left; zero or negative once expired
    InDays(i64),
}

impl PasswordExpiry {
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::InDays(days) if *days <= 0)
    }
}
