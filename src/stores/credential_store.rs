use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::errors::StoreError;

/// Decision reported by a credential store for a mutating or verifying call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    Success,
    /// Password, security answer or expiry check did not pass
    InvalidCredentials,
    UserNotFound,
}

/// Persistence and comparison backend for login credentials
///
/// Owns the credential records; the password manager never holds them.
/// Passwords arrive here already secured by the configured `PasswordCipher`
/// except for `authenticate_user`, which receives the candidate as typed.
/// Because the cipher is randomized, implementations must compare secured
/// values by revealing them with the same cipher rather than byte-for-byte.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Check a login and clear-text password
    ///
    /// `expires_in_days` is `None` when expiry is not enforced; otherwise a
    /// password older than that many days must not authenticate.
    async fn authenticate_user(
        &self,
        log_on_name: &str,
        password: &str,
        expires_in_days: Option<u32>,
    ) -> Result<StoreStatus, StoreError>;

    /// Verify the security answer and, in the same step, replace the password
    async fn forgot_password(
        &self,
        log_on_name: &str,
        security_question: &str,
        security_answer: &str,
        new_secured_password: &str,
    ) -> Result<StoreStatus, StoreError>;

    /// Verify the current password and, in the same step, replace it
    async fn change_password(
        &self,
        log_on_name: &str,
        current_secured_password: &str,
        new_secured_password: &str,
    ) -> Result<StoreStatus, StoreError>;

    /// When the current password was set, `None` if unknown
    async fn password_creation_date(
        &self,
        log_on_name: &str,
    ) -> Result<Option<DateTime<Utc>>, StoreError>;
}
