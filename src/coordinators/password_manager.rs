use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use chrono::{DateTime, Utc};

use crate::app_data::AppData;
use crate::errors::{PasswordError, StoreError};
use crate::providers::{PasswordCipher, PasswordPolicyProvider};
use crate::stores::{CredentialStore, StoreStatus};
use crate::types::{PasswordExpiry, PasswordOutcome};

/// Password manager that orchestrates verification, reset, change and expiry
///
/// Combines the policy provider and cipher with an injected credential
/// store. Every call validates its arguments before touching the cipher or
/// the store, and every store call is bounded by the configured timeout.
pub struct PasswordManager {
    policy_provider: Arc<PasswordPolicyProvider>,
    cipher: Arc<PasswordCipher>,
    credential_store: Arc<dyn CredentialStore>,
    store_timeout: Duration,
}

impl PasswordManager {
    /// Create PasswordManager from AppData and a credential store
    pub fn new(app_data: &AppData, credential_store: Arc<dyn CredentialStore>) -> Self {
        Self::from_parts(
            app_data.policy_provider.clone(),
            app_data.cipher.clone(),
            credential_store,
            app_data.settings.store_timeout(),
        )
    }

    pub fn from_parts(
        policy_provider: Arc<PasswordPolicyProvider>,
        cipher: Arc<PasswordCipher>,
        credential_store: Arc<dyn CredentialStore>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            policy_provider,
            cipher,
            credential_store,
            store_timeout,
        }
    }

    pub fn policy_provider(&self) -> Arc<PasswordPolicyProvider> {
        self.policy_provider.clone()
    }

    /// Verify a login and password
    ///
    /// The store performs the comparison and applies the policy's expiry.
    pub async fn verify_password(
        &self,
        log_on_name: &str,
        password: &str,
    ) -> Result<PasswordOutcome, PasswordError> {
        PasswordError::require_non_empty("log_on_name", log_on_name)?;
        PasswordError::require_non_empty("password", password)?;

        let expires_in_days = self.policy_provider.policy().expires_in_days;
        let status = self
            .call_store(
                "authenticate_user",
                self.credential_store.authenticate_user(log_on_name, password, expires_in_days),
            )
            .await?;

        tracing::debug!(log_on_name, ?status, "Password verification completed");
        Ok(Self::outcome(status, ()))
    }

    /// Reset a forgotten password after checking the security answer
    ///
    /// On success the newly generated clear-text password is returned so it
    /// can be sent to the user.
    pub async fn forgot_password(
        &self,
        log_on_name: &str,
        security_question: &str,
        security_answer: &str,
    ) -> Result<PasswordOutcome<String>, PasswordError> {
        PasswordError::require_non_empty("log_on_name", log_on_name)?;
        PasswordError::require_non_empty("security_question", security_question)?;
        PasswordError::require_non_empty("security_answer", security_answer)?;

        let new_password = self.policy_provider.generate_new_password()?;
        let new_secured = self.cipher.secure_password(&new_password)?;

        let status = self
            .call_store(
                "forgot_password",
                self.credential_store.forgot_password(
                    log_on_name,
                    security_question,
                    security_answer,
                    &new_secured,
                ),
            )
            .await?;

        tracing::info!(log_on_name, ?status, "Forgotten password reset attempted");
        Ok(Self::outcome(status, new_password))
    }

    /// Replace the current password with a new one
    ///
    /// When the policy applies, a non-conforming new password is refused
    /// before the store is contacted.
    pub async fn change_password(
        &self,
        log_on_name: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<PasswordOutcome, PasswordError> {
        PasswordError::require_non_empty("log_on_name", log_on_name)?;
        PasswordError::require_non_empty("current_password", current_password)?;
        PasswordError::require_non_empty("new_password", new_password)?;

        let violations = self.policy_provider.policy_violations(new_password);
        if !violations.is_empty() {
            tracing::info!(log_on_name, count = violations.len(), "New password violates policy");
            return Ok(PasswordOutcome::PolicyViolation(violations));
        }

        let current_secured = self.cipher.secure_password(current_password)?;
        let new_secured = self.cipher.secure_password(new_password)?;

        let status = self
            .call_store(
                "change_password",
                self.credential_store.change_password(log_on_name, &current_secured, &new_secured),
            )
            .await?;

        tracing::info!(log_on_name, ?status, "Password change attempted");
        Ok(Self::outcome(status, ()))
    }

    /// Days until the user's password expires
    ///
    /// * `Some(PasswordExpiry::Never)` - expiry is not enforced
    /// * `None` - the store has no creation date for this login
    /// * `Some(PasswordExpiry::InDays(n))` - whole days left, negative once expired
    pub async fn password_expires_in_days(
        &self,
        log_on_name: &str,
    ) -> Result<Option<PasswordExpiry>, PasswordError> {
        self.password_expires_in_days_at(log_on_name, Utc::now()).await
    }

    /// Same as [`Self::password_expires_in_days`] measured from `now`
    pub async fn password_expires_in_days_at(
        &self,
        log_on_name: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<PasswordExpiry>, PasswordError> {
        PasswordError::require_non_empty("log_on_name", log_on_name)?;

        let expires_in_days = match self.policy_provider.policy().expires_in_days {
            Some(days) if self.policy_provider.is_applied() => days,
            _ => return Ok(Some(PasswordExpiry::Never)),
        };

        let created_at = self
            .call_store(
                "password_creation_date",
                self.credential_store.password_creation_date(log_on_name),
            )
            .await?;

        Ok(created_at.map(|created_at| {
            let remaining = created_at + chrono::Duration::days(i64::from(expires_in_days)) - now;
            PasswordExpiry::InDays(remaining.num_days())
        }))
    }

    /// Secure a password the way it is handed to the store
    pub fn secure_password(&self, password: &str) -> Result<String, PasswordError> {
        self.cipher.secure_password(password)
    }

    /// Undo [`Self::secure_password`]
    pub fn plain_password(&self, secured: &str) -> Result<String, PasswordError> {
        self.cipher.reveal_password(secured)
    }

    async fn call_store<T, F>(&self, operation: &'static str, call: F) -> Result<T, PasswordError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        match tokio::time::timeout(self.store_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::error!(operation, error = %e, "Credential store call failed");
                Err(e.into())
            }
            Err(_) => {
                tracing::warn!(operation, timeout = ?self.store_timeout, "Credential store call timed out");
                Err(PasswordError::StoreTimeout(self.store_timeout))
            }
        }
    }

    fn outcome<T>(status: StoreStatus, value: T) -> PasswordOutcome<T> {
        match status {
            StoreStatus::Success => PasswordOutcome::Success(value),
            StoreStatus::InvalidCredentials => PasswordOutcome::InvalidCredentials,
            StoreStatus::UserNotFound => PasswordOutcome::UserNotFound,
        }
    }
}
