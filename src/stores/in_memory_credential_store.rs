use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use crate::errors::StoreError;
use crate::providers::PasswordCipher;
use crate::stores::{CredentialStore, StoreStatus};
use crate::types::CredentialRecord;

/// CredentialStore kept in process memory
///
/// Useful for tests, tooling and single-node deployments. Secured values are
/// compared after revealing them with the shared cipher.
pub struct InMemoryCredentialStore {
    cipher: Arc<PasswordCipher>,
    records: RwLock<HashMap<String, CredentialRecord>>,
}

impl InMemoryCredentialStore {
    pub fn new(cipher: Arc<PasswordCipher>) -> Self {
        Self {
            cipher,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Insert or replace the record for `record.login_name`
    pub async fn upsert(&self, record: CredentialRecord) {
        let mut records = self.records.write().await;
        records.insert(record.login_name.clone(), record);
    }

    /// Fetch a copy of a stored record
    pub async fn get(&self, log_on_name: &str) -> Option<CredentialRecord> {
        self.records.read().await.get(log_on_name).cloned()
    }

    fn reveal(&self, operation: &'static str, secured: &str) -> Result<String, StoreError> {
        self.cipher
            .reveal_password(secured)
            .map_err(|e| StoreError::operation_from_error(operation, e))
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn authenticate_user(
        &self,
        log_on_name: &str,
        password: &str,
        expires_in_days: Option<u32>,
    ) -> Result<StoreStatus, StoreError> {
        let records = self.records.read().await;
        let Some(record) = records.get(log_on_name) else {
            return Ok(StoreStatus::UserNotFound);
        };

        if self.reveal("authenticate_user", &record.secured_password)? != password {
            return Ok(StoreStatus::InvalidCredentials);
        }

        if let Some(days) = expires_in_days {
            let expires_at = record.password_created_at + Duration::days(i64::from(days));
            if expires_at <= Utc::now() {
                tracing::debug!(log_on_name, "Password expired");
                return Ok(StoreStatus::InvalidCredentials);
            }
        }

        Ok(StoreStatus::Success)
    }

    async fn forgot_password(
        &self,
        log_on_name: &str,
        security_question: &str,
        security_answer: &str,
        new_secured_password: &str,
    ) -> Result<StoreStatus, StoreError> {
        let mut records = self.records.write().await;
        let Some(record) = records.get_mut(log_on_name) else {
            return Ok(StoreStatus::UserNotFound);
        };

        let answer_matches = record.security_answer.trim().to_lowercase() == security_answer.trim().to_lowercase();
        if record.security_question != security_question || !answer_matches {
            return Ok(StoreStatus::InvalidCredentials);
        }

        record.secured_password = new_secured_password.to_string();
        record.password_created_at = Utc::now();
        Ok(StoreStatus::Success)
    }

    async fn change_password(
        &self,
        log_on_name: &str,
        current_secured_password: &str,
        new_secured_password: &str,
    ) -> Result<StoreStatus, StoreError> {
        let mut records = self.records.write().await;
        let Some(record) = records.get_mut(log_on_name) else {
            return Ok(StoreStatus::UserNotFound);
        };

        let stored = self.reveal("change_password", &record.secured_password)?;
        let supplied = self.reveal("change_password", current_secured_password)?;
        if stored != supplied {
            return Ok(StoreStatus::InvalidCredentials);
        }

        record.secured_password = new_secured_password.to_string();
        record.password_created_at = Utc::now();
        Ok(StoreStatus::Success)
    }

    async fn password_creation_date(
        &self,
        log_on_name: &str,
    ) -> Result<Option<DateTime<Utc>>, StoreError> {
        Ok(self.records.read().await.get(log_on_name).map(|r| r.password_created_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn create_test_store(cipher: PasswordCipher) -> InMemoryCredentialStore {
        let cipher = Arc::new(cipher);
        let store = InMemoryCredentialStore::new(cipher.clone());
        let secured = cipher.secure_password("Orig#pass1").unwrap();
        store
            .upsert(CredentialRecord::new("alice", secured, "First pet?", "Rex"))
            .await;
        store
    }

    #[tokio::test]
    async fn test_authenticate_user() {
        let store = create_test_store(PasswordCipher::disabled()).await;

        assert_eq!(store.authenticate_user("alice", "Orig#pass1", None).await.unwrap(), StoreStatus::Success);
        assert_eq!(
            store.authenticate_user("alice", "wrong", None).await.unwrap(),
            StoreStatus::InvalidCredentials
        );
        assert_eq!(
            store.authenticate_user("bob", "Orig#pass1", None).await.unwrap(),
            StoreStatus::UserNotFound
        );
    }

    #[tokio::test]
    async fn test_authenticate_rejects_expired_password() {
        let store = create_test_store(PasswordCipher::disabled()).await;
        let record = store.get("alice").await.unwrap().created_at(Utc::now() - Duration::days(31));
        store.upsert(record).await;

        assert_eq!(
            store.authenticate_user("alice", "Orig#pass1", Some(30)).await.unwrap(),
            StoreStatus::InvalidCredentials
        );
        assert_eq!(
            store.authenticate_user("alice", "Orig#pass1", None).await.unwrap(),
            StoreStatus::Success
        );
    }

    #[tokio::test]
    async fn test_change_password_with_encrypted_values() {
        let cipher = PasswordCipher::encrypted("store-test-passphrase").unwrap();
        let store = create_test_store(cipher.clone()).await;

        let current = cipher.secure_password("Orig#pass1").unwrap();
        let new = cipher.secure_password("New#pass22").unwrap();
        assert_eq!(store.change_password("alice", &current, &new).await.unwrap(), StoreStatus::Success);
        assert_eq!(
            store.authenticate_user("alice", "New#pass22", None).await.unwrap(),
            StoreStatus::Success
        );

        let stale = cipher.secure_password("Orig#pass1").unwrap();
        assert_eq!(
            store.change_password("alice", &stale, &new).await.unwrap(),
            StoreStatus::InvalidCredentials
        );
    }

    #[tokio::test]
    async fn test_forgot_password_checks_question_and_answer() {
        let store = create_test_store(PasswordCipher::disabled()).await;

        assert_eq!(
            store.forgot_password("alice", "First pet?", "Fido", "Reset#1ab").await.unwrap(),
            StoreStatus::InvalidCredentials
        );
        assert_eq!(
            store.forgot_password("alice", "First car?", "Rex", "Reset#1ab").await.unwrap(),
            StoreStatus::InvalidCredentials
        );
        assert_eq!(
            store.forgot_password("alice", "First pet?", " rex ", "Reset#1ab").await.unwrap(),
            StoreStatus::Success
        );
        assert_eq!(store.get("alice").await.unwrap().secured_password, "Reset#1ab");
    }

    #[tokio::test]
    async fn test_password_creation_date() {
        let store = create_test_store(PasswordCipher::disabled()).await;

        assert!(store.password_creation_date("alice").await.unwrap().is_some());
        assert!(store.password_creation_date("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_undecryptable_record_is_store_error() {
        let cipher = PasswordCipher::encrypted("store-test-passphrase").unwrap();
        let store = InMemoryCredentialStore::new(Arc::new(cipher));
        store
            .upsert(CredentialRecord::new("carol", "plain-text-not-encrypted", "Q", "A"))
            .await;

        assert!(matches!(
            store.authenticate_user("carol", "whatever", None).await,
            Err(StoreError::Operation { operation: "authenticate_user", .. })
        ));
    }
}
