// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use scholarly_passwords::config::MockEnvironment;
use scholarly_passwords::errors::StoreError;
use scholarly_passwords::stores::{CredentialStore, InMemoryCredentialStore, StoreStatus};
use scholarly_passwords::types::CredentialRecord;
use scholarly_passwords::{AppData, PasswordManager};

pub const TEST_LOGIN: &str = "alice";
pub const TEST_PASSWORD: &str = "Orig#pass1";
pub const TEST_QUESTION: &str = "First pet?";
pub const TEST_ANSWER: &str = "Rex";

/// Environment with every policy rule switched on
pub fn strict_policy_env() -> MockEnvironment {
    MockEnvironment::empty()
        .with_var("APPLY_PASSWORD_POLICY", "true")
        .with_var("PASSWORD_POLICY_EXPIRES_IN_DAYS", "30")
        .with_var("PASSWORD_POLICY_MINIMUM_LENGTH", "8")
        .with_var("PASSWORD_POLICY_MAXIMUM_LENGTH", "20")
        .with_var("PASSWORD_POLICY_START_WITH_ALPHABET", "true")
        .with_var("PASSWORD_POLICY_MUST_CONTAIN_DIGIT", "true")
        .with_var("PASSWORD_POLICY_MUST_CONTAIN_SPECIAL_CHARACTER", "true")
}

/// Add encryption settings to an environment
pub fn with_encryption(env: MockEnvironment) -> MockEnvironment {
    env.with_var("ENCRYPT_PASSWORD", "true")
        .with_var("ENCRYPTION_KEY", "integration-test-passphrase")
}

pub fn create_app_data(env: MockEnvironment) -> AppData {
    AppData::init(Arc::new(env)).expect("Failed to initialize AppData")
}

/// Creates an in-memory store seeded with the test user
pub async fn create_seeded_store(app_data: &AppData) -> Arc<InMemoryCredentialStore> {
    let store = Arc::new(InMemoryCredentialStore::new(app_data.cipher.clone()));
    let secured = app_data
        .cipher
        .secure_password(TEST_PASSWORD)
        .expect("Failed to secure test password");
    store
        .upsert(CredentialRecord::new(TEST_LOGIN, secured, TEST_QUESTION, TEST_ANSWER))
        .await;
    store
}

/// Creates a PasswordManager over a seeded in-memory store
pub async fn create_test_manager(
    env: MockEnvironment,
) -> (PasswordManager, Arc<InMemoryCredentialStore>) {
    let app_data = create_app_data(env);
    let store = create_seeded_store(&app_data).await;
    let manager = PasswordManager::new(&app_data, store.clone());
    (manager, store)
}

/// Store that sleeps before answering
pub struct SlowCredentialStore {
    pub delay: Duration,
}

#[async_trait]
impl CredentialStore for SlowCredentialStore {
    async fn authenticate_user(&self, _: &str, _: &str, _: Option<u32>) -> Result<StoreStatus, StoreError> {
        tokio::time::sleep(self.delay).await;
        Ok(StoreStatus::Success)
    }

    async fn forgot_password(&self, _: &str, _: &str, _: &str, _: &str) -> Result<StoreStatus, StoreError> {
        tokio::time::sleep(self.delay).await;
        Ok(StoreStatus::Success)
    }

    async fn change_password(&self, _: &str, _: &str, _: &str) -> Result<StoreStatus, StoreError> {
        tokio::time::sleep(self.delay).await;
        Ok(StoreStatus::Success)
    }

    async fn password_creation_date(&self, _: &str) -> Result<Option<DateTime<Utc>>, StoreError> {
        tokio::time::sleep(self.delay).await;
        Ok(Some(Utc::now()))
    }
}

/// Store that fails every call and records which operations were attempted
#[derive(Default)]
pub struct FailingCredentialStore {
    pub calls: Mutex<Vec<&'static str>>,
}

impl FailingCredentialStore {
    fn fail(&self, operation: &'static str) -> StoreError {
        self.calls.lock().unwrap().push(operation);
        StoreError::Unavailable(format!("{} refused", operation))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CredentialStore for FailingCredentialStore {
    async fn authenticate_user(&self, _: &str, _: &str, _: Option<u32>) -> Result<StoreStatus, StoreError> {
        Err(self.fail("authenticate_user"))
    }

    async fn forgot_password(&self, _: &str, _: &str, _: &str, _: &str) -> Result<StoreStatus, StoreError> {
        Err(self.fail("forgot_password"))
    }

    async fn change_password(&self, _: &str, _: &str, _: &str) -> Result<StoreStatus, StoreError> {
        Err(self.fail("change_password"))
    }

    async fn password_creation_date(&self, _: &str) -> Result<Option<DateTime<Utc>>, StoreError> {
        Err(self.fail("password_creation_date"))
    }
}

/// Serializes tests that touch the process environment
pub static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

/// Helper to manage environment variables in tests
///
/// Removes the listed variables on creation and drop so tests that read
/// the real process environment stay isolated.
pub struct EnvGuard {
    vars: Vec<String>,
}

impl EnvGuard {
    pub fn new(vars: Vec<&str>) -> Self {
        for var in &vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
        Self {
            vars: vars.into_iter().map(String::from).collect(),
        }
    }

    pub fn set(&self, name: &str, value: &str) {
        unsafe {
            std::env::set_var(name, value);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for var in &self.vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }
}
