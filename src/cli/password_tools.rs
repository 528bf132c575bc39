use serde::Serialize;

use crate::app_data::AppData;
use crate::errors::PasswordError;
use crate::providers::{HashAlgorithm, HashProvider};
use crate::types::PolicyViolation;

/// JSON report printed by `check`
#[derive(Debug, Serialize)]
pub struct PolicyReport {
    pub policy_applied: bool,
    pub conforms: bool,
    pub violations: Vec<PolicyViolation>,
}

pub fn hash_value(value: &str, sha256: bool) -> Result<String, PasswordError> {
    let algorithm = if sha256 { HashAlgorithm::Sha256 } else { HashAlgorithm::Sha1 };
    HashProvider::with_algorithm(algorithm).generate_hash(value)
}

/// Build the policy report for `password`
pub fn policy_report(password: &str, app_data: &AppData) -> Result<PolicyReport, PasswordError> {
    PasswordError::require_non_empty("password", password)?;

    let violations = app_data.policy_provider.policy_violations(password);
    Ok(PolicyReport {
        policy_applied: app_data.policy_provider.is_applied(),
        conforms: violations.is_empty(),
        violations,
    })
}

pub fn check_password(password: &str, app_data: &AppData) -> Result<String, Box<dyn std::error::Error>> {
    let report = policy_report(password, app_data)?;
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn generate_password(app_data: &AppData) -> Result<String, PasswordError> {
    app_data.policy_provider.generate_new_password()
}

pub fn secure_password(password: &str, app_data: &AppData) -> Result<String, PasswordError> {
    app_data.cipher.secure_password(password)
}

pub fn reveal_password(secured: &str, app_data: &AppData) -> Result<String, PasswordError> {
    app_data.cipher.reveal_password(secured)
}
