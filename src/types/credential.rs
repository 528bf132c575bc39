use chrono::{DateTime, Utc};

/// A stored login as kept by a credential store
///
/// The password field always holds the secured form.
#[derive(Clone)]
pub struct CredentialRecord {
    pub login_name: String,
    pub secured_password: String,
    pub password_created_at: DateTime<Utc>,
    pub security_question: String,
    pub security_answer: String,
}

impl CredentialRecord {
    pub fn new(
        login_name: impl Into<String>,
        secured_password: impl Into<String>,
        security_question: impl Into<String>,
        security_answer: impl Into<String>,
    ) -> Self {
        Self {
            login_name: login_name.into(),
            secured_password: secured_password.into(),
            password_created_at: Utc::now(),
            security_question: security_question.into(),
            security_answer: security_answer.into(),
        }
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.password_created_at = created_at;
        self
    }
}

impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("login_name", &self.login_name)
            .field("secured_password", &"<redacted>")
            .field("password_created_at", &self.password_created_at)
            .field("security_question", &self.security_question)
            .field("security_answer", &"<redacted>")
            .finish()
    }
}
