use serde::Serialize;

/// Characters that satisfy the special-character rule
pub const SPECIAL_CHARACTERS: &str = r#"~`!@#$%^&*()_-+={[}]|\:;"'<,>.?/"#;

/// Minimum length used when the password policy is not applied
pub const FALLBACK_MINIMUM_LENGTH: usize = 8;

pub const MIN_EXPIRES_IN_DAYS: u32 = 7;
pub const MAX_EXPIRES_IN_DAYS: u32 = 100;
pub const MIN_MINIMUM_LENGTH: usize = 6;
pub const MAX_MAXIMUM_LENGTH: usize = 100;

/// The active password rules
///
/// Built once from configuration and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// `None` means passwords never expire
    pub expires_in_days: Option<u32>,
    pub minimum_length: usize,
    pub maximum_length: usize,
    pub must_start_with_alphabet: bool,
    pub must_contain_digit: bool,
    pub must_contain_special_character: bool,
}

impl PasswordPolicy {
    /// Policy in effect when rules are switched off
    pub fn unrestricted() -> Self {
        Self {
            expires_in_days: None,
            minimum_length: FALLBACK_MINIMUM_LENGTH,
            maximum_length: MAX_MAXIMUM_LENGTH,
            must_start_with_alphabet: false,
            must_contain_digit: false,
            must_contain_special_character: false,
        }
    }

    /// Every rule this policy imposes that `password` breaks, in rule order
    pub fn violations(&self, password: &str) -> Vec<PolicyViolation> {
        let mut violations = Vec::new();
        let length = password.chars().count();

        if length < self.minimum_length {
            violations.push(PolicyViolation::TooShort { minimum: self.minimum_length });
        }
        if length > self.maximum_length {
            violations.push(PolicyViolation::TooLong { maximum: self.maximum_length });
        }
        if self.must_contain_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            violations.push(PolicyViolation::MissingDigit);
        }
        if self.must_contain_special_character && !password.chars().any(is_special_character) {
            violations.push(PolicyViolation::MissingSpecialCharacter);
        }
        if self.must_start_with_alphabet
            && !password.chars().next().is_some_and(char::is_alphabetic)
        {
            violations.push(PolicyViolation::MustStartWithAlphabet);
        }

        violations
    }
}

pub fn is_special_character(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// A single broken password rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum PolicyViolation {
    #[error("Password must be at least {minimum} characters")]
    TooShort { minimum: usize },

    #[error("Password must not exceed {maximum} characters")]
    TooLong { maximum: usize },

    #[error("Password must contain a digit")]
    MissingDigit,

    #[error("Password must contain a special character")]
    MissingSpecialCharacter,

    #[error("Password must start with a letter")]
    MustStartWithAlphabet,
}
