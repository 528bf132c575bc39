use std::sync::Arc;
use rand::Rng;
use crate::config::{ApplicationError, PasswordSettings, POLICY_MINIMUM_LENGTH};
use crate::errors::PasswordError;
use crate::providers::PasswordCipher;
use crate::types::{PasswordPolicy, PolicyViolation, SPECIAL_CHARACTERS};

/// Shortest password the generator can build: a leading letter, a special
/// character and a digit.
const MIN_GENERATED_LENGTH: usize = 3;

/// Password policy provider that evaluates and generates passwords
///
/// Holds the policy resolved at startup together with the cipher needed to
/// look through secured passwords.
pub struct PasswordPolicyProvider {
    settings: Arc<PasswordSettings>,
    cipher: Arc<PasswordCipher>,
}

impl PasswordPolicyProvider {
    pub fn new(settings: Arc<PasswordSettings>, cipher: Arc<PasswordCipher>) -> Self {
        Self { settings, cipher }
    }

    pub fn policy(&self) -> &PasswordPolicy {
        self.settings.policy()
    }

    /// Whether the policy rules are enforced at all
    pub fn is_applied(&self) -> bool {
        self.settings.apply_policy()
    }

    /// Check a secured password against the active policy
    ///
    /// Always `true` when the policy is not applied. Otherwise the password
    /// is revealed and must satisfy every enabled rule.
    ///
    /// # Errors
    /// * `InvalidArgument` - `secured_password` is empty
    /// * `Crypto` - the secured value could not be decrypted
    pub fn check_policy_conformance(&self, secured_password: &str) -> Result<bool, PasswordError> {
        PasswordError::require_non_empty("secured_password", secured_password)?;

        if !self.is_applied() {
            return Ok(true);
        }

        let plain = self.cipher.reveal_password(secured_password)?;
        Ok(self.policy_violations(&plain).is_empty())
    }

    /// Rules a clear-text password breaks, empty when the policy is not applied
    pub fn policy_violations(&self, plain_password: &str) -> Vec<PolicyViolation> {
        if !self.is_applied() {
            return Vec::new();
        }
        self.policy().violations(plain_password)
    }

    /// Generate a random password of exactly the policy's minimum length
    ///
    /// The first character is an uppercase letter, the rest are lowercase
    /// letters except one digit and one special character placed at
    /// distinct random positions.
    pub fn generate_new_password(&self) -> Result<String, PasswordError> {
        Ok(generate_password(self.policy().minimum_length)?)
    }
}

fn generate_password(length: usize) -> Result<String, ApplicationError> {
    if length < MIN_GENERATED_LENGTH {
        return Err(ApplicationError::invalid(
            POLICY_MINIMUM_LENGTH,
            format!("Generated passwords need at least {} characters", MIN_GENERATED_LENGTH),
        ));
    }

    let mut rng = rand::rng();
    let mut chars: Vec<char> = Vec::with_capacity(length);
    chars.push(rng.random_range(b'A'..=b'Z') as char);
    chars.extend((1..length).map(|_| rng.random_range(b'a'..=b'z') as char));

    // Two distinct slots among positions 1..length
    let slots = length - 1;
    let digit_pos = rng.random_range(1..length);
    let special_pos = 1 + (digit_pos - 1 + rng.random_range(1..slots)) % slots;

    let specials = SPECIAL_CHARACTERS.as_bytes();
    chars[digit_pos] = rng.random_range(b'0'..=b'9') as char;
    chars[special_pos] = specials[rng.random_range(0..specials.len())] as char;

    Ok(chars.into_iter().collect())
}
