// Types layer - Password data structures
pub mod credential;
pub mod outcome;
pub mod policy;

pub use credential::CredentialRecord;
pub use outcome::{PasswordExpiry, PasswordOutcome};
pub use policy::{
    is_special_character, PasswordPolicy, PolicyViolation, FALLBACK_MINIMUM_LENGTH,
    MAX_EXPIRES_IN_DAYS, MAX_MAXIMUM_LENGTH, MIN_EXPIRES_IN_DAYS, MIN_MINIMUM_LENGTH,
    SPECIAL_CHARACTERS,
};
