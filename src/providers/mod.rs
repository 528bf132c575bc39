// Providers layer - Work performers
//
// Providers hold the password logic that coordinators orchestrate: hashing,
// securing passwords at rest, and policy checks and generation.

pub mod crypto_provider;
pub mod hash_provider;
pub mod password_policy_provider;

pub use crypto_provider::PasswordCipher;
pub use hash_provider::{generate_hash, HashAlgorithm, HashProvider};
pub use password_policy_provider::PasswordPolicyProvider;
