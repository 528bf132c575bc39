// Errors layer - Error type definitions
pub mod internal;
pub mod password;

pub use internal::{CryptoError, StoreError};
pub use password::PasswordError;
