// Stores layer - Credential persistence seam
pub mod credential_store;
pub mod in_memory_credential_store;

pub use credential_store::{CredentialStore, StoreStatus};
pub use in_memory_credential_store::InMemoryCredentialStore;
