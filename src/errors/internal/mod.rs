pub mod crypto;
pub mod store;

pub use crypto::CryptoError;
pub use store::StoreError;
