// Library exports for integration tests and embedding applications

pub mod app_data;
pub mod cli;
pub mod config;
pub mod coordinators;
pub mod errors;
pub mod providers;
pub mod stores;
pub mod types;

pub use app_data::AppData;
pub use coordinators::PasswordManager;
pub use errors::PasswordError;
