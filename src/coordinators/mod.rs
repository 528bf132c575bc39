// Coordinators layer - Workflow orchestration
//
// Coordinators compose provider operations with the credential store. They
// decide the sequence of steps without holding password logic themselves.

pub mod password_manager;

pub use password_manager::PasswordManager;
