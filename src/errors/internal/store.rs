use thiserror::Error;

/// Failure raised by a credential store implementation
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Credential store unavailable: {0}")]
    Unavailable(String),

    #[error("Credential store error: {operation} failed: {message}")]
    Operation {
        operation: &'static str,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },
}

impl StoreError {
    pub fn operation(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Operation {
            operation,
            message: message.into(),
            source: None,
        }
    }

    pub fn operation_from_error<E>(operation: &'static str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Operation {
            operation,
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
