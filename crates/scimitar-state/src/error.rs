use thiserror::Error;

/// A failure cause that only carries a message.
///
/// Used when a cause has to be rebuilt from text, e.g. when an
/// [`ErrorDetail`](crate::domain::ErrorDetail) is deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ErrorMessage {
    message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
