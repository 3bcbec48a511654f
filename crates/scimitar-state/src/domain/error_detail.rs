//! ErrorDetail: the underlying cause attached to an `Error` state.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ErrorMessage;

/// Shared, thread-safe failure cause.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Wraps exactly one failure cause.
///
/// Two details are equal when they wrap the same cause value (pointer
/// identity), not when their messages happen to match.
#[derive(Clone)]
pub struct ErrorDetail {
    cause: Cause,
}

impl ErrorDetail {
    pub fn new<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            cause: Arc::new(cause),
        }
    }

    /// Wraps a cause that is already shared elsewhere.
    pub fn from_shared(cause: Cause) -> Self {
        Self { cause }
    }

    /// Shorthand for a cause that is only a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(ErrorMessage::new(message))
    }

    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    pub fn shared_cause(&self) -> &Cause {
        &self.cause
    }

    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.cause.downcast_ref::<E>()
    }
}

impl<E> From<E> for ErrorDetail
where
    E: Error + Send + Sync + 'static,
{
    fn from(cause: E) -> Self {
        Self::new(cause)
    }
}

impl PartialEq for ErrorDetail {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.cause, &other.cause)
    }
}

impl Eq for ErrorDetail {}

impl fmt::Debug for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorDetail")
            .field("cause", &self.cause)
            .finish()
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cause, f)
    }
}

// Only the message crosses the wire; the concrete cause type does not.
impl Serialize for ErrorDetail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.cause)
    }
}

impl<'de> Deserialize<'de> for ErrorDetail {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let message = String::deserialize(deserializer)?;
        Ok(Self::msg(message))
    }
}
