//! StateEnvelope: an immutable snapshot of "some operation producing `T`".
//!
//! The envelope does not know how its state was produced and does not
//! enforce transitions. `status` and `error` are set independently, so
//! combinations like `Success` with an error attached are representable.
//! Moving from one state to the next means building a new envelope.

use serde::{Deserialize, Serialize};

use super::error_detail::ErrorDetail;
use super::status::Status;
use crate::ports::observer::StateObserver;

/// Payload + status + optional error detail.
///
/// ```
/// use scimitar_state::{StateEnvelope, Status};
///
/// let loading = StateEnvelope::new(Vec::<String>::new());
/// let done = loading
///     .clone()
///     .with_data(vec!["ada".to_string()])
///     .with_status(Status::Success);
///
/// assert_eq!(loading.status(), Status::Loading);
/// assert_eq!(done.status(), Status::Success);
/// assert_eq!(done.data().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateEnvelope<T> {
    data: T,

    #[serde(default)]
    status: Status,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<ErrorDetail>,
}

impl<T> StateEnvelope<T> {
    /// `Loading`, no error.
    pub fn new(data: T) -> Self {
        Self::from_parts(data, Status::default(), None)
    }

    /// Accepts any combination; nothing is validated.
    pub fn from_parts(data: T, status: Status, error: Option<ErrorDetail>) -> Self {
        Self {
            data,
            status,
            error,
        }
    }

    pub fn loading(data: T) -> Self {
        Self::from_parts(data, Status::Loading, None)
    }

    pub fn success(data: T) -> Self {
        Self::from_parts(data, Status::Success, None)
    }

    pub fn no_results(data: T) -> Self {
        Self::from_parts(data, Status::NoResults, None)
    }

    pub fn error(data: T, error: impl Into<ErrorDetail>) -> Self {
        Self::from_parts(data, Status::Error, Some(error.into()))
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn error_detail(&self) -> Option<&ErrorDetail> {
        self.error.as_ref()
    }

    pub fn into_data(self) -> T {
        self.data
    }

    pub fn into_parts(self) -> (T, Status, Option<ErrorDetail>) {
        (self.data, self.status, self.error)
    }

    pub fn with_data(self, data: T) -> Self {
        Self { data, ..self }
    }

    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    pub fn with_error(self, error: impl Into<ErrorDetail>) -> Self {
        Self {
            error: Some(error.into()),
            ..self
        }
    }

    pub fn without_error(self) -> Self {
        Self { error: None, ..self }
    }

    pub fn as_ref(&self) -> StateEnvelope<&T> {
        StateEnvelope {
            data: &self.data,
            status: self.status,
            error: self.error.clone(),
        }
    }

    /// Transforms the payload; status and error are kept as-is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> StateEnvelope<U> {
        StateEnvelope {
            data: f(self.data),
            status: self.status,
            error: self.error,
        }
    }

    /// `Err` only for an `Error` status that carries a detail. Every other
    /// combination yields the payload, including `Error` with no detail:
    /// there is no cause to return, so that case is `Ok(data)` and callers
    /// who need to tell it apart must check [`status`](Self::status) first.
    pub fn into_result(self) -> Result<T, ErrorDetail> {
        match (self.status, self.error) {
            (Status::Error, Some(error)) => Err(error),
            _ => Ok(self.data),
        }
    }

    /// Whether `error` is present exactly when `status` is `Error`.
    ///
    /// Purely informational: inconsistent envelopes are still valid values.
    pub fn is_consistent(&self) -> bool {
        self.status.is_error() == self.error.is_some()
    }

    /// Calls the one observer callback selected by `status`.
    pub fn dispatch<O>(&self, observer: &mut O)
    where
        O: StateObserver<T> + ?Sized,
    {
        tracing::debug!(status = %self.status, has_error = self.error.is_some(), "dispatching state");
        match self.status {
            Status::Loading => observer.on_loading(&self.data),
            Status::Success => observer.on_success(&self.data),
            Status::Error => observer.on_error(self.error.as_ref(), &self.data),
            Status::NoResults => observer.on_no_results(&self.data),
        }
    }
}

impl<T: Default> Default for StateEnvelope<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
