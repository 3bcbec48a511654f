//! scimitar-state
//!
//! A generic snapshot of an asynchronous fetch: payload, lifecycle status and
//! an optional failure cause.
//!
//! - **domain**: `Status`, `ErrorDetail`, `StateEnvelope<T>`
//! - **ports**: `StateObserver<T>` callbacks selected by status
//! - **error**: the crate's own message-only cause type

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{Cause, ErrorDetail, StateEnvelope, Status};
pub use error::ErrorMessage;
pub use ports::StateObserver;
