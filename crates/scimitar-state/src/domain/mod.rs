//! Domain model (status, error detail, state envelope).

pub mod envelope;
pub mod error_detail;
pub mod status;

pub use envelope::StateEnvelope;
pub use error_detail::{Cause, ErrorDetail};
pub use status::Status;
