//! Status: where a data-producing operation currently stands.
//!
//! The set of variants is closed. Callers are expected to `match` on it
//! exhaustively; no wildcard arm is ever needed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle tag of a [`StateEnvelope`](super::envelope::StateEnvelope).
///
/// Serialized as SCREAMING_SNAKE_CASE: SUCCESS / ERROR / LOADING / NO_RESULTS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Finished and produced data.
    Success,
    /// Finished with a failure.
    Error,
    /// Not finished yet.
    #[default]
    Loading,
    /// Finished without producing anything.
    NoResults,
}

impl Status {
    /// Every variant, in declaration order.
    pub const ALL: [Status; 4] = [
        Status::Success,
        Status::Error,
        Status::Loading,
        Status::NoResults,
    ];

    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    pub fn is_error(self) -> bool {
        matches!(self, Status::Error)
    }

    pub fn is_loading(self) -> bool {
        matches!(self, Status::Loading)
    }

    pub fn is_no_results(self) -> bool {
        matches!(self, Status::NoResults)
    }

    /// `true` for every status except `Loading`.
    pub fn is_settled(self) -> bool {
        !self.is_loading()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "SUCCESS",
            Status::Error => "ERROR",
            Status::Loading => "LOADING",
            Status::NoResults => "NO_RESULTS",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
