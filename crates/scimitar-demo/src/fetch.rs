use std::time::Duration;

use async_trait::async_trait;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::sleep;

use scimitar_state::{ErrorDetail, StateEnvelope};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("server returned status {0}")]
    Server(u16),
}

/// Source of users; the demo only ships a simulated one.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self) -> Result<Vec<User>, FetchError>;
}

/// Which way the simulated request ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    Success,
    Empty,
    /// The request times out.
    Error,
    /// The server answers 503.
    ServerError,
}

pub struct SimulatedFetcher {
    scenario: Scenario,
    delay: Duration,
}

impl SimulatedFetcher {
    pub fn new(scenario: Scenario, delay: Duration) -> Self {
        Self { scenario, delay }
    }
}

#[async_trait]
impl Fetcher for SimulatedFetcher {
    async fn fetch(&self) -> Result<Vec<User>, FetchError> {
        sleep(self.delay).await;
        match self.scenario {
            Scenario::Success => Ok(vec![
                User {
                    id: 1,
                    name: "ada".to_string(),
                },
                User {
                    id: 2,
                    name: "grace".to_string(),
                },
            ]),
            Scenario::Empty => Ok(Vec::new()),
            Scenario::Error => Err(FetchError::Timeout(self.delay)),
            Scenario::ServerError => Err(FetchError::Server(503)),
        }
    }
}

/// Runs one fetch, handing every snapshot to `publish` as soon as it exists.
///
/// An empty result settles as `NoResults`, a failure as `Error` with the
/// fetch error as cause. The payload is an empty list whenever there is
/// nothing to show.
pub async fn run_lifecycle<F, P>(fetcher: &F, mut publish: P)
where
    F: Fetcher + ?Sized,
    P: FnMut(StateEnvelope<Vec<User>>),
{
    publish(StateEnvelope::loading(Vec::new()));

    let settled = match fetcher.fetch().await {
        Ok(users) if users.is_empty() => StateEnvelope::no_results(users),
        Ok(users) => StateEnvelope::success(users),
        Err(e) => {
            tracing::warn!(error = %e, "fetch failed");
            StateEnvelope::error(Vec::new(), ErrorDetail::new(e))
        }
    };
    publish(settled);
}
