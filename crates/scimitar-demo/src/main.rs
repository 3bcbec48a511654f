use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use scimitar_state::{ErrorDetail, StateObserver};

mod fetch;

use fetch::{Scenario, SimulatedFetcher, User, run_lifecycle};

#[derive(Parser)]
#[command(name = "scimitar-demo")]
#[command(about = "Walks one simulated fetch through its states", long_about = None)]
struct Cli {
    /// How the simulated request ends.
    #[arg(long, value_enum, default_value_t = Scenario::Success)]
    outcome: Scenario,

    /// Simulated request latency.
    #[arg(long, default_value_t = 200)]
    delay_ms: u64,

    /// Print every state as a JSON line.
    #[arg(long)]
    json: bool,
}

/// Logs each state the way a screen would react to it.
struct LogObserver;

impl StateObserver<Vec<User>> for LogObserver {
    fn on_loading(&mut self, _data: &Vec<User>) {
        info!("loading users...");
    }

    fn on_success(&mut self, data: &Vec<User>) {
        let names: Vec<&str> = data.iter().map(|u| u.name.as_str()).collect();
        info!(count = data.len(), ?names, "users loaded");
    }

    fn on_error(&mut self, error: Option<&ErrorDetail>, _data: &Vec<User>) {
        match error {
            Some(e) => warn!(error = %e, "could not load users"),
            None => warn!("could not load users"),
        }
    }

    fn on_no_results(&mut self, _data: &Vec<User>) {
        info!("no users found");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let fetcher = SimulatedFetcher::new(cli.outcome, Duration::from_millis(cli.delay_ms));

    let mut observer = LogObserver;
    run_lifecycle(&fetcher, |state| {
        state.dispatch(&mut observer);
        if cli.json {
            match serde_json::to_string(&state) {
                Ok(line) => println!("{line}"),
                Err(e) => warn!(error = %e, "could not encode state"),
            }
        }
    })
    .await;
    Ok(())
}
