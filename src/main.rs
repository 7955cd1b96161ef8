use blackjack::{Config, ConsolePort, Session};
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr so they never land in the middle of a prompt
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        bankroll = config.bankroll,
        seeded = config.seed.is_some(),
        "Starting blackjack"
    );

    let mut session = Session::new(config.bankroll, config.rng());
    let mut port = ConsolePort::new();

    match session.run(&mut port) {
        Ok(bankroll) => {
            info!(bankroll = bankroll, "Goodbye");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Game aborted");
            ExitCode::FAILURE
        }
    }
}
