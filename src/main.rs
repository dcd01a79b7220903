use std::process::ExitCode;

use clap::Parser;
use heartcheck::api::TransportError;
use heartcheck::api::http::HttpBackend;
use heartcheck::config::{ClientConfig, ConfigError};
use heartcheck::forms::FormError;
use heartcheck::navigator::Navigator;
use heartcheck::terminal::Terminal;

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Transport(#[from] TransportError),
    #[error("{0}")]
    Terminal(#[from] FormError),
}

#[derive(Parser, Debug)]
#[command(name = "heartcheck", about = "Heart disease risk prediction client")]
struct Cli {
    /// Backend base URL (overrides `HEART_API_URL`).
    #[arg(long)]
    base_url: Option<String>,

    /// Whole-request timeout in seconds, at least 1 (overrides `HEART_REQUEST_TIMEOUT_SECS`).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    request_timeout_secs: Option<u64>,

    /// Connect timeout in seconds, at least 1 (overrides `HEART_CONNECT_TIMEOUT_SECS`).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    connect_timeout_secs: Option<u64>,

    /// Log verbosity on stderr: error, warn, info, debug or trace.
    #[arg(long, env = "HEART_LOG_LEVEL", default_value = "warn")]
    log_level: tracing::Level,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.log_level)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    if let Some(secs) = cli.request_timeout_secs {
        config.timeouts.request_secs = secs;
    }
    if let Some(secs) = cli.connect_timeout_secs {
        config.timeouts.connect_secs = secs;
    }

    let backend = HttpBackend::from_config(&config)?;
    tracing::info!(base_url = backend.base_url(), "heartcheck starting");

    let mut navigator = Navigator::new(backend);
    let mut terminal = Terminal::new()?;
    heartcheck::app::run(&mut navigator, &mut terminal).await?;
    Ok(())
}
