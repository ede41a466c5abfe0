//! jsonfetch CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use jsonfetch::client::ReqwestClient;
use jsonfetch::fetcher::Fetcher;
use jsonfetch::ArgumentList;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only the report lines. The level
/// comes from `RUST_LOG` when set and defaults to WARN.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jsonfetch=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let client = match ReqwestClient::new() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "HTTP client unavailable");
            let mut stdout = std::io::stdout();
            let _ = writeln!(stdout, "Error initializing HTTP client: {}", e);
            let _ = stdout.flush();
            return ExitCode::from(e.exit_code());
        }
    };

    let args = ArgumentList::from_env();
    let fetcher = Fetcher::new(client);

    match fetcher.run(&args, &mut std::io::stdout().lock()) {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            tracing::error!(error = %e, "failed to write output");
            ExitCode::from(e.exit_code())
        }
    }
}
