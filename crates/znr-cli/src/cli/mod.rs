//! CLI argument parsing and report orchestration.

pub mod args;
pub mod commands;

use anyhow::{Context as _, Result};
use args::Cli;
use clap::Parser;
use dynect_client::{DynClient, DynError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config;
use crate::output;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run_with(cli).await
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings, or debug with `-v`.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "znr_cli=debug,dynect_client=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run a parsed command line: log in, produce the report, log out.
///
/// The session is closed exactly once whether or not the report succeeded.
/// A failed logout is only logged; it never replaces the report's outcome.
pub async fn run_with(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let credentials = config::load(cli.config.as_deref())?;

    let client = DynClient::builder()
        .base_url(cli.api_url.as_str())
        .poll(cli.poll_config())
        .build()
        .context("Invalid API configuration")?;

    let session = client
        .session()
        .login(&credentials)
        .await
        .map_err(report_api_error)
        .context("Login failed")?;
    info!(customer = %credentials.customer_name, user = %credentials.user_name, "logged in");

    let ctx = commands::Context::from(&cli);
    let outcome = commands::report::execute(&ctx, &session)
        .await
        .map_err(|e| {
            if let Some(api) = e.downcast_ref::<DynError>() {
                output::print_api_messages(api.messages());
            }
            e
        });

    if let Err(e) = session.logout().await {
        output::print_api_messages(e.messages());
        warn!(error = %e, "logout failed");
    }

    outcome
}

/// Print the API's messages for an error before it is propagated.
fn report_api_error(err: DynError) -> DynError {
    output::print_api_messages(err.messages());
    err
}
