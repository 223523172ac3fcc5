use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use weaviate_health_check::cli::Cli;
use weaviate_health_check::{PLUGIN_NAME, run, telemetry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    telemetry::init(cli.log_format);

    let outcome = run(&cli.config()).await;

    writeln!(std::io::stdout().lock(), "{PLUGIN_NAME} {outcome}")?;
    Ok(ExitCode::from(outcome.state.exit_code()))
}
