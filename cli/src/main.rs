//! contentful-orm
//!
//! Usage:
//!   contentful-orm sync --path "schemas/**/*.yaml" --environment master
//!
//! Credentials come from `CONTENTFUL_SPACE_ID` and `CONTENTFUL_ACCESS_TOKEN`
//! or the matching flags. A `.env` file in the working directory is read
//! first; variables already set in the environment take precedence.

use clap::Parser;
use contentful_orm_cli::{Cli, Command, run_sync};
use std::process::ExitCode;
use tracing::{Level, error};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let Command::Sync(args) = cli.command;

    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let mut stdout = std::io::stdout();
    match run_sync(&args, &mut stdout).await {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(report) => {
            for (entity, err) in &report.failed {
                error!("Failed to sync {}: {}", entity, err);
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Error during sync: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
