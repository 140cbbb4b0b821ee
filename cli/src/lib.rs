//! contentful-orm command line.
//!
//! `contentful-orm sync` reads schema documents matched by a glob pattern
//! and reconciles the content types they declare with a remote space.

pub mod discovery;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use contentful_orm_sync::config::{
    ACCESS_TOKEN_VAR, DEFAULT_API_BASE_URL, DEFAULT_ENVIRONMENT, ENVIRONMENT_VAR, SPACE_ID_VAR,
};
use contentful_orm_sync::{
    BatchPolicy, ContentfulClient, ContentfulConfig, Credentials, SyncConfig, SyncReport,
    Synchronizer,
};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "contentful-orm")]
#[command(about = "Sync declared content types with Contentful")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create or update content types from schema files
    Sync(SyncArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SyncArgs {
    /// Glob pattern matching schema files (.json, .yaml, .yml)
    #[arg(short, long, default_value = "schemas/**/*.yaml")]
    pub path: String,

    /// Contentful environment
    #[arg(short, long, env = ENVIRONMENT_VAR, default_value = DEFAULT_ENVIRONMENT)]
    pub environment: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Space id
    #[arg(long, env = SPACE_ID_VAR, hide_env_values = true)]
    pub space_id: Option<String>,

    /// Content Management API token
    #[arg(long, env = ACCESS_TOKEN_VAR, hide_env_values = true)]
    pub access_token: Option<String>,

    /// Print the payloads that would be sent without calling the API
    #[arg(long)]
    pub dry_run: bool,

    /// Keep going after an entity fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Content Management API base URL
    #[arg(long, env = "CONTENTFUL_API_BASE_URL", default_value = DEFAULT_API_BASE_URL, hide = true)]
    pub api_base_url: String,
}

/// Runs `sync`. Payloads are written to `out` in dry-run mode.
///
/// Credentials are checked before any schema file is read.
pub async fn run_sync<W: Write>(args: &SyncArgs, out: &mut W) -> Result<SyncReport> {
    let credentials = Credentials::resolve(args.space_id.clone(), args.access_token.clone())?;

    let files = discovery::discover_files(&args.path)?;
    info!("Found {} schema files matching {}", files.len(), args.path);
    let registry = Arc::new(discovery::load_registry(&files)?);

    let request_timeout = Duration::from_secs(args.timeout);
    let config = ContentfulConfig::new(credentials)
        .with_environment(&args.environment)
        .with_api_base_url(&args.api_base_url);
    let client =
        ContentfulClient::new(config, request_timeout).context("Failed to create HTTP client")?;

    let policy = if args.continue_on_error {
        BatchPolicy::ContinueOnError
    } else {
        BatchPolicy::FailFast
    };
    let sync_config = SyncConfig::default()
        .with_request_timeout(request_timeout)
        .with_batch_policy(policy);
    let synchronizer = Synchronizer::new(client, Arc::clone(&registry), sync_config);

    if args.dry_run {
        for entity in registry.sync_candidates() {
            let payload = synchronizer.preview(entity)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
        }
        return Ok(SyncReport::default());
    }

    let report = synchronizer.sync_registry().await?;
    if report.is_success() {
        info!("Sync completed successfully!");
    }
    Ok(report)
}
