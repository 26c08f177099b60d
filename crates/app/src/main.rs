mod archive;
mod cli;
mod config;
mod report;
mod wiring;

#[cfg(test)]
mod testing;

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use inbox_digest_core::CoreError;
use inbox_digest_core::render::render;
use inbox_digest_infra::omnivore::{GraphqlTransport, OmnivoreError};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::archive::{ArchiveBatch, PendingArchive, archive_all};
use crate::cli::{Cli, Mode};
use crate::config::{AppConfig, ConfigError};
use crate::wiring::WiringError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid cli: {0}")]
    InvalidCli(#[from] CoreError),
    #[error("wiring error: {0}")]
    Wiring(#[from] WiringError),
    #[error("omnivore error: {0}")]
    Omnivore(#[from] OmnivoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    execute(&cli, AppConfig::from_env, wiring::build_transport, &mut stdout).await
}

/// Runs the command, then drains any detached archive requests so they
/// complete before the runtime shuts down. Archive failures never change the
/// exit code.
async fn execute<C, T, W>(cli: &Cli, load_config: C, make_transport: T, out: &mut W) -> ExitCode
where
    C: FnOnce() -> Result<AppConfig, ConfigError>,
    T: FnOnce(&AppConfig) -> Result<Arc<dyn GraphqlTransport>, WiringError>,
    W: Write,
{
    match run(cli, load_config, make_transport, out).await {
        Ok(pending) => {
            if let Some(pending) = pending {
                pending.finish().await;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "run failed");
            ExitCode::FAILURE
        }
    }
}

/// Configuration is resolved before the transport exists, so a missing
/// credential fails without any request being made.
async fn run<C, T, W>(
    cli: &Cli,
    load_config: C,
    make_transport: T,
    out: &mut W,
) -> Result<Option<PendingArchive>, AppError>
where
    C: FnOnce() -> Result<AppConfig, ConfigError>,
    T: FnOnce(&AppConfig) -> Result<Arc<dyn GraphqlTransport>, WiringError>,
    W: Write,
{
    let config = load_config()?;
    let mode = cli.mode()?;
    let transport = make_transport(&config)?;
    let client = wiring::build_client(&config, transport);

    match mode {
        Mode::Totals { filter, count_only } => {
            let line = report::totals(&client, &filter, count_only).await?;
            writeln!(out, "{line}")?;
        }
        Mode::Digest { detail, archive } => {
            let articles = report::fetch_newsletters(&client).await?;
            writeln!(out, "{}", render(&articles, detail))?;
            out.flush()?;
            if let Some(mode) = archive {
                match archive_all(&client, &articles, mode).await {
                    ArchiveBatch::Pending(pending) => return Ok(Some(pending)),
                    ArchiveBatch::Finished(report) => {
                        info!(total = report.total(), "archive report ready");
                    }
                }
            }
        }
    }
    Ok(None)
}
