/*
[INPUT]:  CLI arguments, YAML configuration file, OS shutdown signals
[OUTPUT]: Interactive console, headless tail, or one-shot script/log commands
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

mod cli;
mod tui;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex as StdMutex};

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use logtail_adapter::ConsoleClient;
use logtail_console::ConsoleConfig;

use crate::cli::tail::TailOptions;
use crate::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory};

#[derive(Parser, Debug)]
#[command(
    name = "logtail-console",
    version,
    about = "Log tail and script console for a home-automation server"
)]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    /// Overrides `base_url` from the configuration file
    #[arg(long = "base-url", value_name = "URL", global = true)]
    base_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    /// Also write diagnostics to this file (interactive mode)
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,
    /// Validate the configuration and exit
    #[arg(long = "dry-run", global = true)]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Interactive console (default)
    Tui,
    /// Print log entries as they arrive
    Tail {
        /// Day to show; past days print once and exit
        #[arg(long, value_name = "YYYY-MM-DD")]
        day: Option<NaiveDate>,
        /// Only print rows containing this text (case-insensitive)
        #[arg(long, value_name = "TEXT")]
        filter: Option<String>,
        /// Print the current page and exit
        #[arg(long)]
        once: bool,
    },
    /// Execute one script command and print its output
    Exec {
        #[arg(value_name = "CMD")]
        cmd: String,
    },
    /// Print executed commands, newest first
    History,
    /// Clear the server log at the configured clear level
    Clear,
    /// Write a configuration file interactively
    Init {
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let command = args.command.clone().unwrap_or(Command::Tui);

    if let Command::Init { output } = &command {
        return cli::init::run_init(output.clone());
    }

    let log_buffer: LogBufferHandle = Arc::new(StdMutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
    let _log_guard = match command {
        Command::Tui => init_tui_tracing(&args.log_level, log_buffer.clone(), args.log_file.as_deref())?,
        _ => {
            init_tracing(&args.log_level)?;
            None
        }
    };

    let config = load_config(args.config_path.as_deref(), args.base_url.as_deref())?;
    info!(
        base_url = %config.base_url,
        log_level = %config.log_level,
        poll_interval_secs = config.poll_interval_secs,
        "configuration loaded"
    );

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    match command {
        Command::Tui => tui::run_tui_with_log(config, log_buffer).await,
        Command::Tail { day, filter, once } => {
            let shutdown = CancellationToken::new();
            setup_signal_handlers(shutdown.clone());
            let options = TailOptions { day, filter, once };
            cli::tail::run_tail(&config, options, shutdown).await
        }
        Command::Exec { cmd } => cli::oneshot::run_exec(&build_client(&config)?, &cmd).await,
        Command::History => cli::oneshot::run_history(&build_client(&config)?).await,
        Command::Clear => cli::oneshot::run_clear(&build_client(&config)?, config.clear_level).await,
        Command::Init { .. } => Ok(()),
    }
}

fn load_config(path: Option<&Path>, base_url: Option<&str>) -> Result<ConsoleConfig> {
    let mut config = ConsoleConfig::load(path).context("load config")?;
    if let Some(url) = base_url {
        config.base_url = url.to_string();
    }
    config.validate().context("validate config")?;
    Ok(config)
}

pub(crate) fn build_client(config: &ConsoleConfig) -> Result<ConsoleClient> {
    ConsoleClient::with_config(config.client_config(), &config.base_url)
        .map_err(|err| anyhow!("create ConsoleClient failed: {err}"))
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

/// The terminal belongs to the TUI, so diagnostics go to the in-memory
/// buffer shown in the Diagnostics tab and, if requested, to a file.
fn init_tui_tracing(
    log_level: &str,
    buffer: LogBufferHandle,
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let buffer_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(LogWriterFactory::new(buffer));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path.file_name().context("log file path needs a file name")?;
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(buffer_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}

fn setup_signal_handlers(shutdown: CancellationToken) {
    let shutdown_clone = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT");
        shutdown_clone.cancel();
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            match signal(SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                    info!("received SIGTERM");
                    shutdown_clone.cancel();
                }
                Err(err) => {
                    warn!(error = %err, "failed to install SIGTERM handler");
                }
            }
        });
    }
}
