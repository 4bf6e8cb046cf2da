//! Sumi-Lens main entry point
//!
//! This is the command-line interface for the Sumi-Lens web page analyser.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::{Path, PathBuf};
use sumi_lens::analysis::AnalysisRequest;
use sumi_lens::config::{load_config_with_hash, validate, Config};
use sumi_lens::output::{write_report, AnalysisReport, OutputFormat};
use sumi_lens::Analyser;
use tracing_subscriber::EnvFilter;

/// Sumi-Lens: a web page analyser
///
/// Sumi-Lens fetches each page, reports its markup version, title, heading
/// counts and login forms, and checks every link on it for reachability.
#[derive(Parser, Debug)]
#[command(name = "sumi-lens")]
#[command(version)]
#[command(about = "Analyse web pages and audit their links", long_about = None)]
struct Cli {
    /// URLs to analyse
    #[arg(value_name = "URL", required_unless_present = "request")]
    urls: Vec<String>,

    /// JSON request file of the form {"url": ["https://...", ...]}
    #[arg(short, long, value_name = "FILE")]
    request: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the number of link probe workers per page
    #[arg(short, long, value_name = "N")]
    workers: Option<usize>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let (config, config_hash) = load_configuration(&cli)?;

    let mut urls = cli.urls.clone();
    if let Some(path) = &cli.request {
        urls.extend(load_request(path)?.urls);
    }
    if urls.is_empty() {
        bail!("No URLs to analyse");
    }

    let analyser = Analyser::from_config(&config).context("Failed to build HTTP client")?;

    tracing::info!(
        "Analysing {} page(s) with {} probe workers each",
        urls.len(),
        config.analyser.worker_count
    );

    let pages = tokio::select! {
        pages = analyser.analyse_all(&urls) => pages,
        _ = shutdown_signal() => {
            tracing::warn!("Shutdown requested, abandoning in-flight analyses");
            bail!("Interrupted");
        }
    };

    let report = AnalysisReport::new(pages, config_hash);
    write_report(&report, cli.format, cli.output.as_deref()).context("Failed to write report")?;

    if report.failed() > 0 {
        bail!(
            "{} of {} page(s) could not be analysed",
            report.failed(),
            report.pages.len()
        );
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so a report written to stdout stays machine-readable.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sumi_lens=info,warn"),
            1 => EnvFilter::new("sumi_lens=debug,info"),
            2 => EnvFilter::new("sumi_lens=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file (if any) and applies command-line overrides
fn load_configuration(cli: &Cli) -> anyhow::Result<(Config, Option<String>)> {
    let (mut config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            (config, Some(hash))
        }
        None => (Config::default(), None),
    };

    if let Some(workers) = cli.workers {
        config.analyser.worker_count = workers;
        validate(&config).context("Invalid --workers value")?;
    }

    Ok((config, config_hash))
}

/// Reads a JSON analysis request file
fn load_request(path: &Path) -> anyhow::Result<AnalysisRequest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse request file {}", path.display()))
}

/// Resolves when the process is asked to stop (Ctrl-C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
