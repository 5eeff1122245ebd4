//! CLI entry point for the roster report tool.
//!
//! Provides subcommands for running the five report queries against a
//! student roster fetched from a file or URL, and for validating a roster
//! without reporting on it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use roster_report::fetch::{ApiKey, BasicClient, UrlParam, fetch_bytes};
use roster_report::output::{append_summary, print_json, print_report};
use roster_report::parser::parse_roster;
use roster_report::queries::report::{RosterReport, RosterSummary};
use roster_report::roster::Student;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Upstream sample roster, used when neither the CLI argument nor
/// `STUDENTS_URL` names a source.
const DEFAULT_ROSTER_URL: &str =
    "https://raw.githubusercontent.com/sedc-codecademy/skwd9-04-ajs/main/Samples/students_v2.json";

#[derive(Parser)]
#[command(name = "roster_report")]
#[command(about = "A tool to report on student rosters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a roster from a file or URL and run the report queries
    Report {
        /// Path to file or URL to fetch; falls back to STUDENTS_URL
        #[arg(value_name = "FILE_OR_URL")]
        source: Option<String>,

        /// CSV file to append a one-row summary of this run to
        #[arg(short, long)]
        summary: Option<String>,

        /// Also print the full report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Fetch a roster and check that every record is well formed
    Validate {
        /// Path to file or URL to fetch; falls back to STUDENTS_URL
        #[arg(value_name = "FILE_OR_URL")]
        source: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/roster_report.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("roster_report.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            source,
            summary,
            json,
        } => {
            let source = resolve_source(source);

            // Retrieval phase; the pure query phase only runs on success.
            match load_roster(&source).await {
                Ok(students) => {
                    info!(total = students.len(), source = %source, "Roster loaded");

                    let report = RosterReport::from_roster(&students).with_source(&source);
                    print_report(&report);

                    if json {
                        print_json(&report)?;
                    }

                    if let Some(path) = summary {
                        let row = RosterSummary::new(&report, &students);
                        append_summary(&path, &row)?;
                        info!(path = %path, "Summary row appended");
                    }
                }
                Err(e) => {
                    error!(error = %e, source = %source, "Roster retrieval failed");
                }
            }
        }
        Commands::Validate { source } => {
            let source = resolve_source(source);

            match load_roster(&source).await {
                Ok(students) => {
                    info!(total = students.len(), source = %source, "Roster is well formed");
                }
                Err(e) => {
                    error!(error = %e, source = %source, "Roster validation failed");
                }
            }
        }
    }

    Ok(())
}

/// Resolves the roster location: CLI argument, then `STUDENTS_URL`, then
/// the upstream sample.
fn resolve_source(arg: Option<String>) -> String {
    arg.or_else(|| std::env::var("STUDENTS_URL").ok())
        .unwrap_or_else(|| DEFAULT_ROSTER_URL.to_string())
}

/// Fetches and parses the roster in one step.
#[tracing::instrument(fields(source = %source))]
async fn load_roster(source: &str) -> Result<Vec<Student>> {
    let bytes = fetcher(source).await?;
    parse_roster(&bytes)
}

/// Loads roster data from a local file path or fetches it over HTTP,
/// wrapping the client in an auth decorator when `ROSTER_API_KEY` is set.
async fn fetcher(source: &str) -> Result<Vec<u8>> {
    if !source.starts_with("http") {
        return Ok(std::fs::read(source)?);
    }

    let client = BasicClient::with_timeouts()?;

    match std::env::var("ROSTER_API_KEY") {
        Err(_) => fetch_bytes(&client, source).await,
        Ok(key) => {
            if let Ok(param_name) = std::env::var("ROSTER_AUTH_PARAM") {
                let client = UrlParam {
                    inner: client,
                    param_name,
                    key,
                };
                fetch_bytes(&client, source).await
            } else if let Ok(header_name) = std::env::var("ROSTER_AUTH_HEADER") {
                let client = ApiKey {
                    inner: client,
                    header_name,
                    key,
                };
                fetch_bytes(&client, source).await
            } else {
                let client = ApiKey::bearer(client, key);
                fetch_bytes(&client, source).await
            }
        }
    }
}
