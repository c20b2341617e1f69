//! `literacy-report` binary entry point.
//!
//! Reads a JSON export of surveys and responses, resolves the organization's
//! rank taxonomy from the `SQLite` store and prints the organization report
//! as JSON. All logs go to stderr; stdout carries only the report.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use literacy_metrics::analytics::DateWindow;
use literacy_metrics::config::Config;
use literacy_metrics::error::{AppError, InputError};
use literacy_metrics::report::{build_organization_report, OrganizationReport, ReportOptions};
use literacy_metrics::storage::SqliteStorage;
use literacy_metrics::survey::{Survey, SurveyResponse};
use literacy_metrics::taxonomy::RankTaxonomyProvider;

/// Build an AI literacy report for one organization.
#[derive(Debug, Parser)]
#[command(name = "literacy-report", version, about)]
struct Args {
    /// JSON file with `surveys` and `responses`.
    input: PathBuf,

    /// Organization to report on.
    #[arg(long = "org")]
    org_id: String,

    /// First month included (YYYY-MM).
    #[arg(long)]
    from: Option<String>,

    /// Last month included (YYYY-MM).
    #[arg(long)]
    to: Option<String>,

    /// Organization member count, for the response rate.
    #[arg(long)]
    members: Option<u32>,
}

/// Input document.
#[derive(Debug, Deserialize)]
struct Export {
    #[serde(default)]
    surveys: Vec<Survey>,
    #[serde(default)]
    responses: Vec<SurveyResponse>,
}

fn read_export(path: &Path) -> Result<Export, InputError> {
    let raw = std::fs::read_to_string(path).map_err(|e| InputError::ReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| InputError::ParseFailed {
        message: e.to_string(),
    })
}

async fn run(args: Args, config: &Config) -> Result<OrganizationReport, AppError> {
    let window = DateWindow::from_months(args.from.as_deref(), args.to.as_deref())?;
    let export = read_export(&args.input)?;
    tracing::info!(
        surveys = export.surveys.len(),
        responses = export.responses.len(),
        "Loaded input"
    );

    let storage = SqliteStorage::from_config(config).await?;
    let provider = RankTaxonomyProvider::new(storage);
    let definition = provider.get_rank_definition(&args.org_id).await;

    let options = ReportOptions::from_config(config)
        .with_window(window)
        .with_member_count(args.members);
    Ok(build_organization_report(
        &args.org_id,
        &export.responses,
        &export.surveys,
        &definition,
        &options,
    ))
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging to stderr only (stdout is for the report)
    tracing_subscriber::fmt()
        .with_env_filter(
            config
                .log_level
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!(
        "Configuration loaded: database={}, min_required_respondents={}",
        config.database_path,
        config.min_required_respondents
    );

    let report = match run(args, &config).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Report failed: {e}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!("Failed to serialize report: {e}");
            std::process::exit(1);
        }
    }
}
