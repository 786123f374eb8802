//! # salary-estimator CLI Entry Point
//!
//! Serves the HTTP API or runs a single estimate from the command line.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::{Datelike, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use salary_estimator::api::{AppState, CatalogResponse, create_router};
use salary_estimator::calculation::SalaryEstimator;
use salary_estimator::clipboard::{ClipboardController, CommandClipboard};
use salary_estimator::config::ConfigLoader;
use salary_estimator::models::{CalculationInput, ContractType};
use salary_estimator::presentation::{FormattedAmounts, PrintDocument, summary_text};

/// Salary estimator for tech roles in Germany, Austria and Switzerland.
#[derive(Parser, Debug)]
#[command(name = "salary-estimator", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API.
    Serve {
        /// Directory holding the reference YAML files.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Address to listen on.
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
    /// Estimate a single scenario.
    Estimate(EstimateArgs),
    /// List the selectable roles, countries, cities and company sizes.
    Catalog {
        /// Directory holding the reference YAML files.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct EstimateArgs {
    /// Directory holding the reference YAML files.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Role key.
    #[arg(long, default_value = "backend")]
    role: String,
    /// Country code.
    #[arg(long, default_value = "DE")]
    country: String,
    /// City key; falls back to the country's first city when not listed.
    #[arg(long, default_value = "berlin")]
    city: String,
    /// Years of experience (0-15).
    #[arg(long, default_value_t = 4)]
    years: u32,
    /// Company size key.
    #[arg(long = "size", default_value = "sme")]
    company_size: String,
    /// Contract type: perm or contractor.
    #[arg(long, default_value = "perm")]
    contract: ContractType,
    /// Remote share in percent (0-100).
    #[arg(long = "remote", default_value_t = 40)]
    remote_percent: u32,
    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
    /// Print the full print view.
    #[arg(long)]
    print: bool,
    /// Copy the summary to the system clipboard.
    #[arg(long)]
    copy: bool,
    /// Clipboard command to pipe the summary into (e.g. "wl-copy").
    #[arg(long)]
    clipboard_command: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, addr } => serve(config, addr).await,
        Commands::Estimate(args) => run_estimate(args).await,
        Commands::Catalog { config } => {
            let loader = ConfigLoader::load_or_embedded(config)?;
            let catalog = CatalogResponse::new(loader.reference());
            println!("{}", serde_json::to_string_pretty(&catalog)?);
            Ok(())
        }
    }
}

async fn serve(config: Option<PathBuf>, addr: SocketAddr) -> anyhow::Result<()> {
    let loader = ConfigLoader::load_or_embedded(config)?;
    let router = create_router(AppState::new(loader));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Starting salary estimator v{} on {}", env!("CARGO_PKG_VERSION"), addr);

    axum::serve(listener, router).await?;
    Ok(())
}

async fn run_estimate(args: EstimateArgs) -> anyhow::Result<()> {
    let loader = ConfigLoader::load_or_embedded(args.config.as_ref())?;
    let estimator = SalaryEstimator::new(loader.shared());
    let reference = estimator.reference();

    let mut input = CalculationInput {
        role: args.role,
        country: args.country,
        city: args.city,
        years: args.years,
        company_size: args.company_size,
        remote_percent: args.remote_percent,
        contract: args.contract,
    };
    input.validate()?;
    input.city = reference.resolve_city(&input.country, &input.city).to_string();

    let result = estimator.estimate(&input);
    let summary = summary_text(&input, &result, reference);

    if args.json {
        let body = serde_json::json!({
            "input": input,
            "result": result,
            "formatted": FormattedAmounts::new(&result, reference.currency(&input.country)),
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else if args.print {
        println!(
            "{}",
            PrintDocument::new(&input, &result, reference, Utc::now().year())
        );
    } else {
        println!("{}", summary);
    }

    if args.copy {
        let sink = match args.clipboard_command.as_deref() {
            Some(command_line) => CommandClipboard::from_command_line(command_line)
                .context("--clipboard-command must not be empty")?,
            None => CommandClipboard::platform_default(),
        };

        let controller = ClipboardController::new(Arc::new(sink));
        if controller.copy(&summary).await {
            eprintln!("✓ Kopiert!");
        } else {
            let status = controller.status().await;
            eprintln!(
                "Fehler beim Kopieren: {}",
                status.error.unwrap_or_default()
            );
        }
    }

    Ok(())
}
