mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::analysis::CalculateArgs;
use commands::benchmark::{ClassifyArgs, CompareArgs, IndustriesArgs};
use commands::export::ExportArgs;

/// Financial statement ratio analysis
#[derive(Parser)]
#[command(
    name = "ratios",
    version,
    about = "Financial statement ratio analysis",
    long_about = "A CLI for computing liquidity, profitability, efficiency and leverage \
                  ratios from balance sheet and income statement figures with decimal \
                  precision. Supports CSV export and industry benchmark comparison."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log filter when RUST_LOG is unset (e.g. "debug", "ratio_analyzer_core=debug")
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the full ratio set from financial statement figures
    Calculate(CalculateArgs),
    /// Calculate ratios and export them to a CSV file
    Export(ExportArgs),
    /// Compare calculated ratios against an industry's benchmarks
    Compare(CompareArgs),
    /// Classify a single ratio against a benchmark value
    Classify(ClassifyArgs),
    /// List industries in the benchmark catalog
    Industries(IndustriesArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // stdout carries command output; logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calculate(args) => commands::analysis::run_calculate(args),
        Commands::Export(args) => commands::export::run_export(args),
        Commands::Compare(args) => commands::benchmark::run_compare(args),
        Commands::Classify(args) => commands::benchmark::run_classify(args),
        Commands::Industries(args) => commands::benchmark::run_industries(args),
        Commands::Version => {
            println!("ratios {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
