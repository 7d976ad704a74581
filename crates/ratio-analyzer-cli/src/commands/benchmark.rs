use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::time::Instant;

use ratio_analyzer_core::analyze_ratios;
use ratio_analyzer_core::benchmark::compare::BAND_TOLERANCE;
use ratio_analyzer_core::benchmark::{
    bar_chart, compare_to_industry, compare_to_industry_benchmark, BenchmarkCatalog,
};
use ratio_analyzer_core::types::with_metadata;

use super::analysis::{load_inputs, FinancialArgs};
use crate::input;

/// Placeholder catalog shipped with the CLI. Pass `--benchmarks` to use real
/// industry data.
const BUNDLED_CATALOG: &str = include_str!("../../data/industry_benchmarks.json");

/// Arguments for industry comparison
#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub financials: FinancialArgs,

    /// Industry to compare against (case-insensitive)
    #[arg(long)]
    pub industry: String,

    /// Path to a benchmark catalog JSON file (defaults to the bundled catalog)
    #[arg(long)]
    pub benchmarks: Option<String>,

    /// Maximum bar length in the comparison chart
    #[arg(long, default_value_t = 30)]
    pub chart_width: usize,
}

/// Arguments for classifying one ratio against a benchmark
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ClassifyArgs {
    /// Computed ratio value
    #[arg(long)]
    pub value: Decimal,

    /// Benchmark value
    #[arg(long)]
    pub benchmark: Decimal,

    /// Treat lower values as favourable (e.g. DSO, debt ratios)
    #[arg(long)]
    pub lower_is_better: bool,
}

/// Arguments for listing catalog industries
#[derive(Args)]
pub struct IndustriesArgs {
    /// Path to a benchmark catalog JSON file (defaults to the bundled catalog)
    #[arg(long)]
    pub benchmarks: Option<String>,
}

fn load_catalog(path: Option<&str>) -> Result<BenchmarkCatalog, Box<dyn std::error::Error>> {
    let catalog = match path {
        Some(p) => BenchmarkCatalog::from_json_str(&input::file::read_text(p)?)?,
        None => BenchmarkCatalog::from_json_str(BUNDLED_CATALOG)?,
    };
    Ok(catalog)
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let inputs = load_inputs(&args.financials)?;
    let analysis = analyze_ratios(&inputs)?;

    let catalog = load_catalog(args.benchmarks.as_deref())?;
    let industry = catalog.industry(&args.industry)?;

    let comparison = compare_to_industry(&analysis.result, industry);
    let chart = bar_chart(&comparison, args.chart_width);

    let assumptions = json!({
        "band_tolerance": BAND_TOLERANCE.to_string(),
        "benchmark_source": args.benchmarks.as_deref().unwrap_or("bundled placeholder catalog"),
        "industry_description": industry.description,
    });
    let elapsed = start.elapsed().as_micros() as u64;
    let output = with_metadata(
        "Industry Benchmark Comparison (good / caution / poor bands)",
        &assumptions,
        analysis.warnings,
        elapsed,
        comparison,
    );

    let mut value = serde_json::to_value(&output)?;
    if let Value::Object(ref mut map) = value {
        map.insert("chart".into(), serde_json::to_value(chart)?);
    }
    Ok(value)
}

pub fn run_classify(args: ClassifyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let higher_is_better = !args.lower_is_better;
    let status = compare_to_industry_benchmark(args.value, args.benchmark, higher_is_better);

    Ok(json!({
        "result": {
            "value": args.value.to_string(),
            "benchmark": args.benchmark.to_string(),
            "higher_is_better": higher_is_better,
            "status": status,
            "color": status.color(),
        }
    }))
}

pub fn run_industries(args: IndustriesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = load_catalog(args.benchmarks.as_deref())?;
    let rows: Vec<Value> = catalog
        .industries
        .iter()
        .map(|i| {
            json!({
                "industry": i.industry,
                "benchmarks": i.benchmarks.len(),
                "description": i.description,
            })
        })
        .collect();
    Ok(json!({ "results": rows }))
}
