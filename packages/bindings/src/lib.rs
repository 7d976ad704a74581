use std::str::FromStr;

use chrono::{TimeZone, Utc};
use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;

use ratio_analyzer_core::benchmark::{self, BenchmarkCatalog};
use ratio_analyzer_core::export;
use ratio_analyzer_core::{FinancialInputs, RatioResults};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_decimal(field: &str, text: &str) -> NapiResult<Decimal> {
    Decimal::from_str(text.trim())
        .map_err(|e| to_napi_error(format!("{field}: '{text}' is not a number ({e})")))
}

// ---------------------------------------------------------------------------
// Ratios
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_ratios(input_json: String) -> NapiResult<String> {
    let input: FinancialInputs = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = ratio_analyzer_core::compute_ratios(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn analyze_ratios(input_json: String) -> NapiResult<String> {
    let input: FinancialInputs = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = ratio_analyzer_core::analyze_ratios(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn display_rows(results_json: String) -> NapiResult<String> {
    let results: RatioResults = serde_json::from_str(&results_json).map_err(to_napi_error)?;
    serde_json::to_string(&results.display_rows()).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Returns `{ "filename": ..., "csv": ... }` for the caller to offer as a
/// download. `timestamp_millis` is the caller's clock (`Date.now()`).
#[napi]
pub fn export_csv(input_json: String, timestamp_millis: i64) -> NapiResult<String> {
    let input: FinancialInputs = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let generated_at = Utc
        .timestamp_millis_opt(timestamp_millis)
        .single()
        .ok_or_else(|| to_napi_error(format!("invalid timestamp: {timestamp_millis}")))?;

    let results = ratio_analyzer_core::compute_ratios(&input);
    let csv = export::export_to_csv(&input, &results, generated_at).map_err(to_napi_error)?;

    serde_json::to_string(&serde_json::json!({
        "filename": export::export_filename(generated_at),
        "csv": csv,
    }))
    .map_err(to_napi_error)
}

#[napi]
pub fn parse_csv_export(csv: String) -> NapiResult<String> {
    let parsed = export::parse_csv_export(&csv).map_err(to_napi_error)?;
    serde_json::to_string(&parsed).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Decimal arguments are passed as strings to avoid float rounding.
#[napi]
pub fn compare_to_industry_benchmark(
    ratio: String,
    benchmark_value: String,
    higher_is_better: bool,
) -> NapiResult<String> {
    let ratio = parse_decimal("ratio", &ratio)?;
    let benchmark_value = parse_decimal("benchmark", &benchmark_value)?;
    let status = benchmark::compare_to_industry_benchmark(ratio, benchmark_value, higher_is_better);
    Ok(status.to_string().to_lowercase())
}

#[napi]
pub fn compare_to_industry(
    results_json: String,
    catalog_json: String,
    industry: String,
    chart_width: u32,
) -> NapiResult<String> {
    let results: RatioResults = serde_json::from_str(&results_json).map_err(to_napi_error)?;
    let catalog = BenchmarkCatalog::from_json_str(&catalog_json).map_err(to_napi_error)?;
    let benchmarks = catalog.industry(&industry).map_err(to_napi_error)?;

    let comparison = benchmark::compare_to_industry(&results, benchmarks);
    let chart = benchmark::bar_chart(&comparison, chart_width as usize);

    serde_json::to_string(&serde_json::json!({
        "comparison": comparison,
        "chart": chart,
    }))
    .map_err(to_napi_error)
}
