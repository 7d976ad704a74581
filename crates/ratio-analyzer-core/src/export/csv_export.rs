use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use csv::{ReaderBuilder, WriterBuilder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ratios::format::format_currency;
use crate::ratios::inputs::{FinancialInputs, InputField};
use crate::ratios::{ProfitSummary, RatioKey, RatioResults, Section};
use crate::{types::*, RatioError, RatioResult};

pub const REPORT_TITLE: &str = "Financial Ratio Analysis";
const GENERATED_LABEL: &str = "Generated";

const GROSS_PROFIT_LABEL: &str = "Gross Profit";
const OPERATING_PROFIT_LABEL: &str = "Operating Profit (EBIT)";
const NET_INCOME_LABEL: &str = "Net Income";

const RATIO_SECTIONS: [Section; 4] = [
    Section::Liquidity,
    Section::Profitability,
    Section::Efficiency,
    Section::Leverage,
];

/// Contents of an exported sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvExport {
    pub generated_at: DateTime<Utc>,
    pub inputs: FinancialInputs,
    pub results: RatioResults,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Serialize inputs and results into the sectioned CSV layout.
///
/// The output depends only on its arguments; the caller supplies the clock.
pub fn export_to_csv(
    inputs: &FinancialInputs,
    results: &RatioResults,
    generated_at: DateTime<Utc>,
) -> RatioResult<String> {
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    wtr.write_record([REPORT_TITLE])?;
    let timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true);
    wtr.write_record([GENERATED_LABEL, timestamp.as_str()])?;

    // -- Inputs ---------------------------------------------------------------
    for section in [Section::BalanceSheet, Section::IncomeStatement] {
        wtr.write_record([section.title()])?;
        for field in InputField::ALL.iter().filter(|f| f.section() == section) {
            // net income only when it was supplied
            if let Some(value) = field.get(inputs) {
                write_metric(&mut wtr, field.label(), value, &format_currency(value))?;
            }
        }
    }

    // -- Derived figures ------------------------------------------------------
    wtr.write_record([Section::ProfitSummary.title()])?;
    for (label, value) in profit_rows(&results.profit) {
        write_metric(&mut wtr, label, value, &format_currency(value))?;
    }

    // -- Ratios ---------------------------------------------------------------
    for section in RATIO_SECTIONS {
        wtr.write_record([section.title()])?;
        for key in RatioKey::ALL {
            let desc = key.descriptor();
            if desc.section != section {
                continue;
            }
            let value = results.get(key);
            write_metric(&mut wtr, desc.label, value, &desc.format.render(value))?;
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| RatioError::SerializationError(e.to_string()))?;
    let text =
        String::from_utf8(bytes).map_err(|e| RatioError::SerializationError(e.to_string()))?;

    tracing::debug!(bytes = text.len(), "exported ratio analysis to CSV");
    Ok(text)
}

/// `financial-ratios-<unix millis>.csv`
pub fn export_filename(generated_at: DateTime<Utc>) -> String {
    format!("financial-ratios-{}.csv", generated_at.timestamp_millis())
}

/// Parse a sheet produced by [`export_to_csv`].
pub fn parse_csv_export(text: &str) -> RatioResult<CsvExport> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut generated_at: Option<DateTime<Utc>> = None;
    let mut section: Option<Section> = None;
    let mut inputs = FinancialInputs::default();
    let mut results = RatioResults::default();

    for record in rdr.records() {
        let record = record?;
        let label = record.get(0).unwrap_or_default().trim();

        if record.len() == 1 {
            if label == REPORT_TITLE {
                continue;
            }
            section = Some(Section::from_title(label).ok_or_else(|| {
                RatioError::InvalidInput {
                    field: label.to_string(),
                    reason: "Unknown section header.".into(),
                }
            })?);
            continue;
        }

        let raw = record.get(1).unwrap_or_default().trim();

        if label == GENERATED_LABEL {
            let ts = DateTime::parse_from_rfc3339(raw)
                .map_err(|e| RatioError::DateError(format!("{raw}: {e}")))?;
            generated_at = Some(ts.with_timezone(&Utc));
            continue;
        }

        let value = Decimal::from_str(raw).map_err(|e| RatioError::InvalidInput {
            field: label.to_string(),
            reason: format!("Value '{raw}' is not a number: {e}"),
        })?;

        match section {
            None => {
                return Err(RatioError::InvalidInput {
                    field: label.to_string(),
                    reason: "Metric row appears before any section header.".into(),
                })
            }
            Some(s @ (Section::BalanceSheet | Section::IncomeStatement)) => {
                let field = InputField::from_label(label)
                    .filter(|f| f.section() == s)
                    .ok_or_else(|| unknown_metric(label, s))?;
                field.set(&mut inputs, value);
            }
            Some(Section::ProfitSummary) => {
                let slot = match label {
                    GROSS_PROFIT_LABEL => &mut results.profit.gross_profit,
                    OPERATING_PROFIT_LABEL => &mut results.profit.operating_profit,
                    NET_INCOME_LABEL => &mut results.profit.net_income,
                    _ => return Err(unknown_metric(label, Section::ProfitSummary)),
                };
                *slot = value;
            }
            Some(s) => {
                let key = RatioKey::from_label(label)
                    .filter(|k| k.descriptor().section == s)
                    .ok_or_else(|| unknown_metric(label, s))?;
                *results.slot_mut(key) = value;
            }
        }
    }

    let generated_at = generated_at.ok_or_else(|| RatioError::InvalidInput {
        field: GENERATED_LABEL.into(),
        reason: "Export is missing its generated timestamp.".into(),
    })?;

    Ok(CsvExport {
        generated_at,
        inputs,
        results,
    })
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn write_metric<W: std::io::Write>(
    wtr: &mut csv::Writer<W>,
    label: &str,
    value: Money,
    display: &str,
) -> RatioResult<()> {
    let raw = value.to_string();
    wtr.write_record([label, raw.as_str(), display])?;
    Ok(())
}

fn profit_rows(profit: &ProfitSummary) -> [(&'static str, Money); 3] {
    [
        (GROSS_PROFIT_LABEL, profit.gross_profit),
        (OPERATING_PROFIT_LABEL, profit.operating_profit),
        (NET_INCOME_LABEL, profit.net_income),
    ]
}

fn unknown_metric(label: &str, section: Section) -> RatioError {
    RatioError::InvalidInput {
        field: label.to_string(),
        reason: format!("Not a metric of section '{}'.", section.title()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ratios::engine::compute_ratios;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
    }

    fn sample_input() -> FinancialInputs {
        FinancialInputs {
            current_assets: dec!(500_000),
            cash_equivalents: dec!(100_000),
            accounts_receivable: dec!(150_000),
            inventory: dec!(150_000),
            total_assets: dec!(2_000_000),
            current_liabilities: dec!(300_000),
            total_liabilities: dec!(800_000),
            shareholder_equity: dec!(1_200_000),
            revenue: dec!(1_500_000),
            cost_of_goods_sold: dec!(900_000),
            operating_expenses: dec!(300_000),
            interest_expense: dec!(50_000),
            taxes: dec!(62_500),
            net_income: None,
        }
    }

    #[test]
    fn test_header_and_sections_in_order() {
        let inputs = sample_input();
        let csv = export_to_csv(&inputs, &compute_ratios(&inputs), clock()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Financial Ratio Analysis");
        assert_eq!(lines[1], "Generated,2026-10-17T09:30:00.000Z");

        let headers: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|l| Section::from_title(l).is_some())
            .collect();
        assert_eq!(
            headers,
            vec![
                "Balance Sheet Data",
                "Income Statement Data",
                "Profit Summary",
                "Liquidity Ratios",
                "Profitability Ratios",
                "Efficiency Ratios",
                "Leverage Ratios",
            ]
        );
    }

    #[test]
    fn test_metric_rows_carry_value_and_display() {
        let inputs = sample_input();
        let csv = export_to_csv(&inputs, &compute_ratios(&inputs), clock()).unwrap();
        assert!(csv.contains("Current Assets,500000,\"$500,000.00\""));

        let margin = csv
            .lines()
            .find(|l| l.starts_with("Gross Profit Margin,"))
            .unwrap();
        assert!(margin.ends_with(",40.00%"));

        let dso = csv
            .lines()
            .find(|l| l.starts_with("Days Sales Outstanding,"))
            .unwrap();
        assert!(dso.ends_with(",36.5 days"));
    }

    #[test]
    fn test_net_income_row_only_when_supplied() {
        let mut inputs = sample_input();
        let csv = export_to_csv(&inputs, &compute_ratios(&inputs), clock()).unwrap();
        let income_section = csv
            .split("Income Statement Data")
            .nth(1)
            .and_then(|rest| rest.split("Profit Summary").next())
            .unwrap();
        assert!(!income_section.contains("Net Income"));

        inputs.net_income = Some(dec!(100_000));
        let csv = export_to_csv(&inputs, &compute_ratios(&inputs), clock()).unwrap();
        assert!(csv.contains("Net Income,100000,\"$100,000.00\""));
    }

    #[test]
    fn test_export_is_deterministic() {
        let inputs = sample_input();
        let results = compute_ratios(&inputs);
        let a = export_to_csv(&inputs, &results, clock()).unwrap();
        let b = export_to_csv(&inputs, &results, clock()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_restores_inputs_and_results() {
        let inputs = sample_input();
        let results = compute_ratios(&inputs);
        let csv = export_to_csv(&inputs, &results, clock()).unwrap();

        let parsed = parse_csv_export(&csv).unwrap();
        assert_eq!(parsed.generated_at, clock());
        assert_eq!(parsed.inputs, inputs);
        assert_eq!(parsed.results, results);
    }

    #[test]
    fn test_filename_uses_epoch_millis() {
        assert_eq!(export_filename(clock()), "financial-ratios-1792229400000.csv");
    }

    #[test]
    fn test_parse_rejects_unknown_section() {
        let text = "Financial Ratio Analysis\nGenerated,2026-10-17T09:30:00.000Z\nCash Flow Data\n";
        let err = parse_csv_export(text).unwrap_err();
        match err {
            RatioError::InvalidInput { field, .. } => assert_eq!(field, "Cash Flow Data"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_ratio_in_wrong_section() {
        let text = "Generated,2026-10-17T09:30:00.000Z\nLiquidity Ratios\nDebt Ratio,40,40.00%\n";
        assert!(matches!(
            parse_csv_export(text),
            Err(RatioError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_parse_requires_timestamp() {
        let text = "Financial Ratio Analysis\nLiquidity Ratios\nCurrent Ratio,2,2.00\n";
        let err = parse_csv_export(text).unwrap_err();
        match err {
            RatioError::InvalidInput { field, .. } => assert_eq!(field, "Generated"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_bad_timestamp_is_date_error() {
        let text = "Generated,yesterday\n";
        assert!(matches!(
            parse_csv_export(text),
            Err(RatioError::DateError(_))
        ));
    }
}
