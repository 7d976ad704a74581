use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use ratio_analyzer_core::export::{export_filename, export_to_csv, parse_csv_export};
use ratio_analyzer_core::{compute_ratios, FinancialInputs, RatioError, RatioKey};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn retailer() -> FinancialInputs {
    FinancialInputs {
        current_assets: dec!(820_000),
        cash_equivalents: dec!(95_000),
        accounts_receivable: dec!(60_000),
        inventory: dec!(540_000),
        total_assets: dec!(1_900_000),
        current_liabilities: dec!(610_000),
        total_liabilities: dec!(1_150_000),
        shareholder_equity: dec!(750_000),
        revenue: dec!(3_200_000),
        cost_of_goods_sold: dec!(2_176_000),
        operating_expenses: dec!(790_000),
        interest_expense: dec!(38_000),
        taxes: dec!(49_000),
        net_income: None,
    }
}

// ===========================================================================
// Export
// ===========================================================================

#[test]
fn test_export_round_trip_reproduces_results() {
    let at = Utc.with_ymd_and_hms(2026, 3, 31, 17, 5, 42).unwrap();
    let inputs = retailer();
    let results = compute_ratios(&inputs);

    let csv = export_to_csv(&inputs, &results, at).unwrap();
    let parsed = parse_csv_export(&csv).unwrap();

    assert_eq!(parsed.generated_at, at);
    assert_eq!(parsed.inputs, inputs);
    for key in RatioKey::ALL {
        assert_eq!(parsed.results.get(key), results.get(key), "{key}");
    }
    assert_eq!(parsed.results.profit, results.profit);
}

#[test]
fn test_export_has_one_row_per_metric() {
    let at = Utc.with_ymd_and_hms(2026, 3, 31, 17, 5, 42).unwrap();
    let inputs = retailer();
    let csv = export_to_csv(&inputs, &compute_ratios(&inputs), at).unwrap();

    // title + timestamp + 7 section headers + 13 inputs + 3 profit figures + 18 ratios
    assert_eq!(csv.lines().count(), 2 + 7 + 13 + 3 + 18);
}

#[test]
fn test_filename_pattern() {
    let at = Utc.with_ymd_and_hms(2026, 3, 31, 17, 5, 42).unwrap();
    let name = export_filename(at);
    assert!(name.starts_with("financial-ratios-"));
    assert!(name.ends_with(".csv"));
    assert_eq!(name, format!("financial-ratios-{}.csv", at.timestamp_millis()));
}

#[test]
fn test_parse_rejects_non_numeric_value() {
    let text = "Generated,2026-03-31T17:05:42.000Z\nBalance Sheet Data\nInventory,lots,$0.00\n";
    match parse_csv_export(text).unwrap_err() {
        RatioError::InvalidInput { field, .. } => assert_eq!(field, "Inventory"),
        other => panic!("Expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_rows_before_first_section() {
    let text = "Generated,2026-03-31T17:05:42.000Z\nCurrent Ratio,1.5,1.50\n";
    assert!(matches!(
        parse_csv_export(text),
        Err(RatioError::InvalidInput { .. })
    ));
}

// ===========================================================================
// Round-trip property
// ===========================================================================

fn amount() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        1 => Just(Decimal::ZERO),
        4 => (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..6)
            .prop_map(|(m, s)| Decimal::new(m, s)),
    ]
}

proptest! {
    #[test]
    fn prop_csv_round_trip(v in prop::collection::vec(amount(), 13), ni in prop::option::of(amount())) {
        let inputs = FinancialInputs {
            current_assets: v[0],
            cash_equivalents: v[1],
            accounts_receivable: v[2],
            inventory: v[3],
            total_assets: v[4],
            current_liabilities: v[5],
            total_liabilities: v[6],
            shareholder_equity: v[7],
            revenue: v[8],
            cost_of_goods_sold: v[9],
            operating_expenses: v[10],
            interest_expense: v[11],
            taxes: v[12],
            net_income: ni,
        };
        let results = compute_ratios(&inputs);
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        let csv = export_to_csv(&inputs, &results, at).unwrap();
        let parsed = parse_csv_export(&csv).unwrap();

        prop_assert_eq!(parsed.inputs, inputs);
        prop_assert_eq!(parsed.results, results);
    }
}
