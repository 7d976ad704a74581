use ratio_analyzer_core::benchmark::{
    bar_chart, compare_to_industry, compare_to_industry_benchmark, BenchmarkCatalog,
    BenchmarkStatus,
};
use ratio_analyzer_core::{compute_ratios, FinancialInputs, RatioError, RatioKey};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const CATALOG: &str = r#"{
    "industries": [
        {
            "industry": "Manufacturing",
            "description": "Illustrative mid-market manufacturing figures",
            "benchmarks": {
                "current_ratio": { "value": 1.5 },
                "quick_ratio": { "value": 1.0 },
                "gross_profit_margin": { "value": 35 },
                "net_profit_margin": { "value": 8 },
                "inventory_turnover": { "value": 6 },
                "days_sales_outstanding": { "value": 45 },
                "debt_to_equity_ratio": { "value": 0.5 },
                "interest_coverage_ratio": { "value": 5 }
            }
        }
    ]
}"#;

fn company() -> FinancialInputs {
    FinancialInputs {
        current_assets: dec!(500_000),
        cash_equivalents: dec!(120_000),
        accounts_receivable: dec!(180_000),
        inventory: dec!(150_000),
        total_assets: dec!(2_500_000),
        current_liabilities: dec!(300_000),
        total_liabilities: dec!(1_000_000),
        shareholder_equity: dec!(1_500_000),
        revenue: dec!(1_500_000),
        cost_of_goods_sold: dec!(900_000),
        operating_expenses: dec!(350_000),
        interest_expense: dec!(40_000),
        taxes: dec!(52_500),
        net_income: None,
    }
}

// ===========================================================================
// Single-ratio classification
// ===========================================================================

#[test]
fn test_classification_bands() {
    use BenchmarkStatus::*;
    let cases = [
        (dec!(1.8), dec!(1.5), true, Good),
        (dec!(1.25), dec!(1.5), true, Caution),
        (dec!(1.0), dec!(1.5), true, Poor),
        (dec!(40), dec!(45), false, Good),
        (dec!(52), dec!(45), false, Caution),
        (dec!(60), dec!(45), false, Poor),
    ];
    for (ratio, bench, higher, expected) in cases {
        assert_eq!(
            compare_to_industry_benchmark(ratio, bench, higher),
            expected,
            "ratio {ratio} vs {bench} (higher_is_better={higher})"
        );
    }
}

// ===========================================================================
// Industry comparison
// ===========================================================================

#[test]
fn test_company_against_manufacturing() {
    let catalog = BenchmarkCatalog::from_json_str(CATALOG).unwrap();
    let results = compute_ratios(&company());
    let cmp = compare_to_industry(&results, catalog.industry("manufacturing").unwrap());

    assert_eq!(cmp.industry, "Manufacturing");
    assert_eq!(cmp.comparisons.len(), 8);

    let status = |key: RatioKey| {
        cmp.comparisons
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.status)
            .unwrap()
    };
    // 1.67 vs 1.5
    assert_eq!(status(RatioKey::CurrentRatio), BenchmarkStatus::Good);
    // 40% vs 35%
    assert_eq!(status(RatioKey::GrossProfitMargin), BenchmarkStatus::Good);
    // 43.8 days vs 45, lower is better
    assert_eq!(status(RatioKey::DaysSalesOutstanding), BenchmarkStatus::Good);
    // 0.667 vs 0.5, lower is better, beyond 0.6
    assert_eq!(status(RatioKey::DebtToEquityRatio), BenchmarkStatus::Poor);
    // 6.25x vs 5x
    assert_eq!(status(RatioKey::InterestCoverageRatio), BenchmarkStatus::Good);

    assert_eq!(cmp.good + cmp.caution + cmp.poor, 8);
}

#[test]
fn test_chart_bars_follow_comparison() {
    let catalog = BenchmarkCatalog::from_json_str(CATALOG).unwrap();
    let results = compute_ratios(&company());
    let cmp = compare_to_industry(&results, catalog.industry("Manufacturing").unwrap());

    let bars = bar_chart(&cmp, 30);
    assert_eq!(bars.len(), cmp.comparisons.len());
    for (bar, c) in bars.iter().zip(&cmp.comparisons) {
        assert_eq!(bar.key, c.key);
        assert_eq!(bar.status, c.status);
        assert!(bar.company_len <= 30 && bar.industry_len <= 30);
        assert!(bar.company_len == 30 || bar.industry_len == 30);
    }
}

#[test]
fn test_missing_industry_is_reported() {
    let catalog = BenchmarkCatalog::from_json_str(CATALOG).unwrap();
    assert!(matches!(
        catalog.industry("Aerospace"),
        Err(RatioError::BenchmarkNotFound(_))
    ));
}

#[test]
fn test_zero_company_values_still_classify() {
    let catalog = BenchmarkCatalog::from_json_str(CATALOG).unwrap();
    let results = compute_ratios(&FinancialInputs::default());
    let cmp = compare_to_industry(&results, catalog.industry("Manufacturing").unwrap());
    let dso = cmp
        .comparisons
        .iter()
        .find(|c| c.key == RatioKey::DaysSalesOutstanding)
        .unwrap();
    assert_eq!(dso.company, Decimal::ZERO);
    assert_eq!(dso.status, BenchmarkStatus::Good);
}
