use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::compare::BenchmarkStatus;
use super::industry::IndustryComparison;
use crate::ratios::RatioKey;

/// One pair of bars (company vs industry) in the comparison chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBar {
    pub key: RatioKey,
    pub label: String,
    pub status: BenchmarkStatus,
    pub company_len: usize,
    pub industry_len: usize,
    pub company_negative: bool,
    pub company_display: String,
    pub industry_display: String,
}

/// Scale each comparison into bar lengths of at most `width` cells.
///
/// Ratios have different units, so each pair is scaled against its own
/// larger magnitude: the larger bar always spans the full width.
pub fn bar_chart(comparison: &IndustryComparison, width: usize) -> Vec<ChartBar> {
    comparison
        .comparisons
        .iter()
        .map(|c| {
            let company = c.company.abs();
            let industry = c.industry.abs();
            let max = company.max(industry);
            ChartBar {
                key: c.key,
                label: c.label.clone(),
                status: c.status,
                company_len: scaled(company, max, width),
                industry_len: scaled(industry, max, width),
                company_negative: c.company.is_sign_negative() && !c.company.is_zero(),
                company_display: c.company_display.clone(),
                industry_display: c.industry_display.clone(),
            }
        })
        .collect()
}

fn scaled(value: Decimal, max: Decimal, width: usize) -> usize {
    if max.is_zero() {
        return 0;
    }
    (value / max * Decimal::from(width))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_usize()
        .unwrap_or(0)
        .min(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::industry::RatioComparison;
    use crate::ratios::Section;
    use rust_decimal_macros::dec;

    fn comparison(company: Decimal, industry: Decimal) -> IndustryComparison {
        IndustryComparison {
            industry: "Retail".into(),
            comparisons: vec![RatioComparison {
                key: RatioKey::CurrentRatio,
                label: "Current Ratio".into(),
                section: Section::Liquidity,
                company,
                industry,
                variance: company - industry,
                higher_is_better: true,
                status: BenchmarkStatus::Good,
                company_display: company.to_string(),
                industry_display: industry.to_string(),
            }],
            good: 1,
            caution: 0,
            poor: 0,
        }
    }

    #[test]
    fn test_larger_value_spans_full_width() {
        let bars = bar_chart(&comparison(dec!(2), dec!(1.5)), 40);
        assert_eq!(bars[0].company_len, 40);
        assert_eq!(bars[0].industry_len, 30);
    }

    #[test]
    fn test_both_zero_gives_empty_bars() {
        let bars = bar_chart(&comparison(Decimal::ZERO, Decimal::ZERO), 40);
        assert_eq!((bars[0].company_len, bars[0].industry_len), (0, 0));
    }

    #[test]
    fn test_negative_company_value_is_flagged() {
        let bars = bar_chart(&comparison(dec!(-5), dec!(10)), 20);
        assert!(bars[0].company_negative);
        assert_eq!(bars[0].company_len, 10);
        assert_eq!(bars[0].industry_len, 20);
    }
}
