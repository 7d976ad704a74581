use serde::{Deserialize, Serialize};

use super::format;
use crate::types::Money;

/// Grouping used for display and for the CSV export layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    BalanceSheet,
    IncomeStatement,
    ProfitSummary,
    Liquidity,
    Profitability,
    Efficiency,
    Leverage,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Self::BalanceSheet => "Balance Sheet Data",
            Self::IncomeStatement => "Income Statement Data",
            Self::ProfitSummary => "Profit Summary",
            Self::Liquidity => "Liquidity Ratios",
            Self::Profitability => "Profitability Ratios",
            Self::Efficiency => "Efficiency Ratios",
            Self::Leverage => "Leverage Ratios",
        }
    }

    pub fn from_title(title: &str) -> Option<Self> {
        [
            Self::BalanceSheet,
            Self::IncomeStatement,
            Self::ProfitSummary,
            Self::Liquidity,
            Self::Profitability,
            Self::Efficiency,
            Self::Leverage,
        ]
        .into_iter()
        .find(|s| s.title() == title)
    }
}

/// How a value is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioFormat {
    Currency,
    Percentage,
    /// Plain ratio, two decimals
    Ratio,
    /// Turnover-style multiple, two decimals with an `x` suffix
    Times,
    Days,
}

impl RatioFormat {
    pub fn render(self, value: Money) -> String {
        match self {
            Self::Currency => format::format_currency(value),
            Self::Percentage => format::format_percentage(value, 2),
            Self::Ratio => format::format_fixed(value, 2),
            Self::Times => format::format_multiple(value),
            Self::Days => format::format_days(value),
        }
    }
}

/// Static description of a ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatioDescriptor {
    pub key: RatioKey,
    pub label: &'static str,
    pub section: Section,
    pub format: RatioFormat,
    pub higher_is_better: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioKey {
    CurrentRatio,
    QuickRatio,
    CashRatio,
    WorkingCapital,
    GrossProfitMargin,
    OperatingProfitMargin,
    NetProfitMargin,
    ReturnOnAssets,
    ReturnOnEquity,
    AssetTurnover,
    InventoryTurnover,
    ReceivablesTurnover,
    DaysInventoryOutstanding,
    DaysSalesOutstanding,
    DebtRatio,
    DebtToEquityRatio,
    InterestCoverageRatio,
    EquityMultiplier,
}

impl RatioKey {
    /// Every ratio, in display order.
    pub const ALL: [RatioKey; 18] = [
        Self::CurrentRatio,
        Self::QuickRatio,
        Self::CashRatio,
        Self::WorkingCapital,
        Self::GrossProfitMargin,
        Self::OperatingProfitMargin,
        Self::NetProfitMargin,
        Self::ReturnOnAssets,
        Self::ReturnOnEquity,
        Self::AssetTurnover,
        Self::InventoryTurnover,
        Self::ReceivablesTurnover,
        Self::DaysInventoryOutstanding,
        Self::DaysSalesOutstanding,
        Self::DebtRatio,
        Self::DebtToEquityRatio,
        Self::InterestCoverageRatio,
        Self::EquityMultiplier,
    ];

    pub fn descriptor(self) -> RatioDescriptor {
        use RatioFormat::*;
        use Section::*;

        let (label, section, format, higher_is_better) = match self {
            Self::CurrentRatio => ("Current Ratio", Liquidity, Ratio, true),
            Self::QuickRatio => ("Quick Ratio", Liquidity, Ratio, true),
            Self::CashRatio => ("Cash Ratio", Liquidity, Ratio, true),
            Self::WorkingCapital => ("Working Capital", Liquidity, Currency, true),
            Self::GrossProfitMargin => ("Gross Profit Margin", Profitability, Percentage, true),
            Self::OperatingProfitMargin => {
                ("Operating Profit Margin", Profitability, Percentage, true)
            }
            Self::NetProfitMargin => ("Net Profit Margin", Profitability, Percentage, true),
            Self::ReturnOnAssets => ("Return on Assets", Profitability, Percentage, true),
            Self::ReturnOnEquity => ("Return on Equity", Profitability, Percentage, true),
            Self::AssetTurnover => ("Asset Turnover", Efficiency, Times, true),
            Self::InventoryTurnover => ("Inventory Turnover", Efficiency, Times, true),
            Self::ReceivablesTurnover => ("Receivables Turnover", Efficiency, Times, true),
            Self::DaysInventoryOutstanding => {
                ("Days Inventory Outstanding", Efficiency, Days, false)
            }
            Self::DaysSalesOutstanding => ("Days Sales Outstanding", Efficiency, Days, false),
            Self::DebtRatio => ("Debt Ratio", Leverage, Percentage, false),
            Self::DebtToEquityRatio => ("Debt-to-Equity Ratio", Leverage, Ratio, false),
            Self::InterestCoverageRatio => ("Interest Coverage Ratio", Leverage, Times, true),
            Self::EquityMultiplier => ("Equity Multiplier", Leverage, Ratio, false),
        };

        RatioDescriptor {
            key: self,
            label,
            section,
            format,
            higher_is_better,
        }
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label)
    }
}

impl std::fmt::Display for RatioKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<&str> = RatioKey::ALL.iter().map(|k| k.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), RatioKey::ALL.len());
    }

    #[test]
    fn test_label_lookup_round_trips() {
        for key in RatioKey::ALL {
            assert_eq!(RatioKey::from_label(key.label()), Some(key));
        }
        assert_eq!(RatioKey::from_label("EBITDA Margin"), None);
    }

    #[test]
    fn test_section_titles_round_trip() {
        assert_eq!(
            Section::from_title("Liquidity Ratios"),
            Some(Section::Liquidity)
        );
        assert_eq!(
            Section::from_title("Balance Sheet Data"),
            Some(Section::BalanceSheet)
        );
        assert_eq!(Section::from_title("Cash Flow Data"), None);
    }

    #[test]
    fn test_days_and_leverage_prefer_lower_values() {
        assert!(!RatioKey::DaysSalesOutstanding.descriptor().higher_is_better);
        assert!(!RatioKey::DebtToEquityRatio.descriptor().higher_is_better);
        assert!(RatioKey::InterestCoverageRatio.descriptor().higher_is_better);
    }

    #[test]
    fn test_key_serializes_snake_case() {
        let json = serde_json::to_string(&RatioKey::DaysSalesOutstanding).unwrap();
        assert_eq!(json, "\"days_sales_outstanding\"");
    }
}
