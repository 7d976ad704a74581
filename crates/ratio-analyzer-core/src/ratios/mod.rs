//! Financial statement ratio analysis.
//!
//! Four ratio groups are derived from a single [`inputs::FinancialInputs`]
//! record:
//!
//! **Liquidity**: current, quick and cash ratios plus working capital.
//!
//! **Profitability**: gross, operating and net margins, ROA and ROE
//! (percentage points).
//!
//! **Efficiency**: asset, inventory and receivables turnover, DIO and DSO.
//!
//! **Leverage / Solvency**: debt ratio, debt-to-equity, interest coverage and
//! equity multiplier.
//!
//! Every division is guarded: a zero denominator yields zero.

pub mod catalog;
pub mod engine;
pub mod format;
pub mod inputs;

use serde::{Deserialize, Serialize};

use crate::types::*;

pub use catalog::{RatioDescriptor, RatioFormat, RatioKey, Section};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Intermediate income figures the ratios are built on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitSummary {
    pub gross_profit: Money,
    /// EBIT
    pub operating_profit: Money,
    pub net_income: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityRatios {
    pub current_ratio: Multiple,
    pub quick_ratio: Multiple,
    pub cash_ratio: Multiple,
    pub working_capital: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfitabilityRatios {
    pub gross_profit_margin: Percent,
    pub operating_profit_margin: Percent,
    pub net_profit_margin: Percent,
    pub return_on_assets: Percent,
    pub return_on_equity: Percent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EfficiencyRatios {
    pub asset_turnover: Multiple,
    pub inventory_turnover: Multiple,
    pub receivables_turnover: Multiple,
    pub days_inventory_outstanding: Days,
    pub days_sales_outstanding: Days,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeverageRatios {
    pub debt_ratio: Percent,
    pub debt_to_equity_ratio: Multiple,
    pub interest_coverage_ratio: Multiple,
    pub equity_multiplier: Multiple,
}

/// Full ratio set, recomputed from scratch on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioResults {
    pub profit: ProfitSummary,
    pub liquidity: LiquidityRatios,
    pub profitability: ProfitabilityRatios,
    pub efficiency: EfficiencyRatios,
    pub leverage: LeverageRatios,
}

/// One formatted line of the results view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub section: String,
    pub key: RatioKey,
    pub label: String,
    pub value: Money,
    pub display: String,
}

impl RatioResults {
    /// Value of a single ratio.
    pub fn get(&self, key: RatioKey) -> Money {
        match key {
            RatioKey::CurrentRatio => self.liquidity.current_ratio,
            RatioKey::QuickRatio => self.liquidity.quick_ratio,
            RatioKey::CashRatio => self.liquidity.cash_ratio,
            RatioKey::WorkingCapital => self.liquidity.working_capital,
            RatioKey::GrossProfitMargin => self.profitability.gross_profit_margin,
            RatioKey::OperatingProfitMargin => self.profitability.operating_profit_margin,
            RatioKey::NetProfitMargin => self.profitability.net_profit_margin,
            RatioKey::ReturnOnAssets => self.profitability.return_on_assets,
            RatioKey::ReturnOnEquity => self.profitability.return_on_equity,
            RatioKey::AssetTurnover => self.efficiency.asset_turnover,
            RatioKey::InventoryTurnover => self.efficiency.inventory_turnover,
            RatioKey::ReceivablesTurnover => self.efficiency.receivables_turnover,
            RatioKey::DaysInventoryOutstanding => self.efficiency.days_inventory_outstanding,
            RatioKey::DaysSalesOutstanding => self.efficiency.days_sales_outstanding,
            RatioKey::DebtRatio => self.leverage.debt_ratio,
            RatioKey::DebtToEquityRatio => self.leverage.debt_to_equity_ratio,
            RatioKey::InterestCoverageRatio => self.leverage.interest_coverage_ratio,
            RatioKey::EquityMultiplier => self.leverage.equity_multiplier,
        }
    }

    /// Mutable slot for a single ratio. Used when rebuilding results from an
    /// export.
    pub fn slot_mut(&mut self, key: RatioKey) -> &mut Money {
        match key {
            RatioKey::CurrentRatio => &mut self.liquidity.current_ratio,
            RatioKey::QuickRatio => &mut self.liquidity.quick_ratio,
            RatioKey::CashRatio => &mut self.liquidity.cash_ratio,
            RatioKey::WorkingCapital => &mut self.liquidity.working_capital,
            RatioKey::GrossProfitMargin => &mut self.profitability.gross_profit_margin,
            RatioKey::OperatingProfitMargin => &mut self.profitability.operating_profit_margin,
            RatioKey::NetProfitMargin => &mut self.profitability.net_profit_margin,
            RatioKey::ReturnOnAssets => &mut self.profitability.return_on_assets,
            RatioKey::ReturnOnEquity => &mut self.profitability.return_on_equity,
            RatioKey::AssetTurnover => &mut self.efficiency.asset_turnover,
            RatioKey::InventoryTurnover => &mut self.efficiency.inventory_turnover,
            RatioKey::ReceivablesTurnover => &mut self.efficiency.receivables_turnover,
            RatioKey::DaysInventoryOutstanding => {
                &mut self.efficiency.days_inventory_outstanding
            }
            RatioKey::DaysSalesOutstanding => &mut self.efficiency.days_sales_outstanding,
            RatioKey::DebtRatio => &mut self.leverage.debt_ratio,
            RatioKey::DebtToEquityRatio => &mut self.leverage.debt_to_equity_ratio,
            RatioKey::InterestCoverageRatio => &mut self.leverage.interest_coverage_ratio,
            RatioKey::EquityMultiplier => &mut self.leverage.equity_multiplier,
        }
    }

    /// Formatted rows in catalog order, ready for a results table.
    pub fn display_rows(&self) -> Vec<DisplayRow> {
        RatioKey::ALL
            .iter()
            .map(|&key| {
                let desc = key.descriptor();
                let value = self.get(key);
                DisplayRow {
                    section: desc.section.title().to_string(),
                    key,
                    label: desc.label.to_string(),
                    value,
                    display: desc.format.render(value),
                }
            })
            .collect()
    }
}
