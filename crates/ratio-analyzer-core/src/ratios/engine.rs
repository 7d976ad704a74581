use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::time::Instant;

use super::inputs::FinancialInputs;
use super::{
    EfficiencyRatios, LeverageRatios, LiquidityRatios, ProfitSummary, ProfitabilityRatios,
    RatioResults,
};
use crate::{types::*, RatioResult};

const HUNDRED: Decimal = dec!(100);
const DAYS_PER_YEAR: Decimal = dec!(365);

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute every ratio group from a set of financial statement figures.
///
/// Pure and total: any zero denominator (or a result outside the decimal
/// range) resolves to zero instead of failing.
pub fn compute_ratios(input: &FinancialInputs) -> RatioResults {
    // -- Derived income figures ----------------------------------------------
    let gross_profit = input.revenue.saturating_sub(input.cost_of_goods_sold);
    let operating_profit = gross_profit.saturating_sub(input.operating_expenses);
    let net_income = input.net_income.unwrap_or_else(|| {
        operating_profit
            .saturating_sub(input.interest_expense)
            .saturating_sub(input.taxes)
    });

    // -- Liquidity ------------------------------------------------------------
    let liquidity = LiquidityRatios {
        current_ratio: safe_divide(input.current_assets, input.current_liabilities),
        quick_ratio: safe_divide(
            input.current_assets.saturating_sub(input.inventory),
            input.current_liabilities,
        ),
        cash_ratio: safe_divide(input.cash_equivalents, input.current_liabilities),
        working_capital: input.current_assets.saturating_sub(input.current_liabilities),
    };

    // -- Profitability --------------------------------------------------------
    let profitability = ProfitabilityRatios {
        gross_profit_margin: safe_percent(gross_profit, input.revenue),
        operating_profit_margin: safe_percent(operating_profit, input.revenue),
        net_profit_margin: safe_percent(net_income, input.revenue),
        return_on_assets: safe_percent(net_income, input.total_assets),
        return_on_equity: safe_percent(net_income, input.shareholder_equity),
    };

    // -- Efficiency -----------------------------------------------------------
    let inventory_turnover = safe_divide(input.cost_of_goods_sold, input.inventory);
    let receivables_turnover = safe_divide(input.revenue, input.accounts_receivable);
    let efficiency = EfficiencyRatios {
        asset_turnover: safe_divide(input.revenue, input.total_assets),
        inventory_turnover,
        receivables_turnover,
        days_inventory_outstanding: safe_divide(DAYS_PER_YEAR, inventory_turnover),
        days_sales_outstanding: safe_divide(DAYS_PER_YEAR, receivables_turnover),
    };

    // -- Leverage / Solvency --------------------------------------------------
    let leverage = LeverageRatios {
        debt_ratio: safe_percent(input.total_liabilities, input.total_assets),
        debt_to_equity_ratio: safe_divide(input.total_liabilities, input.shareholder_equity),
        interest_coverage_ratio: safe_divide(operating_profit, input.interest_expense),
        equity_multiplier: safe_divide(input.total_assets, input.shareholder_equity),
    };

    RatioResults {
        profit: ProfitSummary {
            gross_profit,
            operating_profit,
            net_income,
        },
        liquidity,
        profitability,
        efficiency,
        leverage,
    }
}

/// Compute ratios and wrap them in the standard envelope, with a warning for
/// every ratio group that was zeroed by an empty denominator.
pub fn analyze_ratios(input: &FinancialInputs) -> RatioResult<ComputationOutput<RatioResults>> {
    let start = Instant::now();
    let warnings = zero_denominator_warnings(input);

    let output = compute_ratios(input);

    let elapsed = start.elapsed().as_micros() as u64;
    tracing::debug!(
        warnings = warnings.len(),
        elapsed_us = elapsed,
        "computed financial ratios"
    );

    let net_income_source = if input.net_income.is_some() {
        "supplied"
    } else {
        "derived: EBIT - interest - taxes"
    };
    let assumptions = serde_json::json!({
        "zero_denominator_policy": "ratio reported as 0",
        "days_per_year": 365,
        "net_income_source": net_income_source,
        "percentages": "expressed in points (40 = 40%)"
    });

    Ok(with_metadata(
        "Financial Ratio Analysis (liquidity, profitability, efficiency, leverage)",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn safe_divide(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or(Decimal::ZERO)
}

fn safe_percent(numerator: Decimal, denominator: Decimal) -> Percent {
    safe_divide(numerator, denominator)
        .checked_mul(HUNDRED)
        .unwrap_or(Decimal::ZERO)
}

fn zero_denominator_warnings(input: &FinancialInputs) -> Vec<String> {
    let checks = [
        (
            input.current_liabilities,
            "Current liabilities are zero; current, quick and cash ratios reported as 0.",
        ),
        (
            input.revenue,
            "Revenue is zero; profit margins reported as 0.",
        ),
        (
            input.total_assets,
            "Total assets are zero; ROA, asset turnover and debt ratio reported as 0.",
        ),
        (
            input.shareholder_equity,
            "Shareholder equity is zero; ROE, debt-to-equity and equity multiplier reported as 0.",
        ),
        (
            input.inventory,
            "Inventory is zero; inventory turnover and DIO reported as 0.",
        ),
        (
            input.accounts_receivable,
            "Accounts receivable are zero; receivables turnover and DSO reported as 0.",
        ),
        (
            input.interest_expense,
            "Interest expense is zero; interest coverage reported as 0.",
        ),
    ];

    checks
        .into_iter()
        .filter(|(denominator, _)| denominator.is_zero())
        .map(|(_, msg)| msg.to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
