//! Financial statement inputs and the lenient input layer.
//!
//! Form fields arrive as free text. Anything that does not parse as a number
//! becomes zero, so the engine always has a complete record to work with.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::catalog::Section;
use crate::types::Money;

// ---------------------------------------------------------------------------
// Input type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialInputs {
    // Balance sheet
    #[serde(default, deserialize_with = "lenient_amount")]
    pub current_assets: Money,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub cash_equivalents: Money,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub accounts_receivable: Money,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub inventory: Money,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_assets: Money,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub current_liabilities: Money,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub total_liabilities: Money,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub shareholder_equity: Money,

    // Income statement
    #[serde(default, deserialize_with = "lenient_amount")]
    pub revenue: Money,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub cost_of_goods_sold: Money,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub operating_expenses: Money,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub interest_expense: Money,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub taxes: Money,
    /// Overrides the derived net income when present.
    #[serde(
        default,
        deserialize_with = "lenient_optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub net_income: Option<Money>,
}

/// A named field of [`FinancialInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    CurrentAssets,
    CashEquivalents,
    AccountsReceivable,
    Inventory,
    TotalAssets,
    CurrentLiabilities,
    TotalLiabilities,
    ShareholderEquity,
    Revenue,
    CostOfGoodsSold,
    OperatingExpenses,
    InterestExpense,
    Taxes,
    NetIncome,
}

impl InputField {
    pub const ALL: [InputField; 14] = [
        Self::CurrentAssets,
        Self::CashEquivalents,
        Self::AccountsReceivable,
        Self::Inventory,
        Self::TotalAssets,
        Self::CurrentLiabilities,
        Self::TotalLiabilities,
        Self::ShareholderEquity,
        Self::Revenue,
        Self::CostOfGoodsSold,
        Self::OperatingExpenses,
        Self::InterestExpense,
        Self::Taxes,
        Self::NetIncome,
    ];

    /// snake_case field name, as used in JSON.
    pub fn name(self) -> &'static str {
        match self {
            Self::CurrentAssets => "current_assets",
            Self::CashEquivalents => "cash_equivalents",
            Self::AccountsReceivable => "accounts_receivable",
            Self::Inventory => "inventory",
            Self::TotalAssets => "total_assets",
            Self::CurrentLiabilities => "current_liabilities",
            Self::TotalLiabilities => "total_liabilities",
            Self::ShareholderEquity => "shareholder_equity",
            Self::Revenue => "revenue",
            Self::CostOfGoodsSold => "cost_of_goods_sold",
            Self::OperatingExpenses => "operating_expenses",
            Self::InterestExpense => "interest_expense",
            Self::Taxes => "taxes",
            Self::NetIncome => "net_income",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CurrentAssets => "Current Assets",
            Self::CashEquivalents => "Cash & Cash Equivalents",
            Self::AccountsReceivable => "Accounts Receivable",
            Self::Inventory => "Inventory",
            Self::TotalAssets => "Total Assets",
            Self::CurrentLiabilities => "Current Liabilities",
            Self::TotalLiabilities => "Total Liabilities",
            Self::ShareholderEquity => "Shareholder Equity",
            Self::Revenue => "Revenue",
            Self::CostOfGoodsSold => "Cost of Goods Sold",
            Self::OperatingExpenses => "Operating Expenses",
            Self::InterestExpense => "Interest Expense",
            Self::Taxes => "Taxes",
            Self::NetIncome => "Net Income",
        }
    }

    pub fn section(self) -> Section {
        match self {
            Self::CurrentAssets
            | Self::CashEquivalents
            | Self::AccountsReceivable
            | Self::Inventory
            | Self::TotalAssets
            | Self::CurrentLiabilities
            | Self::TotalLiabilities
            | Self::ShareholderEquity => Section::BalanceSheet,
            _ => Section::IncomeStatement,
        }
    }

    /// Accepts the snake_case name or the camelCase form field id.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name().replace('_', "") == normalized)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }

    /// `None` only for an absent net income override.
    pub fn get(self, inputs: &FinancialInputs) -> Option<Money> {
        let v = match self {
            Self::CurrentAssets => inputs.current_assets,
            Self::CashEquivalents => inputs.cash_equivalents,
            Self::AccountsReceivable => inputs.accounts_receivable,
            Self::Inventory => inputs.inventory,
            Self::TotalAssets => inputs.total_assets,
            Self::CurrentLiabilities => inputs.current_liabilities,
            Self::TotalLiabilities => inputs.total_liabilities,
            Self::ShareholderEquity => inputs.shareholder_equity,
            Self::Revenue => inputs.revenue,
            Self::CostOfGoodsSold => inputs.cost_of_goods_sold,
            Self::OperatingExpenses => inputs.operating_expenses,
            Self::InterestExpense => inputs.interest_expense,
            Self::Taxes => inputs.taxes,
            Self::NetIncome => return inputs.net_income,
        };
        Some(v)
    }

    pub fn set(self, inputs: &mut FinancialInputs, value: Money) {
        match self {
            Self::CurrentAssets => inputs.current_assets = value,
            Self::CashEquivalents => inputs.cash_equivalents = value,
            Self::AccountsReceivable => inputs.accounts_receivable = value,
            Self::Inventory => inputs.inventory = value,
            Self::TotalAssets => inputs.total_assets = value,
            Self::CurrentLiabilities => inputs.current_liabilities = value,
            Self::TotalLiabilities => inputs.total_liabilities = value,
            Self::ShareholderEquity => inputs.shareholder_equity = value,
            Self::Revenue => inputs.revenue = value,
            Self::CostOfGoodsSold => inputs.cost_of_goods_sold = value,
            Self::OperatingExpenses => inputs.operating_expenses = value,
            Self::InterestExpense => inputs.interest_expense = value,
            Self::Taxes => inputs.taxes = value,
            Self::NetIncome => inputs.net_income = Some(value),
        }
    }
}

impl FinancialInputs {
    /// Build inputs from raw `(field name, text)` pairs, as submitted by a
    /// form. Unknown names are ignored; unparseable text becomes zero. A blank
    /// net income field leaves the override unset.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut inputs = Self::default();
        for (name, text) in fields {
            let Some(field) = InputField::from_name(name) else {
                tracing::debug!(field = name, "ignoring unknown input field");
                continue;
            };
            if field == InputField::NetIncome && text.trim().is_empty() {
                continue;
            }
            field.set(&mut inputs, coerce_amount(text));
        }
        inputs
    }
}

// ---------------------------------------------------------------------------
// Coercion
// ---------------------------------------------------------------------------

/// Parse free-form numeric text. Currency symbols, thousands separators and
/// surrounding whitespace are ignored; anything else unparseable yields zero.
pub fn coerce_amount(text: &str) -> Money {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '_' | ' '))
        .collect();
    if cleaned.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .unwrap_or(Decimal::ZERO)
}

fn amount_from_value(value: &Value) -> Money {
    match value {
        Value::Number(n) => coerce_amount(&n.to_string()),
        Value::String(s) => coerce_amount(s),
        _ => Decimal::ZERO,
    }
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().map(amount_from_value).unwrap_or(Decimal::ZERO))
}

fn lenient_optional_amount<'de, D>(deserializer: D) -> Result<Option<Money>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(v) => Some(amount_from_value(&v)),
    })
}
