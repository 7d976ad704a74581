use clap::Args;
use serde_json::Value;

use ratio_analyzer_core::ratios::inputs::InputField;
use ratio_analyzer_core::{analyze_ratios, FinancialInputs};

use crate::input;

/// Financial statement figures, shared by every command that computes ratios.
///
/// Values are taken as text and coerced: anything that is not a number
/// counts as zero.
#[derive(Args, Debug, Default)]
pub struct FinancialArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Current assets
    #[arg(long, allow_hyphen_values = true)]
    pub current_assets: Option<String>,

    /// Cash and cash equivalents
    #[arg(long, alias = "cash", allow_hyphen_values = true)]
    pub cash_equivalents: Option<String>,

    /// Accounts receivable
    #[arg(long, alias = "receivables", allow_hyphen_values = true)]
    pub accounts_receivable: Option<String>,

    /// Inventory
    #[arg(long, allow_hyphen_values = true)]
    pub inventory: Option<String>,

    /// Total assets
    #[arg(long, allow_hyphen_values = true)]
    pub total_assets: Option<String>,

    /// Current liabilities
    #[arg(long, allow_hyphen_values = true)]
    pub current_liabilities: Option<String>,

    /// Total liabilities
    #[arg(long, allow_hyphen_values = true)]
    pub total_liabilities: Option<String>,

    /// Shareholder equity
    #[arg(long, alias = "equity", allow_hyphen_values = true)]
    pub shareholder_equity: Option<String>,

    /// Revenue
    #[arg(long, allow_hyphen_values = true)]
    pub revenue: Option<String>,

    /// Cost of goods sold
    #[arg(long, alias = "cogs", allow_hyphen_values = true)]
    pub cost_of_goods_sold: Option<String>,

    /// Operating expenses
    #[arg(long, alias = "opex", allow_hyphen_values = true)]
    pub operating_expenses: Option<String>,

    /// Interest expense
    #[arg(long, allow_hyphen_values = true)]
    pub interest_expense: Option<String>,

    /// Income taxes
    #[arg(long, allow_hyphen_values = true)]
    pub taxes: Option<String>,

    /// Net income (overrides EBIT - interest - taxes)
    #[arg(long, allow_hyphen_values = true)]
    pub net_income: Option<String>,
}

impl FinancialArgs {
    fn field_flags(&self) -> Vec<(&str, &str)> {
        let flags = [
            (InputField::CurrentAssets, &self.current_assets),
            (InputField::CashEquivalents, &self.cash_equivalents),
            (InputField::AccountsReceivable, &self.accounts_receivable),
            (InputField::Inventory, &self.inventory),
            (InputField::TotalAssets, &self.total_assets),
            (InputField::CurrentLiabilities, &self.current_liabilities),
            (InputField::TotalLiabilities, &self.total_liabilities),
            (InputField::ShareholderEquity, &self.shareholder_equity),
            (InputField::Revenue, &self.revenue),
            (InputField::CostOfGoodsSold, &self.cost_of_goods_sold),
            (InputField::OperatingExpenses, &self.operating_expenses),
            (InputField::InterestExpense, &self.interest_expense),
            (InputField::Taxes, &self.taxes),
            (InputField::NetIncome, &self.net_income),
        ];
        flags
            .into_iter()
            .filter_map(|(field, v)| v.as_deref().map(|text| (field.name(), text)))
            .collect()
    }
}

/// Resolve inputs from, in order: `--input` file, field flags, piped stdin.
pub fn load_inputs(args: &FinancialArgs) -> Result<FinancialInputs, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_document(path);
    }

    let flags = args.field_flags();
    if !flags.is_empty() {
        return Ok(FinancialInputs::from_fields(flags));
    }

    if let Some(piped) = input::read_piped::<FinancialInputs>()? {
        return Ok(piped);
    }

    Err("no financial figures given: pass field flags (e.g. --current-assets), \
         --input <file>, or pipe JSON on stdin"
        .into())
}

/// Arguments for the full ratio calculation
#[derive(Args)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub financials: FinancialArgs,
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = load_inputs(&args.financials)?;
    let output = analyze_ratios(&inputs)?;
    let display = serde_json::to_value(output.result.display_rows())?;

    let mut value = serde_json::to_value(&output)?;
    if let Value::Object(ref mut map) = value {
        map.insert("display".into(), display);
    }
    Ok(value)
}
