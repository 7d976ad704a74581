//! Display formatting for ratio values.
//!
//! Rounding is half away from zero, so 1.665 renders as 1.67.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Money;

/// Round to `dp` places and fix the scale so trailing zeros are kept.
fn rounded(value: Decimal, dp: u32) -> Decimal {
    let mut r = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if r.is_zero() {
        // drop the sign of -0.00
        r = Decimal::ZERO;
    }
    r.rescale(dp);
    r
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$1,500,000.00`; negatives as `-$1,234.50`.
pub fn format_currency(value: Money) -> String {
    let r = rounded(value, 2);
    let text = r.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if r.is_sign_negative() { "-" } else { "" };
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// Fixed number of decimals, e.g. `1.67`.
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    rounded(value, dp).to_string()
}

/// Percentage points with a `%` suffix, e.g. `40.00%`.
pub fn format_percentage(value: Decimal, dp: u32) -> String {
    format!("{}%", format_fixed(value, dp))
}

/// `2.50x`
pub fn format_multiple(value: Decimal) -> String {
    format!("{}x", format_fixed(value, 2))
}

/// `45.6 days`
pub fn format_days(value: Decimal) -> String {
    format!("{} days", format_fixed(value, 1))
}
