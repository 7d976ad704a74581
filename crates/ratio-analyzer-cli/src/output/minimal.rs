use serde_json::Value;

use super::{flatten, format_value};

/// Keys that best summarise each command's result, in priority order.
const PRIORITY_KEYS: [&str; 6] = [
    "status",
    "path",
    "liquidity.current_ratio",
    "profitability.net_profit_margin",
    "good",
    "industry",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let flat = flatten(result_obj);

    for key in PRIORITY_KEYS {
        if let Some((_, val)) = flat.iter().find(|(k, v)| k == key && !v.is_null()) {
            println!("{}", format_value(val));
            return;
        }
    }

    match flat.first() {
        Some((key, val)) if !key.is_empty() => println!("{}: {}", key, format_value(val)),
        Some((_, val)) => println!("{}", format_value(val)),
        None => println!("{}", format_value(result_obj)),
    }
}
