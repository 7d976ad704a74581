pub mod chart;
pub mod csv_out;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}

/// Flatten nested objects into dotted keys (`liquidity.current_ratio`).
/// Arrays and scalars are kept as leaf values.
pub fn flatten(value: &Value) -> Vec<(String, Value)> {
    let mut out = Vec::new();
    flatten_into("", value, &mut out);
    out
}

fn flatten_into(prefix: &str, value: &Value, out: &mut Vec<(String, Value)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(&path, val, out);
            }
        }
        other => out.push((prefix.to_string(), other.clone())),
    }
}

/// Render a scalar for a table cell or CSV field.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_nested_groups() {
        let v = json!({
            "liquidity": { "current_ratio": "1.5", "quick_ratio": "1.1" },
            "industry": "Retail"
        });
        let flat = flatten(&v);
        let keys: Vec<&str> = flat.iter().map(|(k, _)| k.as_str()).collect();
        assert!(keys.contains(&"liquidity.current_ratio"));
        assert!(keys.contains(&"liquidity.quick_ratio"));
        assert!(keys.contains(&"industry"));
    }

    #[test]
    fn test_format_value_scalars() {
        assert_eq!(format_value(&json!("40.00%")), "40.00%");
        assert_eq!(format_value(&json!(3)), "3");
        assert_eq!(format_value(&Value::Null), "");
        assert_eq!(format_value(&json!(["a", "b"])), "a, b");
    }
}
