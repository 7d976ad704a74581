use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{chart, flatten, format_value};

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else if let Some(Value::Array(results)) = map.get("results") {
                print_array_table(results);
            } else {
                print_field_table(value);
            }
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_result_table(result: &Value, envelope: &Map<String, Value>) {
    if let Some(Value::Array(rows)) = envelope.get("display") {
        print_display_rows(rows);
    } else if let Some(Value::Array(comparisons)) = result.get("comparisons") {
        print_comparisons(comparisons, result);
    } else {
        print_field_table(result);
    }

    if let Some(Value::Array(bars)) = envelope.get("chart") {
        chart::print_chart(bars);
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

/// Ratio results: one row per metric, grouped by section.
fn print_display_rows(rows: &[Value]) {
    let mut builder = Builder::default();
    builder.push_record(["Section", "Metric", "Value"]);
    let mut last_section = String::new();
    for row in rows {
        let section = format_value(&row["section"]);
        // only label the first row of each section
        let shown = if section == last_section {
            String::new()
        } else {
            section.clone()
        };
        builder.push_record([
            shown,
            format_value(&row["label"]),
            format_value(&row["display"]),
        ]);
        last_section = section;
    }
    println!("{}", Table::from(builder));
}

fn print_comparisons(comparisons: &[Value], result: &Value) {
    let mut builder = Builder::default();
    builder.push_record(["Metric", "Company", "Industry", "Status"]);
    for c in comparisons {
        builder.push_record([
            format_value(&c["label"]),
            format_value(&c["company_display"]),
            format_value(&c["industry_display"]),
            format_value(&c["status"]),
        ]);
    }
    println!("Industry: {}", format_value(&result["industry"]));
    println!("{}", Table::from(builder));
    println!(
        "Good: {}  Caution: {}  Poor: {}",
        format_value(&result["good"]),
        format_value(&result["caution"]),
        format_value(&result["poor"]),
    );
}

fn print_field_table(value: &Value) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in flatten(value) {
        builder.push_record([key, format_value(&val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(headers.clone());

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }

        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}
