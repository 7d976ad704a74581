use serde_json::{Map, Value};
use std::io;

use super::{flatten, format_value};

type StdoutWriter<'a> = csv::Writer<io::StdoutLock<'a>>;

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => write_envelope(&mut wtr, map),
        Value::Array(arr) => write_array_csv(&mut wtr, arr),
        _ => {
            let _ = wtr.write_record([format_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_envelope(wtr: &mut StdoutWriter<'_>, map: &Map<String, Value>) {
    if let Some(Value::Array(rows)) = map.get("display") {
        // ratio results: section, metric, exact value, display string
        let _ = wtr.write_record(["section", "metric", "value", "display"]);
        for row in rows {
            let _ = wtr.write_record([
                format_value(&row["section"]),
                format_value(&row["label"]),
                format_value(&row["value"]),
                format_value(&row["display"]),
            ]);
        }
    } else if let Some(Value::Array(comparisons)) =
        map.get("result").and_then(|r| r.get("comparisons"))
    {
        write_array_csv(wtr, comparisons);
    } else if let Some(result) = map.get("result").filter(|r| r.is_object()) {
        write_fields(wtr, result);
    } else if let Some(Value::Array(results)) = map.get("results") {
        write_array_csv(wtr, results);
    } else {
        write_fields(wtr, &Value::Object(map.clone()));
    }
}

fn write_fields(wtr: &mut StdoutWriter<'_>, value: &Value) {
    let _ = wtr.write_record(["field", "value"]);
    for (key, val) in flatten(value) {
        let _ = wtr.write_record([key, format_value(&val)]);
    }
}

fn write_array_csv(wtr: &mut StdoutWriter<'_>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(*h).map(format_value).unwrap_or_default())
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([format_value(item)]);
        }
    }
}
