use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON or YAML file (chosen by extension) into a typed struct.
pub fn read_document<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let contents = read_text(path)?;
    let parsed = match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str(&contents).map_err(|e| e.to_string()),
        _ => serde_json::from_str(&contents).map_err(|e| e.to_string()),
    };
    parsed.map_err(|e| format!("Failed to parse '{}': {}", path, e).into())
}

/// Read a file's contents as text.
pub fn read_text(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    tracing::debug!(path = %canonical.display(), bytes = contents.len(), "read input file");
    Ok(contents)
}

/// Resolve and validate the path.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratio_analyzer_core::FinancialInputs;
    use rust_decimal::Decimal;
    use std::io::Write;

    #[test]
    fn test_reads_yaml_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "current_assets: 500000\ncurrent_liabilities: \"300,000\"").unwrap();

        let inputs: FinancialInputs = read_document(file.path().to_str().unwrap()).unwrap();
        assert_eq!(inputs.current_assets, Decimal::from(500_000));
        assert_eq!(inputs.current_liabilities, Decimal::from(300_000));
    }

    #[test]
    fn test_reads_json_by_default() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"revenue": 1500000, "inventory": "n/a"}}"#).unwrap();

        let inputs: FinancialInputs = read_document(file.path().to_str().unwrap()).unwrap();
        assert_eq!(inputs.revenue, Decimal::from(1_500_000));
        assert_eq!(inputs.inventory, Decimal::ZERO);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = read_text("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
