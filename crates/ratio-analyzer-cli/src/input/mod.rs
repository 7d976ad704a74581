pub mod file;

use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Deserialize a JSON document piped on stdin.
///
/// `None` when stdin is a terminal or the pipe carried only whitespace.
pub fn read_piped<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    if buffer.trim().is_empty() {
        return Ok(None);
    }

    let doc = serde_json::from_str(&buffer).map_err(|e| format!("Failed to parse stdin: {}", e))?;
    tracing::debug!(bytes = buffer.len(), "read input document from stdin");
    Ok(Some(doc))
}
