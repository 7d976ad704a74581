use thiserror::Error;

#[derive(Debug, Error)]
pub enum RatioError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("No benchmarks for industry: {0}")]
    BenchmarkNotFound(String),

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RatioError {
    fn from(e: serde_json::Error) -> Self {
        RatioError::SerializationError(e.to_string())
    }
}

#[cfg(feature = "export")]
impl From<csv::Error> for RatioError {
    fn from(e: csv::Error) -> Self {
        RatioError::SerializationError(e.to_string())
    }
}
