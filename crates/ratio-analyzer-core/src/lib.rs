pub mod error;
pub mod ratios;
pub mod types;

#[cfg(feature = "export")]
pub mod export;

#[cfg(feature = "benchmark")]
pub mod benchmark;

pub use error::RatioError;
pub use ratios::engine::{analyze_ratios, compute_ratios};
pub use ratios::inputs::FinancialInputs;
pub use ratios::{RatioKey, RatioResults};
pub use types::*;

/// Standard result type for all ratio-analyzer operations
pub type RatioResult<T> = Result<T, RatioError>;
