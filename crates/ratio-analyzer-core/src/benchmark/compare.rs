use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Width of the caution band either side of a benchmark, as a fraction of
/// the benchmark's magnitude.
pub const BAND_TOLERANCE: Decimal = dec!(0.20);

/// Qualitative band of a ratio relative to its benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkStatus {
    Good,
    Caution,
    Poor,
}

impl BenchmarkStatus {
    /// Display colour used by the results view and bar chart.
    pub fn color(self) -> &'static str {
        match self {
            Self::Good => "green",
            Self::Caution => "amber",
            Self::Poor => "red",
        }
    }
}

impl std::fmt::Display for BenchmarkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Good => "Good",
            Self::Caution => "Caution",
            Self::Poor => "Poor",
        };
        write!(f, "{}", s)
    }
}

/// Classify a ratio against a benchmark.
///
/// At or beyond the benchmark in the favourable direction is `Good`; within
/// 20% of the benchmark's magnitude on the unfavourable side is `Caution`;
/// anything further is `Poor`. A zero benchmark has no caution band.
pub fn compare_to_industry_benchmark(
    ratio: Decimal,
    benchmark: Decimal,
    higher_is_better: bool,
) -> BenchmarkStatus {
    let band = benchmark.abs() * BAND_TOLERANCE;

    if higher_is_better {
        if ratio >= benchmark {
            BenchmarkStatus::Good
        } else if ratio >= benchmark.saturating_sub(band) {
            BenchmarkStatus::Caution
        } else {
            BenchmarkStatus::Poor
        }
    } else if ratio <= benchmark {
        BenchmarkStatus::Good
    } else if ratio <= benchmark.saturating_add(band) {
        BenchmarkStatus::Caution
    } else {
        BenchmarkStatus::Poor
    }
}
