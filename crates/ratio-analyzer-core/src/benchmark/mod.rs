//! Benchmark comparison.
//!
//! Ratios are classified against benchmark values supplied as configuration
//! (a [`industry::BenchmarkCatalog`] loaded from JSON). No benchmark figures
//! live in this crate.

pub mod chart;
pub mod compare;
pub mod industry;

pub use chart::{bar_chart, ChartBar};
pub use compare::{compare_to_industry_benchmark, BenchmarkStatus};
pub use industry::{
    compare_to_industry, BenchmarkCatalog, BenchmarkEntry, IndustryBenchmarks,
    IndustryComparison, RatioComparison,
};
