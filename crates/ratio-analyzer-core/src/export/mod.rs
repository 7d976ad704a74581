//! CSV export of a ratio analysis.
//!
//! The layout is a titled, sectioned sheet rather than a flat table:
//!
//! ```text
//! Financial Ratio Analysis
//! Generated,2026-10-17T09:30:00.000Z
//! Balance Sheet Data
//! Current Assets,500000,"$500,000.00"
//! ...
//! Liquidity Ratios
//! Current Ratio,1.6666666666666666666666666667,1.67
//! ```
//!
//! Metric rows carry the exact decimal value followed by its display string,
//! so a parsed export reproduces the exported figures.

pub mod csv_export;

pub use csv_export::{export_filename, export_to_csv, parse_csv_export, CsvExport};
