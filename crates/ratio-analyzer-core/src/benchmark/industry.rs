use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::compare::{compare_to_industry_benchmark, BenchmarkStatus};
use crate::ratios::{RatioKey, RatioResults, Section};
use crate::{RatioError, RatioResult};

// ---------------------------------------------------------------------------
// Configuration types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    pub value: Decimal,
    /// Falls back to the ratio's own direction when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub higher_is_better: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryBenchmarks {
    pub industry: String,
    #[serde(default)]
    pub description: String,
    pub benchmarks: BTreeMap<RatioKey, BenchmarkEntry>,
}

/// Set of industries a company can be compared against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkCatalog {
    pub industries: Vec<IndustryBenchmarks>,
}

impl BenchmarkCatalog {
    /// Parse and validate a catalog document.
    pub fn from_json_str(json: &str) -> RatioResult<Self> {
        let catalog: BenchmarkCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        tracing::debug!(
            industries = catalog.industries.len(),
            "loaded benchmark catalog"
        );
        Ok(catalog)
    }

    fn validate(&self) -> RatioResult<()> {
        let mut seen: Vec<String> = Vec::with_capacity(self.industries.len());
        for ind in &self.industries {
            let name = ind.industry.trim().to_lowercase();
            if name.is_empty() {
                return Err(RatioError::InvalidInput {
                    field: "industry".into(),
                    reason: "Industry name cannot be empty.".into(),
                });
            }
            if seen.contains(&name) {
                return Err(RatioError::InvalidInput {
                    field: "industry".into(),
                    reason: format!("Industry '{}' is defined more than once.", ind.industry),
                });
            }
            seen.push(name);
        }
        Ok(())
    }

    /// Case-insensitive lookup.
    pub fn industry(&self, name: &str) -> RatioResult<&IndustryBenchmarks> {
        let wanted = name.trim();
        self.industries
            .iter()
            .find(|i| i.industry.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RatioError::BenchmarkNotFound(wanted.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.industries.iter().map(|i| i.industry.as_str()).collect()
    }
}

// ---------------------------------------------------------------------------
// Comparison output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioComparison {
    pub key: RatioKey,
    pub label: String,
    pub section: Section,
    pub company: Decimal,
    pub industry: Decimal,
    /// company - industry
    pub variance: Decimal,
    pub higher_is_better: bool,
    pub status: BenchmarkStatus,
    pub company_display: String,
    pub industry_display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryComparison {
    pub industry: String,
    pub comparisons: Vec<RatioComparison>,
    pub good: usize,
    pub caution: usize,
    pub poor: usize,
}

/// Compare every ratio the industry defines a benchmark for, in display
/// order.
pub fn compare_to_industry(
    results: &RatioResults,
    industry: &IndustryBenchmarks,
) -> IndustryComparison {
    let comparisons: Vec<RatioComparison> = RatioKey::ALL
        .iter()
        .filter_map(|&key| {
            let entry = industry.benchmarks.get(&key)?;
            let desc = key.descriptor();
            let company = results.get(key);
            let higher_is_better = entry.higher_is_better.unwrap_or(desc.higher_is_better);
            Some(RatioComparison {
                key,
                label: desc.label.to_string(),
                section: desc.section,
                company,
                industry: entry.value,
                variance: company.saturating_sub(entry.value),
                higher_is_better,
                status: compare_to_industry_benchmark(company, entry.value, higher_is_better),
                company_display: desc.format.render(company),
                industry_display: desc.format.render(entry.value),
            })
        })
        .collect();

    let count = |s: BenchmarkStatus| comparisons.iter().filter(|c| c.status == s).count();
    let (good, caution, poor) = (
        count(BenchmarkStatus::Good),
        count(BenchmarkStatus::Caution),
        count(BenchmarkStatus::Poor),
    );

    IndustryComparison {
        industry: industry.industry.clone(),
        comparisons,
        good,
        caution,
        poor,
    }
}
