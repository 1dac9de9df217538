//! Emission aggregates: the KPI-card totals and the chart series.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use esglens_core::models::emission::EmissionRecord;

use crate::buckets::{self, CategoryTotal, TOP_CATEGORY_LIMIT};
use crate::rate;

/// Everything the emission KPI cards show, derived from one filtered set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmissionTotals {
    /// Sum of `total_emissions`, tCO₂e.
    pub total: f64,
    pub scope1: f64,
    pub scope2: f64,
    pub scope3: f64,
    pub record_count: usize,
    /// Distinct organizations contributing records.
    pub organization_count: usize,
    pub verified_count: usize,
    /// `round(verified / count * 100)`, 0 for an empty set.
    pub verified_rate: u8,
    /// Percent change of `current_year` total vs the prior year's total
    /// within the same set; 0 when the prior total is 0.
    pub trend_pct: i64,
}

pub fn summarize(records: &[EmissionRecord], current_year: i16) -> EmissionTotals {
    let total = records.iter().map(|r| r.total_emissions).sum();
    let scope1 = records.iter().map(|r| r.scope1).sum();
    let scope2 = records.iter().map(|r| r.scope2).sum();
    let scope3 = records.iter().map(|r| r.scope3).sum();

    let verified_count = records.iter().filter(|r| r.is_verified()).count();

    let organizations: HashSet<Option<u64>> = records.iter().map(|r| r.org_id()).collect();

    let year_total = |year: i16| -> f64 {
        records
            .iter()
            .filter(|r| r.year == year)
            .map(|r| r.total_emissions)
            .sum()
    };

    EmissionTotals {
        total,
        scope1,
        scope2,
        scope3,
        record_count: records.len(),
        organization_count: organizations.len(),
        verified_count,
        verified_rate: rate::percentage(verified_count, records.len()),
        trend_pct: rate::percent_change(year_total(current_year), year_total(current_year - 1)),
    }
}

/// One chart point per distinct year, ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyEmissions {
    pub year: i16,
    pub scope1: f64,
    pub scope2: f64,
    pub scope3: f64,
    pub total: f64,
}

pub fn by_year(records: &[EmissionRecord]) -> Vec<YearlyEmissions> {
    let mut years: BTreeMap<i16, YearlyEmissions> = BTreeMap::new();
    for record in records {
        let bucket = years.entry(record.year).or_insert(YearlyEmissions {
            year: record.year,
            scope1: 0.0,
            scope2: 0.0,
            scope3: 0.0,
            total: 0.0,
        });
        bucket.scope1 += record.scope1;
        bucket.scope2 += record.scope2;
        bucket.scope3 += record.scope3;
        bucket.total += record.total_emissions;
    }
    years.into_values().collect()
}

/// Summed emissions per industry, descending, top 10, missing industry
/// under the `기타` catch-all.
pub fn by_industry(records: &[EmissionRecord]) -> Vec<CategoryTotal> {
    buckets::sum_by_label(
        records,
        |r| r.industry.as_deref(),
        |r| r.total_emissions,
        TOP_CATEGORY_LIMIT,
    )
}
