//! Workforce aggregates for the employment dashboard.

use std::collections::BTreeMap;

use serde::Serialize;

use esglens_core::models::employment::EmploymentRecord;

use crate::rate;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmploymentTotals {
    pub total_employees: u64,
    /// Female share of the summed head-count, percent.
    pub female_ratio: f64,
    /// Regular-contract share of the summed head-count, percent.
    pub regular_ratio: f64,
    /// Mean of per-record average service years.
    pub avg_service_years: f64,
    pub total_new_hires: u64,
    /// Mean of per-record turnover rates, percent.
    pub avg_turnover_rate: f64,
    pub record_count: usize,
    pub verified_count: usize,
    pub verified_rate: u8,
}

pub fn summarize(records: &[EmploymentRecord]) -> EmploymentTotals {
    let total: u64 = records.iter().map(|r| r.total_employees as u64).sum();
    let female: u64 = records.iter().map(|r| r.female_employees as u64).sum();
    let regular: u64 = records.iter().map(|r| r.regular_employees as u64).sum();
    let new_hires: u64 = records.iter().map(|r| r.new_hires as u64).sum();

    let count = records.len();
    let mean = |sum: f64| if count == 0 { 0.0 } else { sum / count as f64 };
    let service_sum: f64 = records.iter().map(|r| r.average_service_years).sum();
    let turnover_sum: f64 = records.iter().map(|r| r.turnover_rate).sum();

    let verified_count = records.iter().filter(|r| r.is_verified()).count();

    EmploymentTotals {
        total_employees: total,
        female_ratio: rate::ratio(female as f64, total as f64),
        regular_ratio: rate::ratio(regular as f64, total as f64),
        avg_service_years: mean(service_sum),
        total_new_hires: new_hires,
        avg_turnover_rate: mean(turnover_sum),
        record_count: count,
        verified_count,
        verified_rate: rate::percentage(verified_count, count),
    }
}

/// One trend point per distinct year, ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyHeadcount {
    pub year: i16,
    pub total: u64,
    pub female: u64,
    pub new_hires: u64,
    /// Female share of that year's total, percent.
    pub female_ratio: f64,
}

pub fn by_year(records: &[EmploymentRecord]) -> Vec<YearlyHeadcount> {
    let mut years: BTreeMap<i16, (u64, u64, u64)> = BTreeMap::new();
    for record in records {
        let (total, female, new_hires) = years.entry(record.year).or_insert((0, 0, 0));
        *total += record.total_employees as u64;
        *female += record.female_employees as u64;
        *new_hires += record.new_hires as u64;
    }
    years
        .into_iter()
        .map(|(year, (total, female, new_hires))| YearlyHeadcount {
            year,
            total,
            female,
            new_hires,
            female_ratio: rate::ratio(female as f64, total as f64),
        })
        .collect()
}

/// Head-count summed per organization name, descending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployerTotal {
    pub name: String,
    pub total: u64,
    pub female: u64,
    pub female_ratio: f64,
}

pub fn top_employers(records: &[EmploymentRecord], limit: usize) -> Vec<EmployerTotal> {
    let mut totals: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for record in records {
        let (total, female) = totals
            .entry(record.organization_name.as_str())
            .or_insert((0, 0));
        *total += record.total_employees as u64;
        *female += record.female_employees as u64;
    }

    let mut out: Vec<EmployerTotal> = totals
        .into_iter()
        .map(|(name, (total, female))| EmployerTotal {
            name: name.to_string(),
            total,
            female,
            female_ratio: rate::ratio(female as f64, total as f64),
        })
        .collect();
    out.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.name.cmp(&b.name)));
    out.truncate(limit);
    out
}
