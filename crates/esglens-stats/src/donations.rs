//! Donation aggregates.

use std::collections::BTreeMap;

use serde::Serialize;

use esglens_core::models::donation::DonationRecord;

use crate::buckets::{self, CategoryTotal, TOP_CATEGORY_LIMIT};
use crate::rate;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonationTotals {
    /// Summed amount, KRW.
    pub total_amount: f64,
    pub record_count: usize,
    pub verified_count: usize,
    pub verified_rate: u8,
    /// Percent change of `current_year` amount vs the prior year's;
    /// 0 when the prior total is 0.
    pub trend_pct: i64,
}

pub fn summarize(records: &[DonationRecord], current_year: i16) -> DonationTotals {
    let verified_count = records.iter().filter(|r| r.is_verified()).count();
    let year_total = |year: i16| -> f64 {
        records
            .iter()
            .filter(|r| r.year == year)
            .map(|r| r.amount)
            .sum()
    };

    DonationTotals {
        total_amount: records.iter().map(|r| r.amount).sum(),
        record_count: records.len(),
        verified_count,
        verified_rate: rate::percentage(verified_count, records.len()),
        trend_pct: rate::percent_change(year_total(current_year), year_total(current_year - 1)),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyDonations {
    pub year: i16,
    pub amount: f64,
    pub count: usize,
}

pub fn by_year(records: &[DonationRecord]) -> Vec<YearlyDonations> {
    let mut years: BTreeMap<i16, (f64, usize)> = BTreeMap::new();
    for record in records {
        let (amount, count) = years.entry(record.year).or_insert((0.0, 0));
        *amount += record.amount;
        *count += 1;
    }
    years
        .into_iter()
        .map(|(year, (amount, count))| YearlyDonations {
            year,
            amount,
            count,
        })
        .collect()
}

/// Summed amount per category, descending, `기타` for uncategorized rows.
pub fn by_category(records: &[DonationRecord]) -> Vec<CategoryTotal> {
    buckets::sum_by_label(
        records,
        |r| r.category.as_deref(),
        |r| r.amount,
        TOP_CATEGORY_LIMIT,
    )
}
