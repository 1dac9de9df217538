//! Group-by-label buckets for the category and industry breakdowns.

use std::collections::HashMap;

use serde::Serialize;

/// Catch-all label for records missing a category or industry.
pub const FALLBACK_CATEGORY: &str = "기타";

/// How many buckets the breakdown charts show.
pub const TOP_CATEGORY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub label: String,
    pub total: f64,
}

/// Sum `value` per label, bucketing missing labels under
/// [`FALLBACK_CATEGORY`], sorted descending by total (label order breaks
/// ties deterministically) and truncated to `limit`.
pub fn sum_by_label<T>(
    rows: &[T],
    label: impl Fn(&T) -> Option<&str>,
    value: impl Fn(&T) -> f64,
    limit: usize,
) -> Vec<CategoryTotal> {
    let mut totals: HashMap<String, f64> = HashMap::new();
    for row in rows {
        let key = label(row).unwrap_or(FALLBACK_CATEGORY).to_string();
        *totals.entry(key).or_insert(0.0) += value(row);
    }

    let mut out: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(label, total)| CategoryTotal { label, total })
        .collect();
    out.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.label.cmp(&b.label))
    });
    out.truncate(limit);
    out
}
