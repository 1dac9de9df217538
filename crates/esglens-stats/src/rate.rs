//! Shared percentage arithmetic with the divide-by-zero guards every
//! KPI card relies on.

/// `round(part / whole * 100)`, 0 when `whole` is 0. Always in 0..=100
/// when `part <= whole`.
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u8
}

/// Rounded percent change from `previous` to `current`.
///
/// Returns 0 whenever the baseline is not positive. This conflates "no
/// prior data" with "no change" — the dashboard's established policy,
/// kept as-is pending a product decision.
pub fn percent_change(current: f64, previous: f64) -> i64 {
    if previous <= 0.0 {
        return 0;
    }
    ((current - previous) / previous * 100.0).round() as i64
}

/// `part / whole * 100` as a float ratio, 0.0 when `whole` is 0.
pub fn ratio(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 { 0.0 } else { part / whole * 100.0 }
}
