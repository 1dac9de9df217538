//! esglens-stats
//!
//! Aggregation over whichever dataset is active, live or mock. Totals,
//! verification rates, year-over-year trends, and group-by buckets for
//! the chart components. Nothing here returns an error: malformed input
//! was already coerced to zero at the model boundary.

pub mod buckets;
pub mod donations;
pub mod emissions;
pub mod employment;
pub mod rate;

pub use buckets::{CategoryTotal, FALLBACK_CATEGORY, TOP_CATEGORY_LIMIT};
