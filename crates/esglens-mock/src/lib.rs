//! esglens-mock
//!
//! The fallback supplier: fixed in-memory datasets matching every live
//! endpoint's shape, so downstream code never knows which source it is
//! looking at. The backend filters server-side; these suppliers apply
//! the same `RecordFilter` client-side before returning.
//!
//! Everything here is deterministic. Mock years track the current year,
//! as the dashboard's demo data did.

pub mod data;
pub mod news;

pub use data::{donations, emissions, employment_years, employments, organizations};
pub use news::{news_by_category, news_by_year, news_page};

/// The year mock data is anchored to.
pub fn current_year() -> i16 {
    jiff::Zoned::now().year()
}
