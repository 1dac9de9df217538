//! esglens-session
//!
//! The per-session data layer the presentation code talks to. Owns the
//! substitution policy (live data, falling back to the mock supplier on
//! any loader failure), a bounded per-filter cache, the connectivity
//! flag, and the stale-response guard for overlapping refreshes.

pub mod cache;
pub mod latest;
pub mod session;
pub mod source;

pub use cache::BoundedCache;
pub use latest::{LatestValue, RequestToken};
pub use session::DashboardSession;
pub use source::{DataSource, Loaded};
