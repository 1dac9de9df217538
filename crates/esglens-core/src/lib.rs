//! esglens-core
//!
//! Pure domain types, record filtering, and the numeric-safety policy.
//! No HTTP dependency — this is the shared vocabulary of the esglens
//! data layer.

pub mod error;
pub mod filter;
pub mod models;
pub mod numeric;
