//! esglens-client
//!
//! The remote data loader: one blocking GET per call against the ESG
//! backend's REST endpoints, JSON-decoded into `esglens-core` types.
//! No retry, no timeout, no backoff — failure is reported to the caller,
//! which decides the substitution policy.

pub mod client;
pub mod config;
pub mod error;

pub use client::{ApiClient, NewsQuery};
pub use error::ClientError;
