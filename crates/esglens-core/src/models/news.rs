use serde::{Deserialize, Serialize};

/// One positive-news article matched to an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: u64,
    pub organization_name: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    /// Kept as the backend's display string; no date arithmetic happens
    /// client-side.
    pub published_date: String,
    pub category: String,
    #[serde(default)]
    pub matched_keywords: String,
}

/// A server-paginated slice, Spring-style: `content` plus page totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
            total_elements: 0,
        }
    }
}

/// Precomputed `stats/by-year` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i16,
    pub count: u64,
}

/// Precomputed `stats/by-category` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}
