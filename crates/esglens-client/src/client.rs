use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::Agent;

use esglens_core::filter::RecordFilter;
use esglens_core::models::donation::DonationRecord;
use esglens_core::models::emission::EmissionRecord;
use esglens_core::models::employment::EmploymentRecord;
use esglens_core::models::news::{CategoryCount, NewsItem, Page, YearCount};
use esglens_core::models::organization::Organization;

use crate::config;
use crate::error::ClientError;

/// Parameters for the server-paginated positive-news endpoint.
/// `page` is zero-based, as the backend expects.
#[derive(Debug, Clone, Default)]
pub struct NewsQuery {
    pub page: u32,
    pub size: u32,
    pub year: Option<i16>,
    pub category: Option<String>,
}

impl NewsQuery {
    pub fn page(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            ..Self::default()
        }
    }
}

/// Blocking REST client for the ESG backend. One attempt per call;
/// connectivity status lives in the session layer, not here.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    agent: Agent,
}

impl ApiClient {
    pub fn new(base: impl AsRef<str>) -> Self {
        Self {
            base: config::normalize_base(base.as_ref()),
            agent: Agent::new_with_defaults(),
        }
    }

    /// Client against `ESGLENS_API_BASE` (or the local default).
    pub fn from_env() -> Self {
        Self::new(config::api_base())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn organizations(&self) -> Result<Vec<Organization>, ClientError> {
        self.get_json("/api/organizations", &[])
    }

    pub fn emissions(&self, filter: &RecordFilter) -> Result<Vec<EmissionRecord>, ClientError> {
        self.get_json("/api/emissions", &filter_query(filter))
    }

    pub fn emissions_for_organization(
        &self,
        org_id: u64,
    ) -> Result<Vec<EmissionRecord>, ClientError> {
        self.get_json(&format!("/api/emissions/organization/{org_id}"), &[])
    }

    pub fn employments(&self) -> Result<Vec<EmploymentRecord>, ClientError> {
        self.get_json("/api/employments", &[])
    }

    pub fn employment_years(&self) -> Result<Vec<i16>, ClientError> {
        self.get_json("/api/employments/years", &[])
    }

    pub fn positive_news(
        &self,
        org_id: u64,
        query: &NewsQuery,
    ) -> Result<Page<NewsItem>, ClientError> {
        self.get_json(
            &format!("/api/positive-news/organization/{org_id}"),
            &news_query(query),
        )
    }

    pub fn news_by_year(&self, org_id: u64) -> Result<Vec<YearCount>, ClientError> {
        self.get_json(
            &format!("/api/positive-news/organization/{org_id}/stats/by-year"),
            &[],
        )
    }

    pub fn news_by_category(&self, org_id: u64) -> Result<Vec<CategoryCount>, ClientError> {
        self.get_json(
            &format!("/api/positive-news/organization/{org_id}/stats/by-category"),
            &[],
        )
    }

    pub fn donations(&self, filter: &RecordFilter) -> Result<Vec<DonationRecord>, ClientError> {
        self.get_json("/api/donations", &filter_query(filter))
    }

    pub fn donations_for_organization(
        &self,
        org_id: u64,
    ) -> Result<Vec<DonationRecord>, ClientError> {
        self.get_json(&format!("/api/donations/organization/{org_id}"), &[])
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.base);
        debug!(%url, "GET");

        let mut request = self.agent.get(url.as_str());
        for (key, value) in query {
            request = request.query(key, value);
        }

        let mut response = request.call()?;
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(serde_json::from_str(&body)?)
    }
}

/// Query pairs for the list endpoints; absent filter fields are omitted
/// entirely rather than sent empty.
pub fn filter_query(filter: &RecordFilter) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if let Some(org) = filter.org_id {
        pairs.push(("orgId".to_string(), org.to_string()));
    }
    if let Some(from) = filter.from_year {
        pairs.push(("fromYear".to_string(), from.to_string()));
    }
    if let Some(to) = filter.to_year {
        pairs.push(("toYear".to_string(), to.to_string()));
    }
    pairs
}

/// Query pairs for the positive-news endpoint.
pub fn news_query(query: &NewsQuery) -> Vec<(String, String)> {
    let mut pairs = vec![
        ("page".to_string(), query.page.to_string()),
        ("size".to_string(), query.size.to_string()),
    ];
    if let Some(year) = query.year {
        pairs.push(("year".to_string(), year.to_string()));
    }
    if let Some(category) = &query.category {
        pairs.push(("category".to_string(), category.clone()));
    }
    pairs
}
