use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use esglens_client::{ApiClient, ClientError, NewsQuery};
use esglens_core::filter::RecordFilter;
use esglens_core::models::donation::DonationRecord;
use esglens_core::models::emission::EmissionRecord;
use esglens_core::models::employment::EmploymentRecord;
use esglens_core::models::news::{CategoryCount, NewsItem, Page, YearCount};
use esglens_core::models::organization::Organization;

use crate::cache::BoundedCache;
use crate::source::Loaded;

/// How many distinct filter selections are kept per record type.
const CACHE_CAPACITY: usize = 32;

/// One user session against the ESG backend.
///
/// Every `load_*` method returns data: live from the backend when it
/// answers, the cached copy when this filter was already fetched live,
/// and the mock supplier's substitute otherwise. The connectivity flag
/// reflects the most recent live attempt.
pub struct DashboardSession {
    client: ApiClient,
    connected: AtomicBool,
    emissions: Mutex<BoundedCache<RecordFilter, Vec<EmissionRecord>>>,
    donations: Mutex<BoundedCache<RecordFilter, Vec<DonationRecord>>>,
}

impl DashboardSession {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            connected: AtomicBool::new(false),
            emissions: Mutex::new(BoundedCache::new(CACHE_CAPACITY)),
            donations: Mutex::new(BoundedCache::new(CACHE_CAPACITY)),
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiClient::from_env())
    }

    /// Whether the most recent live attempt reached the backend.
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    pub async fn load_organizations(&self) -> Loaded<Vec<Organization>> {
        match self.run_blocking(|c| c.organizations()).await {
            Ok(rows) => self.live(rows),
            Err(e) => {
                self.note_failure("organizations", &e);
                Loaded::fallback(esglens_mock::organizations())
            }
        }
    }

    pub async fn load_emissions(&self, filter: RecordFilter) -> Loaded<Vec<EmissionRecord>> {
        if let Some(hit) = lock(&self.emissions).get(&filter) {
            debug!(?filter, "emissions cache hit");
            return Loaded::cached(hit);
        }
        match self.run_blocking(move |c| c.emissions(&filter)).await {
            Ok(rows) => {
                lock(&self.emissions).insert(filter, rows.clone());
                self.live(rows)
            }
            Err(e) => {
                self.note_failure("emissions", &e);
                Loaded::fallback(esglens_mock::emissions(&filter))
            }
        }
    }

    /// The live employments endpoint takes no parameters, so the year
    /// filter is applied here, identically for both sources.
    pub async fn load_employments(&self, filter: RecordFilter) -> Loaded<Vec<EmploymentRecord>> {
        match self.run_blocking(|c| c.employments()).await {
            Ok(rows) => self.live(filter.apply(rows)),
            Err(e) => {
                self.note_failure("employments", &e);
                Loaded::fallback(esglens_mock::employments(&filter))
            }
        }
    }

    pub async fn load_employment_years(&self) -> Loaded<Vec<i16>> {
        match self.run_blocking(|c| c.employment_years()).await {
            Ok(mut years) => {
                years.sort_unstable_by(|a, b| b.cmp(a));
                self.live(years)
            }
            Err(e) => {
                self.note_failure("employment years", &e);
                Loaded::fallback(esglens_mock::employment_years())
            }
        }
    }

    pub async fn load_news(&self, org_id: u64, query: NewsQuery) -> Loaded<Page<NewsItem>> {
        let fallback_query = query.clone();
        match self
            .run_blocking(move |c| c.positive_news(org_id, &query))
            .await
        {
            Ok(page) => self.live(page),
            Err(e) => {
                self.note_failure("positive news", &e);
                Loaded::fallback(esglens_mock::news_page(
                    org_id,
                    fallback_query.page,
                    fallback_query.size,
                    fallback_query.year,
                    fallback_query.category.as_deref(),
                ))
            }
        }
    }

    pub async fn load_news_by_year(&self, org_id: u64) -> Loaded<Vec<YearCount>> {
        match self.run_blocking(move |c| c.news_by_year(org_id)).await {
            Ok(stats) => self.live(stats),
            Err(e) => {
                self.note_failure("news year stats", &e);
                Loaded::fallback(esglens_mock::news_by_year(org_id))
            }
        }
    }

    pub async fn load_news_by_category(&self, org_id: u64) -> Loaded<Vec<CategoryCount>> {
        match self.run_blocking(move |c| c.news_by_category(org_id)).await {
            Ok(stats) => self.live(stats),
            Err(e) => {
                self.note_failure("news category stats", &e);
                Loaded::fallback(esglens_mock::news_by_category(org_id))
            }
        }
    }

    pub async fn load_donations(&self, filter: RecordFilter) -> Loaded<Vec<DonationRecord>> {
        if let Some(hit) = lock(&self.donations).get(&filter) {
            debug!(?filter, "donations cache hit");
            return Loaded::cached(hit);
        }
        match self.run_blocking(move |c| c.donations(&filter)).await {
            Ok(rows) => {
                lock(&self.donations).insert(filter, rows.clone());
                self.live(rows)
            }
            Err(e) => {
                self.note_failure("donations", &e);
                Loaded::fallback(esglens_mock::donations(&filter))
            }
        }
    }

    async fn run_blocking<T, F>(&self, fetch: F) -> Result<T, ClientError>
    where
        T: Send + 'static,
        F: FnOnce(ApiClient) -> Result<T, ClientError> + Send + 'static,
    {
        let client = self.client.clone();
        match tokio::task::spawn_blocking(move || fetch(client)).await {
            Ok(result) => result,
            Err(join) => Err(ClientError::Transport(join.to_string())),
        }
    }

    fn live<T>(&self, data: T) -> Loaded<T> {
        self.connected.store(true, Ordering::SeqCst);
        Loaded::live(data)
    }

    fn note_failure(&self, what: &str, error: &ClientError) {
        self.connected.store(false, Ordering::SeqCst);
        warn!(%error, "{what} fetch failed; serving mock data");
    }
}

fn lock<'a, K, V>(
    cache: &'a Mutex<BoundedCache<K, V>>,
) -> std::sync::MutexGuard<'a, BoundedCache<K, V>> {
    match cache.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
