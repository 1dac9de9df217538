/// Which supplier produced a dataset. The presentation layer renders
/// this as the "live data" / "not connected" badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Fetched from the backend this call.
    Live,
    /// Served from the session cache; was live when fetched.
    Cached,
    /// Substituted from the mock supplier after a loader failure.
    Fallback,
}

/// A dataset plus its provenance. Every load returns one of these;
/// nothing in the session layer is fatal.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub data: T,
    pub source: DataSource,
}

impl<T> Loaded<T> {
    pub fn live(data: T) -> Self {
        Self {
            data,
            source: DataSource::Live,
        }
    }

    pub fn cached(data: T) -> Self {
        Self {
            data,
            source: DataSource::Cached,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            data,
            source: DataSource::Fallback,
        }
    }

    /// True for live and cached data alike; only mock substitution is
    /// not "live" to the status badge.
    pub fn is_live(&self) -> bool {
        self.source != DataSource::Fallback
    }
}
