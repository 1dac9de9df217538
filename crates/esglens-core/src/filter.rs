//! The one predicate shared by live and mock data.
//!
//! The backend applies `orgId`/`fromYear`/`toYear` server-side; the mock
//! supplier has no server, so the same filter is applied client-side.
//! Keeping a single `RecordFilter` type for both guarantees the two data
//! sources are interchangeable downstream.

/// A record that can be narrowed by organization and year range.
pub trait Filterable {
    fn year(&self) -> i16;

    /// The owning organization's id, when the record carries one.
    /// Records without an id never match an organization-scoped filter.
    fn organization_id(&self) -> Option<u64>;
}

/// Organization / year-range selection. `Hash + Eq` so it doubles as a
/// cache key in the session layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RecordFilter {
    pub org_id: Option<u64>,
    pub from_year: Option<i16>,
    pub to_year: Option<i16>,
}

impl RecordFilter {
    pub fn organization(org_id: u64) -> Self {
        Self {
            org_id: Some(org_id),
            ..Self::default()
        }
    }

    pub fn years(from: i16, to: i16) -> Self {
        Self {
            from_year: Some(from),
            to_year: Some(to),
            ..Self::default()
        }
    }

    pub fn with_organization(mut self, org_id: u64) -> Self {
        self.org_id = Some(org_id);
        self
    }

    pub fn contains_year(&self, year: i16) -> bool {
        if let Some(from) = self.from_year
            && year < from
        {
            return false;
        }
        if let Some(to) = self.to_year
            && year > to
        {
            return false;
        }
        true
    }

    pub fn matches<R: Filterable>(&self, record: &R) -> bool {
        if let Some(org) = self.org_id
            && record.organization_id() != Some(org)
        {
            return false;
        }
        self.contains_year(record.year())
    }

    /// Narrow an owned dataset in place, preserving order.
    pub fn apply<R: Filterable>(&self, mut records: Vec<R>) -> Vec<R> {
        records.retain(|r| self.matches(r));
        records
    }
}
