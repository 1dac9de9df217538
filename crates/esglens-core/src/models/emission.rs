use serde::{Deserialize, Serialize};

use crate::filter::Filterable;
use crate::numeric;

use super::organization::OrgRef;
use super::verification::VerificationStatus;

/// One organization's greenhouse-gas figures for one year, in tCO₂e.
///
/// `total_emissions` is expected to be roughly `scope1 + scope2 + scope3`
/// but the backend is trusted on that; nothing here re-derives or
/// validates the total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionRecord {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrgRef>,
    pub year: i16,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub scope1: f64,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub scope2: f64,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub scope3: f64,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub total_emissions: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<VerificationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl EmissionRecord {
    /// Owning organization id, preferring the nested reference over the
    /// flat field.
    pub fn org_id(&self) -> Option<u64> {
        self.organization
            .as_ref()
            .map(|o| o.id)
            .or(self.organization_id)
    }

    /// Display name, resolved the way the dashboard resolved it:
    /// nested ref → flat name → `#id` → `-`.
    pub fn org_label(&self) -> String {
        if let Some(org) = &self.organization
            && let Some(name) = &org.name
        {
            return name.clone();
        }
        if let Some(name) = &self.organization_name {
            return name.clone();
        }
        match self.org_id() {
            Some(id) => format!("#{id}"),
            None => "-".to_string(),
        }
    }

    pub fn is_verified(&self) -> bool {
        super::verification::is_verified(self.verification_status.as_ref())
    }
}

impl Filterable for EmissionRecord {
    fn year(&self) -> i16 {
        self.year
    }

    fn organization_id(&self) -> Option<u64> {
        self.org_id()
    }
}
