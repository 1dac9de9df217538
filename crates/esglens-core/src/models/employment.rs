use serde::{Deserialize, Serialize};

use crate::filter::Filterable;
use crate::numeric;

use super::verification::VerificationStatus;

/// One organization's workforce figures for one year.
///
/// Employment rows carry only an organization name (no id), so
/// organization-scoped filters never match them; the dashboard filtered
/// employment by year alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentRecord {
    pub id: u64,
    pub organization_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_code: Option<String>,
    pub year: i16,
    #[serde(default, deserialize_with = "numeric::lenient_u32")]
    pub total_employees: u32,
    #[serde(default, deserialize_with = "numeric::lenient_u32")]
    pub male_employees: u32,
    #[serde(default, deserialize_with = "numeric::lenient_u32")]
    pub female_employees: u32,
    #[serde(default, deserialize_with = "numeric::lenient_u32")]
    pub regular_employees: u32,
    #[serde(default, deserialize_with = "numeric::lenient_u32")]
    pub contract_employees: u32,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub average_service_years: f64,
    #[serde(default, deserialize_with = "numeric::lenient_u32")]
    pub new_hires: u32,
    #[serde(default, deserialize_with = "numeric::lenient_u32")]
    pub resigned: u32,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub turnover_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<VerificationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
}

impl EmploymentRecord {
    pub fn is_verified(&self) -> bool {
        super::verification::is_verified(self.verification_status.as_ref())
    }
}

impl Filterable for EmploymentRecord {
    fn year(&self) -> i16 {
        self.year
    }

    fn organization_id(&self) -> Option<u64> {
        None
    }
}
