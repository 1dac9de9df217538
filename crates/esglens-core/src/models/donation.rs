use serde::{Deserialize, Serialize};

use crate::filter::Filterable;
use crate::numeric;

use super::verification::VerificationStatus;

/// One donation entry, in KRW.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<u64>,
    pub organization_name: String,
    pub year: i16,
    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<VerificationStatus>,
}

impl DonationRecord {
    pub fn is_verified(&self) -> bool {
        super::verification::is_verified(self.verification_status.as_ref())
    }
}

impl Filterable for DonationRecord {
    fn year(&self) -> i16 {
        self.year
    }

    fn organization_id(&self) -> Option<u64> {
        self.organization_id
    }
}
