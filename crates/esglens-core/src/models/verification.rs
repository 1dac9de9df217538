use serde::{Deserialize, Serialize};

/// Backend verification label, kept verbatim.
///
/// The set of labels is not a backend contract; the client policy is that
/// exactly `검증완료` counts as verified and every other label — known or
/// not — counts as unverified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct VerificationStatus(pub String);

impl VerificationStatus {
    /// Independently confirmed figure.
    pub const VERIFIED: &'static str = "검증완료";
    /// Verification in progress.
    pub const IN_REVIEW: &'static str = "검증중";
    /// Scraped automatically, never reviewed.
    pub const AUTO_COLLECTED: &'static str = "자동수집";

    pub fn is_verified(&self) -> bool {
        self.0 == Self::VERIFIED
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VerificationStatus {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

/// The verification policy applied to optional status fields: a missing
/// status is unverified.
pub fn is_verified(status: Option<&VerificationStatus>) -> bool {
    status.is_some_and(VerificationStatus::is_verified)
}
