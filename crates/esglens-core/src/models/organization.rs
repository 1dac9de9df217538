use serde::{Deserialize, Serialize};

/// A reporting organization. Read-only here; identity is `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub org_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<jiff::Timestamp>,
}

/// The nested `{ id, name }` organization reference some endpoints embed
/// instead of (or alongside) the flat `organizationId`/`organizationName`
/// fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgRef {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
