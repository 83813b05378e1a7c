//! HTTP DTOs for alias endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::alias::{AliasField, AliasRecord};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of create and update requests. Owner fields are never read from here.
#[derive(Debug, Clone, Deserialize)]
pub struct AliasRequest {
    pub key: String,
    #[serde(alias = "link")]
    pub destination: String,
}

/// Query parameters for listing aliases.
///
/// Without `q` the full visible list is returned; with `q` the list is
/// filtered by `field` (default `key`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAliasesParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub field: AliasField,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct AliasResponse {
    pub id: String,
    pub key: String,
    pub destination: String,
    pub owner_email: String,
    pub owner_display_name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AliasRecord> for AliasResponse {
    fn from(record: AliasRecord) -> Self {
        Self {
            id: record.id().to_string(),
            key: record.key().to_string(),
            destination: record.destination().to_string(),
            owner_email: record.owner_email().to_string(),
            owner_display_name: record.owner_display_name().to_string(),
            created_at: record.created_at().to_rfc3339(),
            updated_at: record.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AliasListResponse {
    pub items: Vec<AliasResponse>,
    pub total: usize,
}

impl From<Vec<AliasRecord>> for AliasListResponse {
    fn from(records: Vec<AliasRecord>) -> Self {
        let items: Vec<AliasResponse> = records.into_iter().map(Into::into).collect();
        Self {
            total: items.len(),
            items,
        }
    }
}
