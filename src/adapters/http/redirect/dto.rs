//! HTTP DTOs for key resolution.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedAliasResponse {
    pub key: String,
    pub destination: String,
}
