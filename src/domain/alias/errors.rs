//! Alias registry error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors surfaced by registry and resolver operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    /// Empty or malformed key/destination.
    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    /// The caller has not verified their email address.
    #[error("Email address has not been verified")]
    EmailNotVerified,

    /// Another record already holds the key.
    #[error("Key already exists: {0}")]
    DuplicateKey(String),

    /// No record with this id or key.
    #[error("Alias not found: {0}")]
    NotFound(String),

    /// The record is not visible to the caller.
    #[error("Permission denied")]
    PermissionDenied,

    /// The store or identity provider failed.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl AliasError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AliasError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        AliasError::NotFound(what.into())
    }

    pub fn duplicate_key(key: impl Into<String>) -> Self {
        AliasError::DuplicateKey(key.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        AliasError::UpstreamUnavailable(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AliasError::Validation { .. } => ErrorCode::ValidationFailed,
            AliasError::EmailNotVerified => ErrorCode::EmailNotVerified,
            AliasError::DuplicateKey(_) => ErrorCode::DuplicateKey,
            AliasError::NotFound(_) => ErrorCode::AliasNotFound,
            AliasError::PermissionDenied => ErrorCode::Forbidden,
            AliasError::UpstreamUnavailable(_) => ErrorCode::UpstreamUnavailable,
        }
    }
}

impl From<ValidationError> for AliasError {
    fn from(err: ValidationError) -> Self {
        AliasError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for AliasError {
    fn from(err: DomainError) -> Self {
        let detail = |name: &str| err.details.get(name).cloned();
        match err.code {
            ErrorCode::DuplicateKey => {
                AliasError::DuplicateKey(detail("key").unwrap_or_else(|| err.message.clone()))
            }
            ErrorCode::AliasNotFound => {
                AliasError::NotFound(detail("id").unwrap_or_else(|| err.message.clone()))
            }
            ErrorCode::ValidationFailed => AliasError::Validation {
                field: detail("field").unwrap_or_else(|| "unknown".to_string()),
                message: err.message.clone(),
            },
            ErrorCode::Forbidden => AliasError::PermissionDenied,
            ErrorCode::EmailNotVerified => AliasError::EmailNotVerified,
            _ => AliasError::UpstreamUnavailable(err.to_string()),
        }
    }
}
