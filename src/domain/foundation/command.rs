//! Request context carried into registry command handlers.
//!
//! Handlers log the correlation id with every mutation so a log line can be
//! matched to the HTTP request (and its `x-request-id`) that caused it.

use uuid::Uuid;

use super::UserId;

/// Who issued a command, and which request it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMetadata {
    pub user_id: UserId,
    correlation_id: String,
    source: &'static str,
}

impl CommandMetadata {
    /// Fresh metadata with a generated correlation id.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            correlation_id: Uuid::new_v4().to_string(),
            source: "internal",
        }
    }

    /// Replaces the generated correlation id; blank ids are ignored.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if !id.trim().is_empty() {
            self.correlation_id = id;
        }
        self
    }

    pub fn with_source(mut self, source: &'static str) -> Self {
        self.source = source;
        self
    }

    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }

    pub fn source(&self) -> &'static str {
        self.source
    }
}

#[cfg(test)]
impl CommandMetadata {
    pub fn test_fixture() -> Self {
        Self::new(UserId::new("test-user-123").unwrap())
            .with_correlation_id("test-correlation-id")
            .with_source("test")
    }
}
