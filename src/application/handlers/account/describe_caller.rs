//! DescribeCallerHandler - What the service knows about the signed-in user.

use std::sync::Arc;

use crate::domain::foundation::{AdminPolicy, AuthenticatedUser};

/// Caller profile as seen by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerProfile {
    pub email: String,
    pub display_name: String,
    pub email_verified: bool,
    pub is_admin: bool,
}

pub struct DescribeCallerHandler {
    policy: Arc<AdminPolicy>,
}

impl DescribeCallerHandler {
    pub fn new(policy: Arc<AdminPolicy>) -> Self {
        Self { policy }
    }

    pub fn handle(&self, user: AuthenticatedUser) -> CallerProfile {
        let caller = self.policy.caller(user);
        CallerProfile {
            display_name: caller.user.display_name_or_email().to_string(),
            email_verified: caller.is_verified(),
            is_admin: caller.is_admin,
            email: caller.user.email,
        }
    }
}
