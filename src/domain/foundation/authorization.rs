//! Caller identity and administrator policy.
//!
//! The administrator is a single identity named by configuration. Whether a
//! caller is that administrator is a pure function of the caller's email and
//! the configured value; it is decided again for every operation and never
//! stored on records or cached across requests.
//!
//! ```text
//! AuthenticatedUser ──┐
//!                     ├── AdminPolicy::caller() ──> Caller { user, is_admin }
//! admin_email config ─┘
//! ```

use super::AuthenticatedUser;

/// Decides administrator status from a configured privileged email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminPolicy {
    admin_email: Option<String>,
}

impl AdminPolicy {
    /// Creates a policy for the given administrator email.
    ///
    /// An empty string is treated the same as no administrator.
    pub fn new(admin_email: Option<String>) -> Self {
        Self {
            admin_email: admin_email.filter(|email| !email.is_empty()),
        }
    }

    /// A policy under which nobody is administrator.
    pub fn without_admin() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive comparison against the configured email.
    pub fn is_admin(&self, user: &AuthenticatedUser) -> bool {
        self.admin_email
            .as_deref()
            .is_some_and(|admin| admin == user.email)
    }

    /// Builds the per-operation caller view of `user`.
    pub fn caller(&self, user: AuthenticatedUser) -> Caller {
        let is_admin = self.is_admin(&user);
        Caller { user, is_admin }
    }
}

/// The identity performing a registry operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub user: AuthenticatedUser,
    pub is_admin: bool,
}

impl Caller {
    pub fn email(&self) -> &str {
        &self.user.email
    }

    pub fn is_verified(&self) -> bool {
        self.user.email_verified
    }
}
