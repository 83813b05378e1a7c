//! HTTP DTOs for account endpoints.

use serde::Serialize;

use crate::application::handlers::account::{CallerProfile, VerificationOutcome};

#[derive(Debug, Clone, Serialize)]
pub struct CallerProfileResponse {
    pub email: String,
    pub display_name: String,
    pub email_verified: bool,
    pub is_admin: bool,
}

impl From<CallerProfile> for CallerProfileResponse {
    fn from(profile: CallerProfile) -> Self {
        Self {
            email: profile.email,
            display_name: profile.display_name,
            email_verified: profile.email_verified,
            is_admin: profile.is_admin,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationResponse {
    pub status: &'static str,
}

impl From<VerificationOutcome> for VerificationResponse {
    fn from(outcome: VerificationOutcome) -> Self {
        let status = match outcome {
            VerificationOutcome::Sent => "sent",
            VerificationOutcome::AlreadyVerified => "already_verified",
        };
        Self { status }
    }
}
