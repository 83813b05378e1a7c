//! Account handlers: caller profile and email verification.

mod describe_caller;
mod send_verification;

pub use describe_caller::{CallerProfile, DescribeCallerHandler};
pub use send_verification::{SendVerificationCommand, SendVerificationHandler, VerificationOutcome};
