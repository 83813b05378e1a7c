//! Authentication configuration

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Identity provider and administrator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Expected `iss` claim of ID tokens
    pub issuer: String,

    /// Expected `aud` claim of ID tokens
    pub audience: String,

    /// Signing key set published by the issuer
    pub jwks_url: String,

    /// JWKS cache TTL in seconds
    #[serde(default = "default_jwks_cache_ttl")]
    pub jwks_cache_ttl_secs: u64,

    /// The single administrator; compared exactly against the token email
    pub admin_email: Option<String>,

    /// Identity Toolkit key for verification emails
    pub identity_toolkit_api_key: Option<SecretString>,
}

impl AuthConfig {
    pub fn jwks_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.jwks_cache_ttl_secs)
    }

    /// Validate authentication configuration
    ///
    /// In production, the issuer and the JWKS URL must both be HTTPS.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.issuer.is_empty() {
            return Err(ValidationError::MissingRequired("auth.issuer"));
        }
        if self.audience.is_empty() {
            return Err(ValidationError::MissingRequired("auth.audience"));
        }
        if self.jwks_url.is_empty() {
            return Err(ValidationError::MissingRequired("auth.jwks_url"));
        }

        if *environment == Environment::Production {
            if !self.issuer.starts_with("https://") {
                return Err(ValidationError::IssuerMustBeHttps);
            }
            if !self.jwks_url.starts_with("https://") {
                return Err(ValidationError::JwksUrlMustBeHttps);
            }
        }

        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            issuer: String::new(),
            audience: String::new(),
            jwks_url: String::new(),
            jwks_cache_ttl_secs: default_jwks_cache_ttl(),
            admin_email: None,
            identity_toolkit_api_key: None,
        }
    }
}

fn default_jwks_cache_ttl() -> u64 {
    3600
}
