//! Public endpoint scenario
//!
//! The key-set (JWKS) endpoint is deliberately excluded from
//! authentication enforcement; navigating to it must never redirect to
//! the identity provider, regardless of authentication state.

use crate::config::Config;
use crate::error::Result;
use crate::scenarios::helpers::{assertion, host_fragment};
use crate::scenarios::Scenario;
use crate::session::Session;
use async_trait::async_trait;

/// Public key-set API path, relative to the application base URL
pub const JWKS_PATH: &str = "/api/v1/system/config/jwks";

/// The JWKS endpoint must respond without authentication
pub struct JwksEndpointPublic;

impl JwksEndpointPublic {
    /// Absolute JWKS URL for a configured application base
    pub fn url(config: &Config) -> String {
        format!("{}{}", config.target.app_url.trim_end_matches('/'), JWKS_PATH)
    }
}

#[async_trait]
impl Scenario for JwksEndpointPublic {
    fn name(&self) -> &'static str {
        "jwks_endpoint_public"
    }

    fn description(&self) -> &'static str {
        "The JWKS key-set endpoint responds without triggering authentication"
    }

    async fn run(&self, session: &Session, config: &Config) -> Result<()> {
        session.goto(&Self::url(config)).await?;
        let url = session.current_url().await?;
        if url.contains(host_fragment(&config.target.idp_url)) {
            return Err(assertion(
                "JWKS endpoint redirected to the identity provider; it should be public",
                url,
            ));
        }
        let source = session.page_source().await?;
        if !source.to_lowercase().contains("keys") {
            let snippet: String = source.chars().take(200).collect();
            return Err(assertion(
                format!("unexpected JWKS response, no 'keys' token: {snippet}"),
                url,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwks_url_joins_path() {
        let config = Config::default();
        assert_eq!(
            JwksEndpointPublic::url(&config),
            "http://openmetadata.192.168.11.150.nip.io/api/v1/system/config/jwks"
        );
    }

    #[test]
    fn test_jwks_url_trims_trailing_slash() {
        let mut config = Config::default();
        config.target.app_url = "http://app.local/".to_string();
        assert_eq!(
            JwksEndpointPublic::url(&config),
            "http://app.local/api/v1/system/config/jwks"
        );
    }
}
