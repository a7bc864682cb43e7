//! Session persistence scenario
//!
//! After a successful login, reloading the page must not bounce back to
//! the identity provider: the proxy has to honor the session artifact
//! without re-authentication.

use crate::config::Config;
use crate::error::Result;
use crate::scenarios::helpers::{assertion, authenticate, host_fragment};
use crate::scenarios::Scenario;
use crate::session::Session;
use async_trait::async_trait;
use std::time::Duration;

/// Refresh after login must stay on the application host
pub struct SessionPersistsAfterRefresh;

#[async_trait]
impl Scenario for SessionPersistsAfterRefresh {
    fn name(&self) -> &'static str {
        "session_persists_after_refresh"
    }

    fn description(&self) -> &'static str {
        "Reloading after login does not redirect back to the identity provider"
    }

    async fn run(&self, session: &Session, config: &Config) -> Result<()> {
        authenticate(session, config).await?;

        // Let the post-login redirect settle before reloading.
        tokio::time::sleep(Duration::from_secs(1)).await;
        session.refresh().await?;
        tokio::time::sleep(Duration::from_secs(2)).await;

        let url = session.current_url().await?;
        if url.contains(host_fragment(&config.target.idp_url)) {
            return Err(assertion(
                "session did not persist: redirected to the identity provider after refresh",
                url,
            ));
        }
        if !url.contains(host_fragment(&config.target.app_url)) {
            return Err(assertion(
                format!(
                    "unexpected URL after refresh, expected host '{}'",
                    host_fragment(&config.target.app_url)
                ),
                url,
            ));
        }
        Ok(())
    }
}
