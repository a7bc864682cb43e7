//! Login scenarios
//!
//! Complete the SSO flow with valid test credentials and verify the
//! browser returns to the application, the UI actually renders, and no
//! identity-provider error page is shown.

use crate::config::Config;
use crate::error::Result;
use crate::scenarios::helpers::{
    assertion, authenticate, find_error_marker, host_fragment, ui_looks_loaded,
};
use crate::scenarios::Scenario;
use crate::session::Session;
use async_trait::async_trait;
use thirtyfour::By;

/// Login with the test account must land back on the application host
pub struct LoginReachesApp;

#[async_trait]
impl Scenario for LoginReachesApp {
    fn name(&self) -> &'static str {
        "login_reaches_app"
    }

    fn description(&self) -> &'static str {
        "Valid credentials complete the SSO flow and return to the application host"
    }

    async fn run(&self, session: &Session, config: &Config) -> Result<()> {
        authenticate(session, config).await?;
        let url = session.current_url().await?;
        if !url.contains(host_fragment(&config.target.app_url)) {
            return Err(assertion(
                format!(
                    "expected return to '{}' after login",
                    host_fragment(&config.target.app_url)
                ),
                url,
            ));
        }
        Ok(())
    }
}

/// After login, the application UI must have rendered
pub struct UiLoadsAfterLogin;

#[async_trait]
impl Scenario for UiLoadsAfterLogin {
    fn name(&self) -> &'static str {
        "ui_loads_after_login"
    }

    fn description(&self) -> &'static str {
        "After login the page is non-trivial and contains an expected UI marker"
    }

    async fn run(&self, session: &Session, config: &Config) -> Result<()> {
        authenticate(session, config).await?;
        session
            .wait_for_element(By::Css("body"), config.wait_timeout())
            .await?;
        let source = session.page_source().await?;
        if !ui_looks_loaded(&source, &config.suite.ui_markers) {
            let snippet: String = source.chars().take(200).collect();
            return Err(assertion(
                format!(
                    "UI did not load: {} chars, no marker among {:?}; starts with: {snippet}",
                    source.len(),
                    config.suite.ui_markers
                ),
                session.current_url().await?,
            ));
        }
        Ok(())
    }
}

/// After a successful login no identity-provider error page may appear
pub struct NoIdpErrorAfterLogin;

#[async_trait]
impl Scenario for NoIdpErrorAfterLogin {
    fn name(&self) -> &'static str {
        "no_idp_error_after_login"
    }

    fn description(&self) -> &'static str {
        "The page after login contains none of the known identity-provider error markers"
    }

    async fn run(&self, session: &Session, config: &Config) -> Result<()> {
        authenticate(session, config).await?;
        let source = session.page_source().await?;
        if let Some(marker) = find_error_marker(&source) {
            return Err(assertion(
                format!("error marker '{marker}' found in the page after login"),
                session.current_url().await?,
            ));
        }
        Ok(())
    }
}
