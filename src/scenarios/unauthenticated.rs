//! Unauthenticated access scenarios
//!
//! Verify that a session with no prior authentication lands on the
//! expected unauthenticated entry point and never sees authenticated
//! content. The redirect flow expects the proxy to bounce straight to
//! the identity provider; the native flow expects the application's own
//! sign-in page with a visible SSO trigger.

use crate::config::Config;
use crate::error::Result;
use crate::scenarios::helpers::{assertion, host_fragment};
use crate::scenarios::Scenario;
use crate::session::Session;
use async_trait::async_trait;
use thirtyfour::By;

/// Redirect flow: root URL must redirect to the identity provider,
/// carrying the realm name
pub struct RedirectToIdp;

#[async_trait]
impl Scenario for RedirectToIdp {
    fn name(&self) -> &'static str {
        "unauthenticated_root_redirects_to_idp"
    }

    fn description(&self) -> &'static str {
        "GET / without a session redirects to the identity provider with the expected realm"
    }

    async fn run(&self, session: &Session, config: &Config) -> Result<()> {
        session.goto(&config.target.app_url).await?;
        session
            .wait_for_url_contains(host_fragment(&config.target.idp_url), config.wait_timeout())
            .await?;
        let url = session.current_url().await?;
        if !url.contains(&config.target.realm) {
            return Err(assertion(
                format!(
                    "expected realm '{}' in the identity-provider URL",
                    config.target.realm
                ),
                url,
            ));
        }
        Ok(())
    }
}

/// Redirect flow: the identity-provider login form must expose visible
/// username and password fields
pub struct IdpLoginFormVisible;

#[async_trait]
impl Scenario for IdpLoginFormVisible {
    fn name(&self) -> &'static str {
        "idp_login_form_visible"
    }

    fn description(&self) -> &'static str {
        "The identity-provider form shows username and password fields"
    }

    async fn run(&self, session: &Session, config: &Config) -> Result<()> {
        session.goto(&config.target.app_url).await?;
        let username = session
            .wait_for_element(By::Id("username"), config.wait_timeout())
            .await?;
        let password = session.find(By::Id("password")).await?;
        if !username.is_displayed().await? {
            return Err(assertion(
                "username field is not visible",
                session.current_url().await?,
            ));
        }
        if !password.is_displayed().await? {
            return Err(assertion(
                "password field is not visible",
                session.current_url().await?,
            ));
        }
        Ok(())
    }
}

/// Native flow: root URL must land on the application's own sign-in
/// page, never on the identity provider
pub struct NativeSigninPage;

#[async_trait]
impl Scenario for NativeSigninPage {
    fn name(&self) -> &'static str {
        "unauthenticated_root_shows_native_signin"
    }

    fn description(&self) -> &'static str {
        "GET / without a session lands on the native sign-in page with the SSO trigger"
    }

    async fn run(&self, session: &Session, config: &Config) -> Result<()> {
        session.goto(&config.target.app_url).await?;
        session
            .wait_for_url_contains(&config.suite.signin_path, config.wait_timeout())
            .await?;
        let url = session.current_url().await?;
        if url.contains(host_fragment(&config.target.idp_url)) {
            return Err(assertion(
                "landed on the identity provider; expected the native sign-in page",
                url,
            ));
        }
        let trigger = session
            .wait_for_displayed(
                By::Css(config.suite.sso_button_css.as_str()),
                config.wait_timeout(),
            )
            .await?;
        let label = trigger.text().await?;
        let expected = config.suite.sso_button_label.to_lowercase();
        if !label.to_lowercase().contains(&expected) {
            return Err(assertion(
                format!(
                    "expected SSO trigger label containing '{}', observed '{}'",
                    config.suite.sso_button_label, label
                ),
                session.current_url().await?,
            ));
        }
        Ok(())
    }
}

/// Native flow: the SSO trigger control must be displayed and enabled
pub struct SsoTriggerInteractable;

#[async_trait]
impl Scenario for SsoTriggerInteractable {
    fn name(&self) -> &'static str {
        "sso_trigger_interactable"
    }

    fn description(&self) -> &'static str {
        "The SSO trigger on the native sign-in page is displayed and enabled"
    }

    async fn run(&self, session: &Session, config: &Config) -> Result<()> {
        session.goto(&config.target.app_url).await?;
        let trigger = session
            .wait_for_displayed(
                By::Css(config.suite.sso_button_css.as_str()),
                config.wait_timeout(),
            )
            .await?;
        if !trigger.is_enabled().await? {
            return Err(assertion(
                "SSO trigger is displayed but not enabled",
                session.current_url().await?,
            ));
        }
        Ok(())
    }
}
