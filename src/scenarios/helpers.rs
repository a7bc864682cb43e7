//! Shared scenario helpers
//!
//! Login drivers reused across scenarios plus the pure predicates the
//! assertions are built from. The predicates are free functions so they
//! can be unit tested without a browser.

use crate::config::{Config, FlowModel};
use crate::error::{Result, SsoProbeError};
use crate::session::Session;
use thirtyfour::By;

/// Identity-provider error tokens that must not appear after login
pub const ERROR_MARKERS: [&str; 5] = [
    "invalid_grant",
    "client_error",
    "access denied",
    "forbidden",
    "error_description",
];

/// Page sources at or below this length are treated as blank/error pages
pub const MIN_UI_SOURCE_LEN: usize = 500;

/// Host-and-path fragment of a URL, without the scheme
///
/// `http://auth.example.com` becomes `auth.example.com`; used for
/// "did we land on this host" substring checks against `current_url`.
pub fn host_fragment(url: &str) -> &str {
    url.split_once("//")
        .map(|(_, rest)| rest)
        .unwrap_or(url)
        .trim_end_matches('/')
}

/// First identity-provider error marker found in a page source, if any
pub fn find_error_marker(source: &str) -> Option<&'static str> {
    let lower = source.to_lowercase();
    ERROR_MARKERS.iter().find(|m| lower.contains(**m)).copied()
}

/// Whether a page source looks like a rendered UI
///
/// Requires the source to exceed [`MIN_UI_SOURCE_LEN`] characters and to
/// contain at least one marker token, case-insensitive. A source of
/// exactly the threshold length fails.
pub fn ui_looks_loaded(source: &str, markers: &[String]) -> bool {
    if source.len() <= MIN_UI_SOURCE_LEN {
        return false;
    }
    let lower = source.to_lowercase();
    markers.iter().any(|m| lower.contains(&m.to_lowercase()))
}

/// Fill and submit the identity-provider credential form
///
/// Waits for the `username` field, clears and fills both fields, and
/// clicks the `kc-login` submit control.
pub async fn idp_login(session: &Session, config: &Config) -> Result<()> {
    session
        .wait_for_element(By::Id("username"), config.wait_timeout())
        .await?;
    session
        .fill(By::Id("username"), &config.credentials.username)
        .await?;
    session
        .fill(By::Id("password"), &config.credentials.password)
        .await?;
    session.click(By::Id("kc-login")).await?;
    Ok(())
}

/// Locate the SSO trigger on the native sign-in page and activate it
pub async fn activate_sso_trigger(session: &Session, config: &Config) -> Result<()> {
    let trigger = session
        .wait_for_displayed(
            By::Css(config.suite.sso_button_css.as_str()),
            config.wait_timeout(),
        )
        .await?;
    trigger.click().await?;
    Ok(())
}

/// Authenticate from a fresh session, flow-aware
///
/// Redirect flow: the root URL lands on the identity provider, so the
/// credential form is submitted directly. Native flow: the full round
/// trip runs first (native sign-in page, SSO trigger, identity-provider
/// host) before the credential form. Both end by waiting for the
/// browser to return to the application host.
pub async fn authenticate(session: &Session, config: &Config) -> Result<()> {
    session.goto(&config.target.app_url).await?;
    if config.suite.flow == FlowModel::Native {
        session
            .wait_for_url_contains(&config.suite.signin_path, config.wait_timeout())
            .await?;
        activate_sso_trigger(session, config).await?;
        session
            .wait_for_url_contains(host_fragment(&config.target.idp_url), config.wait_timeout())
            .await?;
    }
    idp_login(session, config).await?;
    session
        .wait_for_url_contains(host_fragment(&config.target.app_url), config.wait_timeout())
        .await?;
    Ok(())
}

/// Build an assertion failure carrying the current URL
pub fn assertion(message: impl Into<String>, current_url: impl Into<String>) -> anyhow::Error {
    SsoProbeError::Assertion {
        message: message.into(),
        current_url: current_url.into(),
    }
    .into()
}
