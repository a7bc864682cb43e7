//! Configuration management for SsoProbe
//!
//! This module handles loading, layering, and validating configuration
//! from an optional YAML file, environment variables, and CLI overrides.
//! Precedence, lowest to highest: built-in defaults, config file,
//! environment, CLI flags. Once resolved the configuration is immutable
//! and passed explicitly into every scenario and helper.

use crate::cli::{Cli, Commands};
use crate::error::{Result, SsoProbeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Browser engine selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    /// Chrome/Chromium via chromedriver
    Chrome,
    /// Firefox via geckodriver
    Firefox,
}

impl FromStr for Browser {
    type Err = SsoProbeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chrome" => Ok(Browser::Chrome),
            "firefox" => Ok(Browser::Firefox),
            other => Err(SsoProbeError::Config(format!(
                "unknown browser '{}' (expected: chrome, firefox)",
                other
            ))),
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Browser::Chrome => write!(f, "chrome"),
            Browser::Firefox => write!(f, "firefox"),
        }
    }
}

/// Unauthenticated entry-point flow model
///
/// The two deployments this suite targets expose mutually exclusive
/// unauthenticated entry points: either the proxy redirects straight to
/// the identity provider (`Redirect`), or the application serves its own
/// sign-in page carrying an SSO trigger control (`Native`). Exactly one
/// applies per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowModel {
    /// Root URL redirects directly to the identity provider
    Redirect,
    /// Root URL shows the application's native sign-in page with an SSO trigger
    Native,
}

impl FromStr for FlowModel {
    type Err = SsoProbeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redirect" => Ok(FlowModel::Redirect),
            "native" => Ok(FlowModel::Native),
            other => Err(SsoProbeError::Config(format!(
                "unknown flow '{}' (expected: redirect, native)",
                other
            ))),
        }
    }
}

impl fmt::Display for FlowModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowModel::Redirect => write!(f, "redirect"),
            FlowModel::Native => write!(f, "native"),
        }
    }
}

/// Main configuration structure for SsoProbe
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Target deployment URLs and realm
    #[serde(default)]
    pub target: TargetConfig,

    /// Test account credentials
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Suite behavior settings
    #[serde(default)]
    pub suite: SuiteConfig,
}

/// Target deployment configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Application base URL (behind the authenticating proxy)
    #[serde(default = "default_app_url")]
    pub app_url: String,

    /// Identity provider base URL
    #[serde(default = "default_idp_url")]
    pub idp_url: String,

    /// Identity provider realm name
    #[serde(default = "default_realm")]
    pub realm: String,
}

fn default_app_url() -> String {
    "http://openmetadata.192.168.11.150.nip.io".to_string()
}

fn default_idp_url() -> String {
    "http://auth.192.168.11.150.nip.io".to_string()
}

fn default_realm() -> String {
    "atlas-voyage".to_string()
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            app_url: default_app_url(),
            idp_url: default_idp_url(),
            realm: default_realm(),
        }
    }
}

/// Test account credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Username submitted to the identity provider login form
    #[serde(default = "default_username")]
    pub username: String,

    /// Password submitted to the identity provider login form
    #[serde(default = "default_password")]
    pub password: String,

    /// Email of the test account
    #[serde(default = "default_email")]
    pub email: String,
}

fn default_username() -> String {
    "testuser".to_string()
}

fn default_password() -> String {
    "TestPass1234!".to_string()
}

fn default_email() -> String {
    "testuser@demo.ai".to_string()
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            password: default_password(),
            email: default_email(),
        }
    }
}

/// Suite behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Upper bound for explicit waits, in seconds
    #[serde(default = "default_wait_timeout")]
    pub wait_timeout_seconds: u64,

    /// Unauthenticated entry-point flow model
    #[serde(default = "default_flow")]
    pub flow: FlowModel,

    /// Browser engine to drive
    #[serde(default = "default_browser")]
    pub browser: Browser,

    /// Run the browser without a visible window
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Path of the application's native sign-in page (native flow)
    #[serde(default = "default_signin_path")]
    pub signin_path: String,

    /// CSS selector of the SSO trigger control (native flow)
    #[serde(default = "default_sso_button_css")]
    pub sso_button_css: String,

    /// Expected label of the SSO trigger control (native flow)
    #[serde(default = "default_sso_button_label")]
    pub sso_button_label: String,

    /// Tokens expected in the page source of a rendered UI
    #[serde(default = "default_ui_markers")]
    pub ui_markers: Vec<String>,
}

fn default_wait_timeout() -> u64 {
    30
}

fn default_flow() -> FlowModel {
    FlowModel::Redirect
}

fn default_browser() -> Browser {
    Browser::Chrome
}

fn default_headless() -> bool {
    true
}

fn default_signin_path() -> String {
    "/signin".to_string()
}

fn default_sso_button_css() -> String {
    "[data-testid=\"signin-button\"]".to_string()
}

fn default_sso_button_label() -> String {
    "Sign in with SSO".to_string()
}

fn default_ui_markers() -> Vec<String> {
    vec!["openmetadata".to_string(), "data".to_string()]
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            wait_timeout_seconds: default_wait_timeout(),
            flow: default_flow(),
            browser: default_browser(),
            headless: default_headless(),
            signin_path: default_signin_path(),
            sso_button_css: default_sso_button_css(),
            sso_button_label: default_sso_button_label(),
            ui_markers: default_ui_markers(),
        }
    }
}

impl Config {
    /// Load configuration with full layering
    ///
    /// Reads the YAML file at `path` when it exists (absence is not an
    /// error), then applies environment overrides and CLI flags on top.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    /// * `cli` - Parsed CLI arguments supplying the highest-precedence overrides
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed, or
    /// if a CLI override names an unknown browser or flow.
    pub fn load(path: &str, cli: &Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            tracing::debug!("loading configuration from {}", path);
            let contents = std::fs::read_to_string(path)?;
            Self::from_yaml(&contents)?
        } else {
            tracing::debug!("no configuration file at {}, using defaults", path);
            Config::default()
        };
        config.apply_env();
        config.apply_cli(cli)?;
        Ok(config)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents).map_err(SsoProbeError::Yaml)?;
        Ok(config)
    }

    /// Apply environment variable overrides
    ///
    /// Recognized variables: `OM_URL`, `KC_URL`, `KC_REALM`, `TEST_USER`,
    /// `TEST_PASSWORD`, `TEST_EMAIL`, `WAIT_TIMEOUT`, `SSO_FLOW`.
    /// Values are taken as-is; an unparsable `WAIT_TIMEOUT` or `SSO_FLOW`
    /// is ignored rather than rejected.
    pub fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("OM_URL") {
            self.target.app_url = v;
        }
        if let Ok(v) = std::env::var("KC_URL") {
            self.target.idp_url = v;
        }
        if let Ok(v) = std::env::var("KC_REALM") {
            self.target.realm = v;
        }
        if let Ok(v) = std::env::var("TEST_USER") {
            self.credentials.username = v;
        }
        if let Ok(v) = std::env::var("TEST_PASSWORD") {
            self.credentials.password = v;
        }
        if let Ok(v) = std::env::var("TEST_EMAIL") {
            self.credentials.email = v;
        }
        if let Ok(v) = std::env::var("WAIT_TIMEOUT") {
            if let Ok(secs) = v.parse() {
                self.suite.wait_timeout_seconds = secs;
            }
        }
        if let Ok(v) = std::env::var("SSO_FLOW") {
            if let Ok(flow) = v.parse() {
                self.suite.flow = flow;
            }
        }
    }

    /// Apply CLI flag overrides
    ///
    /// # Errors
    ///
    /// Returns error if `--browser` or `--flow` names an unknown value.
    pub fn apply_cli(&mut self, cli: &Cli) -> Result<()> {
        match &cli.command {
            Commands::Run {
                browser,
                headless,
                no_headless,
                flow,
                ..
            } => {
                if let Some(b) = browser {
                    self.suite.browser = b.parse()?;
                }
                if let Some(f) = flow {
                    self.suite.flow = f.parse()?;
                }
                if *no_headless {
                    self.suite.headless = false;
                } else if *headless {
                    self.suite.headless = true;
                }
            }
            Commands::List { flow } => {
                if let Some(f) = flow {
                    self.suite.flow = f.parse()?;
                }
            }
            Commands::Check { browser } => {
                if let Some(b) = browser {
                    self.suite.browser = b.parse()?;
                }
            }
        }
        Ok(())
    }

    /// Validate the resolved configuration
    ///
    /// Only structurally unusable values are rejected; semantic problems
    /// (unreachable hosts, wrong credentials) surface later as wait
    /// timeouts or assertion failures.
    ///
    /// # Errors
    ///
    /// Returns error for empty URLs or credentials, or a zero wait timeout.
    pub fn validate(&self) -> Result<()> {
        if self.target.app_url.is_empty() {
            return Err(SsoProbeError::Config("app_url must not be empty".to_string()).into());
        }
        if self.target.idp_url.is_empty() {
            return Err(SsoProbeError::Config("idp_url must not be empty".to_string()).into());
        }
        if self.credentials.username.is_empty() {
            return Err(SsoProbeError::Config("username must not be empty".to_string()).into());
        }
        if self.suite.wait_timeout_seconds == 0 {
            return Err(
                SsoProbeError::Config("wait timeout must be greater than zero".to_string()).into(),
            );
        }
        Ok(())
    }

    /// Explicit wait upper bound as a [`Duration`]
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.suite.wait_timeout_seconds)
    }
}
