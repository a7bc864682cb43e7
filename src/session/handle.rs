//! Browser session handle
//!
//! Wraps a WebDriver session together with the driver server that backs
//! it, exposing the small capability set scenarios are written against:
//! navigate, locate, click, type, read the current URL, read the page
//! source, refresh, and bounded waits. Closing the session quits the
//! browser and tears down the managed driver server.

use crate::error::{Result, SsoProbeError};
use crate::session::driver::DriverServer;
use std::time::Duration;
use thirtyfour::prelude::*;
use tokio::time::Instant;

/// Implicit wait applied to element lookups on every new session
pub const IMPLICIT_WAIT: Duration = Duration::from_secs(5);

/// Poll interval for explicit waits
const WAIT_POLL_INTERVAL: Duration = Duration::from_millis(500);

/// One browser session, exclusively owned by a single scenario
pub struct Session {
    driver: WebDriver,
    // Kept alive for the lifetime of the session; dropping it kills a
    // managed driver process.
    _server: Option<DriverServer>,
}

impl Session {
    /// Wrap a WebDriver session and its backing server
    pub fn new(driver: WebDriver, server: Option<DriverServer>) -> Self {
        Self {
            driver,
            _server: server,
        }
    }

    /// Navigate to a URL
    pub async fn goto(&self, url: &str) -> Result<()> {
        tracing::debug!("navigating to {}", url);
        self.driver.goto(url).await?;
        Ok(())
    }

    /// Reload the current page
    pub async fn refresh(&self) -> Result<()> {
        self.driver.refresh().await?;
        Ok(())
    }

    /// Current URL of the browser
    pub async fn current_url(&self) -> Result<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    /// Full source of the current page
    pub async fn page_source(&self) -> Result<String> {
        Ok(self.driver.source().await?)
    }

    /// Locate an element (subject to the session's implicit wait)
    pub async fn find(&self, by: By) -> Result<WebElement> {
        Ok(self.driver.find(by).await?)
    }

    /// Clear an input element and type text into it
    pub async fn fill(&self, by: By, text: &str) -> Result<()> {
        let element = self.driver.find(by).await?;
        element.clear().await?;
        element.send_keys(text).await?;
        Ok(())
    }

    /// Click an element
    pub async fn click(&self, by: By) -> Result<()> {
        self.driver.find(by).await?.click().await?;
        Ok(())
    }

    /// Wait until the current URL contains a substring
    ///
    /// # Errors
    ///
    /// Returns [`SsoProbeError::WaitTimeout`] carrying the last observed
    /// URL when the fragment does not appear within the timeout.
    pub async fn wait_for_url_contains(&self, fragment: &str, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            let url = self.current_url().await?;
            if url.contains(fragment) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(SsoProbeError::WaitTimeout {
                    condition: format!("URL containing '{}'", fragment),
                    timeout_secs: timeout.as_secs(),
                    current_url: url,
                }
                .into());
            }
            tokio::time::sleep(WAIT_POLL_INTERVAL).await;
        }
    }

    /// Wait until an element is present in the page
    ///
    /// # Errors
    ///
    /// Returns [`SsoProbeError::WaitTimeout`] when the element does not
    /// appear within the timeout.
    pub async fn wait_for_element(&self, by: By, timeout: Duration) -> Result<WebElement> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Ok(element) = self.driver.find(by.clone()).await {
                return Ok(element);
            }
            if Instant::now() >= deadline {
                return Err(SsoProbeError::WaitTimeout {
                    condition: format!("element {:?}", by),
                    timeout_secs: timeout.as_secs(),
                    current_url: self.current_url().await.unwrap_or_default(),
                }
                .into());
            }
            tokio::time::sleep(WAIT_POLL_INTERVAL).await;
        }
    }

    /// Wait until an element is present and displayed
    ///
    /// # Errors
    ///
    /// Returns [`SsoProbeError::WaitTimeout`] when no displayed element
    /// matches within the timeout.
    pub async fn wait_for_displayed(&self, by: By, timeout: Duration) -> Result<WebElement> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Ok(element) = self.driver.find(by.clone()).await {
                if element.is_displayed().await.unwrap_or(false) {
                    return Ok(element);
                }
            }
            if Instant::now() >= deadline {
                return Err(SsoProbeError::WaitTimeout {
                    condition: format!("displayed element {:?}", by),
                    timeout_secs: timeout.as_secs(),
                    current_url: self.current_url().await.unwrap_or_default(),
                }
                .into());
            }
            tokio::time::sleep(WAIT_POLL_INTERVAL).await;
        }
    }

    /// Quit the browser and release the session
    ///
    /// Consumes the handle; the backing driver server (if managed) is
    /// killed when the handle is dropped.
    pub async fn quit(self) -> Result<()> {
        self.driver.quit().await?;
        Ok(())
    }
}
