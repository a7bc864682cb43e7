//! Firefox engine
//!
//! Drives Firefox through geckodriver. Firefox needs no sandbox or
//! shared-memory workarounds; only the headless switch is conditional.

use crate::error::{Result, SsoProbeError};
use crate::session::base::Engine;
use crate::session::driver::{DriverServer, DriverSpec};
use crate::session::handle::{Session, IMPLICIT_WAIT};
use async_trait::async_trait;
use thirtyfour::prelude::*;

/// geckodriver resolution parameters
pub const FIREFOX_DRIVER: DriverSpec = DriverSpec {
    env_override: "GECKODRIVER",
    binary: "geckodriver",
    port: 4444,
};

/// Firefox session factory
#[derive(Debug, Default)]
pub struct FirefoxEngine;

#[async_trait]
impl Engine for FirefoxEngine {
    fn name(&self) -> &'static str {
        "firefox"
    }

    async fn start(&self, headless: bool) -> Result<Session> {
        let server = DriverServer::acquire(&FIREFOX_DRIVER).await?;

        let mut caps = DesiredCapabilities::firefox();
        if headless {
            caps.add_arg("--headless")?;
        }

        let driver = WebDriver::new(server.endpoint(), caps)
            .await
            .map_err(|e| SsoProbeError::Session(format!("firefox session failed: {e}")))?;
        driver.set_implicit_wait_timeout(IMPLICIT_WAIT).await?;
        Ok(Session::new(driver, Some(server)))
    }
}
