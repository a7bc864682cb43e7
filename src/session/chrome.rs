//! Chrome engine
//!
//! Drives Chrome/Chromium through chromedriver. Launch options follow
//! what CI containers need: no sandbox, no /dev/shm usage, no GPU, and
//! a fixed window size so layouts are deterministic.

use crate::error::{Result, SsoProbeError};
use crate::session::base::Engine;
use crate::session::driver::{DriverServer, DriverSpec};
use crate::session::handle::{Session, IMPLICIT_WAIT};
use async_trait::async_trait;
use thirtyfour::prelude::*;

/// chromedriver resolution parameters
pub const CHROME_DRIVER: DriverSpec = DriverSpec {
    env_override: "CHROMEDRIVER",
    binary: "chromedriver",
    port: 9515,
};

/// Chrome session factory
#[derive(Debug, Default)]
pub struct ChromeEngine;

#[async_trait]
impl Engine for ChromeEngine {
    fn name(&self) -> &'static str {
        "chrome"
    }

    async fn start(&self, headless: bool) -> Result<Session> {
        let server = DriverServer::acquire(&CHROME_DRIVER).await?;

        let mut caps = DesiredCapabilities::chrome();
        if headless {
            caps.add_arg("--headless=new")?;
        }
        caps.add_arg("--no-sandbox")?;
        caps.add_arg("--disable-dev-shm-usage")?;
        caps.add_arg("--disable-gpu")?;
        caps.add_arg("--window-size=1280,900")?;

        let driver = WebDriver::new(server.endpoint(), caps)
            .await
            .map_err(|e| SsoProbeError::Session(format!("chrome session failed: {e}")))?;
        driver.set_implicit_wait_timeout(IMPLICIT_WAIT).await?;
        Ok(Session::new(driver, Some(server)))
    }
}
