//! Session module for SsoProbe
//!
//! This module contains the browser-session abstraction: the [`Engine`]
//! trait, the Chrome and Firefox factories, WebDriver server process
//! management, and the [`Session`] handle scenarios drive.

pub mod base;
pub mod chrome;
pub mod driver;
pub mod firefox;
pub mod handle;

pub use base::Engine;
pub use chrome::ChromeEngine;
pub use firefox::FirefoxEngine;
pub use handle::Session;

use crate::config::Browser;

/// Create an engine instance for the configured browser
///
/// # Arguments
///
/// * `browser` - The browser engine selector from configuration
///
/// # Returns
///
/// Returns a boxed engine; scenario code never depends on which variant
/// it received.
pub fn create_engine(browser: Browser) -> Box<dyn Engine> {
    match browser {
        Browser::Chrome => Box::new(ChromeEngine),
        Browser::Firefox => Box::new(FirefoxEngine),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_engine_chrome() {
        let engine = create_engine(Browser::Chrome);
        assert_eq!(engine.name(), "chrome");
    }

    #[test]
    fn test_create_engine_firefox() {
        let engine = create_engine(Browser::Firefox);
        assert_eq!(engine.name(), "firefox");
    }

    #[test]
    fn test_driver_specs_are_distinct() {
        assert_ne!(chrome::CHROME_DRIVER.port, firefox::FIREFOX_DRIVER.port);
        assert_ne!(
            chrome::CHROME_DRIVER.env_override,
            firefox::FIREFOX_DRIVER.env_override
        );
    }
}
