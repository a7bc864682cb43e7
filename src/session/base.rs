//! Engine trait for browser session factories
//!
//! Each supported browser engine implements [`Engine`]: it knows how to
//! acquire its WebDriver server, build launch capabilities, and start a
//! fresh session. Scenario code only ever sees the resulting
//! [`Session`](crate::session::Session) handle, so new engines can be
//! added without touching scenarios.

use crate::error::Result;
use crate::session::Session;
use async_trait::async_trait;

/// A browser engine capable of producing fresh sessions
#[async_trait]
pub trait Engine: Send + Sync {
    /// Engine name as used in configuration ("chrome", "firefox")
    fn name(&self) -> &'static str;

    /// Start a new browser session
    ///
    /// Acquires the engine's WebDriver server (managed spawn with
    /// fallback to an existing endpoint), builds launch options honoring
    /// the headless flag, establishes the session, and applies the
    /// standard implicit wait.
    ///
    /// # Errors
    ///
    /// Returns error when no WebDriver server can be acquired or the
    /// session handshake fails. The failure aborts only the scenario
    /// that requested the session.
    async fn start(&self, headless: bool) -> Result<Session>;
}
