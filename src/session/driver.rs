//! WebDriver server process management
//!
//! The preferred acquisition path spawns a managed driver server
//! (chromedriver/geckodriver) resolved from a per-engine environment
//! override or a PATH search, then polls its `/status` endpoint until it
//! reports ready. When no binary can be resolved or started, acquisition
//! falls back to an already-running WebDriver endpoint instead of
//! aborting. The managed child process is killed when the server handle
//! is dropped.

use crate::error::{Result, SsoProbeError};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use tokio::time::Instant;

/// Environment variable naming an already-running WebDriver endpoint
pub const WEBDRIVER_URL_ENV: &str = "WEBDRIVER_URL";

/// How long to wait for a freshly spawned driver server to report ready
const SPAWN_READY_TIMEOUT: Duration = Duration::from_secs(10);

/// How long to wait for a pre-existing endpoint to report ready
const FALLBACK_READY_TIMEOUT: Duration = Duration::from_secs(5);

/// Poll interval for the readiness probe
const READY_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Static description of one engine's driver server
#[derive(Debug, Clone, Copy)]
pub struct DriverSpec {
    /// Environment variable that may point at the driver binary
    pub env_override: &'static str,
    /// Binary name searched on PATH
    pub binary: &'static str,
    /// Conventional local port of the driver server
    pub port: u16,
}

/// A running WebDriver server, either managed (spawned child process)
/// or external (pre-existing endpoint)
#[derive(Debug)]
pub struct DriverServer {
    child: Option<Child>,
    endpoint: String,
}

impl DriverServer {
    /// Acquire a WebDriver server for the given engine
    ///
    /// Tries to spawn a managed server first; on any failure falls back
    /// to connecting to an already-running endpoint (`WEBDRIVER_URL` or
    /// the engine's conventional localhost port).
    ///
    /// # Errors
    ///
    /// Returns a [`SsoProbeError::Driver`] error only when both
    /// mechanisms fail.
    pub async fn acquire(spec: &DriverSpec) -> Result<Self> {
        match Self::spawn(spec).await {
            Ok(server) => Ok(server),
            Err(spawn_err) => {
                tracing::warn!(
                    "could not start managed {}: {spawn_err:#}; trying existing endpoint",
                    spec.binary
                );
                let endpoint = std::env::var(WEBDRIVER_URL_ENV)
                    .unwrap_or_else(|_| format!("http://localhost:{}", spec.port));
                wait_ready(&endpoint, FALLBACK_READY_TIMEOUT)
                    .await
                    .map_err(|_| {
                        SsoProbeError::Driver(format!(
                            "no usable {} binary ({spawn_err:#}) and no WebDriver server reachable at {endpoint}",
                            spec.binary
                        ))
                    })?;
                tracing::info!("using external WebDriver server at {}", endpoint);
                Ok(Self {
                    child: None,
                    endpoint,
                })
            }
        }
    }

    /// Spawn a managed driver server process and wait for readiness
    async fn spawn(spec: &DriverSpec) -> Result<Self> {
        let binary = resolve_binary(spec)?;
        tracing::debug!("spawning {} on port {}", binary.display(), spec.port);
        let mut child = Command::new(&binary)
            .arg(format!("--port={}", spec.port))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                SsoProbeError::Driver(format!("failed to spawn {}: {e}", binary.display()))
            })?;
        let endpoint = format!("http://localhost:{}", spec.port);
        if let Err(err) = wait_ready(&endpoint, SPAWN_READY_TIMEOUT).await {
            let _ = child.kill();
            let _ = child.wait();
            return Err(err);
        }
        tracing::info!("managed {} ready at {}", spec.binary, endpoint);
        Ok(Self {
            child: Some(child),
            endpoint,
        })
    }

    /// Endpoint URL of the running server
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether this handle owns the server process
    pub fn is_managed(&self) -> bool {
        self.child.is_some()
    }
}

impl Drop for DriverServer {
    fn drop(&mut self) {
        if let Some(child) = &mut self.child {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// Resolve the driver binary for an engine
///
/// An environment override takes precedence and must point at an
/// existing file; otherwise the binary name is searched on PATH.
///
/// # Errors
///
/// Returns a [`SsoProbeError::Driver`] error when no binary is found.
pub fn resolve_binary(spec: &DriverSpec) -> Result<PathBuf> {
    if let Ok(overridden) = std::env::var(spec.env_override) {
        let path = PathBuf::from(&overridden);
        if path.is_file() {
            return Ok(path);
        }
        return Err(SsoProbeError::Driver(format!(
            "{}={} does not point at a file",
            spec.env_override, overridden
        ))
        .into());
    }
    search_path(spec.binary).ok_or_else(|| {
        SsoProbeError::Driver(format!("{} not found on PATH", spec.binary)).into()
    })
}

/// Search PATH for a binary name
fn search_path(binary: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}

/// Poll a WebDriver server's `/status` endpoint until it reports ready
///
/// # Errors
///
/// Returns a [`SsoProbeError::Driver`] error when the server does not
/// report `ready: true` within the timeout.
pub async fn wait_ready(endpoint: &str, timeout: Duration) -> Result<()> {
    let client = reqwest::Client::new();
    let status_url = format!("{}/status", endpoint.trim_end_matches('/'));
    let deadline = Instant::now() + timeout;
    loop {
        if let Ok(resp) = client.get(&status_url).send().await {
            if resp.status().is_success() {
                if let Ok(body) = resp.json::<serde_json::Value>().await {
                    if body["value"]["ready"].as_bool().unwrap_or(false) {
                        return Ok(());
                    }
                }
            }
        }
        if Instant::now() >= deadline {
            return Err(SsoProbeError::Driver(format!(
                "WebDriver server at {} did not report ready within {}s",
                endpoint,
                timeout.as_secs()
            ))
            .into());
        }
        tokio::time::sleep(READY_POLL_INTERVAL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const TEST_SPEC: DriverSpec = DriverSpec {
        env_override: "SSOPROBE_TEST_DRIVER",
        binary: "ssoprobe-test-driver-that-does-not-exist",
        port: 9599,
    };

    #[test]
    #[serial]
    fn test_resolve_binary_env_override_hit() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("fakedriver");
        std::fs::write(&fake, b"").unwrap();
        std::env::set_var(TEST_SPEC.env_override, &fake);
        let resolved = resolve_binary(&TEST_SPEC).unwrap();
        std::env::remove_var(TEST_SPEC.env_override);
        assert_eq!(resolved, fake);
    }

    #[test]
    #[serial]
    fn test_resolve_binary_env_override_missing_file() {
        std::env::set_var(TEST_SPEC.env_override, "/nonexistent/fakedriver");
        let result = resolve_binary(&TEST_SPEC);
        std::env::remove_var(TEST_SPEC.env_override);
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_resolve_binary_not_on_path() {
        std::env::remove_var(TEST_SPEC.env_override);
        assert!(resolve_binary(&TEST_SPEC).is_err());
    }

    #[tokio::test]
    async fn test_wait_ready_unreachable_endpoint_times_out() {
        // Nothing listens on this port; the probe must give up quickly.
        let result = wait_ready("http://127.0.0.1:1", Duration::from_millis(300)).await;
        assert!(result.is_err());
        let msg = format!("{:#}", result.unwrap_err());
        assert!(msg.contains("did not report ready"));
    }
}
