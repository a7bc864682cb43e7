//! Suite runner
//!
//! Executes scenarios sequentially, one fresh browser session per
//! scenario. The session is closed on every exit path before the next
//! scenario starts; a session-acquisition failure aborts only the
//! affected scenario. Nothing is retried.

use crate::config::Config;
use crate::error::Result;
use crate::report::{RunReport, ScenarioOutcome, ScenarioStatus};
use crate::scenarios::{scenarios_for, Scenario};
use crate::session::{create_engine, Engine, Session};
use std::time::Instant;

/// Run the scenario catalog for the configured flow and browser
///
/// # Arguments
///
/// * `config` - Resolved, immutable run configuration
/// * `filter` - Optional substring; only scenarios whose name contains
///   it are executed
///
/// # Returns
///
/// Returns the aggregate report; the caller decides the exit code.
pub async fn run_suite(config: &Config, filter: Option<&str>) -> Result<RunReport> {
    let engine = create_engine(config.suite.browser);
    let mut report = RunReport::new(engine.name(), config.suite.flow);

    for scenario in scenarios_for(config.suite.flow) {
        if let Some(fragment) = filter {
            if !scenario.name().contains(fragment) {
                tracing::debug!(scenario = scenario.name(), "skipped by filter");
                continue;
            }
        }
        let outcome = run_one(engine.as_ref(), scenario.as_ref(), config).await;
        report.record(outcome);
    }
    Ok(report)
}

/// Execute a single scenario with a fresh session and guaranteed release
async fn run_one(engine: &dyn Engine, scenario: &dyn Scenario, config: &Config) -> ScenarioOutcome {
    tracing::info!(scenario = scenario.name(), "starting");
    let started = Instant::now();

    let session = match engine.start(config.suite.headless).await {
        Ok(session) => session,
        Err(err) => {
            tracing::error!(scenario = scenario.name(), "session acquisition failed: {err:#}");
            return ScenarioOutcome::new(
                scenario.name(),
                scenario.description(),
                ScenarioStatus::Error(format!("session acquisition failed: {err:#}")),
                started.elapsed(),
            );
        }
    };

    let result = scenario.run(&session, config).await;
    // The session is closed whether the scenario passed or not.
    quit_session(session).await;

    let status = match result {
        Ok(()) => {
            tracing::info!(scenario = scenario.name(), "passed");
            ScenarioStatus::Passed
        }
        Err(err) => {
            tracing::warn!(scenario = scenario.name(), "failed: {err:#}");
            ScenarioStatus::Failed(format!("{err:#}"))
        }
    };
    ScenarioOutcome::new(
        scenario.name(),
        scenario.description(),
        status,
        started.elapsed(),
    )
}

async fn quit_session(session: Session) {
    if let Err(err) = session.quit().await {
        tracing::warn!("failed to close browser session: {err:#}");
    }
}
