//! Run reporting for SsoProbe
//!
//! Collects one outcome per scenario and renders either a colored
//! terminal summary or a JSON document. Outcomes share no state; the
//! aggregate only determines the process exit code.

use crate::config::FlowModel;
use crate::error::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::time::Duration;

/// Terminal state of one scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum ScenarioStatus {
    /// All assertions held
    Passed,
    /// A wait timed out or an assertion failed
    Failed(String),
    /// The browser session could not be acquired
    Error(String),
}

/// Result of one scenario execution
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    /// Scenario identifier
    pub name: String,
    /// One-line description
    pub description: String,
    /// Terminal state
    #[serde(flatten)]
    pub status: ScenarioStatus,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

impl ScenarioOutcome {
    /// Build an outcome record
    pub fn new(
        name: &str,
        description: &str,
        status: ScenarioStatus,
        duration: Duration,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            status,
            duration_ms: duration.as_millis() as u64,
        }
    }
}

/// Aggregate report for one suite run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Browser engine that was driven
    pub browser: String,
    /// Flow model the catalog was built for
    pub flow: FlowModel,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Per-scenario outcomes, in execution order
    pub outcomes: Vec<ScenarioOutcome>,
}

impl RunReport {
    /// Start an empty report
    pub fn new(browser: &str, flow: FlowModel) -> Self {
        Self {
            browser: browser.to_string(),
            flow,
            started_at: Utc::now(),
            outcomes: Vec::new(),
        }
    }

    /// Record one scenario outcome
    pub fn record(&mut self, outcome: ScenarioOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of passed scenarios
    pub fn passed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == ScenarioStatus::Passed)
            .count()
    }

    /// Number of failed scenarios
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, ScenarioStatus::Failed(_)))
            .count()
    }

    /// Number of scenarios that errored before running
    pub fn errored(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, ScenarioStatus::Error(_)))
            .count()
    }

    /// Whether every executed scenario passed
    pub fn all_passed(&self) -> bool {
        self.failed() == 0 && self.errored() == 0
    }

    /// Process exit code: 0 on all-pass, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// Render the report as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Print the colored terminal summary
    pub fn print(&self) {
        println!();
        println!(
            "SSO verification run ({} scenarios, browser: {}, flow: {})",
            self.outcomes.len(),
            self.browser,
            self.flow
        );
        println!();
        for outcome in &self.outcomes {
            let tag = match &outcome.status {
                ScenarioStatus::Passed => "PASS ".green().bold(),
                ScenarioStatus::Failed(_) => "FAIL ".red().bold(),
                ScenarioStatus::Error(_) => "ERROR".yellow().bold(),
            };
            println!(
                "  {} {} ({} ms)",
                tag,
                outcome.name,
                outcome.duration_ms
            );
            match &outcome.status {
                ScenarioStatus::Failed(reason) | ScenarioStatus::Error(reason) => {
                    println!("        {}", reason.dimmed());
                }
                ScenarioStatus::Passed => {}
            }
        }
        println!();
        let summary = format!(
            "{} passed, {} failed, {} errors",
            self.passed(),
            self.failed(),
            self.errored()
        );
        if self.all_passed() {
            println!("{}", summary.green());
        } else {
            println!("{}", summary.red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(name: &str, status: ScenarioStatus) -> ScenarioOutcome {
        ScenarioOutcome::new(name, "desc", status, Duration::from_millis(12))
    }

    #[test]
    fn test_empty_report_passes() {
        let report = RunReport::new("chrome", FlowModel::Redirect);
        assert!(report.all_passed());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_counts() {
        let mut report = RunReport::new("chrome", FlowModel::Redirect);
        report.record(outcome("a", ScenarioStatus::Passed));
        report.record(outcome("b", ScenarioStatus::Failed("timeout".to_string())));
        report.record(outcome("c", ScenarioStatus::Error("no driver".to_string())));
        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.errored(), 1);
        assert!(!report.all_passed());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_all_passed_exit_zero() {
        let mut report = RunReport::new("firefox", FlowModel::Native);
        report.record(outcome("a", ScenarioStatus::Passed));
        report.record(outcome("b", ScenarioStatus::Passed));
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_json_rendering() {
        let mut report = RunReport::new("chrome", FlowModel::Redirect);
        report.record(outcome("a", ScenarioStatus::Passed));
        report.record(outcome("b", ScenarioStatus::Failed("boom".to_string())));
        let json = report.to_json().unwrap();
        assert!(json.contains("\"browser\": \"chrome\""));
        assert!(json.contains("\"flow\": \"redirect\""));
        assert!(json.contains("\"status\": \"passed\""));
        assert!(json.contains("\"status\": \"failed\""));
        assert!(json.contains("\"reason\": \"boom\""));
    }

    #[test]
    fn test_outcome_duration_ms() {
        let o = ScenarioOutcome::new(
            "a",
            "d",
            ScenarioStatus::Passed,
            Duration::from_millis(1500),
        );
        assert_eq!(o.duration_ms, 1500);
    }
}
