/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint:

- `run`   — Execute the scenario suite and report results
- `list`  — Print the scenario catalog for the selected flow
- `check` — Preflight the WebDriver setup for the selected engine

These handlers are intentionally small and use the library components:
the session factory, the scenario catalog, and the runner.
*/

use crate::config::Config;
use crate::error::Result;
use crate::runner::run_suite;
use crate::scenarios::scenarios_for;
use crate::session::create_engine;
use colored::Colorize;
use prettytable::{row, Table};

/// Run the scenario suite and print the report
///
/// # Returns
///
/// Returns the process exit code: 0 when every executed scenario
/// passed, 1 otherwise.
pub async fn run(config: Config, filter: Option<String>, json: bool) -> Result<i32> {
    tracing::info!(
        browser = %config.suite.browser,
        flow = %config.suite.flow,
        headless = config.suite.headless,
        "running scenario suite against {}",
        config.target.app_url
    );
    let report = run_suite(&config, filter.as_deref()).await?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        report.print();
    }
    Ok(report.exit_code())
}

/// Print the scenario catalog for the configured flow
pub fn list(config: &Config) {
    println!(
        "\nScenarios for the '{}' flow:\n",
        config.suite.flow
    );
    let mut table = Table::new();
    table.add_row(row!["NAME", "DESCRIPTION"]);
    for scenario in scenarios_for(config.suite.flow) {
        table.add_row(row![scenario.name(), scenario.description()]);
    }
    table.printstd();
    println!();
}

/// Preflight the WebDriver setup: start and close one session
///
/// # Returns
///
/// Returns the process exit code: 0 when a session could be
/// established, 1 otherwise.
pub async fn check(config: &Config) -> Result<i32> {
    let engine = create_engine(config.suite.browser);
    println!("Checking WebDriver setup for {} ...", engine.name());
    match engine.start(config.suite.headless).await {
        Ok(session) => {
            if let Err(err) = session.quit().await {
                tracing::warn!("failed to close preflight session: {err:#}");
            }
            println!("{} {} session established", "ok:".green().bold(), engine.name());
            Ok(0)
        }
        Err(err) => {
            println!("{} {err:#}", "failed:".red().bold());
            Ok(1)
        }
    }
}
