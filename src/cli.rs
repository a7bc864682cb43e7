//! Command-line interface definition for SsoProbe
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for running the scenario suite, listing the
//! scenario catalog, and preflighting the WebDriver setup.

use clap::{Parser, Subcommand};

/// SsoProbe - browser-driven SSO flow verification
///
/// Drives a real browser through the SSO login flow of a target
/// deployment (application behind an authenticating proxy, with a
/// Keycloak-style identity provider) and reports per-scenario results.
#[derive(Parser, Debug, Clone)]
#[command(name = "ssoprobe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for SsoProbe
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the scenario suite against the target deployment
    Run {
        /// Browser engine to drive (chrome, firefox)
        #[arg(short, long)]
        browser: Option<String>,

        /// Run the browser headless (the default)
        #[arg(long)]
        headless: bool,

        /// Show the browser window (overrides --headless)
        #[arg(long)]
        no_headless: bool,

        /// Unauthenticated entry-point flow (redirect, native)
        #[arg(short, long)]
        flow: Option<String>,

        /// Only run scenarios whose name contains this substring
        #[arg(long)]
        filter: Option<String>,

        /// Emit the report as JSON instead of the colored summary
        #[arg(long)]
        json: bool,
    },

    /// List the scenario catalog for the selected flow
    List {
        /// Unauthenticated entry-point flow (redirect, native)
        #[arg(short, long)]
        flow: Option<String>,
    },

    /// Verify a WebDriver server can be resolved and a session started
    Check {
        /// Browser engine to check (chrome, firefox)
        #[arg(short, long)]
        browser: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            command: Commands::List { flow: None },
        }
    }
}
