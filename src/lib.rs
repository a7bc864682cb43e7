//! SsoProbe - browser-driven SSO flow verification library
//!
//! This library provides the components for verifying a single-sign-on
//! deployment end to end: an application behind an authenticating proxy
//! with a Keycloak-style identity provider.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `session`: browser engine factories, WebDriver server management,
//!   and the session handle scenarios drive
//! - `scenarios`: the independent verification scenarios and their
//!   shared helpers
//! - `runner`: sequential execution with a fresh session per scenario
//! - `report`: per-scenario outcomes and aggregate reporting
//! - `config`: configuration layering and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod scenarios;
pub mod session;

// Re-export commonly used types
pub use config::{Browser, Config, FlowModel};
pub use error::{Result, SsoProbeError};
pub use report::{RunReport, ScenarioOutcome, ScenarioStatus};
pub use scenarios::{scenarios_for, Scenario};
pub use session::{create_engine, Engine, Session};
