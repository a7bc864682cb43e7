//! Scenario module for SsoProbe
//!
//! Each scenario is one independent verification of the SSO flow,
//! running against a fresh browser session. The catalog is flow-aware:
//! the unauthenticated-access scenarios differ between the redirect and
//! native entry-point models, the rest are shared.

pub mod helpers;
pub mod login;
pub mod persistence;
pub mod public_api;
pub mod unauthenticated;

use crate::config::{Config, FlowModel};
use crate::error::Result;
use crate::session::Session;
use async_trait::async_trait;

/// One independent verification scenario
///
/// Scenarios only use the session's capability set and the immutable
/// configuration; they hold no state of their own and never share state
/// with each other.
#[async_trait]
pub trait Scenario: Send + Sync {
    /// Stable scenario identifier (used for `--filter` and reporting)
    fn name(&self) -> &'static str;

    /// One-line human description
    fn description(&self) -> &'static str;

    /// Execute the scenario against a fresh session
    ///
    /// # Errors
    ///
    /// Returns error on any wait timeout or assertion mismatch; the
    /// failure is local to this scenario and nothing is retried.
    async fn run(&self, session: &Session, config: &Config) -> Result<()>;
}

/// The scenario catalog for a flow model
///
/// Order matters only for reporting; every scenario is independent.
pub fn scenarios_for(flow: FlowModel) -> Vec<Box<dyn Scenario>> {
    let mut scenarios: Vec<Box<dyn Scenario>> = match flow {
        FlowModel::Redirect => vec![
            Box::new(unauthenticated::RedirectToIdp),
            Box::new(unauthenticated::IdpLoginFormVisible),
        ],
        FlowModel::Native => vec![
            Box::new(unauthenticated::NativeSigninPage),
            Box::new(unauthenticated::SsoTriggerInteractable),
        ],
    };
    scenarios.push(Box::new(login::LoginReachesApp));
    scenarios.push(Box::new(login::UiLoadsAfterLogin));
    scenarios.push(Box::new(login::NoIdpErrorAfterLogin));
    scenarios.push(Box::new(persistence::SessionPersistsAfterRefresh));
    scenarios.push(Box::new(public_api::JwksEndpointPublic));
    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size_per_flow() {
        assert_eq!(scenarios_for(FlowModel::Redirect).len(), 7);
        assert_eq!(scenarios_for(FlowModel::Native).len(), 7);
    }

    #[test]
    fn test_catalog_names_unique() {
        for flow in [FlowModel::Redirect, FlowModel::Native] {
            let names: HashSet<_> = scenarios_for(flow).iter().map(|s| s.name()).collect();
            assert_eq!(names.len(), scenarios_for(flow).len());
        }
    }

    #[test]
    fn test_redirect_catalog_contains_redirect_scenario() {
        let names: Vec<_> = scenarios_for(FlowModel::Redirect)
            .iter()
            .map(|s| s.name())
            .collect();
        assert!(names.contains(&"unauthenticated_root_redirects_to_idp"));
        assert!(!names.contains(&"unauthenticated_root_shows_native_signin"));
    }

    #[test]
    fn test_native_catalog_contains_native_scenario() {
        let names: Vec<_> = scenarios_for(FlowModel::Native)
            .iter()
            .map(|s| s.name())
            .collect();
        assert!(names.contains(&"unauthenticated_root_shows_native_signin"));
        assert!(!names.contains(&"unauthenticated_root_redirects_to_idp"));
    }

    #[test]
    fn test_shared_scenarios_in_both_catalogs() {
        for flow in [FlowModel::Redirect, FlowModel::Native] {
            let names: Vec<_> = scenarios_for(flow).iter().map(|s| s.name()).collect();
            for shared in [
                "login_reaches_app",
                "ui_loads_after_login",
                "no_idp_error_after_login",
                "session_persists_after_refresh",
                "jwks_endpoint_public",
            ] {
                assert!(names.contains(&shared), "{shared} missing from {flow}");
            }
        }
    }

    #[test]
    fn test_descriptions_nonempty() {
        for scenario in scenarios_for(FlowModel::Redirect) {
            assert!(!scenario.description().is_empty());
        }
    }
}
