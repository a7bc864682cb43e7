//! CLI behavior that does not require a browser: catalog listing,
//! option validation, and filtered runs that execute nothing.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn ssoprobe() -> Command {
    let mut cmd = Command::cargo_bin("ssoprobe").unwrap();
    for var in common::CONFIG_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn list_prints_redirect_catalog_by_default() {
    ssoprobe()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("unauthenticated_root_redirects_to_idp"))
        .stdout(predicate::str::contains("idp_login_form_visible"))
        .stdout(predicate::str::contains("login_reaches_app"))
        .stdout(predicate::str::contains("session_persists_after_refresh"))
        .stdout(predicate::str::contains("jwks_endpoint_public"));
}

#[test]
fn list_native_flow_swaps_entry_scenarios() {
    ssoprobe()
        .args(["list", "--flow", "native"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unauthenticated_root_shows_native_signin"))
        .stdout(predicate::str::contains("sso_trigger_interactable"))
        .stdout(predicate::str::contains("unauthenticated_root_redirects_to_idp").not());
}

#[test]
fn invalid_flow_is_rejected() {
    ssoprobe()
        .args(["list", "--flow", "hybrid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown flow"));
}

#[test]
fn invalid_browser_is_rejected() {
    ssoprobe()
        .args(["run", "--browser", "opera"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown browser"));
}

#[test]
fn run_with_unmatched_filter_passes_without_a_browser() {
    ssoprobe()
        .args(["run", "--filter", "no_such_scenario"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 passed, 0 failed, 0 errors"));
}

#[test]
fn run_with_unmatched_filter_emits_json_report() {
    ssoprobe()
        .args(["run", "--filter", "no_such_scenario", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcomes\": []"))
        .stdout(predicate::str::contains("\"browser\": \"chrome\""));
}

#[test]
fn help_mentions_subcommands() {
    ssoprobe()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("check"));
}
