//! Configuration layering: defaults, file, environment, CLI flags.

mod common;

use clap::Parser;
use common::{clear_config_env, temp_config_file};
use serial_test::serial;
use ssoprobe::cli::Cli;
use ssoprobe::config::{Browser, Config, FlowModel};

fn list_cli() -> Cli {
    Cli::try_parse_from(["ssoprobe", "list"]).unwrap()
}

#[test]
#[serial]
fn defaults_without_file_or_env() {
    clear_config_env();
    let config = Config::load("definitely-missing.yaml", &list_cli()).unwrap();
    assert_eq!(config.target.app_url, "http://openmetadata.192.168.11.150.nip.io");
    assert_eq!(config.target.idp_url, "http://auth.192.168.11.150.nip.io");
    assert_eq!(config.target.realm, "atlas-voyage");
    assert_eq!(config.credentials.username, "testuser");
    assert_eq!(config.suite.wait_timeout_seconds, 30);
    assert_eq!(config.suite.flow, FlowModel::Redirect);
    assert_eq!(config.suite.browser, Browser::Chrome);
    assert!(config.suite.headless);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn env_overrides_defaults() {
    clear_config_env();
    std::env::set_var("OM_URL", "http://app.test");
    std::env::set_var("KC_URL", "http://idp.test");
    std::env::set_var("KC_REALM", "other-realm");
    std::env::set_var("TEST_USER", "alice");
    std::env::set_var("WAIT_TIMEOUT", "5");
    std::env::set_var("SSO_FLOW", "native");

    let config = Config::load("definitely-missing.yaml", &list_cli()).unwrap();
    clear_config_env();

    assert_eq!(config.target.app_url, "http://app.test");
    assert_eq!(config.target.idp_url, "http://idp.test");
    assert_eq!(config.target.realm, "other-realm");
    assert_eq!(config.credentials.username, "alice");
    assert_eq!(config.suite.wait_timeout_seconds, 5);
    assert_eq!(config.suite.flow, FlowModel::Native);
}

#[test]
#[serial]
fn malformed_wait_timeout_env_is_ignored() {
    clear_config_env();
    std::env::set_var("WAIT_TIMEOUT", "soon");
    let config = Config::load("definitely-missing.yaml", &list_cli()).unwrap();
    clear_config_env();
    assert_eq!(config.suite.wait_timeout_seconds, 30);
}

#[test]
#[serial]
fn file_supplies_values_env_wins_over_file() {
    clear_config_env();
    let (_dir, path) = temp_config_file(
        r#"
target:
  app_url: "http://from-file.test"
  realm: "file-realm"
suite:
  browser: firefox
"#,
    );
    std::env::set_var("OM_URL", "http://from-env.test");

    let config = Config::load(path.to_str().unwrap(), &list_cli()).unwrap();
    clear_config_env();

    // Env beats file for app_url; file wins where env is silent.
    assert_eq!(config.target.app_url, "http://from-env.test");
    assert_eq!(config.target.realm, "file-realm");
    assert_eq!(config.suite.browser, Browser::Firefox);
}

#[test]
#[serial]
fn cli_wins_over_env() {
    clear_config_env();
    std::env::set_var("SSO_FLOW", "redirect");
    let cli = Cli::try_parse_from(["ssoprobe", "run", "--flow", "native", "--browser", "firefox"])
        .unwrap();
    let config = Config::load("definitely-missing.yaml", &cli).unwrap();
    clear_config_env();
    assert_eq!(config.suite.flow, FlowModel::Native);
    assert_eq!(config.suite.browser, Browser::Firefox);
}

#[test]
#[serial]
fn unreadable_yaml_is_an_error() {
    clear_config_env();
    let (_dir, path) = temp_config_file("suite: [this, is, not, a, map]");
    assert!(Config::load(path.to_str().unwrap(), &list_cli()).is_err());
}
