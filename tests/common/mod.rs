use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create tempdir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, contents).expect("failed to write config file");
    (temp_dir, config_path)
}

/// Environment variables the configuration layer reads; tests clear them
/// to get deterministic defaults.
#[allow(dead_code)]
pub const CONFIG_ENV_VARS: [&str; 8] = [
    "OM_URL",
    "KC_URL",
    "KC_REALM",
    "TEST_USER",
    "TEST_PASSWORD",
    "TEST_EMAIL",
    "WAIT_TIMEOUT",
    "SSO_FLOW",
];

#[allow(dead_code)]
pub fn clear_config_env() {
    for var in CONFIG_ENV_VARS {
        std::env::remove_var(var);
    }
}
