// tests/config_env.rs
//
// `.env` feeds both endpoint overrides and login. Own test binary: it
// changes the process environment.

use std::fs;

use tower_report::config::{
    self,
    consts::{LOGIN_PASSWORD_VAR, LOGIN_URL, LOGIN_USERNAME_VAR, REPORT_URL_VAR},
    credentials::Credentials,
    options::AppOptions,
};

#[test]
fn env_file_loaded_before_options_and_credentials() {
    let dir = std::env::temp_dir().join("tower_report_config_env");
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join(".env");
    fs::write(
        &file,
        format!(
            "{REPORT_URL_VAR}=http://staging.test/Report\n{LOGIN_USERNAME_VAR}=ops\n{LOGIN_PASSWORD_VAR}=s3cret\n"
        ),
    )
    .unwrap();

    // Nothing from the file yet
    assert_ne!(AppOptions::from_env().portal.report_url, "http://staging.test/Report");

    assert!(config::load_env_file(&file));

    let options = AppOptions::from_env();
    assert_eq!(options.portal.report_url, "http://staging.test/Report");
    assert_eq!(options.portal.login_url, LOGIN_URL);

    let creds = Credentials::from_env().unwrap();
    assert_eq!(creds.username(), "ops");
}

#[test]
fn missing_env_file_is_not_fatal() {
    let missing = std::env::temp_dir().join("tower_report_no_such_dir").join(".env");
    assert!(!config::load_env_file(&missing));
}
