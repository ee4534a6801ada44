//! `emd --check` specs
//!
//! Verify configuration validation without starting the daemon.

use crate::prelude::*;

#[test]
fn check_accepts_valid_config() {
    let ws = Workspace::new();
    let config = ws.file("config.toml", VALID_CONFIG);

    let run = ws.emd().arg("--check").arg(&config).run().passes();

    similar_asserts::assert_eq!(run.stdout, format!("{}: ok\n", config.display()));
}

#[test]
fn check_does_not_need_a_token() {
    let ws = Workspace::new();
    let config = ws.file("config.toml", VALID_CONFIG);

    ws.emd().arg(&config).arg("--check").run().passes();
}

#[test]
fn check_rejects_unknown_fields() {
    let ws = Workspace::new();
    let config = ws.file(
        "config.toml",
        "log_channel = \"900\"\nlog_chanel = \"901\"\n",
    );

    ws.emd()
        .arg("--check")
        .arg(&config)
        .run()
        .fails()
        .stderr_has("unknown field");
}

#[test]
fn check_reports_every_invalid_job() {
    let ws = Workspace::new();
    let config = ws.file(
        "config.toml",
        r#"
log_channel = "900"

[[mirror]]
listen = []
distribute = ["G2"]

[[announce]]
channels = []
"#,
    );

    ws.emd()
        .arg("--check")
        .arg(&config)
        .run()
        .fails()
        .stderr_has("mirror[0].listen must not be empty")
        .stderr_has("announce[0].channels must not be empty");
}

#[test]
fn check_reports_missing_file() {
    let ws = Workspace::new();

    ws.emd()
        .args(["--check", "absent.toml"])
        .run()
        .fails()
        .stderr_has("absent.toml");
}

#[cfg(target_os = "linux")]
#[test]
fn config_defaults_to_user_config_dir() {
    let ws = Workspace::new();
    ws.file("xdg/event-mirror/config.toml", VALID_CONFIG);

    let run = ws.emd().arg("--check").run().passes();

    assert!(
        run.stdout.ends_with("event-mirror/config.toml: ok\n"),
        "{}",
        run.stdout
    );
}
