//! Daemon startup specs
//!
//! Verify the daemon refuses to start without its prerequisites.

use crate::prelude::*;

#[test]
fn startup_requires_a_token() {
    let ws = Workspace::new();
    let config = ws.file("config.toml", VALID_CONFIG);

    ws.emd()
        .arg(&config)
        .run()
        .fails()
        .stderr_has("DISCORD_TOKEN is not set");
}

#[test]
fn blank_token_is_rejected() {
    let ws = Workspace::new();
    let config = ws.file("config.toml", VALID_CONFIG);

    ws.emd()
        .arg(&config)
        .env("DISCORD_TOKEN", "   ")
        .run()
        .fails()
        .stderr_has("DISCORD_TOKEN is not set");
}

#[test]
fn unknown_flag_is_rejected() {
    let ws = Workspace::new();

    ws.emd()
        .arg("--verbose")
        .run()
        .fails()
        .stderr_has("Unknown argument: --verbose");
}

#[test]
fn startup_logs_to_configured_file() {
    let ws = Workspace::new();
    let config = ws.file(
        "config.toml",
        &format!("log_file = \"logs/emd.log\"\n{}", VALID_CONFIG),
    );

    ws.emd().arg(&config).run().fails();

    let log = std::fs::read_to_string(ws.path().join("logs/emd.log")).unwrap();
    assert!(log.contains("Starting emd"), "{}", log);
    assert!(log.contains("Failed to start daemon"), "{}", log);
}
