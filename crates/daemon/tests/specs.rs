//! Behavioral specifications for the emd binary.
//!
//! These tests are black-box: they invoke the daemon binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

#[path = "specs/check.rs"]
mod check;
#[path = "specs/startup.rs"]
mod startup;
