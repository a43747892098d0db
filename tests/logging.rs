//! Logging tests.
//!
//! Operations emit structured `tracing` events; these tests install a
//! subscriber (filtered by `SECRETSYNC_LOG`) and verify every operation
//! runs cleanly with debug and trace output enabled.

mod support;
use support::*;

use secretsync::{Config, SecretEntry};

#[test]
fn test_operations_with_subscriber_installed() {
    init_tracing();

    let t = Test::with_secrets(&[(API_KEY_FILE, "ABC123")]);
    let entry = SecretEntry::new(API_KEY_FILE, API_KEY_DEST, true);

    assert!(entry.needs_update(&t.ws()).unwrap());
    entry.update(&t.ws()).unwrap();
    assert!(entry.needs_apply(&t.ws()).unwrap());
    entry.apply(&t.ws()).unwrap();
    entry.status(&t.ws()).unwrap();
}

#[test]
fn test_failures_with_subscriber_installed() {
    init_tracing();

    let t = Test::new();
    let entry = SecretEntry::new(API_KEY_FILE, API_KEY_DEST, true);
    assert_missing_source(entry.apply(&t.ws()));
    assert_not_found(entry.update(&t.ws()));
}

#[test]
fn test_manifest_load_with_subscriber_installed() {
    init_tracing();

    let t = Test::new();
    std::fs::write(Config::config_path(t.project.path()), SAMPLE_MANIFEST).unwrap();
    let config = Config::load_from(t.project.path()).unwrap();
    assert_eq!(config.entries().len(), 4);
}

#[test]
fn test_init_tracing_is_repeatable() {
    init_tracing();
    init_tracing();
}
