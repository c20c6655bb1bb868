// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{EnvSet, EnvStore};
use crate::codegen::{GenerateOptions, generate};
use crate::envfile::parse;
use crate::error::EnvFileError;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn missing_key_is_none() {
    let store = EnvStore::from_set([("APP_NAME", "demo")].into_iter().collect());
    assert_eq!(store.get("APP_NAME"), Some("demo"));
    assert_eq!(store.get("NOT_THERE"), None);
    assert_eq!(EnvStore::default().get("APP_NAME"), None);
}

#[test]
fn values_are_read_at_load_time_not_generation_time() {
    let temp = temp_dir();
    let env_file = temp.path().join(".env");
    std::fs::write(&env_file, "APP_NAME=x\n").unwrap();

    let snapshot = parse(&env_file).unwrap();
    let module = generate(&snapshot, &GenerateOptions::default()).unwrap();
    assert!(module.contains("pub fn appName(&self)"));

    // The env file changes after generation but before the program starts.
    std::fs::write(&env_file, "APP_NAME=y\n").unwrap();

    let store = EnvStore::load(&env_file).unwrap();
    assert_eq!(store.get("APP_NAME"), Some("y"));
}

#[test]
fn independent_instances_do_not_interfere() {
    let first = EnvStore::from_set([("A", "1")].into_iter().collect());
    let second = EnvStore::from_set([("A", "2")].into_iter().collect());
    assert_eq!(first.get("A"), Some("1"));
    assert_eq!(second.get("A"), Some("2"));
}

#[test]
fn all_exposes_bulk_view() {
    let temp = temp_dir();
    let env_file = temp.path().join(".env");
    std::fs::write(&env_file, "APP_NAME=\"demo\"\nAPP_DEBUG=true\n").unwrap();

    let store = EnvStore::load(&env_file).unwrap();

    let expected: EnvSet = [("APP_NAME", "demo"), ("APP_DEBUG", "true")]
        .into_iter()
        .collect();
    assert_eq!(store.all(), &expected);
}

#[test]
fn load_missing_file_fails() {
    let temp = temp_dir();
    let err = EnvStore::load(temp.path().join(".env")).unwrap_err();
    assert!(matches!(err, EnvFileError::NotFound { .. }));
}
