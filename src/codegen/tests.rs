// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{
    AccessorCase, GenerateOptions, generate, plan_accessors, to_camel_case, to_identifier,
    write_module,
};
use crate::envfile::EnvSet;
use crate::error::GenerateError;

fn set(keys: &[&str]) -> EnvSet {
    keys.iter().map(|key| (*key, "value")).collect()
}

#[test]
fn camel_case_conversion() {
    let cases = [
        ("APP_NAME", "appName"),
        ("APP_DEBUG", "appDebug"),
        ("DATABASE_URL", "databaseUrl"),
        ("PORT", "port"),
        ("APP__NAME", "app_Name"),
        ("API_V2_KEY", "apiV2Key"),
        ("KEY_1", "key_1"),
        ("TRAILING_", "trailing_"),
        ("_PRIVATE", "Private"),
        ("already_lower", "alreadyLower"),
    ];
    for (key, expected) in cases {
        assert_eq!(to_camel_case(key), expected, "key {key}");
    }
}

#[test]
fn conversion_is_deterministic() {
    for key in ["APP_NAME", "A_B_C", "X1_Y2", "__", "123"] {
        assert_eq!(to_camel_case(key), to_camel_case(key));
        assert_eq!(
            to_identifier(key, AccessorCase::Camel),
            to_identifier(key, AccessorCase::Camel)
        );
    }
}

#[test]
fn identifiers_are_legal_rust() {
    assert_eq!(
        to_identifier("TYPE", AccessorCase::Camel).as_deref(),
        Some("r#type")
    );
    assert_eq!(
        to_identifier("SELF", AccessorCase::Camel).as_deref(),
        Some("self_")
    );
    assert_eq!(
        to_identifier("1ST_KEY", AccessorCase::Camel).as_deref(),
        Some("_1stKey")
    );
    assert_eq!(
        to_identifier("APP_NAME", AccessorCase::Snake).as_deref(),
        Some("app_name")
    );
    assert_eq!(to_identifier("___", AccessorCase::Camel), None);
}

#[test]
fn accessor_case_parse() {
    assert_eq!("camel".parse::<AccessorCase>().unwrap(), AccessorCase::Camel);
    assert_eq!("Snake".parse::<AccessorCase>().unwrap(), AccessorCase::Snake);
    assert!("kebab".parse::<AccessorCase>().is_err());
    assert_eq!(AccessorCase::Snake.to_string(), "snake");
}

#[test]
fn plan_keeps_entry_order() {
    let accessors = plan_accessors(&set(&["ZED", "APP_NAME", "ALPHA"]), AccessorCase::Camel)
        .unwrap();
    let idents: Vec<_> = accessors.iter().map(|a| a.ident.as_str()).collect();
    assert_eq!(idents, vec!["zed", "appName", "alpha"]);
}

#[test]
fn collisions_are_rejected() {
    let err = plan_accessors(&set(&["APP_NAME", "app_name"]), AccessorCase::Camel).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::IdentifierCollision { ref ident, ref first, ref second }
            if ident == "appName" && first == "APP_NAME" && second == "app_name"
    ));
}

#[test]
fn reserved_and_invalid_keys_are_rejected() {
    let err = plan_accessors(&set(&["ALL"]), AccessorCase::Camel).unwrap_err();
    assert!(matches!(err, GenerateError::ReservedIdentifier { .. }));

    let err = plan_accessors(&set(&["FROM_PATH"]), AccessorCase::Snake).unwrap_err();
    assert!(matches!(err, GenerateError::ReservedIdentifier { .. }));

    let err = plan_accessors(&set(&["_"]), AccessorCase::Camel).unwrap_err();
    assert!(matches!(err, GenerateError::InvalidIdentifier { .. }));
}

#[test]
fn generate_emits_accessor_per_key() {
    let entries: EnvSet = [("APP_NAME", "x"), ("APP_DEBUG", "true")]
        .into_iter()
        .collect();
    let text = generate(&entries, &GenerateOptions::default()).unwrap();

    assert!(text.starts_with("// @generated by envgen from `.env`."));
    assert!(text.contains("pub const ENV_FILE: &str = \".env\";"));
    assert!(text.contains("pub fn appName(&self) -> Option<&str> {\n        self.store.get(\"APP_NAME\")"));
    assert!(text.contains("pub fn appDebug(&self) -> Option<&str> {\n        self.store.get(\"APP_DEBUG\")"));
    assert!(text.contains("#[allow(non_snake_case)]"));
    // Values are never baked into the module.
    assert!(!text.contains("\"x\""));

    let name_pos = text.find("fn appName").unwrap();
    let debug_pos = text.find("fn appDebug").unwrap();
    assert!(name_pos < debug_pos);
}

#[test]
fn generate_is_deterministic() {
    let entries = set(&["B", "A", "C_D"]);
    let options = GenerateOptions::default();
    assert_eq!(
        generate(&entries, &options).unwrap(),
        generate(&entries, &options).unwrap()
    );
}

#[test]
fn generate_honors_options() {
    let options = GenerateOptions::builder()
        .with_env_file("config/.env.local")
        .with_accessor_case(AccessorCase::Snake)
        .with_type_name("Settings")
        .with_runtime_crate("::envgen")
        .build();
    let text = generate(&set(&["APP_NAME"]), &options).unwrap();

    assert!(text.contains("pub const ENV_FILE: &str = \"config/.env.local\";"));
    assert!(text.contains("use ::envgen::runtime::{EnvSet, EnvStore, Result};"));
    assert!(text.contains("pub struct Settings {"));
    assert!(text.contains("static ENV: OnceLock<Settings> = OnceLock::new();"));
    assert!(text.contains("pub fn app_name(&self) -> Option<&str> {"));
    assert!(!text.contains("#[allow(non_snake_case)]"));
}

#[test]
fn generate_empty_set_still_compiles_shape() {
    let text = generate(&EnvSet::default(), &GenerateOptions::default()).unwrap();
    assert!(text.contains("pub fn all(&self) -> &EnvSet {"));
    assert!(text.trim_end().ends_with('}'));
}

#[test]
fn write_module_replaces_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("src/env.rs");

    write_module(&path, "first\n", false).unwrap();
    write_module(&path, "second\n", false).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\n");
}

#[test]
fn write_module_dry_run_does_not_write() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("src/env.rs");

    write_module(&path, "text\n", true).unwrap();

    assert!(!path.exists());
}
