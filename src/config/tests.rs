// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::parse_override;
use super::{Config, ConfigLoader, PathsConfig};
use crate::codegen::AccessorCase;
use crate::error::{ConfigError, EnvgenError};
use std::path::{Path, PathBuf};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(
        config.format_options(),
        vec![
            "generate.accessor_case = camel",
            "generate.file_name     = env.rs",
            "generate.runtime_crate = envgen",
            "generate.type_name     = Env",
            "global.dry             = false",
            "patch.entry_function   = main",
            "patch.entry_point      = true",
            "patch.ignore_pattern   = .env",
            "paths.entry_file       = ./src/main.rs",
            "paths.env_file         = ./.env",
            "paths.ignore_file      = ./.gitignore",
            "paths.root             = .",
            "paths.source_dir       = ./src",
        ]
    );
}

#[test]
fn test_default_config_json() {
    let json = serde_json::to_value(Config::default()).expect("config should serialize");
    insta::assert_snapshot!(
        json["generate"].to_string(),
        @r#"{"accessor_case":"camel","file_name":"env.rs","runtime_crate":"envgen","type_name":"Env"}"#
    );
}

#[test]
fn test_format_options_sorted_and_aligned() {
    let mut config = Config::default();
    config.paths.root = PathBuf::from("proj");
    let lines = config.format_options();

    let keys: Vec<_> = lines
        .iter()
        .map(|line| line.split(" = ").next().unwrap_or_default().trim_end())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);

    assert!(lines.contains(&"patch.entry_function   = main".to_string()));
    let entry = lines
        .iter()
        .find(|line| line.starts_with("paths.entry_file"))
        .unwrap();
    assert!(entry.ends_with(&Path::new("proj").join("src").join("main.rs").display().to_string()));
}

#[test]
fn test_paths_resolve_against_root() {
    let paths = PathsConfig {
        root: PathBuf::from("/work/app"),
        ..PathsConfig::default()
    };

    assert_eq!(paths.env_file(), PathBuf::from("/work/app/.env"));
    assert_eq!(paths.entry_file(), PathBuf::from("/work/app/src/main.rs"));
    assert_eq!(paths.ignore_file(), PathBuf::from("/work/app/.gitignore"));
    assert_eq!(
        paths.module_file(None, "env.rs"),
        PathBuf::from("/work/app/src/env.rs")
    );
    assert_eq!(
        paths.module_file(Some(Path::new("config")), "env.rs"),
        PathBuf::from("/work/app/src/config/env.rs")
    );
}

#[test]
fn test_paths_absolute_kept() {
    let paths = PathsConfig {
        root: PathBuf::from("/work/app"),
        env_file: PathBuf::from("/etc/app/.env"),
        ..PathsConfig::default()
    };
    assert_eq!(paths.env_file(), PathBuf::from("/etc/app/.env"));
    assert_eq!(paths.env_file_literal(), "/etc/app/.env");
}

#[test]
fn test_parse_sections() {
    let config = Config::parse(
        r#"
[paths]
env_file = ".env.local"

[generate]
accessor_case = "snake"
type_name = "Settings"

[patch]
entry_point = false
"#,
    )
    .expect("parse should succeed");

    assert_eq!(config.paths.env_file, PathBuf::from(".env.local"));
    assert_eq!(config.generate.accessor_case, AccessorCase::Snake);
    assert_eq!(config.generate.type_name, "Settings");
    assert_eq!(config.generate.file_name, "env.rs");
    assert!(!config.patch.entry_point);
    assert_eq!(config.patch.entry_function, "main");
}

#[test]
fn test_unknown_field_rejected() {
    let result = Config::parse("[paths]\nprefix = \"x\"\n");
    assert!(result.is_err(), "unknown field should be rejected");
}

#[test]
fn test_validation_errors() {
    let cases = [
        "[generate]\nfile_name = \"env.txt\"\n",
        "[generate]\nfile_name = \".rs\"\n",
        "[generate]\ntype_name = \"1Env\"\n",
        "[patch]\nentry_function = \"fn main\"\n",
        "[patch]\nignore_pattern = \"\"\n",
    ];
    for case in cases {
        let err = Config::parse(case).expect_err(case);
        assert!(
            matches!(
                err.downcast_ref::<EnvgenError>(),
                Some(EnvgenError::Config(e)) if matches!(**e, ConfigError::InvalidValue { .. })
            ),
            "{case}: {err}"
        );
        assert!(err.to_string().contains("invalid value for"), "{case}: {err}");
    }
}

#[test]
fn test_keywords_rejected_as_identifiers() {
    let cases = [
        ("[generate]\ntype_name = \"fn\"\n", "type_name"),
        ("[generate]\ntype_name = \"Self\"\n", "type_name"),
        ("[patch]\nentry_function = \"type\"\n", "entry_function"),
        ("[patch]\nentry_function = \"async\"\n", "entry_function"),
    ];
    for (case, key) in cases {
        let err = Config::parse(case).expect_err(case);
        assert!(err.to_string().contains(&format!("'{key}'")), "{case}: {err}");
    }

    let config = Config::parse("[generate]\ntype_name = \"Type\"\n").unwrap();
    assert_eq!(config.generate.type_name, "Type");
}

#[test]
fn test_to_options() {
    let mut config = Config::default();
    config.generate.accessor_case = AccessorCase::Snake;
    config.patch.entry_function = "start".to_string();

    let generate = config.generate.to_options(".env.local");
    assert_eq!(generate.env_file(), ".env.local");
    assert_eq!(generate.accessor_case(), AccessorCase::Snake);
    assert_eq!(generate.type_name(), "Env");

    let patch = config.patch.to_options(".env.local");
    assert_eq!(patch.entry_function(), "start");
    assert_eq!(patch.env_file(), ".env.local");
}

#[test]
fn test_config_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[global]\n dry = false")
        .set("global.dry", true)
        .expect("set should succeed")
        .build()
        .expect("build should succeed");

    assert!(config.global.dry, "set override should take effect");
}

#[test]
fn test_config_loader_set_override_str() {
    let config = ConfigLoader::new()
        .set_override_str("paths/env_file=.env.test")
        .expect("override should parse")
        .set_override_str("patch/entry_point=false")
        .expect("override should parse")
        .build()
        .expect("build should succeed");

    assert_eq!(config.paths.env_file, PathBuf::from(".env.test"));
    assert!(!config.patch.entry_point);
}

#[test]
fn test_parse_override() {
    assert_eq!(
        parse_override("generate/type_name=Settings").unwrap(),
        ("generate.type_name".to_string(), "Settings".to_string())
    );
    assert_eq!(
        parse_override("paths/root = a=b").unwrap(),
        ("paths.root".to_string(), "a=b".to_string())
    );
    assert!(parse_override("type_name=Settings").is_err());
    assert!(parse_override("generate/type_name").is_err());
    assert!(parse_override("/type_name=x").is_err());
}

#[test]
fn test_config_loader_env_vars() {
    // SAFETY: the variable name is unique to this test.
    unsafe {
        std::env::set_var("ENVGENTEST_PATHS__ENV_FILE", ".env.ci");
        std::env::set_var("ENVGENTEST_GLOBAL__DRY", "true");
    }

    let result = ConfigLoader::new()
        .add_toml_str("[paths]\nenv_file = \".env.file\"")
        .with_env_prefix("ENVGENTEST")
        .build();

    // SAFETY: same as above.
    unsafe {
        std::env::remove_var("ENVGENTEST_PATHS__ENV_FILE");
        std::env::remove_var("ENVGENTEST_GLOBAL__DRY");
    }

    let config = result.expect("build should succeed");
    assert_eq!(config.paths.env_file, PathBuf::from(".env.ci"));
    assert!(config.global.dry);
}

#[test]
fn test_config_loader_layered_sources() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(
        file,
        r#"
[generate]
type_name = "FromFile"
runtime_crate = "::envgen"
"#
    )
    .expect("failed to write");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .add_toml_str("[generate]\ntype_name = \"FromString\"\n")
        .build()
        .expect("build should succeed");

    assert_eq!(config.generate.type_name, "FromString");
    assert_eq!(config.generate.runtime_crate, "::envgen");
}

#[test]
fn test_config_loader_tracks_files() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let missing = temp.path().join("missing.toml");
    let loader = ConfigLoader::new()
        .add_toml_file_optional(&missing)
        .add_toml_str("");

    assert_eq!(
        loader.loaded_files(),
        &[("string".to_string(), PathBuf::from("<string>"))]
    );
    assert!(loader.build().is_ok());
}

#[test]
fn test_config_loader_missing_required_file() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let result = ConfigLoader::new()
        .add_toml_file(temp.path().join("nope.toml"))
        .build();
    let err = result.unwrap_err();
    assert!(
        matches!(
            err.downcast_ref::<EnvgenError>(),
            Some(EnvgenError::Config(e)) if matches!(**e, ConfigError::ParseError { .. })
        ),
        "{err}"
    );
    let message = err.to_string();
    assert!(message.contains("failed to parse config"), "{message}");
    assert!(message.contains("nope.toml"), "{message}");
}
