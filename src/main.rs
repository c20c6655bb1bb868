// envgen: typed accessor generator for `.env` files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> Command Dispatch
//!   Generate | Check | Init | Options | Version
//! ```

use std::process::ExitCode;

use envgen::cli::global::GlobalOptions;
use envgen::cli::{self, Command};
use envgen::cmd::config::run_options_command;
use envgen::cmd::generate::{run_check_command, run_generate_command};
use envgen::cmd::init::run_init_command;
use envgen::config::loader::ConfigLoader;
use envgen::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use envgen::logging::init_logging;
use envgen::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options(args)) => {
            load_config(&cli.global).and_then(|config| run_options_command(args, &config))
        }
        Some(Command::Generate(args)) => load_config(&cli.global)
            .and_then(|config| run_generate_command(args, &config))
            .map(|_| ()),
        Some(Command::Check(args)) => {
            load_config(&cli.global).and_then(|config| run_check_command(args, &config))
        }
        Some(Command::Init) => load_config(&cli.global)
            .and_then(|config| run_init_command(&config))
            .map(|_| ()),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> envgen::error::Result<ConfigLoader> {
    let mut loader =
        ConfigLoader::new().add_toml_file_optional(global.root_dir().join(CONFIG_FILE_NAME));
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for option in global.to_config_overrides() {
        loader = loader.set_override_str(&option)?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> envgen::error::Result<Config> {
    let loader = build_config_loader(global)?;
    tracing::debug!(files = ?loader.loaded_files(), "loading configuration");
    loader.build()
}
