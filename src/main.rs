// dotenv-editor: Programmatic `.env` file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Get | Keys | Lines | Show | Set | Delete | Comment | Empty | Options | Configs
//! ```

use std::process::ExitCode;

use dotenv_editor::cli::global::GlobalOptions;
use dotenv_editor::cli::{self, Command};
use dotenv_editor::cmd::config::{run_configs_command, run_options_command};
use dotenv_editor::cmd::edit::{
    run_comment_command, run_delete_command, run_empty_command, run_set_command,
};
use dotenv_editor::cmd::read::{
    run_get_command, run_keys_command, run_lines_command, run_show_command,
};
use dotenv_editor::config::loader::{ConfigLoader, LoadedConfig};
use dotenv_editor::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use dotenv_editor::logging::{LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let loaded = match load_config(&cli.global) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&loaded.config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &loaded)
}

fn build_log_config(config: &Config) -> LogConfig {
    let console_level = config.log.level;
    let file_level = console_level.max(LogLevel::DEBUG);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(config.log.file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli, loaded: &LoadedConfig) -> ExitCode {
    let config = &loaded.config;
    let result = match &cli.command {
        Some(Command::Get(args)) => run_get_command(args, config),
        Some(Command::Keys(args)) => run_keys_command(args, config),
        Some(Command::Lines(args)) => run_lines_command(args, config),
        Some(Command::Show) => run_show_command(config),
        Some(Command::Set(args)) => run_set_command(args, config),
        Some(Command::Delete(args)) => run_delete_command(args, config),
        Some(Command::Comment(args)) => run_comment_command(args, config),
        Some(Command::Empty) => run_empty_command(config),
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Configs) => {
            run_configs_command(&loaded.sources);
            Ok(())
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> dotenv_editor::error::Result<LoadedConfig> {
    let mut loader = build_config_loader(global);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    loader.build()
}
