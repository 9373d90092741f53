// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration file loading with override support
//!
//! Three tiers, later wins:
//! 1. TOML file (base values, missing keys take defaults)
//! 2. Environment variables (runtime overrides)
//! 3. CLI arguments (explicit user overrides)

use crate::validation::validate_config;
use crate::{ConfigError, ConfigResult, NeuropetConfig};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILE_NAME: &str = "neuropet_configuration.toml";

/// Find the configuration file
///
/// Search order:
/// 1. `NEUROPET_CONFIG_PATH` environment variable
/// 2. Current working directory
/// 3. Up to 5 parent directories
///
/// # Errors
///
/// Returns `ConfigError::FileNotFound` if no config file is found in any location
pub fn find_config_file() -> ConfigResult<PathBuf> {
    if let Ok(env_path) = env::var("NEUROPET_CONFIG_PATH") {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(format!(
            "Config file specified by NEUROPET_CONFIG_PATH not found: {}",
            path.display()
        )));
    }

    let mut search_paths = Vec::new();
    if let Ok(cwd) = env::current_dir() {
        search_paths.push(cwd.join(CONFIG_FILE_NAME));

        let mut current = cwd.clone();
        for _ in 0..5 {
            if let Some(parent) = current.parent() {
                search_paths.push(parent.join(CONFIG_FILE_NAME));
                current = parent.to_path_buf();
            }
        }
    }

    for path in &search_paths {
        if path.exists() {
            return Ok(path.clone());
        }
    }

    let search_list = search_paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");

    Err(ConfigError::FileNotFound(format!(
        "'{}' not found in any of these locations:\n{}\n\nSet NEUROPET_CONFIG_PATH to specify a custom location.",
        CONFIG_FILE_NAME, search_list
    )))
}

/// Load, override and validate the configuration
///
/// # Arguments
///
/// * `config_path` - Optional path to config file. If `None`, the file is searched for.
/// * `cli_args` - Optional CLI argument overrides
///
/// # Errors
///
/// Returns error if the file is not found, contains invalid TOML, or fails validation
pub fn load_config(
    config_path: Option<&Path>,
    cli_args: Option<&HashMap<String, String>>,
) -> ConfigResult<NeuropetConfig> {
    let config_file = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config_file()?,
    };

    let content = fs::read_to_string(&config_file)?;
    let mut config: NeuropetConfig = toml::from_str(&content)?;

    apply_environment_overrides(&mut config);
    if let Some(cli) = cli_args {
        apply_cli_overrides(&mut config, cli);
    }

    validate_config(&config)?;
    Ok(config)
}

fn parse_bool(value: &str) -> bool {
    let value = value.to_lowercase();
    value == "true" || value == "1" || value == "yes"
}

fn set_parsed<T: FromStr>(target: &mut T, value: &str) {
    if let Ok(parsed) = value.parse::<T>() {
        *target = parsed;
    }
}

/// Apply environment variable overrides
///
/// Supported environment variables:
/// - `NEUROPET_DATA_DIR` -> `storage.data_dir`
/// - `NEUROPET_LOG_LEVEL` -> `logging.level`
/// - `NEUROPET_LOG_DIR` -> `logging.log_dir`
/// - `NEUROPET_DEBOUNCE_MS` -> `buttons.debounce_ms`
/// - `NEUROPET_LONG_PRESS_MS` -> `buttons.long_press_ms`
/// - `NEUROPET_DOUBLE_PRESS_MS` -> `buttons.double_press_ms`
/// - `NEUROPET_TICK_INTERVAL_MS` -> `cadence.tick_interval_ms`
/// - `NEUROPET_SAVE_INTERVAL_MS` -> `cadence.save_interval_ms`
/// - `NEUROPET_LEARNING_RATE` -> `learning.learning_rate`
/// - `NEUROPET_PREFER_LEARNED` -> `inference.prefer_learned`
/// - `NEUROPET_EVENT_LOG_CAPACITY` -> `event_log.capacity`
pub fn apply_environment_overrides(config: &mut NeuropetConfig) {
    if let Ok(value) = env::var("NEUROPET_DATA_DIR") {
        config.storage.data_dir = PathBuf::from(value);
    }
    if let Ok(value) = env::var("NEUROPET_LOG_LEVEL") {
        config.logging.level = value;
    }
    if let Ok(value) = env::var("NEUROPET_LOG_DIR") {
        config.logging.log_dir = PathBuf::from(value);
    }

    if let Ok(value) = env::var("NEUROPET_DEBOUNCE_MS") {
        set_parsed(&mut config.buttons.debounce_ms, &value);
    }
    if let Ok(value) = env::var("NEUROPET_LONG_PRESS_MS") {
        set_parsed(&mut config.buttons.long_press_ms, &value);
    }
    if let Ok(value) = env::var("NEUROPET_DOUBLE_PRESS_MS") {
        set_parsed(&mut config.buttons.double_press_ms, &value);
    }

    if let Ok(value) = env::var("NEUROPET_TICK_INTERVAL_MS") {
        set_parsed(&mut config.cadence.tick_interval_ms, &value);
    }
    if let Ok(value) = env::var("NEUROPET_SAVE_INTERVAL_MS") {
        set_parsed(&mut config.cadence.save_interval_ms, &value);
    }

    if let Ok(value) = env::var("NEUROPET_LEARNING_RATE") {
        set_parsed(&mut config.learning.learning_rate, &value);
    }
    if let Ok(value) = env::var("NEUROPET_PREFER_LEARNED") {
        config.inference.prefer_learned = parse_bool(&value);
    }
    if let Ok(value) = env::var("NEUROPET_EVENT_LOG_CAPACITY") {
        set_parsed(&mut config.event_log.capacity, &value);
    }
}

/// Apply CLI argument overrides
///
/// # Arguments
///
/// * `config` - Configuration to modify
/// * `cli_args` - CLI arguments, e.g. `{"data_dir": "/tmp/pet", "tick_interval_ms": "500"}`
pub fn apply_cli_overrides(config: &mut NeuropetConfig, cli_args: &HashMap<String, String>) {
    if let Some(value) = cli_args.get("data_dir") {
        config.storage.data_dir = PathBuf::from(value);
    }
    if let Some(value) = cli_args.get("log_level") {
        config.logging.level = value.clone();
    }
    if let Some(value) = cli_args.get("file_logging") {
        config.logging.file_logging = parse_bool(value);
    }

    if let Some(value) = cli_args.get("debounce_ms") {
        set_parsed(&mut config.buttons.debounce_ms, value);
    }
    if let Some(value) = cli_args.get("tick_interval_ms") {
        set_parsed(&mut config.cadence.tick_interval_ms, value);
    }
    if let Some(value) = cli_args.get("save_interval_ms") {
        set_parsed(&mut config.cadence.save_interval_ms, value);
    }
    if let Some(value) = cli_args.get("learning_rate") {
        set_parsed(&mut config.learning.learning_rate, value);
    }
    if let Some(value) = cli_args.get("prefer_learned") {
        config.inference.prefer_learned = parse_bool(value);
    }
    if let Some(value) = cli_args.get("event_log_capacity") {
        set_parsed(&mut config.event_log.capacity, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::tempdir;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const OVERRIDE_VARS: [&str; 4] = [
        "NEUROPET_TICK_INTERVAL_MS",
        "NEUROPET_DATA_DIR",
        "NEUROPET_PREFER_LEARNED",
        "NEUROPET_LEARNING_RATE",
    ];

    fn clear_override_vars() {
        for var in OVERRIDE_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_find_config_file_env_var() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("custom_config.toml");
        File::create(&config_path).unwrap();

        env::set_var("NEUROPET_CONFIG_PATH", config_path.to_str().unwrap());
        let result = find_config_file();
        env::remove_var("NEUROPET_CONFIG_PATH");

        assert_eq!(result.unwrap(), config_path);
    }

    #[test]
    fn test_env_path_missing_is_error() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        env::set_var("NEUROPET_CONFIG_PATH", "/definitely/not/here.toml");
        let result = find_config_file();
        env::remove_var("NEUROPET_CONFIG_PATH");

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_partial_config() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_override_vars();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);

        let mut file = File::create(&config_path).unwrap();
        writeln!(file, "[buttons]").unwrap();
        writeln!(file, "long_press_ms = 800").unwrap();
        writeln!(file, "[simulation]").unwrap();
        writeln!(file, "hunger_rate = 0.002").unwrap();

        let config = load_config(Some(&config_path), None).unwrap();

        assert_eq!(config.buttons.long_press_ms, 800);
        assert_eq!(config.buttons.debounce_ms, 50);
        assert_eq!(config.simulation.hunger_rate, 0.002);
        assert_eq!(config.simulation.spam_penalty, 0.7);
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[buttons\nlong_press_ms = ").unwrap();

        let result = load_config(Some(&config_path), None);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_override_vars();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[learning]\ndecay = 1.5\n").unwrap();

        let result = load_config(Some(&config_path), None);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_environment_overrides() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        let mut config = NeuropetConfig::default();

        env::set_var("NEUROPET_TICK_INTERVAL_MS", "500");
        env::set_var("NEUROPET_DATA_DIR", "/tmp/pet");
        env::set_var("NEUROPET_PREFER_LEARNED", "no");
        env::set_var("NEUROPET_LEARNING_RATE", "not-a-number");

        apply_environment_overrides(&mut config);
        clear_override_vars();

        assert_eq!(config.cadence.tick_interval_ms, 500);
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/pet"));
        assert!(!config.inference.prefer_learned);
        // unparseable values leave the field alone
        assert_eq!(config.learning.learning_rate, 0.1);
    }

    #[test]
    fn test_override_precedence() {
        let _env_lock = ENV_LOCK.lock().unwrap();
        clear_override_vars();
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[cadence]\ntick_interval_ms = 1000\nsave_interval_ms = 30000\n")
            .unwrap();

        env::set_var("NEUROPET_TICK_INTERVAL_MS", "1500");
        env::set_var("NEUROPET_SAVE_INTERVAL_MS", "20000");

        let mut cli_args = HashMap::new();
        cli_args.insert("tick_interval_ms".to_string(), "2500".to_string());

        let config = load_config(Some(&config_path), Some(&cli_args));

        env::remove_var("NEUROPET_TICK_INTERVAL_MS");
        env::remove_var("NEUROPET_SAVE_INTERVAL_MS");

        let config = config.unwrap();
        // CLI wins for tick, env wins for save (no CLI override)
        assert_eq!(config.cadence.tick_interval_ms, 2500);
        assert_eq!(config.cadence.save_interval_ms, 20000);
    }
}
