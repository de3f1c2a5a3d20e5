/*
 *  config.rs
 *
 *  calcbridge - calculator boundary adapter
 *  (c) 2020-26 Stuart Hunter
 *
 *  Harness configuration - defaults, YAML file, command line
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use serde::{Deserialize, Serialize};
use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use std::{fs, path::{Path, PathBuf}};
use thiserror::Error;

use crate::console::ConsoleOptions;
use crate::engine::CalculatorMode;

/// Accepted `log_level` values, as understood by env_logger
pub const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level harness configuration. Every field is optional so layers merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    pub log_level: Option<String>,      // e.g., "info" | "debug"
    pub mode: Option<CalculatorMode>,   // standard | scientific | programmer
    pub digit_grouping: Option<bool>,
    pub show_expression: Option<bool>,
    pub banner: Option<bool>,
}

impl Config {
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Console behaviour with unset keys at their defaults (banner on)
    pub fn console_options(&self) -> ConsoleOptions {
        ConsoleOptions {
            mode: self.mode.unwrap_or_default(),
            digit_grouping: self.digit_grouping.unwrap_or(false),
            show_expression: self.show_expression.unwrap_or(false),
            banner: self.banner.unwrap_or(true),
        }
    }
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone, Default)]
#[command(name = "calcbridge", about = "calcbridge console harness", version, disable_help_flag = false)]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    /// Enable debug log level
    #[arg(short = 'v', long, alias = "verbose", action = ArgAction::SetTrue)]
    pub debug: bool,
    #[arg(long, value_enum)]
    pub mode: Option<CalculatorMode>,
    #[arg(long, action = ArgAction::Set)]
    pub digit_grouping: Option<bool>,
    #[arg(long, action = ArgAction::Set)]
    pub show_expression: Option<bool>,
    #[arg(long, action = ArgAction::Set)]
    pub banner: Option<bool>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Result of loading: the merged config, and whether the caller asked for a dump
#[derive(Debug)]
pub struct Loaded {
    pub config: Config,
    pub dump: bool,
}

/// Public entry point: parse CLI, read YAML, merge, validate.
pub fn load() -> Result<Loaded, ConfigError> {
    let cli = Cli::parse();
    load_from(&cli)
}

/// Layer defaults, YAML and `cli`, then validate
pub fn load_from(cli: &Cli) -> Result<Loaded, ConfigError> {
    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, cli);

    // 4) Validate
    validate(&cfg)?;

    Ok(Loaded { config: cfg, dump: cli.dump_config })
}

/// Pretty YAML of the effective config (nice for debugging)
pub fn dump(cfg: &Config) -> Result<String, ConfigError> {
    Ok(serde_yaml::to_string(cfg)?)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/calcbridge/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/calcbridge/config.yaml");
        if p.exists() { return Some(p) }
        let p = home.join(".config/calcbridge.yaml");
        if p.exists() { return Some(p) }
    }
    // project local
    for candidate in &["calcbridge.yaml", "config/calcbridge.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    parse_yaml(&s)
}

pub fn parse_yaml(s: &str) -> Result<Config, ConfigError> {
    // an empty file is a valid, empty config
    if s.trim().is_empty() {
        return Ok(Config::default());
    }
    let cfg: Config = serde_yaml::from_str(s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut Config, src: Config) {
    if src.log_level.is_some()       { dst.log_level = src.log_level; }
    if src.mode.is_some()            { dst.mode = src.mode; }
    if src.digit_grouping.is_some()  { dst.digit_grouping = src.digit_grouping; }
    if src.show_expression.is_some() { dst.show_expression = src.show_expression; }
    if src.banner.is_some()          { dst.banner = src.banner; }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some()       { cfg.log_level = cli.log_level.clone(); }
    if cli.debug                     { cfg.log_level = Some("debug".into()); }
    if cli.mode.is_some()            { cfg.mode = cli.mode; }
    if cli.digit_grouping.is_some()  { cfg.digit_grouping = cli.digit_grouping; }
    if cli.show_expression.is_some() { cfg.show_expression = cli.show_expression; }
    if cli.banner.is_some()          { cfg.banner = cli.banner; }
}

/// Put any invariants here (required fields, ranges, etc.)
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(level) = cfg.log_level.as_deref() {
        if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "log_level must be one of {}",
                LOG_LEVELS.join("|")
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.log_level(), "info");
        let options = cfg.console_options();
        assert_eq!(options.mode, CalculatorMode::Standard);
        assert!(options.banner);
        assert!(!options.digit_grouping);
        assert!(!options.show_expression);
    }

    #[test]
    fn test_parse_yaml() {
        let cfg = parse_yaml("log_level: debug\nmode: scientific\ndigit_grouping: true\n").unwrap();
        assert_eq!(cfg.log_level.as_deref(), Some("debug"));
        assert_eq!(cfg.mode, Some(CalculatorMode::Scientific));
        assert_eq!(cfg.digit_grouping, Some(true));
        assert_eq!(cfg.banner, None);

        assert_eq!(parse_yaml("").unwrap(), Config::default());
        assert!(matches!(parse_yaml("mode: abacus"), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let mut cfg = parse_yaml("mode: programmer\nbanner: false\n").unwrap();
        merge(&mut cfg, parse_yaml("banner: true\n").unwrap());
        assert_eq!(cfg.mode, Some(CalculatorMode::Programmer));
        assert_eq!(cfg.banner, Some(true));
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut cfg = parse_yaml("log_level: warn\nmode: scientific\n").unwrap();
        let cli = Cli::parse_from(["calcbridge", "--mode", "programmer", "--show-expression", "true", "--debug"]);
        apply_cli_overrides(&mut cfg, &cli);

        assert_eq!(cfg.mode, Some(CalculatorMode::Programmer));
        assert_eq!(cfg.show_expression, Some(true));
        assert_eq!(cfg.log_level(), "debug");
    }

    #[test]
    fn test_validate_log_level() {
        let ok = Config { log_level: Some("TRACE".into()), ..Default::default() };
        assert!(validate(&ok).is_ok());

        let bad = Config { log_level: Some("loud".into()), ..Default::default() };
        assert!(matches!(validate(&bad), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_missing_explicit_file() {
        let cli = Cli { config: Some(PathBuf::from("/nonexistent/calcbridge.yaml")), ..Default::default() };
        assert!(matches!(load_from(&cli), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_dump_round_trips() {
        let cfg = Config { mode: Some(CalculatorMode::Programmer), banner: Some(false), ..Default::default() };
        let yaml = dump(&cfg).unwrap();
        assert!(yaml.contains("mode: programmer"));
        assert_eq!(parse_yaml(&yaml).unwrap(), cfg);
    }
}
