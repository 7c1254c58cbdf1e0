//! Command-line options for the terminal game.

use anyhow::{anyhow, Result};

use crate::core::GameConfig;

pub const USAGE: &str =
    "usage: blockfall [--config PATH] [--rows N] [--cols N] [--seed N] [--gravity-ms N]";

/// Parse arguments (program name already stripped) into a validated config.
///
/// `--config` is applied first regardless of its position; the other flags
/// override individual fields of it.
pub fn parse_args(args: &[String]) -> Result<GameConfig> {
    let mut config = match find_value(args, "--config")? {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };

    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--config" => {
                i += 1;
            }
            "--rows" => {
                i += 1;
                config.rows = parse_value(args.get(i), flag)?;
            }
            "--cols" => {
                i += 1;
                config.cols = parse_value(args.get(i), flag)?;
            }
            "--seed" => {
                i += 1;
                config.seed = parse_value(args.get(i), flag)?;
            }
            "--gravity-ms" => {
                i += 1;
                config.gravity_ms = parse_value(args.get(i), flag)?;
            }
            "-h" | "--help" => return Err(anyhow!("{}", USAGE)),
            other => return Err(anyhow!("unknown argument: {}\n{}", other, USAGE)),
        }
        i += 1;
    }

    config
        .validate()
        .map_err(|e| anyhow!("invalid configuration: {}", e))?;
    Ok(config)
}

/// Read a JSON config file; missing fields take their defaults.
pub fn load_config(path: &str) -> Result<GameConfig> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("config: read {} failed: {}", path, e))?;
    serde_json::from_str(&text).map_err(|e| anyhow!("config: parse {} failed: {}", path, e))
}

fn find_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>> {
    match args.iter().position(|a| a == flag) {
        Some(i) => args
            .get(i + 1)
            .map(|v| Some(v.as_str()))
            .ok_or_else(|| anyhow!("missing value for {}", flag)),
        None => Ok(None),
    }
}

fn parse_value<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> Result<T> {
    let v = value.ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}
