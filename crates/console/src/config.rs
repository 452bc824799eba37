//! Console settings: a TOML file plus a few command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chess_rules::Color;
use serde::Deserialize;

/// Settings read from `--config <path>`; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Side the greedy engine answers for automatically
    pub engine_color: Option<Color>,
    /// Print the opponent's attack overlay after every accepted move
    pub show_attacks: bool,
    /// Ply cap for `--selfplay`
    pub max_selfplay_plies: u32,
    /// Setup string to start from instead of the standard position
    pub start_fen: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            engine_color: None,
            show_attacks: false,
            max_selfplay_plies: 200,
            start_fen: None,
        }
    }
}

impl ConsoleConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("failed to parse console config")
    }
}

/// Flags accepted on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub fen: Option<String>,
    /// Play this many self-play games instead of the interactive loop
    pub selfplay: Option<u32>,
    pub help: bool,
}

impl CliArgs {
    /// Parse everything after the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut out = CliArgs::default();
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    out.config = Some(PathBuf::from(value_of(args, i)?));
                    i += 1;
                }
                "--fen" => {
                    out.fen = Some(value_of(args, i)?.to_string());
                    i += 1;
                }
                "--selfplay" | "-s" => {
                    let raw = value_of(args, i)?;
                    let games = raw
                        .parse()
                        .with_context(|| format!("--selfplay expects a game count, got {raw:?}"))?;
                    out.selfplay = Some(games);
                    i += 1;
                }
                "--help" | "-h" => out.help = true,
                other => bail!("unknown argument {other:?}"),
            }
            i += 1;
        }
        Ok(out)
    }
}

fn value_of(args: &[String], flag_idx: usize) -> Result<&str> {
    match args.get(flag_idx + 1) {
        Some(v) => Ok(v.as_str()),
        None => bail!("{} needs a value", args[flag_idx]),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
