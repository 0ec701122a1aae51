//! CLI subcommands — replay commands, run scripts, show configuration.

mod config_cmd;
mod replay;

use std::path::{Path, PathBuf};

use clap::Subcommand;
use serde::Serialize;

pub(super) use tvstate_lib::config::Config;
pub(super) use tvstate_lib::error::Result;
pub(super) use tvstate_lib::script;
pub(super) use tvstate_lib::television::{Snapshot, Television};

const PADDING: usize = 2;

/// Compute alignment width for a command's key-value output.
/// Ensures at least PADDING spaces after the longest key in either level,
/// with top-level and indent values aligned to the same column.
pub(super) fn kv_width(top: &[&str], indent: &[&str]) -> usize {
    let top_max = top.iter().map(|k| k.len()).max().unwrap_or(0);
    let indent_max = indent.iter().map(|k| k.len()).max().unwrap_or(0);
    let top_need = if top.is_empty() { 0 } else { top_max + PADDING };
    // Indent keys lose 2 chars of inner width to the "  " prefix
    let indent_need = if indent.is_empty() {
        0
    } else {
        indent_max + PADDING + 2
    };
    top_need.max(indent_need)
}

pub(super) fn format_kv(key: &str, value: impl std::fmt::Display, w: usize) -> String {
    format!("{key:<width$}{value}", width = w)
}

pub(super) fn kv(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("{}", format_kv(key, value, w));
}

pub(super) fn kv_indent(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("  {}", format_kv(key, value, w - 2));
}

/// Load config from `custom_path` if given, else from the platform default.
pub(super) fn load_config(custom_path: Option<&Path>) -> Config {
    match custom_path {
        Some(path) => {
            let (config, warnings) = Config::load_from(path);
            for w in &warnings {
                log::warn!("{w}");
            }
            config
        }
        None => Config::load(),
    }
}

/// Serialize `value` as pretty JSON and print it.
pub(super) fn print_json(value: &impl Serialize) -> Result<()> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        tvstate_lib::TvError::Config(format!("JSON serialization failed: {e}"))
    })?;
    println!("{json_str}");
    Ok(())
}

// ── JSON output structs ──

#[derive(Debug, Serialize)]
pub(super) struct StepJson {
    pub command: String,
    pub rendered: String,
}

#[derive(Debug, Serialize)]
pub(super) struct ReplayOutput {
    pub commands: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<StepJson>,
    pub state: Snapshot,
}

#[derive(Serialize)]
pub(super) struct ConfigOutput {
    pub config_file: Option<String>,
    pub config_file_exists: bool,
    pub settings: Config,
    pub ranges: RangesJson,
}

#[derive(Serialize)]
pub(super) struct RangesJson {
    pub min_volume: u8,
    pub max_volume: u8,
    pub min_channel: u8,
    pub max_channel: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply commands to a new television and print its final state
    Run {
        /// Commands in order (power, mute, channel-up, channel-down, volume-up, volume-down)
        #[arg(required = true, value_name = "COMMAND")]
        commands: Vec<String>,
        /// Print the state after every command
        #[arg(long)]
        trace: bool,
        /// Skip unknown commands with a warning
        #[arg(long)]
        lenient: bool,
    },

    /// Apply the commands in a script file and print the final state
    Script {
        /// Path to the script (command names separated by whitespace, `#` comments)
        file: PathBuf,
        /// Print the state after every command
        #[arg(long)]
        trace: bool,
        /// Skip unknown commands with a warning
        #[arg(long)]
        lenient: bool,
    },

    /// Show current configuration and file paths
    Config,
}

pub fn run(cmd: Command, json: bool, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path);
    let json = json || config.json;
    match cmd {
        Command::Run {
            commands,
            trace,
            lenient,
        } => {
            let commands = replay::parse_args(&commands, lenient || config.lenient)?;
            replay::cmd_replay(&commands, trace || config.trace, json)
        }
        Command::Script {
            file,
            trace,
            lenient,
        } => {
            let commands = script::load(&file, lenient || config.lenient)?;
            replay::cmd_replay(&commands, trace || config.trace, json)
        }
        Command::Config => config_cmd::cmd_config(&config, config_path, json),
    }
}
