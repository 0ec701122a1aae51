//! `config` subcommand — show current configuration and file paths.

use std::path::Path;

use super::{
    Config, ConfigOutput, RangesJson, Result, Television, kv, kv_indent, kv_width, print_json,
};

pub(super) const TOP_KEYS: &[&str] = &["Config file:"];
pub(super) const INDENT_KEYS: &[&str] = &["trace:", "lenient:", "json:", "Volume:", "Channel:"];

pub(super) fn cmd_config(config: &Config, custom_path: Option<&Path>, json: bool) -> Result<()> {
    let config_path = custom_path.map(|p| p.to_path_buf()).or_else(Config::path);
    let config_exists = config_path.as_ref().is_some_and(|p| p.exists());

    if json {
        return print_json(&ConfigOutput {
            config_file: config_path.as_ref().map(|p| p.display().to_string()),
            config_file_exists: config_exists,
            settings: config.clone(),
            ranges: RangesJson {
                min_volume: Television::MIN_VOLUME,
                max_volume: Television::MAX_VOLUME,
                min_channel: Television::MIN_CHANNEL,
                max_channel: Television::MAX_CHANNEL,
            },
        });
    }

    // Human-readable output
    let w = kv_width(TOP_KEYS, INDENT_KEYS);

    match &config_path {
        Some(p) if config_exists => kv("Config file:", format_args!("{} (loaded)", p.display()), w),
        Some(p) => kv(
            "Config file:",
            format_args!("{} (not found, using defaults)", p.display()),
            w,
        ),
        None => kv("Config file:", "(no config directory)", w),
    }
    println!();

    println!("Settings:");
    kv_indent("trace:", config.trace, w);
    kv_indent("lenient:", config.lenient, w);
    kv_indent("json:", config.json, w);
    println!();

    println!("Ranges:");
    kv_indent(
        "Volume:",
        format_args!("{}..={}", Television::MIN_VOLUME, Television::MAX_VOLUME),
        w,
    );
    kv_indent(
        "Channel:",
        format_args!("{}..={}", Television::MIN_CHANNEL, Television::MAX_CHANNEL),
        w,
    );
    Ok(())
}
