//! Remote-control commands as values.

use std::fmt;
use std::str::FromStr;

use crate::error::TvError;

/// One of the six commands a [`Television`](crate::television::Television) accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Power,
    Mute,
    ChannelUp,
    ChannelDown,
    VolumeUp,
    VolumeDown,
}

impl Command {
    /// Every command, in declaration order.
    pub const ALL: [Command; 6] = [
        Command::Power,
        Command::Mute,
        Command::ChannelUp,
        Command::ChannelDown,
        Command::VolumeUp,
        Command::VolumeDown,
    ];

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Command::Power => "power",
            Command::Mute => "mute",
            Command::ChannelUp => "channel-up",
            Command::ChannelDown => "channel-down",
            Command::VolumeUp => "volume-up",
            Command::VolumeDown => "volume-down",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = TvError;

    /// Accepts the canonical name in any case, with `_` for `-`, the
    /// camelCase form (`channelUp`) and the aliases `ch+ ch- vol+ vol-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "power" => Ok(Command::Power),
            "mute" => Ok(Command::Mute),
            "channel-up" | "channelup" | "ch+" => Ok(Command::ChannelUp),
            "channel-down" | "channeldown" | "ch-" => Ok(Command::ChannelDown),
            "volume-up" | "volumeup" | "vol+" => Ok(Command::VolumeUp),
            "volume-down" | "volumedown" | "vol-" => Ok(Command::VolumeDown),
            _ => Err(TvError::UnknownCommand(trimmed.to_string())),
        }
    }
}
