//! Television state machine — power, mute, volume and channel.
//!
//! Every command is total: while the set is off, everything except
//! [`Television::power`] is a no-op, volume saturates at its bounds and the
//! channel wraps around. Rendering goes through [`std::fmt::Display`].

use std::fmt;

use serde::Serialize;

use crate::command::Command;

/// Two-state mute sub-machine.
///
/// Kept as its own field: a volume of 0 is also a valid unmuted volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MuteState {
    Unmuted,
    Muted,
}

/// Control state of a single television.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Television {
    power: bool,
    mute: MuteState,
    volume: u8,
    saved_volume: u8,
    channel: u8,
}

/// Serializable copy of a [`Television`]'s state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub power: bool,
    pub muted: bool,
    pub volume: u8,
    pub saved_volume: u8,
    pub channel: u8,
    pub rendered: String,
}

impl Television {
    pub const MIN_VOLUME: u8 = 0;
    pub const MAX_VOLUME: u8 = 2;
    pub const MIN_CHANNEL: u8 = 0;
    pub const MAX_CHANNEL: u8 = 3;

    /// A television that is off, unmuted, at minimum volume and channel.
    pub fn new() -> Self {
        Self {
            power: false,
            mute: MuteState::Unmuted,
            volume: Self::MIN_VOLUME,
            saved_volume: Self::MIN_VOLUME,
            channel: Self::MIN_CHANNEL,
        }
    }

    /// Toggle power. Mute, volume and channel survive a power cycle.
    pub fn power(&mut self) {
        self.power = !self.power;
    }

    /// Toggle mute, saving the volume on mute and restoring it on unmute.
    pub fn mute(&mut self) {
        if !self.powered(Command::Mute) {
            return;
        }
        match self.mute {
            MuteState::Unmuted => {
                self.mute = MuteState::Muted;
                self.saved_volume = self.volume;
                self.volume = Self::MIN_VOLUME;
            }
            MuteState::Muted => self.unmute(),
        }
    }

    pub fn channel_up(&mut self) {
        if !self.powered(Command::ChannelUp) {
            return;
        }
        if self.channel < Self::MAX_CHANNEL {
            self.channel += 1;
        } else {
            self.channel = Self::MIN_CHANNEL;
        }
    }

    pub fn channel_down(&mut self) {
        if !self.powered(Command::ChannelDown) {
            return;
        }
        if self.channel > Self::MIN_CHANNEL {
            self.channel -= 1;
        } else {
            self.channel = Self::MAX_CHANNEL;
        }
    }

    /// Raise the volume by one step, unmuting first if muted.
    ///
    /// When muted, the step applies to the saved volume, not to the
    /// zeroed one.
    pub fn volume_up(&mut self) {
        if !self.powered(Command::VolumeUp) {
            return;
        }
        if self.mute == MuteState::Muted {
            self.unmute();
        }
        if self.volume < Self::MAX_VOLUME {
            self.volume += 1;
        }
    }

    /// Lower the volume by one step, unmuting first if muted.
    pub fn volume_down(&mut self) {
        if !self.powered(Command::VolumeDown) {
            return;
        }
        if self.mute == MuteState::Muted {
            self.unmute();
        }
        if self.volume > Self::MIN_VOLUME {
            self.volume -= 1;
        }
    }

    /// `Power: <True|False>, Channel: <n>, Volume: <n>`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Dispatch a [`Command`] to the matching method.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Power => self.power(),
            Command::Mute => self.mute(),
            Command::ChannelUp => self.channel_up(),
            Command::ChannelDown => self.channel_down(),
            Command::VolumeUp => self.volume_up(),
            Command::VolumeDown => self.volume_down(),
        }
        log::trace!("{command} -> {}", self);
    }

    /// Apply commands in order.
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.apply(command);
        }
    }

    pub fn is_on(&self) -> bool {
        self.power
    }

    pub fn is_muted(&self) -> bool {
        self.mute == MuteState::Muted
    }

    /// Effective volume: [`Self::MIN_VOLUME`] while muted.
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Volume captured when muting last began.
    pub fn saved_volume(&self) -> u8 {
        self.saved_volume
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            power: self.power,
            muted: self.is_muted(),
            volume: self.volume,
            saved_volume: self.saved_volume,
            channel: self.channel,
            rendered: self.render(),
        }
    }

    fn unmute(&mut self) {
        self.mute = MuteState::Unmuted;
        self.volume = self.saved_volume;
    }

    /// Whether the set is on; logs the ignored command when it is not.
    fn powered(&self, command: Command) -> bool {
        if !self.power {
            log::debug!("ignoring {command} while powered off");
        }
        self.power
    }
}

impl Default for Television {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Television {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let power = if self.power { "True" } else { "False" };
        write!(
            f,
            "Power: {power}, Channel: {}, Volume: {}",
            self.channel, self.volume
        )
    }
}
