//! Integration tests: command sequences through the public API.
//!
//! The state space is small enough to explore exhaustively, so the laws
//! below are checked on every reachable state instead of sampled ones.

use std::collections::{HashSet, VecDeque};

use tvstate_lib::{Command, Television, script};

const NON_POWER: [Command; 5] = [
    Command::Mute,
    Command::ChannelUp,
    Command::ChannelDown,
    Command::VolumeUp,
    Command::VolumeDown,
];

fn run(commands: &[Command]) -> Television {
    let mut tv = Television::new();
    tv.apply_all(commands.iter().copied());
    tv
}

/// Every state reachable from a new television.
fn reachable_states() -> Vec<Television> {
    let start = Television::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut states = Vec::new();
    let mut queue = VecDeque::from([start]);
    while let Some(tv) = queue.pop_front() {
        let key = format!("{:?}", tv.snapshot());
        if !seen.insert(key) {
            continue;
        }
        for cmd in Command::ALL {
            let mut next = tv.clone();
            next.apply(cmd);
            queue.push_back(next);
        }
        states.push(tv);
    }
    states
}

// ── Scenarios ──

#[test]
fn new_instance_renders_defaults() {
    assert_eq!(
        Television::new().render(),
        "Power: False, Channel: 0, Volume: 0"
    );
}

#[test]
fn power_on_renders_true() {
    assert_eq!(
        run(&[Command::Power]).render(),
        "Power: True, Channel: 0, Volume: 0"
    );
}

#[test]
fn mute_after_volume_up_then_unmute() {
    let mut tv = run(&[Command::Power, Command::VolumeUp, Command::Mute]);
    assert_eq!(tv.render(), "Power: True, Channel: 0, Volume: 0");
    tv.mute();
    assert_eq!(tv.render(), "Power: True, Channel: 0, Volume: 1");
}

#[test]
fn channel_up_four_times_wraps_once() {
    let mut cmds = vec![Command::Power];
    cmds.extend([Command::ChannelUp; 4]);
    assert_eq!(run(&cmds).render(), "Power: True, Channel: 0, Volume: 0");
}

#[test]
fn channel_down_from_min_wraps_to_max() {
    assert_eq!(
        run(&[Command::Power, Command::ChannelDown]).render(),
        "Power: True, Channel: 3, Volume: 0"
    );
}

#[test]
fn volume_up_while_muted_unmutes_and_steps() {
    assert_eq!(
        run(&[Command::Power, Command::Mute, Command::VolumeUp]).render(),
        "Power: True, Channel: 0, Volume: 1"
    );
}

#[test]
fn channel_up_three_times_reaches_max() {
    let mut cmds = vec![Command::Power];
    cmds.extend([Command::ChannelUp; 3]);
    assert_eq!(run(&cmds).render(), "Power: True, Channel: 3, Volume: 0");
}

#[test]
fn power_off_while_muted_stays_muted_on_return() {
    let tv = run(&[
        Command::Power,
        Command::VolumeUp,
        Command::Mute,
        Command::Power,
        Command::Power,
    ]);
    assert!(tv.is_muted());
    assert_eq!(tv.render(), "Power: True, Channel: 0, Volume: 0");
}

#[test]
fn script_drives_the_same_machine() {
    let cmds = script::parse("power vol+ vol+ # loud\nmute ch- ch-").unwrap();
    let tv = run(&cmds);
    assert_eq!(tv.render(), "Power: True, Channel: 2, Volume: 0");
    assert_eq!(tv.saved_volume(), 2);
}

// ── Laws over every reachable state ──

#[test]
fn state_space_is_fully_reachable() {
    // on/off × (unmuted: 3 volumes, muted: 3 saved volumes) × 4 channels,
    // plus the unmuted states with a stale saved volume
    let states = reachable_states();
    assert!(states.len() >= 2 * 6 * 4);
}

#[test]
fn ranges_hold_everywhere() {
    for tv in reachable_states() {
        assert!((Television::MIN_VOLUME..=Television::MAX_VOLUME).contains(&tv.volume()));
        assert!((Television::MIN_VOLUME..=Television::MAX_VOLUME).contains(&tv.saved_volume()));
        assert!((Television::MIN_CHANNEL..=Television::MAX_CHANNEL).contains(&tv.channel()));
    }
}

#[test]
fn muted_implies_min_volume() {
    for tv in reachable_states() {
        if tv.is_muted() {
            assert_eq!(tv.volume(), Television::MIN_VOLUME, "{tv:?}");
        }
    }
}

#[test]
fn render_is_idempotent() {
    for tv in reachable_states() {
        assert_eq!(tv.render(), tv.render());
    }
}

#[test]
fn double_power_is_identity() {
    for tv in reachable_states() {
        let mut cycled = tv.clone();
        cycled.power();
        cycled.power();
        assert_eq!(cycled, tv);
    }
}

#[test]
fn double_mute_restores_volume_when_on() {
    for tv in reachable_states().into_iter().filter(|tv| tv.is_on()) {
        let mut toggled = tv.clone();
        toggled.mute();
        toggled.mute();
        assert_eq!(toggled.volume(), tv.volume(), "{tv:?}");
        assert_eq!(toggled.is_muted(), tv.is_muted(), "{tv:?}");
    }
}

#[test]
fn channel_wraps_after_full_cycle() {
    let span = (Television::MAX_CHANNEL - Television::MIN_CHANNEL + 1) as usize;
    for tv in reachable_states() {
        for cmd in [Command::ChannelUp, Command::ChannelDown] {
            let mut cycled = tv.clone();
            cycled.apply_all(std::iter::repeat_n(cmd, span));
            assert_eq!(cycled.channel(), tv.channel());
        }
    }
}

#[test]
fn volume_saturates_in_both_directions() {
    let steps = (Television::MAX_VOLUME - Television::MIN_VOLUME + 1) as usize;
    for tv in reachable_states().into_iter().filter(|tv| tv.is_on()) {
        let mut up = tv.clone();
        up.apply_all(std::iter::repeat_n(Command::VolumeUp, steps));
        assert_eq!(up.volume(), Television::MAX_VOLUME);
        up.volume_up();
        assert_eq!(up.volume(), Television::MAX_VOLUME);

        let mut down = tv.clone();
        down.apply_all(std::iter::repeat_n(Command::VolumeDown, steps));
        assert_eq!(down.volume(), Television::MIN_VOLUME);
        assert!(!down.is_muted());
        down.volume_down();
        assert_eq!(down.volume(), Television::MIN_VOLUME);
    }
}

#[test]
fn off_state_is_frozen() {
    for tv in reachable_states().into_iter().filter(|tv| !tv.is_on()) {
        let rendered = tv.render();
        for cmd in NON_POWER {
            let mut next = tv.clone();
            next.apply(cmd);
            assert_eq!(next, tv);
            assert_eq!(next.render(), rendered);
        }
    }
}

#[test]
fn off_state_frozen_under_long_sequences() {
    // Every length-3 combination of non-power commands from the default state
    let start = Television::new();
    for a in NON_POWER {
        for b in NON_POWER {
            for c in NON_POWER {
                let mut tv = start.clone();
                tv.apply_all([a, b, c]);
                assert_eq!(tv.render(), "Power: False, Channel: 0, Volume: 0");
            }
        }
    }
}
