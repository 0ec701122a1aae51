//! `run` / `script` subcommands — replay commands against a new television.

use tvstate_lib::Command;

use super::{ReplayOutput, Result, StepJson, Television, format_kv, kv_width, print_json};

/// Parse command-line arguments into commands.
///
/// Strict mode fails on the first unknown name; lenient mode skips it
/// with a warning.
pub(super) fn parse_args(args: &[String], lenient: bool) -> Result<Vec<Command>> {
    let mut commands = Vec::with_capacity(args.len());
    for arg in args {
        match arg.parse::<Command>() {
            Ok(cmd) => commands.push(cmd),
            Err(e) if lenient => log::warn!("skipping: {e}"),
            Err(e) => return Err(e),
        }
    }
    Ok(commands)
}

/// Apply `commands` to a new television, recording the rendering after
/// each one when `trace` is set.
pub(super) fn replay(commands: &[Command], trace: bool) -> (Television, Vec<StepJson>) {
    let mut tv = Television::new();
    let mut steps = Vec::new();
    for &cmd in commands {
        tv.apply(cmd);
        if trace {
            steps.push(StepJson {
                command: cmd.to_string(),
                rendered: tv.render(),
            });
        }
    }
    log::debug!("replayed {} command(s): {tv}", commands.len());
    (tv, steps)
}

pub(super) fn cmd_replay(commands: &[Command], trace: bool, json: bool) -> Result<()> {
    let (tv, steps) = replay(commands, trace);

    if json {
        return print_json(&ReplayOutput {
            commands: commands.len(),
            steps,
            state: tv.snapshot(),
        });
    }

    let keys: Vec<&str> = steps.iter().map(|s| s.command.as_str()).collect();
    let w = kv_width(&keys, &[]);
    for step in &steps {
        println!("{}", format_kv(&step.command, &step.rendered, w));
    }
    println!("{tv}");
    Ok(())
}
