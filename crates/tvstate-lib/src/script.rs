//! Command scripts — command names separated by whitespace or commas.
//!
//! `#` starts a comment that runs to the end of the line:
//!
//! ```text
//! power            # switch on
//! vol+ vol+, mute
//! channel-down
//! ```

use std::path::Path;

use crate::command::Command;
use crate::error::{Result, TvError};

/// Yield `(line, token)` pairs with comments stripped (`line` is 1-based).
fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().flat_map(|(i, line)| {
        let code = line.split('#').next().unwrap_or("");
        code.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(move |t| (i + 1, t))
    })
}

/// Parse a script, failing on the first unknown token.
pub fn parse(text: &str) -> Result<Vec<Command>> {
    tokens(text)
        .map(|(line, token)| {
            token.parse::<Command>().map_err(|_| TvError::Script {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parse a script, skipping unknown tokens.
///
/// Returns the commands and one warning per skipped token.
pub fn parse_lenient(text: &str) -> (Vec<Command>, Vec<String>) {
    let mut commands = Vec::new();
    let mut warnings = Vec::new();
    for (line, token) in tokens(text) {
        match token.parse::<Command>() {
            Ok(cmd) => commands.push(cmd),
            Err(_) => warnings.push(format!("line {line}: skipping unknown command \"{token}\"")),
        }
    }
    (commands, warnings)
}

/// Read and parse a script file. In lenient mode, warnings are logged.
pub fn load(path: &Path, lenient: bool) -> Result<Vec<Command>> {
    let text = std::fs::read_to_string(path)?;
    if lenient {
        let (commands, warnings) = parse_lenient(&text);
        for w in &warnings {
            log::warn!("{}: {w}", path.display());
        }
        Ok(commands)
    } else {
        parse(&text)
    }
}
