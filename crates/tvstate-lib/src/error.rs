//! Unified error type for the tvstate-lib crate.
//!
//! The television itself never fails; [`TvError`] only covers the edges
//! around it: parsing command names and scripts, reading files, config.

use std::fmt;

/// Unified error type for tvstate-lib operations.
#[derive(Debug)]
pub enum TvError {
    /// Standard I/O error (reading a script file).
    Io(std::io::Error),
    /// A command name that matches none of the known commands.
    UnknownCommand(String),
    /// A script token that is not a command (`line` is 1-based).
    Script { line: usize, token: String },
    /// Configuration or output error.
    Config(String),
}

impl fmt::Display for TvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TvError::Io(e) => write!(f, "I/O error: {e}"),
            TvError::UnknownCommand(name) => write!(f, "Unknown command: \"{name}\""),
            TvError::Script { line, token } => {
                write!(f, "Script error: line {line}: unknown command \"{token}\"")
            }
            TvError::Config(e) => write!(f, "Config error: {e}"),
        }
    }
}

impl std::error::Error for TvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TvError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TvError {
    fn from(e: std::io::Error) -> Self {
        TvError::Io(e)
    }
}

/// Crate-level Result alias using [`TvError`].
pub type Result<T> = std::result::Result<T, TvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e: TvError = io_err.into();
        assert!(matches!(e, TvError::Io(_)));
    }

    #[test]
    fn display_unknown_command() {
        let e = TvError::UnknownCommand("rewind".into());
        assert_eq!(e.to_string(), "Unknown command: \"rewind\"");
    }

    #[test]
    fn display_script_error() {
        let e = TvError::Script {
            line: 3,
            token: "louder".into(),
        };
        assert_eq!(
            e.to_string(),
            "Script error: line 3: unknown command \"louder\""
        );
    }

    #[test]
    fn display_config_error() {
        let e = TvError::Config("bad value".into());
        assert_eq!(e.to_string(), "Config error: bad value");
    }

    #[test]
    fn source_chains_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e = TvError::Io(io_err);
        let source = std::error::Error::source(&e).unwrap();
        assert!(source.to_string().contains("denied"));
    }

    #[test]
    fn source_none_for_string_variants() {
        let e = TvError::UnknownCommand("x".into());
        assert!(std::error::Error::source(&e).is_none());
    }

    #[test]
    fn question_mark_propagation_io() {
        fn inner() -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "nope"))
        }
        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }
        let err = outer().unwrap_err();
        assert!(matches!(err, TvError::Io(_)));
    }
}
