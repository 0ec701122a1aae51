//! tvstate — control-state machine for a simple television.

pub mod command;
pub mod config;
pub mod error;
pub mod script;
pub mod television;

pub use command::Command;
pub use error::TvError;
pub use television::Television;
