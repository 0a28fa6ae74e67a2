//! Boxing CLI library.
//!
//! Command-line front end for the boxer registry and the ring: argument
//! parsing, configuration, command execution, output formatting and the
//! interactive REPL.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
