//! Command-line front end for the note store.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands, RootCommands};
