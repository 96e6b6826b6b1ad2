//! nutri-cli library
//!
//! Command parsing and execution, exported for the binary and for tests.

pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod profile_commands;
pub(crate) mod runner;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use profile_commands::{ProfileArgs, ProfileCommands};
pub use runner::{Outcome, execute, open_app, run};
