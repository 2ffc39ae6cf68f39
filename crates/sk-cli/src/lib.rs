//! songkoffi-cli library
//!
//! Wires the session, locale, and catalog crates into the commands exposed
//! by the `songkoffi` binary.

mod admin_sections;
mod app;
mod cli;
mod commands;
mod error;
mod lang_commands;
pub mod logger;

pub use app::App;
pub use cli::Cli;
pub use commands::{Commands, DemoAccount};
pub use error::{CliError, Result as CliResult};
pub use lang_commands::LangCommands;

#[cfg(test)]
mod tests;
