//! Command-line interface for pincheck.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The [`Command`] trait and [`CommandResult`]
//! - [`check`] - The check run itself

pub mod args;
pub mod check;
pub mod command;

pub use args::Cli;
pub use check::CheckCommand;
pub use command::{Command, CommandResult};
