//! # CLI Subcommands
//!
//! Contains modules that run the subcommands.

pub mod decode;
pub mod classify;
pub mod completions;

#[derive(thiserror::Error,Debug)]
pub enum CommandError {
    #[error("Command could not be interpreted")]
    InvalidCommand,
    #[error("Input source could not be interpreted")]
    UnknownFormat,
    #[error("File not found")]
    FileNotFound
}
