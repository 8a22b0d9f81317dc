//! # Command Line Interface
//!
//! The subcommands are in the `commands` module.

mod cli;

use env_logger;
#[cfg(windows)]
use colored;
use log::error;
use debas::commands;
use debas::commands::CommandError;

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).unwrap();

    let main_cmd = cli::build_cli();
    let matches = main_cmd.clone().get_matches();

    if let Some(cmd) = matches.subcommand_matches("decode") {
        return commands::decode::decode(cmd);
    }

    if let Some(cmd) = matches.subcommand_matches("classify") {
        return commands::classify::classify(cmd);
    }

    if let Some(cmd) = matches.subcommand_matches("completions") {
        return commands::completions::generate(main_cmd,cmd);
    }

    error!("No subcommand was found, try `debas --help`");
    return Err(Box::new(CommandError::InvalidCommand));
}
