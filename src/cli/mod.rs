//! CLI module for CompDB
//!
//! - `serve`: run the HTTP API (default)
//! - `migrate`: create the `teams` table in the configured MySQL database

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// CompDB - competition team registry
#[derive(Parser)]
#[command(name = "compdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP API server (default)
    Serve,

    /// Apply schema migrations and exit
    Migrate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["compdb"]).unwrap();
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_subcommands() {
        let cli = Cli::try_parse_from(["compdb", "serve"]).unwrap();
        assert_eq!(cli.command, Some(Command::Serve));

        let cli = Cli::try_parse_from(["compdb", "migrate"]).unwrap();
        assert_eq!(cli.command, Some(Command::Migrate));
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(Cli::try_parse_from(["compdb", "ui"]).is_err());
    }
}
