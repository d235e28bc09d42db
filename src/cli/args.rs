//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `gen`: Generate the Dart localization file from ARB resources
//! - `init`: Initialize the arbgen configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Gen(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by generating commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory containing strings_<locale>.arb files (overrides config file)
    #[arg(long)]
    pub res_dir: Option<PathBuf>,

    /// Path of the generated Dart file (overrides config file)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the Dart localization classes from ARB files
    Gen(GenCommand),
    /// Initialize a new .arbgenrc.json configuration file
    Init,
}
