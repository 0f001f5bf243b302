//! CLI argument definitions for enforcer-helper.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "enforcer-helper",
    version,
    about = "Turn Maven Enforcer dependency errors into dependencyManagement XML",
    long_about = "enforcer-helper reads the console output of a failed DependencyConvergence \
                  or RequireUpperBoundDeps rule, groups the reported paths per artifact, and \
                  prints version properties plus dependencyManagement entries pinning the \
                  highest version."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the version conflicts found in Enforcer output
    Conflicts {
        /// File with the Maven output; reads stdin when omitted or `-`
        file: Option<PathBuf>,
        /// Print the parse result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print properties and dependencyManagement XML for the conflicts
    Xml {
        /// File with the Maven output; reads stdin when omitted or `-`
        file: Option<PathBuf>,
        /// Print only one of the two fragments
        #[arg(long, value_enum)]
        only: Option<Fragment>,
        /// Spaces per indentation level (overrides the config file)
        #[arg(long)]
        indent: Option<usize>,
        /// TOML file with XML rendering options
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// One of the two generated XML fragments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Fragment {
    Properties,
    DependencyManagement,
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
